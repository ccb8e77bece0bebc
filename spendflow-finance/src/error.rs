use thiserror::Error;

/// Failures surfaced by [`crate::analyze`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The statement contained no recognizable transaction lines
    #[error("No transactions found in the statement. Please check the format.")]
    NoTransactionsFound,

    /// Unexpected internal fault. The detail is for diagnostics only.
    #[error("Error processing statement: {0}")]
    ProcessingError(String),
}

impl AnalysisError {
    /// True when the caller should fix their input rather than retry
    pub fn is_client_error(&self) -> bool {
        matches!(self, AnalysisError::NoTransactionsFound)
    }
}

impl From<regex::Error> for AnalysisError {
    fn from(err: regex::Error) -> Self {
        AnalysisError::ProcessingError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
