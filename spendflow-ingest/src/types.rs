use serde::{Deserialize, Serialize};
use spendflow_core::Transaction;

/// Banner text that marks report titles and page breaks in pasted statements
pub const DEFAULT_SKIP_MARKERS: &[&str] = &["Transaction Report", "Page"];

/// Tunables for the line parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserOptions {
    /// Lines containing any of these (case-sensitive) are dropped before date matching
    pub skip_markers: Vec<String>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            skip_markers: DEFAULT_SKIP_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Why a non-blank line produced no transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Matched a skip marker
    Banner,
    /// Did not start with a day + month token
    NoDate,
    /// No trailing amount token
    NoAmount,
    /// More than two trailing amount tokens
    AmbiguousAmounts(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// 1-based line number in the input
    pub line_no: usize,
    pub reason: SkipReason,
}

/// Parsed transactions plus the lines that were dropped along the way
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseReport {
    pub transactions: Vec<Transaction>,
    pub skipped: Vec<SkippedLine>,
}

impl ParseReport {
    pub fn skipped_for(&self, reason: SkipReason) -> usize {
        self.skipped.iter().filter(|s| s.reason == reason).count()
    }
}
