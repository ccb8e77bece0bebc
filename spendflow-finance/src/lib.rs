//! spendflow-finance: category summaries, the Sankey flow graph and the analysis pipeline

pub mod aggregate;
pub mod analyzer;
pub mod error;

pub use aggregate::{CashFlow, build_category_summary, build_sankey, cash_flow, summarize};
pub use analyzer::{Analyzer, analyze};
pub use error::{AnalysisError, Result};
