//! spendflow-ingest: turns pasted statement text into signed transactions.

pub mod parsers;
pub mod types;

pub use parsers::line_statement::{StatementParser, parse_statement_text};
pub use types::{ParseReport, ParserOptions, SkipReason, SkippedLine};
