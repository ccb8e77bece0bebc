//! Statement analysis pipeline: parse -> classify -> aggregate.

use spendflow_core::{AnalysisResult, CategorizedTransaction, classify};
use spendflow_ingest::{ParserOptions, StatementParser};

use crate::aggregate::{cash_flow, summarize};
use crate::error::{AnalysisError, Result};

/// Holds a compiled parser so repeated analyses skip regex setup.
///
/// Analysis is a pure function of the input; one `Analyzer` can serve
/// concurrent callers by shared reference.
#[derive(Debug, Clone)]
pub struct Analyzer {
    parser: StatementParser,
}

impl Analyzer {
    pub fn new() -> Result<Self> {
        Self::with_options(ParserOptions::default())
    }

    pub fn with_options(options: ParserOptions) -> Result<Self> {
        Ok(Self {
            parser: StatementParser::with_options(options)?,
        })
    }

    pub fn parser(&self) -> &StatementParser {
        &self.parser
    }

    /// Analyze raw statement text.
    ///
    /// Fails with [`AnalysisError::NoTransactionsFound`] when no line parses.
    pub fn analyze(&self, raw_statement: &str) -> Result<AnalysisResult> {
        let report = self.parser.parse_with_report(raw_statement);
        let transactions = report.transactions;

        if transactions.is_empty() {
            tracing::debug!(skipped = report.skipped.len(), "no transaction lines found");
            return Err(AnalysisError::NoTransactionsFound);
        }

        let categorized: Vec<CategorizedTransaction> = transactions
            .iter()
            .cloned()
            .map(|txn| {
                let category = classify(&txn.description);
                txn.categorize(category)
            })
            .collect();

        let (category_summary, sankey_data) = summarize(&transactions);
        let flow = cash_flow(&transactions);

        if !flow.is_finite() {
            return Err(AnalysisError::ProcessingError(format!(
                "totals overflowed (spent={}, received={})",
                flow.total_spent, flow.total_received
            )));
        }

        tracing::info!(
            transactions = transactions.len(),
            skipped = report.skipped.len(),
            categories = category_summary.len(),
            total_spent = flow.total_spent,
            total_received = flow.total_received,
            "statement analyzed"
        );

        Ok(AnalysisResult {
            transaction_count: transactions.len(),
            transactions: categorized,
            category_summary,
            sankey_data,
            total_spent: flow.total_spent,
            total_received: flow.total_received,
            net_cash_flow: flow.net_cash_flow,
        })
    }
}

/// Analyze raw statement text with the default parser options
pub fn analyze(raw_statement: &str) -> Result<AnalysisResult> {
    Analyzer::new()?.analyze(raw_statement)
}
