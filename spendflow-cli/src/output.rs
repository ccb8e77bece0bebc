//! Rendering of analysis results for the terminal and CSV export

use anyhow::{Context, Result};
use serde::Serialize;
use spendflow_core::{AnalysisResult, CategorizedTransaction, CategoryListing};
use std::fmt::Write as _;
use std::path::Path;

/// Body of the category discovery output
#[derive(Debug, Serialize)]
pub struct CategoriesResponse<'a> {
    pub categories: &'a CategoryListing,
}

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let s = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    s.context("serialize output")
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

pub fn analysis_table(result: &AnalysisResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "## Transactions\n");
    for t in &result.transactions {
        let _ = writeln!(
            out,
            "{:<7} {:<40} {:>12.2}  {}",
            t.date,
            truncate(&t.description, 40),
            t.amount,
            t.category
        );
    }

    let _ = writeln!(out, "\n## By category\n");
    let _ = writeln!(
        out,
        "{:<22} {:>12} {:>12} {:>6}",
        "category", "spent", "received", "count"
    );
    for s in &result.category_summary {
        let _ = writeln!(
            out,
            "{:<22} {:>12.2} {:>12.2} {:>6}",
            s.category, s.spent, s.received, s.count
        );
    }

    let _ = writeln!(out, "\n## Totals\n");
    let _ = writeln!(out, "Transactions:   {}", result.transaction_count);
    let _ = writeln!(out, "Total spent:    ${:.2}", result.total_spent);
    let _ = writeln!(out, "Total received: ${:.2}", result.total_received);
    let _ = writeln!(out, "Net cash flow:  ${:.2}", result.net_cash_flow);

    out
}

pub fn categories_table(listing: &CategoryListing) -> String {
    let mut out = String::new();
    for (name, keywords) in listing.iter() {
        let _ = writeln!(out, "{name}: {}", keywords.join(", "));
    }
    out
}

/// Write categorized transactions as `date,description,amount,category`
pub fn write_transactions_csv(path: &Path, txns: &[CategorizedTransaction]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    for t in txns {
        wtr.serialize(t)
            .with_context(|| format!("write {}", path.display()))?;
    }
    wtr.flush().with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}
