//! Per-category totals and the account flow graph.
//!
//! Each builder classifies transactions on its own; classification is pure,
//! so the views always agree.

use serde::Serialize;
use spendflow_core::{
    ACCOUNT_NODE, CategorySummary, SankeyData, SankeyLink, SankeyNode, Transaction, classify,
    round2,
};
use std::collections::HashMap;

/// Statement-wide totals, rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CashFlow {
    pub total_spent: f64,
    pub total_received: f64,
    /// `total_received - total_spent`
    pub net_cash_flow: f64,
}

impl CashFlow {
    pub fn is_finite(&self) -> bool {
        self.total_spent.is_finite()
            && self.total_received.is_finite()
            && self.net_cash_flow.is_finite()
    }
}

/// Unrounded per-category sums in order of first appearance
fn accumulate(txns: &[Transaction]) -> Vec<CategorySummary> {
    let mut index: HashMap<&'static str, usize> = HashMap::new();
    let mut out: Vec<CategorySummary> = Vec::new();

    for txn in txns {
        let category = classify(&txn.description);
        let i = *index.entry(category).or_insert_with(|| {
            out.push(CategorySummary {
                category: category.to_string(),
                spent: 0.0,
                received: 0.0,
                count: 0,
            });
            out.len() - 1
        });

        let entry = &mut out[i];
        entry.count += 1;
        if txn.amount > 0.0 {
            entry.received += txn.amount;
        } else {
            entry.spent += txn.amount.abs();
        }
    }

    out
}

/// One entry per category seen, sorted by `spent` descending.
///
/// Ties keep first-appearance order.
pub fn build_category_summary(txns: &[Transaction]) -> Vec<CategorySummary> {
    let mut summary = accumulate(txns);
    summary.sort_by(|a, b| b.spent.total_cmp(&a.spent));
    for entry in &mut summary {
        entry.spent = round2(entry.spent);
        entry.received = round2(entry.received);
    }
    summary
}

/// Totals across all categories
pub fn cash_flow(txns: &[Transaction]) -> CashFlow {
    let summary = accumulate(txns);
    let spent: f64 = summary.iter().map(|s| s.spent).sum();
    let received: f64 = summary.iter().map(|s| s.received).sum();

    CashFlow {
        total_spent: round2(spent),
        total_received: round2(received),
        net_cash_flow: round2(received - spent),
    }
}

/// Flow graph: credits run category -> account, everything else account -> category.
///
/// Nodes are numbered in the order they are first touched; links come out in
/// the order their edge was first used.
pub fn build_sankey(txns: &[Transaction]) -> SankeyData {
    let mut node_ids: HashMap<&'static str, usize> = HashMap::new();
    let mut nodes: Vec<SankeyNode> = Vec::new();
    let mut edge_ids: HashMap<(usize, usize), usize> = HashMap::new();
    let mut links: Vec<SankeyLink> = Vec::new();

    let mut node = |name: &'static str| -> usize {
        *node_ids.entry(name).or_insert_with(|| {
            nodes.push(SankeyNode {
                name: name.to_string(),
            });
            nodes.len() - 1
        })
    };

    for txn in txns {
        let category = classify(&txn.description);
        let (source, target) = if txn.amount > 0.0 {
            (category, ACCOUNT_NODE)
        } else {
            (ACCOUNT_NODE, category)
        };
        let edge = (node(source), node(target));

        let i = *edge_ids.entry(edge).or_insert_with(|| {
            links.push(SankeyLink {
                source: edge.0,
                target: edge.1,
                value: 0.0,
            });
            links.len() - 1
        });
        links[i].value += txn.amount.abs();
    }

    for link in &mut links {
        link.value = round2(link.value);
    }

    SankeyData { nodes, links }
}

/// Category summary and flow graph for a set of transactions
pub fn summarize(txns: &[Transaction]) -> (Vec<CategorySummary>, SankeyData) {
    (build_category_summary(txns), build_sankey(txns))
}
