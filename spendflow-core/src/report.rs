//! Aggregated views returned to the transport layer.
//!
//! Field names are the response body's JSON keys and must not be renamed.

use serde::{Deserialize, Serialize};

use crate::finance::CategorizedTransaction;

/// Spending and income totals for one category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySummary {
    pub category: String,
    /// Sum of absolute debit amounts (non-negative)
    pub spent: f64,
    /// Sum of credit amounts (non-negative)
    pub received: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SankeyNode {
    pub name: String,
}

/// Weighted edge between two node indices
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SankeyLink {
    pub source: usize,
    pub target: usize,
    pub value: f64,
}

/// Flow graph between category nodes and the account node
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SankeyData {
    pub nodes: Vec<SankeyNode>,
    pub links: Vec<SankeyLink>,
}

impl SankeyData {
    /// Index of a node by name
    pub fn node_index(&self, name: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.name == name)
    }

    /// Weight of the edge `source -> target`, if present
    pub fn link_value(&self, source: &str, target: &str) -> Option<f64> {
        let s = self.node_index(source)?;
        let t = self.node_index(target)?;
        self.links
            .iter()
            .find(|l| l.source == s && l.target == t)
            .map(|l| l.value)
    }

    pub fn total_flow(&self) -> f64 {
        self.links.iter().map(|l| l.value).sum()
    }
}

/// Everything produced by one statement analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub transactions: Vec<CategorizedTransaction>,
    /// Sorted by `spent` descending
    pub category_summary: Vec<CategorySummary>,
    pub sankey_data: SankeyData,
    pub total_spent: f64,
    pub total_received: f64,
    pub net_cash_flow: f64,
    pub transaction_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> SankeyData {
        SankeyData {
            nodes: vec![
                SankeyNode { name: "Income".into() },
                SankeyNode { name: "Your Account".into() },
                SankeyNode { name: "Food & Dining".into() },
            ],
            links: vec![
                SankeyLink { source: 0, target: 1, value: 150.0 },
                SankeyLink { source: 1, target: 2, value: 45.5 },
            ],
        }
    }

    #[test]
    fn test_link_lookup() {
        let g = graph();
        assert_eq!(g.node_index("Your Account"), Some(1));
        assert_eq!(g.link_value("Income", "Your Account"), Some(150.0));
        assert_eq!(g.link_value("Your Account", "Income"), None);
        assert_eq!(g.link_value("Nope", "Income"), None);
        assert_eq!(g.total_flow(), 195.5);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(graph()).unwrap();
        assert_eq!(json["nodes"][0]["name"], "Income");
        assert_eq!(json["links"][1]["source"], 1);
        assert_eq!(json["links"][1]["target"], 2);
        assert_eq!(json["links"][1]["value"], 45.5);
    }
}
