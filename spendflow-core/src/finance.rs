//! Transaction types produced by statement parsing and classification

use chrono::Month;
use serde::{Deserialize, Serialize};

/// Category assigned when no keyword matches a description
pub const OTHER_CATEGORY: &str = "Other";

/// Pseudo-node every flow-graph edge starts or ends at
pub const ACCOUNT_NODE: &str = "Your Account";

/// A single statement line after parsing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Date token exactly as it appeared, e.g. "15 DEC"
    pub date: String,
    pub description: String,
    /// Negative = money leaving the account, positive = money entering
    pub amount: f64,
}

impl Transaction {
    pub fn new(date: impl Into<String>, description: impl Into<String>, amount: f64) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            amount,
        }
    }

    /// Returns true if money left the account
    pub fn is_debit(&self) -> bool {
        self.amount < 0.0
    }

    /// Returns true if money entered the account
    pub fn is_credit(&self) -> bool {
        self.amount > 0.0
    }

    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }

    /// Month named by the date token ("15 DEC" -> December)
    pub fn month(&self) -> Option<Month> {
        self.date.split_whitespace().nth(1)?.parse().ok()
    }

    /// Attach a category, producing the response-facing record
    pub fn categorize(self, category: impl Into<String>) -> CategorizedTransaction {
        CategorizedTransaction {
            date: self.date,
            description: self.description,
            amount: self.amount,
            category: category.into(),
        }
    }
}

/// A transaction plus the category the classifier picked for it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorizedTransaction {
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub category: String,
}

/// Round to 2 decimal places, half away from zero. Never returns -0.0.
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}
