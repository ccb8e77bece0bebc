//! spendflow-core: statement data model, the keyword category table and the classifier

pub mod categories;
pub mod classifier;
pub mod finance;
pub mod report;

pub use categories::{
    CategoryEntry, CategoryListing, category_names, category_table, list_categories,
};
pub use classifier::{Classification, classify, classify_with_score};
pub use finance::{ACCOUNT_NODE, CategorizedTransaction, OTHER_CATEGORY, Transaction, round2};
pub use report::{AnalysisResult, CategorySummary, SankeyData, SankeyLink, SankeyNode};
