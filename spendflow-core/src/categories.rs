//! The compiled-in keyword table.
//!
//! Order matters: the classifier keeps the first category seen on a score
//! tie, so entries are an ordered slice rather than a map.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One category and its lower-case match keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryEntry {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

static CATEGORY_TABLE: &[CategoryEntry] = &[
    CategoryEntry {
        name: "Income",
        keywords: &[
            "salary", "payment from", "payroll", "wages", "deposit", "freelance", "invoice",
        ],
    },
    CategoryEntry {
        name: "Transport",
        keywords: &[
            "transportfornsw", "transport", "uber", "taxi", "petrol", "fuel", "parking", "toll",
            "opal", "train", "bus", "metro",
        ],
    },
    CategoryEntry {
        name: "Food & Dining",
        keywords: &[
            "gyg", "guzman", "grill'd", "mcdonald", "kfc", "hungry jack", "subway", "coles",
            "woolworths", "aldi", "iga", "supermarket", "grocery", "restaurant", "cafe",
            "coffee", "chatime", "boost", "bubble tea", "uber eats", "menulog", "deliveroo",
            "doordash", "fried brothers", "yo-chi", "yogurt", "food", "dining", "yallah eat",
        ],
    },
    CategoryEntry {
        name: "Entertainment",
        keywords: &[
            "netflix", "spotify", "disney", "stan", "amazon prime", "apple music", "ticketek",
            "ticket", "movie", "cinema", "event", "concert", "timezone", "arcade", "game",
            "steam", "playstation", "xbox",
        ],
    },
    CategoryEntry {
        name: "Shopping",
        keywords: &[
            "amazon", "ebay", "kmart", "target", "big w", "myer", "david jones", "bunnings",
            "officeworks", "jb hi-fi", "apple store", "perfume", "bujairami", "retail",
            "shopping",
        ],
    },
    CategoryEntry {
        name: "Health & Fitness",
        keywords: &[
            "anytime fitness", "gym", "fitness", "yoga", "pharmacy", "chemist", "doctor",
            "medical", "dental", "physio", "health",
        ],
    },
    CategoryEntry {
        name: "Bills & Utilities",
        keywords: &[
            "electricity", "gas", "water", "internet", "telstra", "optus", "vodafone", "phone",
            "mobile", "utility", "council", "insurance",
        ],
    },
    CategoryEntry {
        name: "Subscriptions",
        keywords: &[
            "apple.com/bill", "google", "microsoft", "adobe", "patreon", "porkbun", "domain",
            "hosting", "railway", "subscription",
        ],
    },
    CategoryEntry {
        name: "Transfers & Savings",
        keywords: &["funds tfer", "transfer to", "savings", "investment", "bpay"],
    },
    CategoryEntry {
        name: "Rent & Housing",
        keywords: &["rent", "landlord", "real estate", "property", "mortgage"],
    },
    CategoryEntry {
        name: "Personal",
        keywords: &["payment to", "mobile banking payment"],
    },
];

/// The full table in classification order
pub fn category_table() -> &'static [CategoryEntry] {
    CATEGORY_TABLE
}

/// Category names in table order. Does not include the fallback category.
pub fn category_names() -> impl Iterator<Item = &'static str> {
    CATEGORY_TABLE.iter().map(|e| e.name)
}

/// Read-only copy of the table for discovery endpoints.
///
/// Serializes as a JSON object whose keys keep table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListing(Vec<(String, Vec<String>)>);

impl CategoryListing {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(name, kws)| (name.as_str(), kws.as_slice()))
    }

    pub fn keywords(&self, category: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, kws)| kws.as_slice())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for CategoryListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, keywords) in &self.0 {
            map.serialize_entry(name, keywords)?;
        }
        map.end()
    }
}

pub fn list_categories() -> CategoryListing {
    CategoryListing(
        CATEGORY_TABLE
            .iter()
            .map(|e| {
                (
                    e.name.to_string(),
                    e.keywords.iter().map(|k| k.to_string()).collect(),
                )
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_order() {
        let names: Vec<_> = category_names().collect();
        assert_eq!(names.first(), Some(&"Income"));
        assert_eq!(names.last(), Some(&"Personal"));
        assert_eq!(names.len(), 11);
        assert!(!names.contains(&crate::OTHER_CATEGORY));
    }

    #[test]
    fn test_keywords_are_lowercase_and_unique_per_category() {
        for entry in category_table() {
            let mut seen = HashSet::new();
            for kw in entry.keywords {
                assert_eq!(*kw, kw.to_lowercase(), "{} has non-lowercase keyword", entry.name);
                assert!(seen.insert(*kw), "{} repeats {}", entry.name, kw);
            }
        }
    }

    #[test]
    fn test_listing_matches_table() {
        let listing = list_categories();
        assert_eq!(listing.len(), category_table().len());
        assert!(listing.keywords("Personal").unwrap().contains(&"payment to".to_string()));
        assert!(listing.keywords("Other").is_none());
    }

    #[test]
    fn test_listing_serializes_in_table_order() {
        let json = serde_json::to_string(&list_categories()).unwrap();
        let income = json.find("\"Income\"").unwrap();
        let transport = json.find("\"Transport\"").unwrap();
        let personal = json.find("\"Personal\"").unwrap();
        assert!(income < transport && transport < personal);
    }
}
