use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level bucket a transaction lands in. Every classification names
/// exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MainCategory {
    Expenses,
    Income,
    Transfers,
    Investments,
}

impl fmt::Display for MainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MainCategory::Expenses => write!(f, "expenses"),
            MainCategory::Income => write!(f, "income"),
            MainCategory::Transfers => write!(f, "transfers"),
            MainCategory::Investments => write!(f, "investments"),
        }
    }
}

/// Three-level category tag: main bucket, mid-level grouping, and the most
/// specific subcategory. The mid level is a pure function of the subcategory
/// via the keyword hierarchy; transfers and investments collapse all three
/// levels onto the same name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub main: MainCategory,
    pub category: String,
    pub subcategory: String,
}

impl Classification {
    pub fn new(main: MainCategory, category: &str, subcategory: &str) -> Self {
        Classification {
            main,
            category: category.to_string(),
            subcategory: subcategory.to_string(),
        }
    }

    pub fn transfers() -> Self {
        Classification::new(MainCategory::Transfers, "transfers", "transfers")
    }

    pub fn investments() -> Self {
        Classification::new(MainCategory::Investments, "investments", "investments")
    }

    pub fn income(category: &str, subcategory: &str) -> Self {
        Classification::new(MainCategory::Income, category, subcategory)
    }

    pub fn expense(category: &str, subcategory: &str) -> Self {
        Classification::new(MainCategory::Expenses, category, subcategory)
    }

    /// The bucket every unmatched description falls into.
    pub fn uncategorized() -> Self {
        Classification::expense("other", "uncategorized")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_buckets_collapse_all_levels() {
        let t = Classification::transfers();
        assert_eq!(t.main, MainCategory::Transfers);
        assert_eq!(t.category, "transfers");
        assert_eq!(t.subcategory, "transfers");

        let i = Classification::investments();
        assert_eq!(i.main, MainCategory::Investments);
        assert_eq!(i.category, "investments");
        assert_eq!(i.subcategory, "investments");
    }

    #[test]
    fn uncategorized_is_an_expense() {
        let c = Classification::uncategorized();
        assert_eq!(c.main, MainCategory::Expenses);
        assert_eq!(c.category, "other");
        assert_eq!(c.subcategory, "uncategorized");
    }

    #[test]
    fn main_category_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&MainCategory::Expenses).unwrap(), "\"expenses\"");
        assert_eq!(serde_json::to_string(&MainCategory::Income).unwrap(), "\"income\"");
    }

    #[test]
    fn display_matches_serde_names() {
        assert_eq!(MainCategory::Transfers.to_string(), "transfers");
        assert_eq!(MainCategory::Investments.to_string(), "investments");
    }
}
