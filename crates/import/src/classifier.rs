use saldo_core::{Classification, MainCategory};
use serde::Deserialize;
use thiserror::Error;

use crate::keywords::{EXPENSE_GROUPS, INCOME_GROUPS, INVESTMENT_KEYWORDS, TRANSFER_KEYWORDS};

/// One keyword group: any keyword appearing anywhere in the lower-cased
/// description assigns the group's classification.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    pub classification: Classification,
    keywords: Vec<String>,
}

impl KeywordRule {
    pub fn new(classification: Classification, keywords: &[&str]) -> Self {
        KeywordRule {
            classification,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    fn matches(&self, description_lower: &str) -> bool {
        self.keywords.iter().any(|k| description_lower.contains(k))
    }
}

#[derive(Debug, Error)]
pub enum RulesetError {
    #[error("failed to parse ruleset TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("rule for {0}/{1} has no keywords")]
    EmptyRule(String, String),
}

#[derive(Debug, Deserialize)]
struct RulesetFile {
    #[serde(default)]
    rules: Vec<RuleEntry>,
}

#[derive(Debug, Deserialize)]
struct RuleEntry {
    main: MainCategory,
    category: String,
    subcategory: String,
    keywords: Vec<String>,
}

/// Ordered list of keyword rules, evaluated top to bottom; the first hit
/// wins. Classification is total: an unmatched description falls into
/// `expenses/other/uncategorized`.
#[derive(Debug, Clone)]
pub struct Ruleset {
    rules: Vec<KeywordRule>,
}

impl Ruleset {
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Ruleset { rules }
    }

    /// The built-in table: transfers, then investments, then income groups,
    /// then expense groups. This ordering is load-bearing — a description
    /// matching both a transfer and a grocery keyword is a transfer.
    pub fn built_in() -> Self {
        let mut rules = Vec::new();
        rules.push(KeywordRule::new(Classification::transfers(), TRANSFER_KEYWORDS));
        rules.push(KeywordRule::new(Classification::investments(), INVESTMENT_KEYWORDS));
        for (subcategory, category, keywords) in INCOME_GROUPS {
            rules.push(KeywordRule::new(
                Classification::income(category, subcategory),
                keywords,
            ));
        }
        for (subcategory, category, keywords) in EXPENSE_GROUPS {
            rules.push(KeywordRule::new(
                Classification::expense(category, subcategory),
                keywords,
            ));
        }
        Ruleset::new(rules)
    }

    /// Load a replacement ruleset from TOML:
    ///
    /// ```toml
    /// [[rules]]
    /// main = "expenses"
    /// category = "daily_living"
    /// subcategory = "groceries"
    /// keywords = ["kiwi", "rema"]
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, RulesetError> {
        let file: RulesetFile = toml::from_str(content)?;
        let mut rules = Vec::with_capacity(file.rules.len());
        for entry in file.rules {
            if entry.keywords.is_empty() {
                return Err(RulesetError::EmptyRule(entry.category, entry.subcategory));
            }
            let classification =
                Classification::new(entry.main, &entry.category, &entry.subcategory);
            let keywords: Vec<&str> = entry.keywords.iter().map(String::as_str).collect();
            rules.push(KeywordRule::new(classification, &keywords));
        }
        Ok(Ruleset::new(rules))
    }

    pub fn classify(&self, description: &str) -> Classification {
        let lower = description.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lower))
            .map(|rule| rule.classification.clone())
            .unwrap_or_else(Classification::uncategorized)
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Ruleset::built_in()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groceries_by_keyword() {
        let rules = Ruleset::built_in();
        let c = rules.classify("KIWI 334 STORGATA");
        assert_eq!(c.main, MainCategory::Expenses);
        assert_eq!(c.category, "daily_living");
        assert_eq!(c.subcategory, "groceries");
    }

    #[test]
    fn transfers_win_over_expense_keywords() {
        let rules = Ruleset::built_in();
        let c = rules.classify("Overføring til Kiwi konto");
        assert_eq!(c, Classification::transfers());
    }

    #[test]
    fn investments_checked_before_income() {
        // "rente" is an income keyword but "nordnet" wins first.
        let rules = Ruleset::built_in();
        let c = rules.classify("Nordnet rente");
        assert_eq!(c, Classification::investments());
    }

    #[test]
    fn income_group_order_is_fixed() {
        // "utbetaling" (salary) appears before "nav" (benefits) in the income
        // scan, so a description with both is salary.
        let rules = Ruleset::built_in();
        let c = rules.classify("NAV utbetaling");
        assert_eq!(c.main, MainCategory::Income);
        assert_eq!(c.category, "earnings");
        assert_eq!(c.subcategory, "salary");
    }

    #[test]
    fn benefits_roll_up_to_other_income() {
        let rules = Ruleset::built_in();
        let c = rules.classify("Stipend fra Lånekassen");
        assert_eq!(c.main, MainCategory::Income);
        assert_eq!(c.category, "other_income");
        assert_eq!(c.subcategory, "benefits");
    }

    #[test]
    fn substring_containment_not_word_boundaries() {
        // "ice" (telecom) matches inside "service".
        let rules = Ruleset::built_in();
        let c = rules.classify("Kundeservice");
        assert_eq!(c.subcategory, "telecom");
        // A longer keyword in an earlier group still wins over the substring.
        let c = rules.classify("Bilservice Oslo");
        assert_eq!(c.subcategory, "car");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let rules = Ruleset::built_in();
        assert_eq!(rules.classify("REMA 1000").subcategory, "groceries");
        assert_eq!(rules.classify("rema 1000").subcategory, "groceries");
    }

    #[test]
    fn unmatched_descriptions_are_uncategorized() {
        let rules = Ruleset::built_in();
        assert_eq!(rules.classify("xyzzy"), Classification::uncategorized());
        assert_eq!(rules.classify(""), Classification::uncategorized());
    }

    #[test]
    fn classification_is_deterministic() {
        let rules = Ruleset::built_in();
        assert_eq!(rules.classify("Spotify AB"), rules.classify("Spotify AB"));
    }

    #[test]
    fn from_toml_builds_ordered_rules() {
        let toml = r#"
            [[rules]]
            main = "expenses"
            category = "daily_living"
            subcategory = "groceries"
            keywords = ["KIWI"]

            [[rules]]
            main = "income"
            category = "earnings"
            subcategory = "salary"
            keywords = ["lønn"]
        "#;
        let rules = Ruleset::from_toml(toml).unwrap();
        assert_eq!(rules.classify("kiwi oslo").subcategory, "groceries");
        assert_eq!(rules.classify("Lønn mars").subcategory, "salary");
        assert_eq!(rules.classify("unknown"), Classification::uncategorized());
    }

    #[test]
    fn from_toml_rejects_empty_keyword_lists() {
        let toml = r#"
            [[rules]]
            main = "expenses"
            category = "daily_living"
            subcategory = "groceries"
            keywords = []
        "#;
        assert!(matches!(
            Ruleset::from_toml(toml),
            Err(RulesetError::EmptyRule(_, _))
        ));
    }
}
