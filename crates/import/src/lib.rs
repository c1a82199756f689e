//! Statement import: delimited-text parsing plus keyword classification.

pub mod classifier;
pub(crate) mod keywords;
pub mod statement;

pub use classifier::{KeywordRule, Ruleset, RulesetError};
pub use statement::{parse_row, parse_row_at, read_rows};

use chrono::{Local, NaiveDate};
use saldo_core::Transaction;

/// Parse raw statement text into classified transactions with the built-in
/// keyword rules. Total: malformed rows degrade to documented defaults
/// instead of failing.
pub fn parse_transactions(text: &str, delimiter: Option<char>) -> Vec<Transaction> {
    parse_transactions_with(text, delimiter, &Ruleset::built_in())
}

/// As [`parse_transactions`], with a caller-supplied ruleset (e.g. loaded
/// via [`Ruleset::from_toml`]).
pub fn parse_transactions_with(
    text: &str,
    delimiter: Option<char>,
    rules: &Ruleset,
) -> Vec<Transaction> {
    parse_transactions_at(text, delimiter, rules, Local::now().date_naive())
}

fn parse_transactions_at(
    text: &str,
    delimiter: Option<char>,
    rules: &Ruleset,
    today: NaiveDate,
) -> Vec<Transaction> {
    statement::read_rows(text, delimiter)
        .iter()
        .map(|row| statement::parse_row_at(row, rules, today))
        .collect()
}
