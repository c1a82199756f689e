use chrono::NaiveDate;
use rust_decimal::Decimal;
use saldo_core::{Money, Transaction};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How many top expense categories and recurring merchants to surface.
const TOP_CATEGORIES: usize = 3;
const MAX_RECURRING: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpend {
    pub category: String,
    pub total: Money,
}

/// A merchant seen on more than one expense row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringExpense {
    pub description: String,
    pub count: usize,
    pub average_amount: Money,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpendingPatterns {
    /// Mean of per-day expense totals, over days that had any spending.
    pub average_daily_spend: Option<Money>,
    /// Full weekday name ("Monday") with the highest summed spending.
    pub highest_spend_weekday: Option<String>,
    /// Up to three expense categories, largest first.
    pub top_categories: Vec<CategorySpend>,
    pub recurring_expenses: Vec<RecurringExpense>,
}

/// Expense-side pattern analysis. Pure; undated expenses are ignored by the
/// date-derived measures but still feed the recurring-merchant scan.
pub fn spending_patterns(transactions: &[Transaction]) -> SpendingPatterns {
    let expenses: Vec<&Transaction> = transactions
        .iter()
        .filter(|tx| tx.is_expense() && !tx.amount.is_zero())
        .collect();
    if expenses.is_empty() {
        return SpendingPatterns::default();
    }

    let mut daily: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    let mut by_weekday: BTreeMap<String, Money> = BTreeMap::new();
    let mut by_category: BTreeMap<String, Money> = BTreeMap::new();
    for tx in &expenses {
        let amount = tx.abs_amount();
        if let Some(date) = tx.date {
            *daily.entry(date).or_insert_with(Money::zero) += amount;
            *by_weekday
                .entry(date.format("%A").to_string())
                .or_insert_with(Money::zero) += amount;
        }
        *by_category
            .entry(tx.category.category.clone())
            .or_insert_with(Money::zero) += amount;
    }

    let average_daily_spend = if daily.is_empty() {
        None
    } else {
        let total: Money = daily.values().copied().sum();
        let days = Decimal::from(daily.len() as u64);
        Some(Money::from_decimal(total.to_decimal() / days))
    };

    let highest_spend_weekday = by_weekday
        .iter()
        .max_by(|a, b| a.1.cmp(b.1))
        .map(|(day, _)| day.clone());

    let mut ranked: Vec<CategorySpend> = by_category
        .into_iter()
        .map(|(category, total)| CategorySpend { category, total })
        .collect();
    ranked.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));
    ranked.truncate(TOP_CATEGORIES);

    SpendingPatterns {
        average_daily_spend,
        highest_spend_weekday,
        top_categories: ranked,
        recurring_expenses: recurring(&expenses),
    }
}

fn recurring(expenses: &[&Transaction]) -> Vec<RecurringExpense> {
    let mut groups: BTreeMap<&str, Vec<&Transaction>> = BTreeMap::new();
    for tx in expenses {
        groups.entry(tx.description.as_str()).or_default().push(tx);
    }

    let mut result: Vec<RecurringExpense> = groups
        .into_iter()
        .filter(|(_, txs)| txs.len() > 1)
        .map(|(description, txs)| {
            let total: Money = txs.iter().map(|tx| tx.abs_amount()).sum();
            let count = txs.len();
            RecurringExpense {
                description: description.to_string(),
                count,
                average_amount: Money::from_decimal(
                    total.to_decimal() / Decimal::from(count as u64),
                ),
                category: txs[0].category.category.clone(),
            }
        })
        .collect();

    result.sort_by(|a, b| b.count.cmp(&a.count).then(a.description.cmp(&b.description)));
    result.truncate(MAX_RECURRING);
    result
}
