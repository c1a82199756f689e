use chrono::NaiveDate;
use saldo_core::{MainCategory, Money, Month, Transaction};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Grouped sums for one side of the ledger (expenses or income). All values
/// are positive magnitudes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Breakdown {
    pub total: Money,
    pub categories: BTreeMap<String, Money>,
    pub subcategories: BTreeMap<String, Money>,
}

impl Breakdown {
    fn add(&mut self, category: &str, subcategory: &str, amount: Money) {
        self.total += amount;
        *self
            .categories
            .entry(category.to_string())
            .or_insert_with(Money::zero) += amount;
        *self
            .subcategories
            .entry(subcategory.to_string())
            .or_insert_with(Money::zero) += amount;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub income: Money,
    pub expenses: Money,
}

/// Derived view over a transaction list, recomputed wholesale on every call —
/// never incrementally mutated. Map keys iterate sorted (`BTreeMap`); any
/// further presentation ordering is the consumer's concern.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub expenses: Breakdown,
    pub income: Breakdown,
    pub daily_expenses: BTreeMap<NaiveDate, Money>,
    pub monthly_summary: BTreeMap<Month, MonthlySummary>,
    pub transfers: Money,
    pub investments: Money,
}

/// Single pass over the transactions. Zero amounts are skipped entirely;
/// transfers and investments only feed their scalar totals; undated
/// transactions are excluded from the date-keyed buckets but still counted
/// in the category totals.
pub fn compute_statistics(transactions: &[Transaction]) -> Statistics {
    let mut stats = Statistics::default();

    for tx in transactions {
        if tx.amount.is_zero() {
            continue;
        }
        let amount = tx.abs_amount();
        let class = &tx.category;

        match class.main {
            MainCategory::Expenses => {
                stats.expenses.add(&class.category, &class.subcategory, amount);
                if let Some(date) = tx.date {
                    *stats
                        .daily_expenses
                        .entry(date)
                        .or_insert_with(Money::zero) += amount;
                    stats
                        .monthly_summary
                        .entry(Month::from_date(date))
                        .or_default()
                        .expenses += amount;
                }
            }
            MainCategory::Income => {
                stats.income.add(&class.category, &class.subcategory, amount);
                if let Some(date) = tx.date {
                    stats
                        .monthly_summary
                        .entry(Month::from_date(date))
                        .or_default()
                        .income += amount;
                }
            }
            MainCategory::Transfers => stats.transfers += amount,
            MainCategory::Investments => stats.investments += amount,
        }
    }

    stats
}
