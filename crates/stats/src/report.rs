use rust_decimal::Decimal;
use saldo_core::Transaction;
use serde::{Deserialize, Serialize};

use crate::patterns::{spending_patterns, SpendingPatterns};
use crate::statistics::Statistics;

/// Headline figures layered on top of [`Statistics`]. Does not embed the
/// statistics themselves; callers that need both hold both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Percentage of income left after expenses; `None` when there is no
    /// income to divide by.
    pub savings_rate: Option<Decimal>,
    pub transaction_count: usize,
    pub expense_count: usize,
    pub income_count: usize,
    pub patterns: SpendingPatterns,
}

impl Report {
    pub fn new(transactions: &[Transaction], statistics: &Statistics) -> Self {
        let income = statistics.income.total.to_decimal();
        let savings_rate = if income > Decimal::ZERO {
            let savings = income - statistics.expenses.total.to_decimal();
            Some((savings / income * Decimal::from(100)).round_dp(2))
        } else {
            None
        };

        Report {
            savings_rate,
            transaction_count: transactions.len(),
            expense_count: transactions.iter().filter(|tx| tx.is_expense()).count(),
            income_count: transactions.iter().filter(|tx| tx.is_income()).count(),
            patterns: spending_patterns(transactions),
        }
    }
}
