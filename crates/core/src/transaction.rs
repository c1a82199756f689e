use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::{Classification, MainCategory};
use super::money::Money;
use super::period::Month;

/// One classified statement line. Immutable once produced by the importer;
/// a missing date means the source row had no usable date cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: Option<NaiveDate>,
    pub description: String,
    /// Negative = outflow, positive = inflow. Zero is valid but excluded
    /// from statistics.
    pub amount: Money,
    pub category: Classification,
}

impl Transaction {
    pub fn new(
        date: Option<NaiveDate>,
        description: impl Into<String>,
        amount: Money,
        category: Classification,
    ) -> Self {
        Transaction {
            date,
            description: description.into(),
            amount,
            category,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.category.main == MainCategory::Expenses
    }

    pub fn is_income(&self) -> bool {
        self.category.main == MainCategory::Income
    }

    pub fn abs_amount(&self) -> Money {
        self.amount.abs()
    }

    pub fn month(&self) -> Option<Month> {
        self.date.map(Month::from_date)
    }
}
