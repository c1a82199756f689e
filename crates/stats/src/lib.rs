//! Pure aggregation over classified transactions: wholesale-recomputed
//! statistics, spending patterns, and the combined report.

pub mod patterns;
pub mod report;
pub mod statistics;

pub use patterns::{CategorySpend, RecurringExpense, SpendingPatterns};
pub use report::Report;
pub use statistics::{compute_statistics, Breakdown, MonthlySummary, Statistics};
