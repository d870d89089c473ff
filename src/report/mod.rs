//! Reporting module
//!
//! Derives the three views consumed by the dashboard and analytics screens:
//! summary totals, a monthly income/expense series, and a category expense
//! breakdown. Everything here is pure; the store supplies the records and
//! the presentation layer renders the results.

mod aggregation;
mod models;

pub use aggregation::{
    build_report, category_breakdown, filter_trailing_window, monthly_series, summarize,
};
pub use models::{CategoryShare, MonthlySummary, Report, Summary};
