//! Domain services

pub mod cost_calculator;
pub mod summary_builder;

pub use cost_calculator::{compute_metrics, validate};
pub use summary_builder::{build_summary, format_currency, format_percent, format_quantity};
