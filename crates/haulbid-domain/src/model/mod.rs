//! Domain model types

pub mod client;
pub mod job_spec;
pub mod metrics;
pub mod summary;

pub use client::ClientInfo;
pub use job_spec::{CalcOptions, HourlyJob, JobSpec, TonnageJob};
pub use metrics::{HourlyMetrics, JobMetrics, TonnageMetrics};
pub use summary::{BidSummary, Section, SummaryLine};
