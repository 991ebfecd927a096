//! Quote Service - Core Use Case for Bid Preparation
//!
//! This service orchestrates one form submission:
//! 1. Resolve pricing and header fields against configuration
//! 2. Compute job metrics with the domain calculator
//! 3. Serialize metrics into the bid summary
//! 4. Optionally export the summary as a document

use crate::config::Config;
use crate::export::{default_file_name, exporter_for};
use chrono::{Local, NaiveDate};
use haulbid_domain::model::{BidSummary, CalcOptions, ClientInfo, JobMetrics, JobSpec};
use haulbid_domain::service::{build_summary, compute_metrics};
use haulbid_types::{Error, ExportFormat, PayoutMode};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors specific to the quote service
#[derive(Debug, Error)]
pub enum QuoteServiceError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Job file error: {0}")]
    JobFile(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Export failed: {0}")]
    ExportFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<Error> for QuoteServiceError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidInput { .. } => QuoteServiceError::InvalidInput(err.to_string()),
            Error::JobFile(msg) => QuoteServiceError::JobFile(msg),
            Error::Io(e) => QuoteServiceError::Io(e.to_string()),
            Error::Config(e) => QuoteServiceError::ConfigError(e.to_string()),
            // serde_json only runs inside exporters at this layer
            Error::Json(e) => QuoteServiceError::ExportFailed(e.to_string()),
            Error::Export(msg) | Error::Service(msg) => QuoteServiceError::ExportFailed(msg),
        }
    }
}

impl From<QuoteServiceError> for Error {
    fn from(err: QuoteServiceError) -> Self {
        Error::Service(err.to_string())
    }
}

/// Options for preparing a quote
#[derive(Debug, Clone, Default)]
pub struct QuoteOptions {
    /// Pricing override; config value when absent
    pub payout_mode: Option<PayoutMode>,

    /// Bid header fields
    pub client: ClientInfo,

    /// Date printed on the bid; today when absent
    pub prepared_on: Option<NaiveDate>,
}

impl QuoteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payout_mode(mut self, mode: PayoutMode) -> Self {
        self.payout_mode = Some(mode);
        self
    }

    pub fn with_client(mut self, client: ClientInfo) -> Self {
        self.client = client;
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.prepared_on = Some(date);
        self
    }
}

/// A computed job ready for display or export
#[derive(Debug, Clone)]
pub struct Quote {
    pub metrics: JobMetrics,
    pub summary: BidSummary,
}

/// Main entry point: compute a bid for one job
pub fn prepare_quote(
    job: &JobSpec,
    config: &Config,
    options: &QuoteOptions,
) -> std::result::Result<Quote, QuoteServiceError> {
    // Step 1: Resolve pricing and header
    let payout_mode = options.payout_mode.unwrap_or(config.payout_mode);
    let mut client = options.client.clone();
    if client.company.as_deref().map_or(true, |s| s.trim().is_empty()) {
        client.company = config.company_name.clone();
    }

    // Step 2: Compute metrics
    let metrics = compute_metrics(job, &CalcOptions::new(payout_mode))?;

    // Step 3: Build summary
    let prepared_on = options
        .prepared_on
        .unwrap_or_else(|| Local::now().date_naive());
    let summary = build_summary(&metrics, &client).with_date(prepared_on);

    info!(
        job_type = %job.job_type(),
        payout_mode = %payout_mode,
        total_payout = metrics.total_payout(),
        "Prepared quote"
    );

    Ok(Quote { metrics, summary })
}

/// Write a quote as a document.
///
/// Without `output`, the file goes to the configured export directory under
/// the default bid file name. Without `format`, it is inferred from the
/// output extension, then taken from config.
pub fn export_quote(
    quote: &Quote,
    config: &Config,
    format: Option<ExportFormat>,
    output: Option<&Path>,
) -> std::result::Result<PathBuf, QuoteServiceError> {
    let format = format
        .or_else(|| output.and_then(ExportFormat::from_path))
        .unwrap_or(config.export_format);

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => config.export_dir().join(default_file_name(format)),
    };

    let bytes = exporter_for(format).export(&quote.summary)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            QuoteServiceError::Io(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }
    std::fs::write(&path, &bytes).map_err(|e| {
        QuoteServiceError::Io(format!("Failed to write {}: {}", path.display(), e))
    })?;

    info!(path = %path.display(), format = %format, bytes = bytes.len(), "Exported bid");
    Ok(path)
}
