//! TOML job files: the non-interactive form input provider
//!
//! ```toml
//! payout_mode = "markup_percent"   # optional, overrides config
//!
//! [client]
//! company = "DirtyBiz Hauling"
//! client = "County Roads Dept."
//!
//! [job]
//! type = "tonnage"
//! haul_distance_miles = 20
//! num_trucks = 3
//! truck_type = "tri-axle"
//! ```
//!
//! Numeric fields left out of `[job]` take the calculator form defaults.

use haulbid_domain::model::{ClientInfo, JobSpec};
use haulbid_types::{Error, PayoutMode, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobFile {
    #[serde(default)]
    pub payout_mode: Option<PayoutMode>,

    #[serde(default)]
    pub client: ClientInfo,

    pub job: JobSpec,
}

/// Parse a job file from TOML text
pub fn parse_job_file(content: &str) -> Result<JobFile> {
    toml::from_str(content).map_err(|e| Error::JobFile(e.to_string()))
}

/// Load and parse a job file from disk
pub fn load_job_file(path: &Path) -> Result<JobFile> {
    if !path.exists() {
        return Err(Error::JobFile(format!("file not found: {}", path.display())));
    }
    let content = std::fs::read_to_string(path)?;
    let job_file: JobFile = toml::from_str(&content)
        .map_err(|e| Error::JobFile(format!("{}: {}", path.display(), e)))?;
    debug!(path = %path.display(), job_type = %job_file.job.job_type(), "Loaded job file");
    Ok(job_file)
}
