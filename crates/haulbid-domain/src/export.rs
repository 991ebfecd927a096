//! Document export seam
//!
//! Exporters receive the flat label/value summary and return the encoded
//! document. Layout, fonts, and file handling belong to the implementation.

use haulbid_types::{ExportFormat, Result};

use crate::model::BidSummary;

pub trait DocumentExporter {
    /// Format produced by this exporter
    fn format(&self) -> ExportFormat;

    /// Encode the summary as a byte stream
    fn export(&self, summary: &BidSummary) -> Result<Vec<u8>>;
}
