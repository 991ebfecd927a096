use haulbid_domain::export::DocumentExporter;
use haulbid_domain::model::BidSummary;
use haulbid_types::{Error, ExportFormat, Result};

/// Pretty-printed JSON of the whole summary, sections included
pub struct JsonExporter;

impl DocumentExporter for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn export(&self, summary: &BidSummary) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(summary).map_err(|e| Error::Export(e.to_string()))
    }
}
