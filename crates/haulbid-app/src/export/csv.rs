//! CSV export: a `label,value` header followed by one row per summary line

use haulbid_domain::export::DocumentExporter;
use haulbid_domain::model::BidSummary;
use haulbid_types::{Error, ExportFormat, Result};

pub struct CsvExporter;

impl DocumentExporter for CsvExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn export(&self, summary: &BidSummary) -> Result<Vec<u8>> {
        let mut writer = ::csv::Writer::from_writer(Vec::new());

        writer
            .write_record(["label", "value"])
            .map_err(|e| Error::Export(e.to_string()))?;
        writer
            .write_record(["Title", summary.title.as_str()])
            .map_err(|e| Error::Export(e.to_string()))?;
        if let Some(date) = summary.prepared_on {
            let date = date.format("%Y-%m-%d").to_string();
            writer
                .write_record(["Date", date.as_str()])
                .map_err(|e| Error::Export(e.to_string()))?;
        }
        for (label, value) in summary.pairs() {
            writer
                .write_record([label, value])
                .map_err(|e| Error::Export(e.to_string()))?;
        }

        writer.into_inner().map_err(|e| Error::Export(e.to_string()))
    }
}
