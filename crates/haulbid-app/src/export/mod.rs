//! Bid document exporters

pub mod csv;
pub mod excel;
pub mod json;
pub mod pdf;

pub use self::csv::CsvExporter;
pub use self::excel::XlsxExporter;
pub use self::json::JsonExporter;
pub use self::pdf::PdfExporter;

use haulbid_domain::export::DocumentExporter;
use haulbid_types::ExportFormat;

/// File name used when the caller does not choose one
pub const DEFAULT_FILE_STEM: &str = "hauling_services_bid_summary";

pub fn default_file_name(format: ExportFormat) -> String {
    format!("{}.{}", DEFAULT_FILE_STEM, format.extension())
}

pub fn exporter_for(format: ExportFormat) -> Box<dyn DocumentExporter> {
    match format {
        ExportFormat::Xlsx => Box::new(XlsxExporter),
        ExportFormat::Csv => Box::new(CsvExporter),
        ExportFormat::Json => Box::new(JsonExporter),
        ExportFormat::Pdf => Box::new(PdfExporter),
    }
}
