//! Excel export functionality

use haulbid_domain::export::DocumentExporter;
use haulbid_domain::model::{BidSummary, Section};
use haulbid_types::{Error, ExportFormat, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

/// Single-sheet workbook: title, date, then one label/value row per line
pub struct XlsxExporter;

impl DocumentExporter for XlsxExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Xlsx
    }

    fn export(&self, summary: &BidSummary) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();

        let sheet = workbook.add_worksheet();
        write_bid_sheet(sheet, summary)?;

        workbook
            .save_to_buffer()
            .map_err(|e| Error::Export(e.to_string()))
    }
}

fn write_bid_sheet(sheet: &mut Worksheet, summary: &BidSummary) -> Result<()> {
    sheet
        .set_name("Bid")
        .map_err(|e| Error::Export(e.to_string()))?;

    let title_format = Format::new().set_bold().set_font_size(14);
    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, &summary.title, &title_format)
        .map_err(|e| Error::Export(e.to_string()))?;

    let mut row: u32 = 1;
    if let Some(date) = summary.prepared_on {
        sheet
            .write_string(row, 0, "Date")
            .map_err(|e| Error::Export(e.to_string()))?;
        sheet
            .write_string(row, 1, date.format("%Y-%m-%d").to_string())
            .map_err(|e| Error::Export(e.to_string()))?;
        row += 1;
    }

    for section in [Section::Client, Section::Job, Section::Profit] {
        let mut lines = summary.section(section).peekable();
        if lines.peek().is_none() {
            continue;
        }

        // Blank row, then section heading
        row += 1;
        sheet
            .write_string_with_format(row, 0, section.heading(), &header_format)
            .map_err(|e| Error::Export(e.to_string()))?;
        row += 1;

        // Values stay as formatted text so the sheet matches the on-screen bid
        for line in lines {
            sheet
                .write_string(row, 0, &line.label)
                .map_err(|e| Error::Export(e.to_string()))?;
            sheet
                .write_string(row, 1, &line.value)
                .map_err(|e| Error::Export(e.to_string()))?;
            row += 1;
        }
    }

    sheet
        .set_column_width(0, 24)
        .map_err(|e| Error::Export(e.to_string()))?;
    sheet
        .set_column_width(1, 40)
        .map_err(|e| Error::Export(e.to_string()))?;

    Ok(())
}
