//! PDF export: bold title, then one `label: value` line per summary pair

use haulbid_domain::export::DocumentExporter;
use haulbid_domain::model::BidSummary;
use haulbid_types::{Error, ExportFormat, Result};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const MARGIN: f32 = 20.0;
const LINE_HEIGHT: f32 = 10.0;
const TITLE_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 12.0;

/// A4 bid sheet using the built-in Helvetica faces
pub struct PdfExporter;

impl DocumentExporter for PdfExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn export(&self, summary: &BidSummary) -> Result<Vec<u8>> {
        let (doc, page, layer) =
            PdfDocument::new(summary.title.as_str(), PAGE_WIDTH, PAGE_HEIGHT, "Bid");
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| Error::Export(e.to_string()))?;
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| Error::Export(e.to_string()))?;

        let mut cursor = PageCursor {
            layer: doc.get_page(page).get_layer(layer),
            y: PAGE_HEIGHT.0 - MARGIN,
        };

        cursor.write(&doc, summary.title.as_str(), TITLE_SIZE, &bold);
        // Blank line under the title
        cursor.y -= LINE_HEIGHT;

        if let Some(date) = summary.prepared_on {
            let line = format!("Date: {}", date.format("%Y-%m-%d"));
            cursor.write(&doc, &line, BODY_SIZE, &regular);
        }
        for (label, value) in summary.pairs() {
            let line = format!("{}: {}", label, value);
            cursor.write(&doc, &line, BODY_SIZE, &regular);
        }

        doc.save_to_bytes().map_err(|e| Error::Export(e.to_string()))
    }
}

struct PageCursor {
    layer: PdfLayerReference,
    y: f32,
}

impl PageCursor {
    fn write(&mut self, doc: &PdfDocumentReference, text: &str, size: f32, font: &IndirectFontRef) {
        if self.y < MARGIN {
            let (page, layer) = doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, "Bid");
            self.layer = doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT.0 - MARGIN;
        }
        self.layer.use_text(text, size, Mm(MARGIN), Mm(self.y), font);
        self.y -= LINE_HEIGHT;
    }
}
