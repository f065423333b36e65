//! Paginated PDF table rendering

use crate::error::{ReportError, ReportResult};
use crate::{REPORT_COLUMNS, report_row};
use callsense_core::CallRecord;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use tracing::debug;

// A4 portrait geometry
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 14.0;
const ROW_HEIGHT_MM: f32 = 7.0;

const TITLE_SIZE: f32 = 14.0;
const CELL_SIZE: f32 = 9.0;

/// Left edge of each of the six columns
const COLUMN_OFFSETS_MM: [f32; 6] = [14.0, 34.0, 64.0, 116.0, 140.0, 176.0];

fn write_row(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    y: f32,
    cells: &[String; 6],
) {
    for (cell, x) in cells.iter().zip(COLUMN_OFFSETS_MM) {
        layer.use_text(cell.clone(), CELL_SIZE, Mm(x), Mm(y), font);
    }
}

fn header_cells() -> [String; 6] {
    REPORT_COLUMNS.map(String::from)
}

/// Render a filtered record subset as a paginated PDF table
///
/// The document carries a title line and the same six columns as the CSV
/// export; rows that run past the bottom margin continue on a fresh page
/// under a repeated header row.
///
/// # Errors
///
/// Returns [`ReportError::Empty`] for an empty subset, or a rendering error
/// if document assembly fails.
pub fn pdf_report(title: &str, records: &[CallRecord]) -> ReportResult<Vec<u8>> {
    if records.is_empty() {
        return Err(ReportError::Empty);
    }

    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "table");

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::pdf(e.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    layer.use_text(
        title,
        TITLE_SIZE,
        Mm(MARGIN_MM),
        Mm(PAGE_HEIGHT_MM - MARGIN_MM),
        &bold,
    );

    let mut y = PAGE_HEIGHT_MM - MARGIN_MM - 2.0 * ROW_HEIGHT_MM;
    write_row(&layer, &bold, y, &header_cells());
    y -= ROW_HEIGHT_MM;

    for record in records {
        if y < MARGIN_MM {
            let (page, page_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "table");
            layer = doc.get_page(page).get_layer(page_layer);

            y = PAGE_HEIGHT_MM - MARGIN_MM - ROW_HEIGHT_MM;
            write_row(&layer, &bold, y, &header_cells());
            y -= ROW_HEIGHT_MM;
        }

        write_row(&layer, &regular, y, &report_row(record));
        y -= ROW_HEIGHT_MM;
    }

    debug!(rows = records.len(), "rendered PDF report");
    doc.save_to_bytes()
        .map_err(|e| ReportError::pdf(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use callsense_core::Sentiment;
    use chrono::NaiveDate;

    fn record(id: i64) -> CallRecord {
        CallRecord {
            id,
            agent: "Nadia".to_string(),
            duration: "4:35".to_string(),
            agent_sentiment: Sentiment::Positive,
            customer_sentiment: Sentiment::Neutral,
            date_time: NaiveDate::from_ymd_opt(2025, 11, 5)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_empty_subset_is_refused() {
        assert!(matches!(pdf_report("Call Report", &[]), Err(ReportError::Empty)));
    }

    #[test]
    fn test_single_page_document() {
        let bytes = pdf_report("Call Report", &[record(101)]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_overflowing_subset_paginates() {
        // Enough rows to spill well past one A4 page
        let records: Vec<CallRecord> = (1..=100).map(record).collect();
        let many = pdf_report("Call Report", &records).unwrap();
        let few = pdf_report("Call Report", &[record(1)]).unwrap();

        assert!(many.starts_with(b"%PDF"));
        assert!(many.len() > few.len());
    }
}
