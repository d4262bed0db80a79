//! Fixed-layout A4 receipt rendered with `printpdf`.
//!
//! Positions are given in PostScript points from the bottom-left corner.

use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Pt};
use tracing::debug;

use hostel_core::config::ReceiptConfig;
use hostel_core::error::{AppError, ErrorKind};

use super::data::ReceiptData;

const PAGE_WIDTH: f32 = 595.28;
const PAGE_HEIGHT: f32 = 841.89;

const LABEL_X: f32 = 80.0;
const VALUE_X: f32 = 250.0;
const FIRST_ROW_Y: f32 = PAGE_HEIGHT - 160.0;
const ROW_STEP: f32 = 25.0;

/// Average Helvetica glyph advance as a fraction of the font size.
const HELVETICA_AVG_ADVANCE: f32 = 0.5;

/// Renders receipts. Holds only configuration text; no state between calls.
#[derive(Debug, Clone)]
pub struct ReceiptGenerator {
    config: ReceiptConfig,
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

impl ReceiptGenerator {
    pub fn new(config: ReceiptConfig) -> Self {
        Self { config }
    }

    /// Render on the blocking pool.
    pub async fn generate(&self, data: ReceiptData) -> Result<Vec<u8>, AppError> {
        let generator = self.clone();
        tokio::task::spawn_blocking(move || generator.render(&data))
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Receipt task panicked", e))?
    }

    /// Render `data` to PDF bytes.
    pub fn render(&self, data: &ReceiptData) -> Result<Vec<u8>, AppError> {
        let (doc, page, layer) = PdfDocument::new(
            self.config.title.as_str(),
            Mm(210.0),
            Mm(297.0),
            "Receipt",
        );
        let layer = doc.get_page(page).get_layer(layer);

        let fonts = Fonts {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| AppError::internal(format!("Failed to load font: {e:?}")))?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| AppError::internal(format!("Failed to load font: {e:?}")))?,
            italic: doc
                .add_builtin_font(BuiltinFont::HelveticaOblique)
                .map_err(|e| AppError::internal(format!("Failed to load font: {e:?}")))?,
        };

        self.draw_header(&layer, &fonts);
        self.draw_details(&layer, &fonts, data);
        self.draw_signatory(&layer, &fonts);

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| AppError::internal(format!("Failed to render receipt: {e:?}")))?;

        debug!(sid = %data.sid, room = %data.room, size = bytes.len(), "Receipt rendered");
        Ok(bytes)
    }

    fn draw_header(&self, layer: &PdfLayerReference, fonts: &Fonts) {
        centered(layer, &self.config.institution, 16.0, PAGE_HEIGHT - 60.0, &fonts.bold);
        centered(layer, &self.config.campus, 12.0, PAGE_HEIGHT - 80.0, &fonts.regular);
        centered(layer, &self.config.title, 14.0, PAGE_HEIGHT - 110.0, &fonts.bold);
    }

    fn draw_details(&self, layer: &PdfLayerReference, fonts: &Fonts, data: &ReceiptData) {
        let rows = [
            ("Student ID:", data.sid.as_str()),
            ("Room Allotted:", data.room.as_str()),
            ("Amount Paid:", self.config.amount_label.as_str()),
            ("Transaction Hash:", data.tx_hash.as_str()),
            ("Date (UTC):", data.date_utc.as_str()),
        ];

        let mut y = FIRST_ROW_Y;
        for (label, value) in rows {
            text(layer, label, 11.0, LABEL_X, y, &fonts.regular);
            text(layer, value, 11.0, VALUE_X, y, &fonts.regular);
            y -= ROW_STEP;
        }
    }

    fn draw_signatory(&self, layer: &PdfLayerReference, fonts: &Fonts) {
        let x = PAGE_WIDTH - 200.0;
        text(layer, &self.config.signatory, 10.0, x, 100.0, &fonts.italic);

        layer.add_line(Line {
            points: vec![
                (point(x, 95.0), false),
                (point(PAGE_WIDTH - 60.0, 95.0), false),
            ],
            is_closed: false,
        });
    }
}

fn point(x: f32, y: f32) -> Point {
    Point::new(Mm::from(Pt(x)), Mm::from(Pt(y)))
}

fn text(layer: &PdfLayerReference, value: &str, size: f32, x: f32, y: f32, font: &IndirectFontRef) {
    layer.use_text(value, size, Mm::from(Pt(x)), Mm::from(Pt(y)), font);
}

/// Builtin fonts carry no metrics, so the width is estimated.
fn centered(layer: &PdfLayerReference, value: &str, size: f32, y: f32, font: &IndirectFontRef) {
    let width = value.chars().count() as f32 * size * HELVETICA_AVG_ADVANCE;
    let x = ((PAGE_WIDTH - width) / 2.0).max(20.0);
    text(layer, value, size, x, y, font);
}
