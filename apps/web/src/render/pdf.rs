//! Serializes a `LaidOutDocument` with printpdf.
//!
//! Layout coordinates are top-down; PDF user space is bottom-up, so every y is
//! flipped against the page height here and nowhere else.

use printpdf::{
    BuiltinFont, Color, FontId, Line, LinePoint, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions,
    Point, Pt, Rgb, TextItem,
};

use crate::errors::AppError;
use crate::layout::{Ink, LaidOutDocument, PlacedItem};
use crate::render::fonts::DisplayFont;

const DOCUMENT_TITLE: &str = "履歴書";

enum FontRef {
    Embedded(FontId),
    Builtin(BuiltinFont),
}

fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color::Rgb(Rgb {
        r,
        g,
        b,
        icc_profile: None,
    })
}

fn ink_color(ink: Ink) -> Color {
    match ink {
        Ink::Text => rgb(0.0, 0.0, 0.0),
        // #888888
        Ink::Placeholder => rgb(0x88 as f32 / 255.0, 0x88 as f32 / 255.0, 0x88 as f32 / 255.0),
    }
}

fn point(x_pt: f32, y_from_top_pt: f32, page_height_pt: f32) -> Point {
    Point {
        x: Pt(x_pt),
        y: Pt(page_height_pt - y_from_top_pt),
    }
}

fn page_ops(items: &[PlacedItem], font: &FontRef, page_height_pt: f32) -> Vec<Op> {
    let mut ops = Vec::with_capacity(items.len() * 5);

    for item in items {
        match item {
            PlacedItem::Text(run) => {
                ops.push(Op::SetFillColor {
                    col: ink_color(run.ink),
                });
                ops.push(Op::StartTextSection);
                ops.push(Op::SetTextCursor {
                    pos: point(run.x_pt, run.baseline_pt, page_height_pt),
                });
                let items = vec![TextItem::Text(run.text.clone())];
                match font {
                    FontRef::Embedded(id) => {
                        ops.push(Op::SetFontSize {
                            size: Pt(run.size_pt),
                            font: id.clone(),
                        });
                        ops.push(Op::WriteText {
                            items,
                            font: id.clone(),
                        });
                    }
                    FontRef::Builtin(builtin) => {
                        ops.push(Op::SetFontSizeBuiltinFont {
                            size: Pt(run.size_pt),
                            font: *builtin,
                        });
                        ops.push(Op::WriteTextBuiltinFont {
                            items,
                            font: *builtin,
                        });
                    }
                }
                ops.push(Op::EndTextSection);
            }
            PlacedItem::Rule(rule) => {
                ops.push(Op::SetOutlineColor {
                    col: rgb(0.0, 0.0, 0.0),
                });
                ops.push(Op::SetOutlineThickness {
                    pt: Pt(rule.thickness_pt),
                });
                ops.push(Op::DrawLine {
                    line: Line {
                        points: vec![
                            LinePoint {
                                p: point(rule.x1_pt, rule.y_pt, page_height_pt),
                                bezier: false,
                            },
                            LinePoint {
                                p: point(rule.x2_pt, rule.y_pt, page_height_pt),
                                bezier: false,
                            },
                        ],
                        is_closed: false,
                    },
                });
            }
        }
    }

    ops
}

/// Writes `doc` as PDF bytes using `font` for every text run.
pub fn write_pdf(doc: &LaidOutDocument, font: &DisplayFont) -> Result<Vec<u8>, AppError> {
    let mut pdf = PdfDocument::new(DOCUMENT_TITLE);

    let font_ref = match font {
        DisplayFont::Embedded(parsed) => FontRef::Embedded(pdf.add_font(parsed.as_ref())),
        DisplayFont::Builtin => FontRef::Builtin(BuiltinFont::Helvetica),
    };

    let width = Mm::from(Pt(doc.page.page_width_pt));
    let height = Mm::from(Pt(doc.page.page_height_pt));
    let pages: Vec<PdfPage> = doc
        .pages
        .iter()
        .map(|page| {
            PdfPage::new(
                width,
                height,
                page_ops(&page.items, &font_ref, doc.page.page_height_pt),
            )
        })
        .collect();

    let mut warnings = Vec::new();
    let bytes = pdf
        .with_pages(pages)
        .save(&PdfSaveOptions::default(), &mut warnings);

    if !warnings.is_empty() {
        tracing::debug!("printpdf reported {} warnings", warnings.len());
    }
    if !bytes.starts_with(b"%PDF") {
        return Err(AppError::Render(
            "PDF writer produced no document header".to_string(),
        ));
    }

    Ok(bytes)
}
