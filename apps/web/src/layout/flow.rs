//! Top-down text flow with overflow pagination.
//!
//! `TextFlow` keeps a cursor measured from the top edge of the current page.
//! Every drawn line advances the cursor by one line height; a line (or rule)
//! that would cross the bottom margin is moved to the top of a fresh page.
//! The output is a plain list of positioned items per page.

use crate::layout::font_metrics::{get_metrics, FontFamily, FontMetricTable, PageConfig};
use crate::layout::wrap::wrap_text;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// Text colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    /// Black body text.
    Text,
    /// Grey (#888888) filler for fields the applicant left blank.
    Placeholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// One line of text. `baseline_pt` is measured from the top edge of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x_pt: f32,
    pub baseline_pt: f32,
    pub size_pt: f32,
    pub ink: Ink,
}

/// A horizontal line. `y_pt` is measured from the top edge of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub x1_pt: f32,
    pub x2_pt: f32,
    pub y_pt: f32,
    pub thickness_pt: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlacedItem {
    Text(TextRun),
    Rule(Rule),
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub items: Vec<PlacedItem>,
}

/// A fully positioned document, ready for the PDF writer.
#[derive(Debug, Clone)]
pub struct LaidOutDocument {
    pub font: FontFamily,
    pub page: PageConfig,
    pub pages: Vec<Page>,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn line_count(&self) -> usize {
        self.text_runs().count()
    }

    /// All text runs in drawing order, across pages.
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.pages.iter().flat_map(|p| &p.items).filter_map(|item| match item {
            PlacedItem::Text(run) => Some(run),
            PlacedItem::Rule(_) => None,
        })
    }
}

/// Per-call text styling.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub size_pt: f32,
    pub align: Align,
    pub ink: Ink,
    /// Extra space added below every line.
    pub line_gap_pt: f32,
}

impl TextStyle {
    pub fn new(size_pt: f32) -> Self {
        Self {
            size_pt,
            align: Align::Left,
            ink: Ink::Text,
            line_gap_pt: 0.0,
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn ink(mut self, ink: Ink) -> Self {
        self.ink = ink;
        self
    }

    pub fn line_gap(mut self, gap_pt: f32) -> Self {
        self.line_gap_pt = gap_pt;
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Flow
// ────────────────────────────────────────────────────────────────────────────

/// Font size in effect before the first text call.
const INITIAL_SIZE_PT: f32 = 12.0;

pub struct TextFlow {
    font: FontFamily,
    metrics: &'static FontMetricTable,
    config: PageConfig,
    pages: Vec<Page>,
    y: f32,
    size_pt: f32,
}

impl TextFlow {
    pub fn new(font: FontFamily, config: PageConfig) -> Self {
        let y = config.margin_pt;
        Self {
            font,
            metrics: get_metrics(&font),
            config,
            pages: vec![Page::default()],
            y,
            size_pt: INITIAL_SIZE_PT,
        }
    }

    /// Current cursor position, from the top edge of the current page.
    pub fn y_pt(&self) -> f32 {
        self.y
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Draws `text` with word-wrapping, advancing the cursor one line per wrapped line.
    pub fn text(&mut self, text: &str, style: TextStyle) {
        self.size_pt = style.size_pt;
        let line_height = self.metrics.line_height_pt(style.size_pt);
        let ascent = self.metrics.ascent_pt(style.size_pt);
        let width = self.config.content_width_pt();

        for line in wrap_text(text, self.metrics, style.size_pt, width) {
            self.ensure_room(line_height);
            let x = self.line_x(&line, style);
            let baseline = self.y + ascent;
            self.current_page().items.push(PlacedItem::Text(TextRun {
                text: line,
                x_pt: x,
                baseline_pt: baseline,
                size_pt: style.size_pt,
                ink: style.ink,
            }));
            self.y += line_height + style.line_gap_pt;
        }
    }

    /// Advances the cursor by `lines` line heights at the current font size.
    /// Never starts a page by itself; the next drawn item does if needed.
    pub fn move_down(&mut self, lines: f32) {
        self.y += lines * self.metrics.line_height_pt(self.size_pt);
    }

    /// Starts a new page unless a block `height_pt` tall fits above the bottom margin.
    pub fn keep_together(&mut self, height_pt: f32) {
        self.ensure_room(height_pt);
    }

    pub fn line_height_pt(&self, size_pt: f32) -> f32 {
        self.metrics.line_height_pt(size_pt)
    }

    /// Draws a full content-width rule `offset_pt` below the cursor without moving it.
    pub fn rule(&mut self, offset_pt: f32, thickness_pt: f32) {
        if self.y + offset_pt > self.config.bottom_pt() {
            self.new_page();
        }
        let rule = Rule {
            x1_pt: self.config.left_pt(),
            x2_pt: self.config.right_pt(),
            y_pt: self.y + offset_pt,
            thickness_pt,
        };
        self.current_page().items.push(PlacedItem::Rule(rule));
    }

    pub fn finish(self) -> LaidOutDocument {
        LaidOutDocument {
            font: self.font,
            page: self.config,
            pages: self.pages,
        }
    }

    fn line_x(&self, line: &str, style: TextStyle) -> f32 {
        let line_width = self.metrics.width_pt(line, style.size_pt);
        let left = self.config.left_pt();
        match style.align {
            Align::Left => left,
            Align::Center => left + (self.config.content_width_pt() - line_width).max(0.0) / 2.0,
            Align::Right => (self.config.right_pt() - line_width).max(left),
        }
    }

    fn ensure_room(&mut self, height_pt: f32) {
        let at_top = (self.y - self.config.margin_pt).abs() < f32::EPSILON;
        if !at_top && self.y + height_pt > self.config.bottom_pt() {
            self.new_page();
        }
    }

    fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.y = self.config.margin_pt;
    }

    fn current_page(&mut self) -> &mut Page {
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }
}
