//! Static font-metric tables for the two display fonts the résumé can be set in.
//!
//! Character widths are in em units (relative to font size). ASCII widths come from
//! per-font tables; everything else is classified by East Asian width. Full-width
//! CJK is exactly 1em in both fonts, so Japanese text measures precisely and only
//! mixed Latin runs carry the approximation.
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

// ────────────────────────────────────────────────────────────────────────────
// Font family enum
// ────────────────────────────────────────────────────────────────────────────

/// The fonts a résumé can be rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// Bundled Japanese sans-serif, embedded into the PDF when available.
    NotoSansJp,
    /// PDF base-14 font used when the bundled font cannot be loaded.
    Helvetica,
}

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Physical page geometry, in PDF points (1/72 in).
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    /// Applied to all four sides.
    pub margin_pt: f32,
}

impl PageConfig {
    /// Usable text width between the left and right margins.
    pub fn content_width_pt(&self) -> f32 {
        self.page_width_pt - 2.0 * self.margin_pt
    }

    pub fn left_pt(&self) -> f32 {
        self.margin_pt
    }

    pub fn right_pt(&self) -> f32 {
        self.page_width_pt - self.margin_pt
    }

    /// Lowest y (measured from the top edge) a line may extend to.
    pub fn bottom_pt(&self) -> f32 {
        self.page_height_pt - self.margin_pt
    }
}

/// A4 portrait with 50pt margins all sides.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        page_width_pt: 595.28,
        page_height_pt: 841.89,
        margin_pt: 50.0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a font family.
///
/// `widths[i]` = width of ASCII character `(i + 32)`, covering 0x20 (space) through 0x7E (~).
pub struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters that are neither wide nor half-width kana.
    pub average_char_width: f32,
    /// Width of full-width (East Asian Wide / Fullwidth) characters.
    pub wide_char_width: f32,
    /// Distance from the top of a line box to its baseline.
    pub ascent_em: f32,
    /// Vertical advance of one line, including the font's built-in gap.
    pub line_height_em: f32,
}

impl FontMetricTable {
    /// Width of a single character in em units.
    pub fn char_width(&self, c: char) -> f32 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            self.widths[code - 32]
        } else if is_halfwidth_kana(c) {
            0.5
        } else if is_wide(c) {
            self.wide_char_width
        } else if c.is_control() {
            0.0
        } else {
            self.average_char_width
        }
    }

    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars().map(|c| self.char_width(c)).sum()
    }

    /// Rendered width of a string in points at `size_pt`.
    pub fn width_pt(&self, s: &str, size_pt: f32) -> f32 {
        self.measure_str(s) * size_pt
    }

    pub fn line_height_pt(&self, size_pt: f32) -> f32 {
        self.line_height_em * size_pt
    }

    pub fn ascent_pt(&self, size_pt: f32) -> f32 {
        self.ascent_em * size_pt
    }
}

/// East Asian Wide and Fullwidth ranges (kana, CJK ideographs, Hangul, full-width forms).
pub fn is_wide(c: char) -> bool {
    matches!(c as u32,
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
        | 0x20000..=0x3FFFD)
}

fn is_halfwidth_kana(c: char) -> bool {
    matches!(c as u32, 0xFF61..=0xFF9F)
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

/// Helvetica: widths from the base-14 AFM, divided by 1000.
static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0     1     2     3     4     5     6     7     8     9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :     ;     <     =     >     ?     @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [     \     ]     ^     _     `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {     |     }     ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.556,
    wide_char_width: 1.0,
    ascent_em: 0.718,
    // (ascender 718 - descender -207 + gap 231) / 1000
    line_height_em: 1.156,
};

/// Noto Sans JP: proportional Latin is close to Helvetica, a little narrower on caps.
static NOTO_SANS_JP_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.224, 0.283, 0.420, 0.555, 0.555, 0.919, 0.680, 0.246, 0.338, 0.338, 0.467, 0.555, 0.246, 0.347, 0.246, 0.394,
        // 0     1     2     3     4     5     6     7     8     9
        0.555, 0.555, 0.555, 0.555, 0.555, 0.555, 0.555, 0.555, 0.555, 0.555,
        // :     ;     <     =     >     ?     @
        0.246, 0.246, 0.555, 0.555, 0.555, 0.475, 0.946,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.615, 0.653, 0.636, 0.686, 0.587, 0.554, 0.690, 0.735, 0.297, 0.535, 0.649, 0.541, 0.819,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.729, 0.741, 0.638, 0.741, 0.645, 0.599, 0.600, 0.727, 0.583, 0.887, 0.577, 0.534, 0.600,
        // [     \     ]     ^     _     `
        0.338, 0.394, 0.338, 0.555, 0.561, 0.603,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.566, 0.613, 0.504, 0.614, 0.551, 0.327, 0.565, 0.606, 0.275, 0.276, 0.551, 0.284, 0.925,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.609, 0.601, 0.613, 0.614, 0.386, 0.468, 0.376, 0.605, 0.520, 0.800, 0.498, 0.520, 0.473,
        // {     |     }     ~
        0.338, 0.270, 0.338, 0.555,
    ],
    average_char_width: 0.57,
    wide_char_width: 1.0,
    ascent_em: 1.16,
    // hhea ascender 1160 - descender -288, no line gap
    line_height_em: 1.448,
};

/// Returns the static metric table for a given font family.
pub fn get_metrics(font: &FontFamily) -> &'static FontMetricTable {
    match font {
        FontFamily::NotoSansJp => &NOTO_SANS_JP_TABLE,
        FontFamily::Helvetica => &HELVETICA_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        let metrics = get_metrics(&FontFamily::Helvetica);
        assert_eq!(metrics.measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(&FontFamily::Helvetica);
        // "Rust" = R(0.722) + u(0.556) + s(0.500) + t(0.278) = 2.056
        let width = metrics.measure_str("Rust");
        assert!(
            (width - 2.056).abs() < 1e-3,
            "Rust width should be ~2.056, got {width}"
        );
    }

    #[test]
    fn test_cjk_is_one_em_in_both_fonts() {
        for font in [FontFamily::NotoSansJp, FontFamily::Helvetica] {
            let metrics = get_metrics(&font);
            let width = metrics.measure_str("保育士");
            assert!((width - 3.0).abs() < 1e-4, "{font:?}: got {width}");
        }
    }

    #[test]
    fn test_ideographic_space_is_wide() {
        assert!(is_wide('\u{3000}'));
        assert!(is_wide('（'));
        assert!(!is_wide('a'));
    }

    #[test]
    fn test_halfwidth_kana_is_half_em() {
        let metrics = get_metrics(&FontFamily::NotoSansJp);
        assert!((metrics.measure_str("ｱｲ") - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_non_ascii_latin_falls_back_to_average() {
        let metrics = get_metrics(&FontFamily::Helvetica);
        let width = metrics.measure_str("é");
        assert!((width - metrics.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_width_pt_scales_with_size() {
        let metrics = get_metrics(&FontFamily::NotoSansJp);
        assert!((metrics.width_pt("履歴書", 20.0) - 60.0).abs() < 1e-3);
    }

    #[test]
    fn test_japanese_font_has_taller_lines() {
        let noto = get_metrics(&FontFamily::NotoSansJp);
        let helv = get_metrics(&FontFamily::Helvetica);
        assert!(noto.line_height_pt(11.0) > helv.line_height_pt(11.0));
    }

    #[test]
    fn test_default_page_config_is_a4() {
        let config = default_page_config();
        assert!((config.page_width_pt - 595.28).abs() < 1e-2);
        assert!((config.page_height_pt - 841.89).abs() < 1e-2);
        assert!((config.content_width_pt() - 495.28).abs() < 1e-2);
        assert!((config.bottom_pt() - 791.89).abs() < 1e-2);
    }
}
