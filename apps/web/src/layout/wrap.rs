//! Greedy line breaking for mixed Japanese / Latin text.
//!
//! Latin words only break at whitespace, CJK characters break anywhere, and
//! closing punctuation is never carried to the start of a line (it hangs past
//! the right edge instead). A Latin word wider than the whole line is split by
//! character as a last resort.

use crate::layout::font_metrics::{is_wide, FontMetricTable};

#[derive(Debug, PartialEq)]
enum Token {
    Space(char),
    Wide(char),
    Word(String),
}

/// Characters that must not begin a line (kinsoku shori, line-start side).
fn is_closing_punct(c: char) -> bool {
    matches!(
        c,
        '、' | '。' | '，' | '．' | '・' | '：' | '；' | '？' | '！' | 'ー'
            | '）' | '」' | '』' | '】' | '〕' | '〉' | '》' | '］' | '｝'
            | 'ぁ' | 'ぃ' | 'ぅ' | 'ぇ' | 'ぉ' | 'っ' | 'ゃ' | 'ゅ' | 'ょ'
            | 'ァ' | 'ィ' | 'ゥ' | 'ェ' | 'ォ' | 'ッ' | 'ャ' | 'ュ' | 'ョ'
            | ',' | '.' | ')' | ']' | '}' | '!' | '?' | ':' | ';'
    )
}

fn tokenize(paragraph: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    for c in paragraph.chars() {
        let token = if is_wide(c) {
            Some(Token::Wide(c))
        } else if c.is_whitespace() {
            Some(Token::Space(c))
        } else {
            word.push(c);
            None
        };
        if let Some(token) = token {
            if !word.is_empty() {
                tokens.push(Token::Word(std::mem::take(&mut word)));
            }
            tokens.push(token);
        }
    }
    if !word.is_empty() {
        tokens.push(Token::Word(word));
    }
    tokens
}

struct LineBuilder<'a> {
    metrics: &'a FontMetricTable,
    size_pt: f32,
    max_width_pt: f32,
    lines: Vec<String>,
    line: String,
    width: f32,
}

impl<'a> LineBuilder<'a> {
    fn fits(&self, w: f32) -> bool {
        self.width + w <= self.max_width_pt
    }

    fn push_str(&mut self, s: &str, w: f32) {
        self.line.push_str(s);
        self.width += w;
    }

    fn push_char(&mut self, c: char) {
        self.line.push(c);
        self.width += self.metrics.char_width(c) * self.size_pt;
    }

    fn break_line(&mut self) {
        let line = std::mem::take(&mut self.line);
        self.lines.push(line.trim_end_matches([' ', '\t']).to_string());
        self.width = 0.0;
    }

    fn finish(mut self) -> Vec<String> {
        if !self.line.is_empty() || self.lines.is_empty() {
            self.break_line();
        }
        self.lines
    }
}

/// Wraps one paragraph (no newlines) into lines no wider than `max_width_pt`.
pub fn wrap_paragraph(
    paragraph: &str,
    metrics: &FontMetricTable,
    size_pt: f32,
    max_width_pt: f32,
) -> Vec<String> {
    let mut b = LineBuilder {
        metrics,
        size_pt,
        max_width_pt,
        lines: Vec::new(),
        line: String::new(),
        width: 0.0,
    };

    for token in tokenize(paragraph) {
        match token {
            Token::Space(c) => {
                // Spaces are swallowed at a wrap point.
                if b.line.is_empty() && !b.lines.is_empty() {
                    continue;
                }
                let w = metrics.char_width(c) * size_pt;
                if b.fits(w) {
                    b.push_char(c);
                } else {
                    b.break_line();
                }
            }
            Token::Wide(c) => {
                let w = metrics.char_width(c) * size_pt;
                if !b.fits(w) && !b.line.is_empty() && !is_closing_punct(c) {
                    b.break_line();
                }
                b.push_char(c);
            }
            Token::Word(word) => {
                let w = metrics.measure_str(&word) * size_pt;
                if b.fits(w) {
                    b.push_str(&word, w);
                    continue;
                }
                let starts_with_closing = word.chars().next().is_some_and(is_closing_punct);
                if !b.line.is_empty() && w <= max_width_pt && !starts_with_closing {
                    b.break_line();
                    b.push_str(&word, w);
                    continue;
                }
                for c in word.chars() {
                    let cw = metrics.char_width(c) * size_pt;
                    if !b.fits(cw) && !b.line.is_empty() && !is_closing_punct(c) {
                        b.break_line();
                    }
                    b.push_char(c);
                }
            }
        }
    }

    b.finish()
}

/// Wraps multi-line text. Each `\n` (or `\r\n`) starts a new paragraph and a
/// blank paragraph yields one empty line.
pub fn wrap_text(
    text: &str,
    metrics: &FontMetricTable,
    size_pt: f32,
    max_width_pt: f32,
) -> Vec<String> {
    text.split('\n')
        .map(|p| p.strip_suffix('\r').unwrap_or(p))
        .flat_map(|p| wrap_paragraph(p, metrics, size_pt, max_width_pt))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::{get_metrics, FontFamily};

    fn noto() -> &'static FontMetricTable {
        get_metrics(&FontFamily::NotoSansJp)
    }

    #[test]
    fn test_short_text_is_one_line() {
        let lines = wrap_text("氏名　山田花子", noto(), 11.0, 495.0);
        assert_eq!(lines, vec!["氏名　山田花子".to_string()]);
    }

    #[test]
    fn test_empty_text_is_one_empty_line() {
        assert_eq!(wrap_text("", noto(), 11.0, 495.0), vec![String::new()]);
    }

    #[test]
    fn test_japanese_wraps_at_width() {
        // 10 full-width characters at 10pt = 100pt; a 45pt line holds 4.
        let lines = wrap_text("あいうえおかきくけこ", noto(), 10.0, 45.0);
        assert_eq!(lines, vec!["あいうえ", "おかきく", "けこ"]);
    }

    #[test]
    fn test_closing_punctuation_hangs() {
        // "あいうえ。" would put "。" at the start of line 2 without kinsoku.
        let lines = wrap_text("あいうえ。かき", noto(), 10.0, 40.0);
        assert_eq!(lines[0], "あいうえ。");
        assert!(lines.iter().all(|l| !l.starts_with('。')));
    }

    #[test]
    fn test_latin_breaks_at_spaces() {
        let metrics = get_metrics(&FontFamily::Helvetica);
        let text = "caring for toddlers every single day";
        let width = metrics.width_pt("caring for toddlers", 10.0) + 1.0;
        let lines = wrap_text(text, metrics, 10.0, width);
        assert_eq!(lines[0], "caring for toddlers");
        assert!(lines.iter().all(|l| !l.starts_with(' ')));
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_overlong_word_is_split() {
        let metrics = get_metrics(&FontFamily::Helvetica);
        let lines = wrap_text("aaaaaaaaaaaaaaaaaaaa", metrics, 10.0, 30.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(metrics.width_pt(line, 10.0) <= 30.0 + 1e-3, "{line} too wide");
        }
        assert_eq!(lines.concat(), "aaaaaaaaaaaaaaaaaaaa");
    }

    #[test]
    fn test_newlines_start_paragraphs_and_keep_blank_lines() {
        let lines = wrap_text("一行目\r\n\n三行目", noto(), 11.0, 495.0);
        assert_eq!(lines, vec!["一行目", "", "三行目"]);
    }
}
