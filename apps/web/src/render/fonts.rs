//! Display font selection.
//!
//! The Japanese font is an optional asset. Every way of failing to obtain it
//! (missing file, unreadable file, bytes that do not parse as a font, a panic
//! inside the parser) ends in the same place: the built-in Helvetica.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use printpdf::ParsedFont;
use tracing::{debug, warn};

use crate::layout::FontFamily;

/// The font a document will be drawn with.
pub enum DisplayFont {
    Embedded(Box<ParsedFont>),
    Builtin,
}

impl DisplayFont {
    pub fn family(&self) -> FontFamily {
        match self {
            DisplayFont::Embedded(_) => FontFamily::NotoSansJp,
            DisplayFont::Builtin => FontFamily::Helvetica,
        }
    }
}

/// Loads the font at `path`, falling back to the built-in font on any failure.
pub fn load_display_font(path: &Path) -> DisplayFont {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("Font {} not present, using Helvetica", path.display());
            return DisplayFont::Builtin;
        }
        Err(e) => {
            warn!("Font {} unreadable ({e}), using Helvetica", path.display());
            return DisplayFont::Builtin;
        }
    };

    let parsed = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut warnings = Vec::new();
        ParsedFont::from_bytes(&bytes, 0, &mut warnings)
    }));

    match parsed {
        Ok(Some(font)) => DisplayFont::Embedded(Box::new(font)),
        Ok(None) => {
            warn!("Font {} could not be parsed, using Helvetica", path.display());
            DisplayFont::Builtin
        }
        Err(_) => {
            warn!("Font parser panicked on {}, using Helvetica", path.display());
            DisplayFont::Builtin
        }
    }
}
