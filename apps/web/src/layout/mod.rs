// Page layout: font metrics, line breaking, and the paginating text flow.
// Pure computation with no I/O; callers run it inside tokio::task::spawn_blocking.

pub mod flow;
pub mod font_metrics;
pub mod wrap;

// Re-export the public API consumed by the renderer.
pub use flow::{Align, Ink, LaidOutDocument, PlacedItem, TextFlow, TextStyle};
pub use font_metrics::{default_page_config, FontFamily, PageConfig};
