//! Server-rendered HTML pages.

pub mod pages;

pub use pages::{career_form, career_preview, index_page, resume_form};

/// Escapes text for use in HTML element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps `body` in the shared document shell.
fn layout(title: &str, body: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    html.push_str("<link rel=\"stylesheet\" href=\"/style.css\">\n");
    html.push_str("</head>\n<body>\n<main class=\"container\">\n");
    html.push_str(body);
    html.push_str("\n</main>\n</body>\n</html>\n");
    html
}
