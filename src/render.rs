//! HTML rendering for the caption page.

use std::fmt::Write;

use crate::formatter::Block;
use crate::shell::PageState;

pub const PAGE_TITLE: &str = "AI Social Caption Generator";

const STYLE: &str = "\
body{margin:0;min-height:100vh;display:flex;align-items:center;justify-content:center;\
background:#f1f5f9;font-family:system-ui,sans-serif;color:#0f172a;padding:1rem}\
main{width:100%;max-width:48rem;background:#fff;padding:2.5rem;border-radius:1.5rem;\
border:1px solid #e2e8f0;box-shadow:0 25px 50px -12px rgba(0,0,0,.25)}\
h1{text-align:center;font-size:1.875rem;margin:0 0 1.75rem}h1 span{color:#64748b}\
textarea{box-sizing:border-box;width:100%;height:6rem;padding:.75rem;border:1px solid #cbd5e1;\
border-radius:.75rem;background:#f8fafc;resize:none;margin-bottom:1.25rem}\
button{width:100%;padding:.75rem;border:0;border-radius:.75rem;background:#0f172a;color:#fff;\
font-size:1.125rem;font-weight:600}button:disabled{opacity:.5}\
.caption{margin-top:2rem;background:#f8fafc;border:1px solid #e2e8f0;border-radius:1rem;padding:1.5rem}\
.caption .label{text-transform:uppercase;letter-spacing:.05em;font-size:.75rem;font-weight:700;\
color:#94a3b8;margin-bottom:.75rem}.caption h2{font-size:1.25rem;margin:0 0 .5rem}\
.caption ul{margin:0 0 .5rem 1.5rem}.caption p{margin:0 0 .5rem;color:#334155}\
.error{margin-top:1rem;color:#ef4444;text-align:center}";

/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

pub fn render_blocks(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Heading(text) => {
                let _ = write!(out, "<h2>{}</h2>", escape_html(text));
            }
            Block::BulletList(items) => {
                out.push_str("<ul>");
                for item in items {
                    let _ = write!(out, "<li>{}</li>", escape_html(item));
                }
                out.push_str("</ul>");
            }
            Block::Paragraph(text) => {
                let _ = write!(out, "<p>{}</p>", escape_html(text));
            }
        }
    }
    out
}

/// Renders the whole page for the given state.
///
/// The caption panel and the error line are each shown only when their field
/// is non-empty. While a request is in flight the button is disabled and the
/// page reloads itself until the attempt settles.
pub fn render_page(page: &PageState) -> String {
    let mut out = String::with_capacity(2048);
    out.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    if page.loading {
        out.push_str("<meta http-equiv=\"refresh\" content=\"2\">\n");
    }
    let _ = writeln!(out, "<title>{PAGE_TITLE} (Gemini)</title>");
    let _ = writeln!(out, "<style>{STYLE}</style>");
    out.push_str("</head>\n<body>\n<main>\n");
    let _ = writeln!(out, "<h1>{PAGE_TITLE} <span>(Gemini)</span></h1>");

    out.push_str("<form method=\"post\" action=\"/generate\">\n");
    let _ = writeln!(
        out,
        "<textarea name=\"prompt\" rows=\"4\" required \
         placeholder=\"Describe your promo, product, or campaign idea…\">{}</textarea>",
        escape_html(&page.prompt)
    );
    if page.loading {
        out.push_str("<button type=\"submit\" disabled>Generating...</button>\n");
    } else {
        out.push_str("<button type=\"submit\">Generate Caption</button>\n");
    }
    out.push_str("</form>\n");

    if !page.caption.is_empty() {
        out.push_str("<section class=\"caption\">\n<div class=\"label\">AI Generated Caption</div>\n");
        out.push_str(&render_blocks(&page.caption_blocks()));
        out.push_str("\n</section>\n");
    }
    if !page.error.is_empty() {
        let _ = writeln!(out, "<div class=\"error\">{}</div>", escape_html(&page.error));
    }

    out.push_str("</main>\n</body>\n</html>\n");
    out
}
