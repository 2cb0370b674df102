//! Best-effort HTML to plain text cleanup for problem statements.
//!
//! This is not an HTML parser: tag attributes containing a quoted `>` and
//! entities other than `&nbsp;`, `&lt;`, `&gt;` and `&amp;` are left as is.

use regex::Regex;
use std::sync::OnceLock;

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

fn blank_lines_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").unwrap())
}

/// Strip tags, decode the handled entities and collapse blank-line runs.
///
/// `&amp;` is decoded last so `&amp;lt;` becomes `&lt;`, not `<`.
pub fn normalize_content(html: &str) -> String {
    let text = tag_re().replace_all(html, "");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");

    blank_lines_re().replace_all(&text, "\n\n").into_owned()
}
