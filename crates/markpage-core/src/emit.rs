use crate::assemble::assemble;
use crate::error::RenderError;
use ammonia::Builder;
use std::collections::{HashMap, HashSet};

/// Converts markdown to a raw, un-sanitized HTML fragment.
pub fn emit_html(markdown: &str) -> Result<String, RenderError> {
    assemble(markdown).render()
}

/// Converts markdown to HTML and sanitizes it against the set of tags the
/// assembler can produce.
pub fn emit_html_sanitized(markdown: &str) -> Result<String, RenderError> {
    let raw_html = emit_html(markdown)?;

    let tags: HashSet<&'static str> = [
        "a",
        "b",
        "blockquote",
        "code",
        "div",
        "h1",
        "h2",
        "h3",
        "h4",
        "h5",
        "h6",
        "i",
        "img",
        "li",
        "ol",
        "p",
        "pre",
        "ul",
    ]
    .iter()
    .copied()
    .collect();

    let mut tag_attributes = HashMap::new();
    tag_attributes.insert("a", ["href"].iter().copied().collect());
    tag_attributes.insert("img", ["alt", "src"].iter().copied().collect());

    Ok(Builder::new()
        .tags(tags)
        .generic_attributes(HashSet::new())
        .tag_attributes(tag_attributes)
        .clean(&raw_html)
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::{emit_html, emit_html_sanitized};

    #[test]
    fn raw_output_passes_html_through() {
        let html = emit_html("Hello <script>alert(1)</script>").unwrap();
        assert_eq!(html, "<div><p>Hello <script>alert(1)</script></p></div>");
    }

    #[test]
    fn sanitized_output_drops_scripts() {
        let html = emit_html_sanitized("Hello <script>alert(1)</script>").unwrap();
        assert!(!html.contains("<script>"));
        assert!(!html.contains("alert"));
        assert!(html.starts_with("<div><p>Hello"));
    }

    #[test]
    fn sanitized_output_keeps_generated_markup() {
        let html = emit_html_sanitized("# Hi\n\n- **b** [l](/x)\n\n![a](/i.png)").unwrap();
        assert!(html.contains("<h1>Hi</h1>"));
        assert!(html.contains("<li><b>b</b> <a href=\"/x\""));
        assert!(html.contains("src=\"/i.png\""));
    }

    #[test]
    fn sanitizing_does_not_hide_render_errors() {
        assert!(emit_html_sanitized("").is_err());
    }
}
