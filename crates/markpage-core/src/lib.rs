mod assemble;
mod block;
mod element;
mod emit;
mod error;
mod inline;
mod span;

pub use assemble::assemble;
pub use block::{BlockKind, classify, heading_level, split_blocks};
pub use element::{Attributes, Container, Element, Leaf};
pub use emit::{emit_html, emit_html_sanitized};
pub use error::RenderError;
pub use inline::{
    split_bold, split_code, split_delimiter, split_images, split_italic, split_links, tokenize,
};
pub use span::{Span, SpanKind};

/// Converts a markdown document into its element tree.
pub fn convert(markdown: &str) -> Element {
    assemble(markdown)
}
