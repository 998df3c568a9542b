use crate::element::Element;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A typed fragment of inline text.
///
/// `target` is set for `Link` and `Image` spans (possibly to an empty string) and is
/// `None` for every other kind.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Span {
    pub text: String,
    pub kind: SpanKind,
    pub target: Option<String>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    /// Builds a span of a non-linking kind.
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            target: None,
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Link,
            target: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: SpanKind::Image,
            target: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }

    pub fn into_element(self) -> Element {
        match self.kind {
            SpanKind::Plain => Element::text(self.text),
            SpanKind::Bold => Element::leaf("b", self.text),
            SpanKind::Italic => Element::leaf("i", self.text),
            SpanKind::Code => Element::leaf("code", self.text),
            SpanKind::Link => {
                Element::leaf("a", self.text).with_attr("href", self.target.unwrap_or_default())
            }
            SpanKind::Image => {
                let alt = if self.text.is_empty() {
                    "Image".to_string()
                } else {
                    self.text
                };
                // Single space keeps the leaf renderable; `img` is emitted as a void tag.
                Element::leaf("img", " ")
                    .with_attr("src", self.target.unwrap_or_default())
                    .with_attr("alt", alt)
            }
        }
    }
}
