use thiserror::Error;

/// Structural violations found while rendering an element tree.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RenderError {
    #[error("leaf element <{}> has an empty value", .tag.as_deref().unwrap_or("text"))]
    EmptyValue { tag: Option<String> },
    #[error("container element is missing a tag")]
    MissingTag,
    #[error("container element <{tag}> has no children")]
    EmptyChildren { tag: String },
}
