use std::fs;
use std::path::Path;

use crate::error::PageError;

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

const DEFAULT_TEMPLATE: &str = include_str!("../assets/template.html");

/// Page template with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, PageError> {
        let source = fs::read_to_string(path).map_err(|err| PageError::io(path, err))?;
        Ok(Self::new(source))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Substitutes every occurrence of both placeholders.
    pub fn fill(&self, title: &str, content: &str) -> String {
        self.source
            .replace(TITLE_PLACEHOLDER, title)
            .replace(CONTENT_PLACEHOLDER, content)
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}
