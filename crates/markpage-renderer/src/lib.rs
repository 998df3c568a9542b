mod config;
mod error;
pub mod site;
mod template;

pub use config::SiteConfig;
pub use error::PageError;
pub use template::{CONTENT_PLACEHOLDER, TITLE_PLACEHOLDER, Template};

use markpage_core::{emit_html, emit_html_sanitized};

pub const DEFAULT_BASE_PATH: &str = "/";

/// Turns markdown documents into complete HTML pages.
#[derive(Debug, Clone)]
pub struct Renderer {
    template: Template,
    base_path: String,
    sanitized: bool,
}

impl Renderer {
    pub fn new(template: Template) -> Self {
        Self {
            template,
            base_path: DEFAULT_BASE_PATH.to_string(),
            sanitized: false,
        }
    }

    /// Prefix substituted for the leading `/` of root-relative `href` and `src` URLs.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_sanitized(mut self, sanitized: bool) -> Self {
        self.sanitized = sanitized;
        self
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Renders only the markdown body, without the template.
    pub fn render_fragment(&self, markdown: &str) -> Result<String, PageError> {
        let html = if self.sanitized {
            emit_html_sanitized(markdown)?
        } else {
            emit_html(markdown)?
        };
        Ok(html)
    }

    /// Renders a full page: title and body substituted into the template, then
    /// root-relative URLs rebased.
    pub fn render_page(&self, markdown: &str) -> Result<String, PageError> {
        let title = extract_title(markdown)?;
        let content = self.render_fragment(markdown)?;
        let page = self.template.fill(&title, &content);
        Ok(rewrite_base_path(&page, &self.base_path))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Template::default())
    }
}

/// Returns the text of the first `# ` heading line.
pub fn extract_title(markdown: &str) -> Result<String, PageError> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(PageError::NoTitleFound)
}

pub fn rewrite_base_path(html: &str, base_path: &str) -> String {
    if base_path == DEFAULT_BASE_PATH {
        return html.to_string();
    }
    html.replace("href=\"/", &format!("href=\"{}", base_path))
        .replace("src=\"/", &format!("src=\"{}", base_path))
}
