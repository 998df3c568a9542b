use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::DEFAULT_BASE_PATH;
use crate::error::PageError;

/// Site layout, read from `markpage.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub static_dir: PathBuf,
    pub content_dir: PathBuf,
    pub template: PathBuf,
    pub output_dir: PathBuf,
    pub base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            content_dir: PathBuf::from("content"),
            template: PathBuf::from("template.html"),
            output_dir: PathBuf::from("docs"),
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }
}

impl SiteConfig {
    pub const FILE_NAME: &'static str = "markpage.toml";

    /// Load config from a TOML file, or return defaults if it does not exist.
    ///
    /// Relative paths in a loaded file are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, PageError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(err) => return Err(PageError::io(path, err)),
        };
        let config: Self = toml::from_str(&content).map_err(|source| PageError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(match path.parent() {
            Some(base) => config.relative_to(base),
            None => config,
        })
    }

    fn relative_to(self, base: &Path) -> Self {
        let resolve = |path: PathBuf| {
            if path.is_absolute() {
                path
            } else {
                base.join(path)
            }
        };
        Self {
            static_dir: resolve(self.static_dir),
            content_dir: resolve(self.content_dir),
            template: resolve(self.template),
            output_dir: resolve(self.output_dir),
            base_path: self.base_path,
        }
    }
}
