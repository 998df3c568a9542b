use markpage_core::RenderError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no level-1 heading found to use as the page title")]
    NoTitleFound,
    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl PageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PageError::Io {
            path: path.into(),
            source,
        }
    }
}
