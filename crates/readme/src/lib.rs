mod markers;

use std::path::Path;

use anyhow::{Context, Result};
use jdkwatch_core::JdkVersion;
use tokio::fs::read_to_string;
use tracing::debug;

pub use markers::{extract_current_version, update_version_markers};

/// README.md contents together with the version it currently advertises.
#[derive(Debug, Clone)]
pub struct ReadmeDocument {
    content: String,
    current: JdkVersion,
}

impl ReadmeDocument {
    /// # Errors
    /// Returns error if the file cannot be read or carries no version marker.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let readme = Self::parse(content)?;
        debug!(path = %path.display(), current = %readme.current, "read version marker");
        Ok(readme)
    }

    /// # Errors
    /// Returns error if `content` carries no version marker.
    pub fn parse(content: String) -> Result<Self> {
        let current = extract_current_version(&content)?;
        Ok(Self { content, current })
    }

    #[must_use]
    pub const fn current(&self) -> JdkVersion {
        self.current
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Document text with every marker of the current version moved to `latest`.
    #[must_use]
    pub fn render_update(&self, latest: JdkVersion) -> String {
        update_version_markers(&self.content, self.current, latest)
    }
}
