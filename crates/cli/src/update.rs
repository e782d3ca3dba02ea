use anyhow::{Context, Result};
use jdkwatch_core::JdkVersion;
use jdkwatch_manifest::ManifestDocument;
use jdkwatch_readme::ReadmeDocument;
use tokio::fs::write;
use tracing::debug;

use crate::settings::Settings;

/// New contents of every file touched by an update, computed before any write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpdate {
    pub readme: String,
    pub latest_version: String,
    pub manifest: String,
}

impl PendingUpdate {
    /// # Errors
    /// Returns error if `package.json` cannot be read or lacks the runtime enumeration.
    pub async fn prepare(
        settings: &Settings,
        readme: &ReadmeDocument,
        latest: JdkVersion,
    ) -> Result<Self> {
        let mut manifest = ManifestDocument::load(&settings.manifest_path()).await?;
        if !manifest.add_runtime(latest)? {
            debug!(%latest, "runtime already listed in package.json");
        }
        Ok(Self {
            readme: readme.render_update(latest),
            latest_version: latest.to_string(),
            manifest: manifest.render()?,
        })
    }

    /// Writes README.md, then latest_jdk.txt, then package.json.
    ///
    /// # Errors
    /// Returns error if any file cannot be written.
    pub async fn apply(&self, settings: &Settings) -> Result<()> {
        for (path, content) in [
            (settings.readme_path(), &self.readme),
            (settings.latest_version_path(), &self.latest_version),
            (settings.manifest_path(), &self.manifest),
        ] {
            write(&path, content)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            debug!(path = %path.display(), bytes = content.len(), "wrote file");
        }
        Ok(())
    }
}
