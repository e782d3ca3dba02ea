use std::path::PathBuf;

use jdkwatch_core::{LATEST_VERSION_FILE, MANIFEST_FILE, README_FILE};

/// Everything a run needs to know, resolved once from the command line.
#[derive(Debug, Clone)]
pub struct Settings {
    pub dir: PathBuf,
    pub baseline_url: String,
    pub report_url: String,
    pub dry_run: bool,
}

impl Settings {
    #[must_use]
    pub fn readme_path(&self) -> PathBuf {
        self.dir.join(README_FILE)
    }

    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.dir.join(MANIFEST_FILE)
    }

    #[must_use]
    pub fn latest_version_path(&self) -> PathBuf {
        self.dir.join(LATEST_VERSION_FILE)
    }
}
