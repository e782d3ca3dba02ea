use anyhow::Result;
use jdkwatch_core::{Outcome, UpdateError, verification_cases};
use jdkwatch_readme::ReadmeDocument;
use jdkwatch_upstream::{UpstreamClient, verify_in_order};
use tracing::info;

use crate::{options::FormatOptions, settings::Settings, update::PendingUpdate};

/// Discover, compare, verify, then update.
///
/// Nothing is written unless every upstream test passed, and the new file
/// contents are all computed before the first write.
///
/// # Errors
/// Returns error if a version cannot be determined, an upstream test does not
/// pass, or any file or network operation fails.
pub async fn run(settings: &Settings, format: FormatOptions) -> Result<Outcome> {
    let client = UpstreamClient::new(settings.baseline_url.as_str(), settings.report_url.as_str())?;

    let latest = client.fetch_latest_version().await?;
    format.progress(&format!("Latest JDK version: {latest}"));

    let readme = ReadmeDocument::load(&settings.readme_path()).await?;
    let current = readme.current();
    format.progress(&format!("Current supported JDK version: {current}"));

    if latest == current {
        return Ok(Outcome::UpToDate { version: current });
    }
    format.progress(&format!("New JDK version detected: {latest}"));

    let cases = verification_cases(latest);
    verify_in_order(&client, &cases).await.inspect_err(|err| {
        if let Some(UpdateError::VerificationFailed { .. }) = err.downcast_ref::<UpdateError>() {
            format.warn("Some tests failed, aborting update");
        }
    })?;
    format.progress("All tests passed");

    let update = PendingUpdate::prepare(settings, &readme, latest).await?;
    if settings.dry_run {
        info!(%current, %latest, "dry run, skipping writes");
        return Ok(Outcome::WouldUpdate {
            from: current,
            to: latest,
        });
    }
    update.apply(settings).await?;
    info!(%current, %latest, "recorded new supported JDK");
    Ok(Outcome::Updated {
        from: current,
        to: latest,
    })
}
