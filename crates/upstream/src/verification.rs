use anyhow::Result;
use async_trait::async_trait;
use jdkwatch_core::{TestCase, TestReport, UpdateError};
use tracing::info;

/// Where test-case reports come from.
///
/// Production code uses [`crate::UpstreamClient`]; tests plug in canned reports.
#[async_trait]
pub trait ReportSource: Send + Sync {
    fn report_url(&self, case: &TestCase) -> String;

    /// # Errors
    /// Returns error if the report cannot be fetched or parsed.
    async fn fetch_report(&self, case: &TestCase) -> Result<TestReport>;
}

/// Checks `cases` one after another and stops at the first one not passing.
///
/// Cases after a failing one are never fetched.
///
/// # Errors
/// Returns [`UpdateError::VerificationFailed`] for the first non-passing case,
/// or the error of a report that could not be fetched.
pub async fn verify_in_order(source: &dyn ReportSource, cases: &[TestCase]) -> Result<()> {
    for (position, case) in cases.iter().enumerate() {
        let url = source.report_url(case);
        let verdict = source.fetch_report(case).await?.verdict();
        info!(test = %case, %url, %verdict, "checked upstream test");
        if !verdict.is_passed() {
            return Err(UpdateError::VerificationFailed {
                index: position + 1,
                url,
                verdict,
            }
            .into());
        }
    }
    Ok(())
}
