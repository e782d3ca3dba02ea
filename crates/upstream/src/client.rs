use anyhow::{Context, Result};
use async_trait::async_trait;
use jdkwatch_core::{JdkVersion, TestCase, TestReport};
use reqwest::{IntoUrl, StatusCode, Url};
use tracing::debug;

use crate::{ReportSource, baseline::parse_baseline_version, literal::from_literal};

/// Latest JDK release, published by Oracle's update service.
pub const DEFAULT_BASELINE_URL: &str = "http://javadl-esd-secure.oracle.com/update/baseline.version";

/// Test reports of the last completed language-server build.
pub const DEFAULT_REPORT_URL: &str =
    "https://ci.eclipse.org/ls/job/jdt-ls-master/lastCompletedBuild/testReport";

/// Read-only client for the baseline and test report endpoints.
pub struct UpstreamClient {
    client: reqwest::Client,
    baseline_url: Url,
    report_base: Url,
}

impl UpstreamClient {
    /// # Errors
    /// Returns error if either endpoint is not a well-formed url.
    pub fn new<B: IntoUrl, R: IntoUrl>(baseline_url: B, report_base: R) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            baseline_url: baseline_url
                .into_url()
                .context("Invalid baseline endpoint, it must be a correctly formed url")?,
            report_base: report_base
                .into_url()
                .context("Invalid test report endpoint, it must be a correctly formed url")?,
        })
    }

    /// # Errors
    /// Returns error if the endpoint is unreachable, answers with an error
    /// status, or announces no usable version.
    pub async fn fetch_latest_version(&self) -> Result<JdkVersion> {
        debug!(url = %self.baseline_url, "fetching JDK baseline");
        let body = self
            .client
            .get(self.baseline_url.clone())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .with_context(|| format!("Failed to query {}", self.baseline_url))?
            .text()
            .await
            .with_context(|| format!("Failed to read response of {}", self.baseline_url))?;
        Ok(parse_baseline_version(&body)?)
    }
}

#[async_trait]
impl ReportSource for UpstreamClient {
    fn report_url(&self, case: &TestCase) -> String {
        case.report_url(self.report_base.as_str())
    }

    /// A 404 answer means the build produced no such test; it yields a report
    /// without status.
    async fn fetch_report(&self, case: &TestCase) -> Result<TestReport> {
        let url = self.report_url(case);
        debug!(%url, "fetching test report");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to query {url}"))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(TestReport::default());
        }
        let body = response
            .error_for_status()
            .with_context(|| format!("Failed to query {url}"))?
            .text()
            .await
            .with_context(|| format!("Failed to read response of {url}"))?;
        from_literal(&body).with_context(|| format!("Malformed test report from {url}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::{Method::GET, MockServer};
    use jdkwatch_core::{TestVerdict, UpdateError};

    const REPORT_PATH: &str = "/testReport/org.eclipse.jdt.ls.core.internal.managers/MavenProjectImporterTest/testJava21Project/api/python";

    fn setup_server_and_client() -> (MockServer, UpstreamClient) {
        let server = MockServer::start();
        let client = UpstreamClient::new(server.url("/baseline.version"), server.url("/testReport"))
            .unwrap();
        (server, client)
    }

    fn maven_case() -> TestCase {
        TestCase::new("managers", "MavenProjectImporterTest", "testJava21Project")
    }

    #[test]
    fn test_new_with_invalid_url() {
        assert!(UpstreamClient::new("not a url", DEFAULT_REPORT_URL).is_err());
        assert!(UpstreamClient::new(DEFAULT_BASELINE_URL, "").is_err());
        assert!(UpstreamClient::new(DEFAULT_BASELINE_URL, DEFAULT_REPORT_URL).is_ok());
    }

    #[tokio::test]
    async fn test_fetch_latest_version() {
        let (server, client) = setup_server_and_client();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/baseline.version");
            then.status(200).body("21.0.2\n");
        });

        let version = client.fetch_latest_version().await.unwrap();

        mock.assert();
        assert_eq!(version.major(), 21);
    }

    #[tokio::test]
    async fn test_fetch_latest_version_without_digits() {
        let (server, client) = setup_server_and_client();
        server.mock(|when, then| {
            when.method(GET).path("/baseline.version");
            then.status(200).body("maintenance");
        });

        let err = client.fetch_latest_version().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<UpdateError>(),
            Some(UpdateError::LatestVersionNotFound)
        ));
    }

    #[tokio::test]
    async fn test_fetch_latest_version_server_error() {
        let (server, client) = setup_server_and_client();
        server.mock(|when, then| {
            when.method(GET).path("/baseline.version");
            then.status(503).body("21");
        });

        let err = client.fetch_latest_version().await.unwrap_err();
        assert!(err.to_string().contains("Failed to query"));
    }

    #[tokio::test]
    async fn test_fetch_report() {
        let (server, client) = setup_server_and_client();
        let mock = server.mock(|when, then| {
            when.method(GET).path(REPORT_PATH);
            then.status(200)
                .body("{'_class': 'hudson.tasks.junit.CaseResult', 'skipped': False, 'status': 'PASSED'}");
        });

        let report = client.fetch_report(&maven_case()).await.unwrap();

        mock.assert();
        assert_eq!(report.verdict(), TestVerdict::Passed);
    }

    #[tokio::test]
    async fn test_fetch_report_not_found() {
        let (server, client) = setup_server_and_client();
        server.mock(|when, then| {
            when.method(GET).path(REPORT_PATH);
            then.status(404).body("<html>Not Found</html>");
        });

        let report = client.fetch_report(&maven_case()).await.unwrap();
        assert_eq!(report.verdict(), TestVerdict::Missing);
    }

    #[tokio::test]
    async fn test_fetch_report_malformed() {
        let (server, client) = setup_server_and_client();
        server.mock(|when, then| {
            when.method(GET).path(REPORT_PATH);
            then.status(200).body("{'status': 'PASSED'");
        });

        let err = client.fetch_report(&maven_case()).await.unwrap_err();
        assert!(err.to_string().contains("Malformed test report"));
    }

    #[test]
    fn test_report_url_joins_base() {
        let client =
            UpstreamClient::new(DEFAULT_BASELINE_URL, format!("{DEFAULT_REPORT_URL}/")).unwrap();
        assert_eq!(
            client.report_url(&maven_case()),
            format!("{DEFAULT_REPORT_URL}{}", REPORT_PATH.trim_start_matches("/testReport"))
        );
    }
}
