use thiserror::Error;

use crate::TestVerdict;

/// Failures the update run detects on purpose.
///
/// Transport and file system failures are not listed here; they travel as
/// `anyhow::Error` with context attached at the call site.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("invalid JDK version: {0:?}")]
    InvalidVersion(String),

    #[error("Failed to retrieve latest JDK version")]
    LatestVersionNotFound,

    #[error("Failed to retrieve current JDK version")]
    CurrentVersionNotFound,

    #[error("Test #{index} {verdict} ({url})")]
    VerificationFailed {
        /// 1-based position in the verification order
        index: usize,
        url: String,
        verdict: TestVerdict,
    },

    #[error("configuration block {0:?} not found in contributes.configuration")]
    ConfigurationBlockNotFound(String),

    #[error("runtime name enumeration not found in configuration block {0:?}")]
    RuntimeEnumNotFound(String),
}
