use jdkwatch_core::{JdkVersion, UpdateError};
use regex::Regex;
use std::sync::LazyLock;

static MAJOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("hardcoded regex must compile"));

/// Major version announced by a baseline body such as `21.0.2`.
///
/// The first run of digits is the major version.
///
/// # Errors
/// Returns [`UpdateError::LatestVersionNotFound`] if the body holds no digit and
/// [`UpdateError::InvalidVersion`] if the digits are not a positive integer.
pub fn parse_baseline_version(body: &str) -> Result<JdkVersion, UpdateError> {
    MAJOR_PATTERN
        .find(body)
        .ok_or(UpdateError::LatestVersionNotFound)?
        .as_str()
        .parse()
}
