use jdkwatch_core::{JdkVersion, UpdateError};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static SUPPORTED_RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(Supports code from Java 1\.8 to Java )(\d+)").expect("hardcoded regex must compile")
});

// Runtime names and sample JDK paths quoted in the settings documentation.
static VERSIONED_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(JavaSE-|path/to/jdk-)(\d+)\b").expect("hardcoded regex must compile")
});

/// Version advertised by the first supported-range sentence of the document.
///
/// # Errors
/// Returns [`UpdateError::CurrentVersionNotFound`] if the sentence is absent and
/// [`UpdateError::InvalidVersion`] if its number is not a positive integer.
pub fn extract_current_version(content: &str) -> Result<JdkVersion, UpdateError> {
    let captures = SUPPORTED_RANGE_PATTERN
        .captures(content)
        .ok_or(UpdateError::CurrentVersionNotFound)?;
    captures[2].parse()
}

/// Moves the version markers of `content` from `current` to `latest`.
///
/// The supported-range sentence is rewritten whatever number it holds;
/// `JavaSE-N` and `path/to/jdk-N` are rewritten only when `N` is `current`,
/// so older runtimes listed beside it are left alone.
#[must_use]
pub fn update_version_markers(content: &str, current: JdkVersion, latest: JdkVersion) -> String {
    let content = SUPPORTED_RANGE_PATTERN.replace_all(content, format!("${{1}}{latest}"));
    let current = current.to_string();
    VERSIONED_NAME_PATTERN
        .replace_all(&content, |caps: &Captures| {
            if caps[2] == current {
                format!("{}{latest}", &caps[1])
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}
