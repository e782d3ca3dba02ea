pub mod error;
pub mod outcome;
pub mod test_case;
pub mod test_report;
pub mod version;

pub use error::UpdateError;
pub use outcome::Outcome;
pub use test_case::{TestCase, verification_cases};
pub use test_report::{TestReport, TestVerdict};
pub use version::JdkVersion;

/// Prefix of every runtime identifier listed in the runtime enumeration.
pub const RUNTIME_TAG: &str = "JavaSE-";

/// Identifier of the configuration block holding the runtime enumeration.
pub const JDKS_CONFIGURATION_ID: &str = "java-jdks";

pub const README_FILE: &str = "README.md";
pub const MANIFEST_FILE: &str = "package.json";
/// Consumed by the pull-request workflow after a successful update.
pub const LATEST_VERSION_FILE: &str = "latest_jdk.txt";

/// Runtime identifier recorded for `version`, e.g. `JavaSE-21`.
#[must_use]
pub fn runtime_name(version: JdkVersion) -> String {
    format!("{RUNTIME_TAG}{version}")
}
