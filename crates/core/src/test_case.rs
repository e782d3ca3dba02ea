use std::fmt::Display;

use crate::JdkVersion;

/// Java package prefix shared by every language-server test class.
const TEST_PACKAGE_ROOT: &str = "org.eclipse.jdt.ls.core.internal";

/// One upstream language-server test whose status gates an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    package: &'static str,
    class: &'static str,
    method: String,
}

impl TestCase {
    #[must_use]
    pub fn new(package: &'static str, class: &'static str, method: impl Into<String>) -> Self {
        Self {
            package,
            class,
            method: method.into(),
        }
    }

    #[must_use]
    pub const fn class(&self) -> &str {
        self.class
    }

    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Report location of this test below the `testReport` base url.
    ///
    /// A trailing slash on `report_base` is ignored.
    #[must_use]
    pub fn report_url(&self, report_base: &str) -> String {
        format!(
            "{}/{TEST_PACKAGE_ROOT}.{}/{}/{}/api/python",
            report_base.trim_end_matches('/'),
            self.package,
            self.class,
            self.method
        )
    }
}

impl Display for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}#{}", self.package, self.class, self.method)
    }
}

/// Test cases that must pass before `candidate` is recorded as supported.
///
/// The order is part of the contract: verification stops at the first
/// failure, so later cases are only fetched when earlier ones passed.
#[must_use]
pub fn verification_cases(candidate: JdkVersion) -> [TestCase; 3] {
    [
        TestCase::new(
            "managers",
            "EclipseProjectImporterTest",
            "testPreviewFeaturesDisabledByDefault",
        ),
        TestCase::new(
            "managers",
            "InvisibleProjectImporterTest",
            "testPreviewFeaturesEnabledByDefault",
        ),
        TestCase::new(
            "managers",
            "MavenProjectImporterTest",
            format!("testJava{candidate}Project"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_verification_cases_order() {
        let cases = verification_cases(JdkVersion::new(21).unwrap());
        let classes = cases.iter().map(TestCase::class).collect::<Vec<_>>();
        assert_eq!(
            classes,
            vec![
                "EclipseProjectImporterTest",
                "InvisibleProjectImporterTest",
                "MavenProjectImporterTest",
            ]
        );
        assert_eq!(cases[2].method(), "testJava21Project");
    }

    #[rstest]
    #[case("https://ci.example/testReport")]
    #[case("https://ci.example/testReport/")]
    fn test_report_url(#[case] base: &str) {
        let case = TestCase::new("managers", "MavenProjectImporterTest", "testJava21Project");
        assert_eq!(
            case.report_url(base),
            "https://ci.example/testReport/org.eclipse.jdt.ls.core.internal.managers/MavenProjectImporterTest/testJava21Project/api/python"
        );
    }

    #[test]
    fn test_display() {
        let case = TestCase::new("managers", "EclipseProjectImporterTest", "testFoo");
        assert_eq!(case.to_string(), "managers.EclipseProjectImporterTest#testFoo");
    }
}
