use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Status token the report endpoint uses for a passing test.
pub const PASSED_STATUS: &str = "PASSED";

/// Subset of a test-case report; every other field is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestReport {
    #[serde(default)]
    pub status: Option<String>,
}

impl TestReport {
    #[must_use]
    pub fn verdict(&self) -> TestVerdict {
        match self.status.as_deref() {
            Some(PASSED_STATUS) => TestVerdict::Passed,
            Some(status) => TestVerdict::Failed {
                status: status.to_string(),
            },
            None => TestVerdict::Missing,
        }
    }
}

/// Pass/fail evaluation of one fetched report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "camelCase")]
pub enum TestVerdict {
    Passed,
    /// Report carries a status other than `PASSED`
    Failed { status: String },
    /// No status field, or no report at all
    Missing,
}

impl TestVerdict {
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

impl Display for TestVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passed => write!(f, "passed"),
            Self::Failed { .. } => write!(f, "failed"),
            Self::Missing => write!(f, "not found"),
        }
    }
}
