use std::fmt::Display;

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::JdkVersion;

/// Result of a successful run, printed as the final line or JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Outcome {
    /// Upstream has nothing newer than the recorded version
    UpToDate { version: JdkVersion },
    Updated { from: JdkVersion, to: JdkVersion },
    /// Dry run: the update was computed but nothing was written
    WouldUpdate { from: JdkVersion, to: JdkVersion },
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UpToDate { .. } => {
                write!(f, "No new JDK version detected, nothing to do")
            }
            Self::Updated { from, to } => write!(
                f,
                "Updated supported JDK version {} -> {}",
                from.to_string().yellow(),
                to.to_string().green().bold()
            ),
            Self::WouldUpdate { from, to } => write!(
                f,
                "Dry run, supported JDK version would change {} -> {}",
                from.to_string().yellow(),
                to.to_string().green().bold()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn version(major: u32) -> JdkVersion {
        JdkVersion::new(major).unwrap()
    }

    #[rstest]
    #[case(Outcome::UpToDate { version: version(17) }, r#"{"status":"upToDate","version":17}"#)]
    #[case(
        Outcome::Updated { from: version(17), to: version(21) },
        r#"{"status":"updated","from":17,"to":21}"#
    )]
    #[case(
        Outcome::WouldUpdate { from: version(17), to: version(21) },
        r#"{"status":"wouldUpdate","from":17,"to":21}"#
    )]
    fn test_outcome_json(#[case] outcome: Outcome, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&outcome).unwrap(), expected);
    }

    #[rstest]
    #[case(Outcome::UpToDate { version: version(17) }, "nothing to do")]
    #[case(Outcome::Updated { from: version(17), to: version(21) }, "21")]
    #[case(Outcome::WouldUpdate { from: version(17), to: version(21) }, "Dry run")]
    fn test_outcome_display(#[case] outcome: Outcome, #[case] expected: &str) {
        assert!(outcome.to_string().contains(expected));
    }
}
