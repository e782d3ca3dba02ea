use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::UpdateError;

/// Major JDK release number, e.g. `21`.
///
/// Always strictly positive: `0` and anything that does not parse as an
/// unsigned integer are rejected with [`UpdateError::InvalidVersion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct JdkVersion(u32);

impl JdkVersion {
    /// # Errors
    /// Returns error if `major` is zero.
    pub fn new(major: u32) -> Result<Self, UpdateError> {
        if major == 0 {
            return Err(UpdateError::InvalidVersion(major.to_string()));
        }
        Ok(Self(major))
    }

    #[must_use]
    pub const fn major(&self) -> u32 {
        self.0
    }
}

impl FromStr for JdkVersion {
    type Err = UpdateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let major = s
            .trim()
            .parse::<u32>()
            .map_err(|_| UpdateError::InvalidVersion(s.to_string()))?;
        Self::new(major).map_err(|_| UpdateError::InvalidVersion(s.to_string()))
    }
}

impl TryFrom<u32> for JdkVersion {
    type Error = UpdateError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JdkVersion> for u32 {
    fn from(value: JdkVersion) -> Self {
        value.0
    }
}

impl Display for JdkVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
