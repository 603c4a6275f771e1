//! Domain model enums

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a release update
///
/// Stored as text in the database; any value outside this set is rejected
/// at the request boundary before it can reach a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdateStatus {
    InProgress,
    Shipped,
    Deprecated,
}

impl Default for UpdateStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

impl UpdateStatus {
    /// Wire/database representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "IN_PROGRESS",
            Self::Shipped => "SHIPPED",
            Self::Deprecated => "DEPRECATED",
        }
    }
}

impl fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpdateStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IN_PROGRESS" => Ok(Self::InProgress),
            "SHIPPED" => Ok(Self::Shipped),
            "DEPRECATED" => Ok(Self::Deprecated),
            other => Err(format!("Unknown update status: {}", other)),
        }
    }
}
