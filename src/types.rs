//! Strongly typed configuration values shared by the library and the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target column count for filled lines.
///
/// Always positive. A width of zero is rejected when parsing or deserializing,
/// so code holding a `WrapWidth` never has to guard against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(try_from = "usize", into = "usize")]
pub struct WrapWidth(usize);

impl WrapWidth {
    /// Default column used by most editors for their right margin
    pub const DEFAULT: usize = 80;

    /// Create a new wrap width, returning `None` for zero
    pub fn new(columns: usize) -> Option<Self> {
        if columns == 0 { None } else { Some(Self(columns)) }
    }

    /// Number of columns
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for WrapWidth {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for WrapWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for WrapWidth {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| "wrap width must be a positive integer".to_string())
    }
}

impl From<WrapWidth> for usize {
    fn from(width: WrapWidth) -> Self {
        width.0
    }
}

impl FromStr for WrapWidth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let columns: usize = s
            .trim()
            .parse()
            .map_err(|e| format!("invalid wrap width '{s}': {e}"))?;
        Self::try_from(columns)
    }
}
