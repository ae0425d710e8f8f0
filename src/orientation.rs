//! Orientation modes an endcard can be rendered in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How the endcard should be framed.
///
/// Chosen once per render call; there are no transitions between modes.
/// `Both` is the legacy mode predating `Rotatable`: it renders portrait and
/// landscape documents from a single asset rather than bundling two framings
/// into one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrientationMode {
    /// Single 9:16 document
    Portrait,
    /// Single 16:9 document
    Landscape,
    /// Portrait and landscape documents from one asset (legacy)
    Both,
    /// Two framings bundled into one document with a client-side toggle
    Rotatable,
}

impl OrientationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrientationMode::Portrait => "portrait",
            OrientationMode::Landscape => "landscape",
            OrientationMode::Both => "both",
            OrientationMode::Rotatable => "rotatable",
        }
    }
}

impl fmt::Display for OrientationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrientationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "portrait" => Ok(OrientationMode::Portrait),
            "landscape" => Ok(OrientationMode::Landscape),
            "both" => Ok(OrientationMode::Both),
            "rotatable" => Ok(OrientationMode::Rotatable),
            other => Err(Error::InvalidMode(other.to_string())),
        }
    }
}
