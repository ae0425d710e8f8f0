//! Metadata records describing a conversion.
//!
//! The renderer never persists anything; a caller that wants history keeps
//! one of these per conversion (never the HTML body, which can run to
//! megabytes of base64).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::media::MediaKind;
use crate::orientation::OrientationMode;

/// A conversion record a caller may persist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndcardRecord {
    pub id: Uuid,
    pub original_filename: String,
    /// "image" or "video"
    pub file_type: String,
    /// Upload size in bytes
    pub file_size: u64,
    pub portrait_created: bool,
    pub landscape_created: bool,
    pub created_at: DateTime<Utc>,
}

impl EndcardRecord {
    /// Build a record for a conversion that just happened.
    ///
    /// The creation flags follow the mode: single-orientation modes set only
    /// their own flag, `both` and `rotatable` set both.
    pub fn for_conversion(
        original_filename: &str,
        kind: MediaKind,
        file_size: u64,
        mode: OrientationMode,
    ) -> Self {
        let (portrait_created, landscape_created) = match mode {
            OrientationMode::Portrait => (true, false),
            OrientationMode::Landscape => (false, true),
            OrientationMode::Both | OrientationMode::Rotatable => (true, true),
        };
        Self {
            id: Uuid::new_v4(),
            original_filename: original_filename.to_string(),
            file_type: kind.as_str().to_string(),
            file_size,
            portrait_created,
            landscape_created,
            created_at: Utc::now(),
        }
    }

    /// Serialize to the JSON shape handed back to API callers
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
