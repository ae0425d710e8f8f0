//! Upload intake: the contract side of the handler that sits in front of
//! the renderer.
//!
//! The intake layer validates a filename and size against the allowed set,
//! stages bytes under a unique temp name, and owns the temp file's
//! lifecycle. The renderer never deletes anything; when a [`TempUpload`]
//! drops, its backing file goes with it.

use std::path::{Path, PathBuf};

use log::{debug, error};
use sanitize_filename::sanitize;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::error::{Error, Result};

/// Extensions the intake accepts. Everything else is rejected before the
/// renderer ever sees the file.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "mp4"];

/// Validation policy applied to every upload
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    /// Per-file byte ceiling
    pub max_bytes: u64,
}

impl UploadPolicy {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.max_content_length)
    }

    /// Whether the filename carries an allowed extension.
    ///
    /// A name with no dot at all is rejected; extension matching is
    /// case-insensitive.
    pub fn is_allowed_filename(&self, filename: &str) -> bool {
        match filename.rsplit_once('.') {
            Some((_, ext)) => ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
            None => false,
        }
    }

    /// Validate a filename and byte count against the policy
    pub fn check(&self, filename: &str, size: u64) -> Result<()> {
        if !self.is_allowed_filename(filename) {
            return Err(Error::UnsupportedExtension(ALLOWED_EXTENSIONS.join(", ")));
        }
        if size > self.max_bytes {
            return Err(Error::FileTooLarge {
                size,
                limit: self.max_bytes,
            });
        }
        Ok(())
    }
}

/// An upload staged in the temp directory, deleted on drop.
///
/// Files are named `<uuid>_<sanitized original name>` so concurrent uploads
/// of the same filename never collide.
#[derive(Debug)]
pub struct TempUpload {
    path: PathBuf,
    original_filename: String,
    size: u64,
}

impl TempUpload {
    /// Validate `bytes` against `policy` and stage them under `upload_dir`
    pub fn stage(
        upload_dir: &Path,
        policy: &UploadPolicy,
        original_filename: &str,
        bytes: &[u8],
    ) -> Result<Self> {
        policy.check(original_filename, bytes.len() as u64)?;

        let safe_name = sanitize(original_filename);
        let path = upload_dir.join(format!("{}_{}", Uuid::new_v4(), safe_name));
        std::fs::write(&path, bytes)?;
        debug!("file saved at {}", path.display());

        Ok(Self {
            path,
            original_filename: original_filename.to_string(),
            size: bytes.len() as u64,
        })
    }

    /// Path to the staged bytes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Filename as uploaded, before sanitizing
    pub fn original_filename(&self) -> &str {
        &self.original_filename
    }

    /// Staged size in bytes
    pub fn size(&self) -> u64 {
        self.size
    }
}

impl Drop for TempUpload {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            error!("error removing temporary file {}: {}", self.path.display(), e);
        }
    }
}
