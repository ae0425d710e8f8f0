//! Media assets and the extension-based MIME heuristic.
//!
//! Classification is deliberately naive: the kind and MIME type come from the
//! lower-cased file extension alone, never from magic bytes. `.mp4` is the
//! only video extension; `.png` keeps its type; every other allowed
//! extension is treated as JPEG. Callers are expected to have already
//! rejected extensions outside the allowed set.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::debug;

use crate::error::Result;

/// Whether an asset renders as an `<img>` or a `<video>` element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Label used in persisted metadata records ("image" or "video")
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// Lower-cased extension of a filename, without the dot
fn extension_of(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

/// Map a filename to a MIME type using only its extension.
///
/// The mapping is total: anything that is not `.mp4` or `.png` falls back to
/// `image/jpeg`.
pub fn mime_type_for(filename: &str) -> &'static str {
    match extension_of(filename).as_str() {
        "mp4" => "video/mp4",
        "png" => "image/png",
        _ => "image/jpeg",
    }
}

/// Map a filename to a media kind. Only `.mp4` counts as video.
pub fn kind_for(filename: &str) -> MediaKind {
    if extension_of(filename) == "mp4" {
        MediaKind::Video
    } else {
        MediaKind::Image
    }
}

/// Filename with its final extension removed
pub fn base_filename(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((base, _ext)) if !base.is_empty() => base,
        _ => filename,
    }
}

/// An immutable media value read from storage.
///
/// Constructed per call from a temporary file plus the original filename the
/// uploader supplied; the bytes are dropped once the caller is done
/// rendering. The asset does not own or delete the backing file.
#[derive(Debug, Clone)]
pub struct MediaAsset {
    /// Raw file contents
    pub bytes: Vec<u8>,
    /// Original filename as uploaded (drives MIME/kind inference)
    pub filename: String,
    /// Inferred kind
    pub kind: MediaKind,
    /// Inferred MIME type
    pub mime: &'static str,
}

impl MediaAsset {
    /// Read an asset from `path`, classifying it by `original_filename`.
    ///
    /// The path and the original filename are usually different: uploads are
    /// saved under unique temp names while classification must follow the
    /// name the user gave the file.
    pub fn from_path(path: impl AsRef<Path>, original_filename: &str) -> Result<Self> {
        let path = path.as_ref();
        debug!("reading media asset from {}", path.display());
        let bytes = std::fs::read(path)?;
        Ok(Self::from_bytes(bytes, original_filename))
    }

    /// Build an asset from in-memory bytes
    pub fn from_bytes(bytes: Vec<u8>, original_filename: &str) -> Self {
        Self {
            bytes,
            filename: original_filename.to_string(),
            kind: kind_for(original_filename),
            mime: mime_type_for(original_filename),
        }
    }

    /// Original filename without its extension
    pub fn base_filename(&self) -> &str {
        base_filename(&self.filename)
    }

    /// Whether the asset renders as a `<video>` element
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }

    /// Encode the asset as a `data:<mime>;base64,<payload>` URL.
    ///
    /// Deterministic: the same bytes always produce the same URL.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_mapping_is_total_and_case_insensitive() {
        assert_eq!(mime_type_for("clip.mp4"), "video/mp4");
        assert_eq!(mime_type_for("clip.MP4"), "video/mp4");
        assert_eq!(mime_type_for("photo.png"), "image/png");
        assert_eq!(mime_type_for("photo.PNG"), "image/png");
        assert_eq!(mime_type_for("photo.jpg"), "image/jpeg");
        assert_eq!(mime_type_for("photo.jpeg"), "image/jpeg");
        // Total mapping: unknown or missing extensions still resolve
        assert_eq!(mime_type_for("photo.webp"), "image/jpeg");
        assert_eq!(mime_type_for("no_extension"), "image/jpeg");
    }

    #[test]
    fn only_mp4_is_video() {
        assert_eq!(kind_for("a.mp4"), MediaKind::Video);
        assert_eq!(kind_for("a.png"), MediaKind::Image);
        assert_eq!(kind_for("a.jpg"), MediaKind::Image);
    }

    #[test]
    fn base_filename_strips_final_extension_only() {
        assert_eq!(base_filename("photo.png"), "photo");
        assert_eq!(base_filename("archive.tar.gz"), "archive.tar");
        assert_eq!(base_filename("no_extension"), "no_extension");
        assert_eq!(base_filename(".hidden"), ".hidden");
    }

    #[test]
    fn data_url_round_trips_bytes() {
        use base64::engine::general_purpose::STANDARD;
        use base64::Engine as _;

        let bytes = vec![0u8, 1, 2, 254, 255, 128];
        let asset = MediaAsset::from_bytes(bytes.clone(), "pixel.png");
        let url = asset.data_url();
        let payload = url
            .strip_prefix("data:image/png;base64,")
            .expect("data URL prefix");
        assert_eq!(STANDARD.decode(payload).unwrap(), bytes);
    }

    #[test]
    fn data_url_is_deterministic() {
        let asset = MediaAsset::from_bytes(b"hello".to_vec(), "a.jpg");
        assert_eq!(asset.data_url(), asset.data_url());
    }
}
