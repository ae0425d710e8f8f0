//! The endcard renderer.
//!
//! One function per orientation mode, plus a path-level `render` entry point
//! that dispatches on [`OrientationMode`]. Rendering is pure and synchronous:
//! the only side effect is reading asset bytes, and identical inputs always
//! produce byte-identical HTML. Temp-file cleanup and record persistence
//! belong to the caller.

use std::collections::BTreeMap;
use std::path::Path;

use log::debug;
use sanitize_filename::sanitize;

use crate::error::{Error, Result};
use crate::media::MediaAsset;
use crate::orientation::OrientationMode;
use crate::template;

/// A rendered endcard document for one orientation mode
#[derive(Debug, Clone)]
pub struct EndcardDocument {
    /// Mode the document was rendered in
    pub orientation: OrientationMode,
    /// Original filename without extension, used for download naming
    pub base_filename: String,
    /// The rendered HTML
    pub html: String,
}

impl EndcardDocument {
    /// Suggested filename when offering the document as a download:
    /// `<base>_endcard.html` for the combined rotatable document,
    /// `<base>_<orientation>.html` otherwise.
    pub fn download_name(&self) -> String {
        let base = sanitize(&self.base_filename);
        match self.orientation {
            OrientationMode::Rotatable => format!("{}_endcard.html", base),
            mode => format!("{}_{}.html", base, mode),
        }
    }
}

/// The three documents produced by rotatable mode
#[derive(Debug, Clone)]
pub struct RotatableSet {
    /// Portrait-framed document built from the portrait source
    pub portrait: EndcardDocument,
    /// Landscape-framed document built from the landscape source
    pub landscape: EndcardDocument,
    /// Combined document embedding both data URLs with a client toggle
    pub rotatable: EndcardDocument,
}

impl RotatableSet {
    /// Orientation→HTML view for callers that want the mapping shape
    pub fn to_map(&self) -> BTreeMap<&'static str, &str> {
        BTreeMap::from([
            ("portrait", self.portrait.html.as_str()),
            ("landscape", self.landscape.html.as_str()),
            ("rotatable", self.rotatable.html.as_str()),
        ])
    }
}

/// Output of the dispatching [`render`] entry point
#[derive(Debug, Clone)]
pub enum RenderOutput {
    /// `portrait` or `landscape` mode
    Single(EndcardDocument),
    /// Legacy `both` mode: portrait then landscape from one asset
    Pair {
        portrait: EndcardDocument,
        landscape: EndcardDocument,
    },
    /// `rotatable` mode
    Rotatable(RotatableSet),
}

impl RenderOutput {
    /// All documents in the output, in a stable order
    pub fn documents(&self) -> Vec<&EndcardDocument> {
        match self {
            RenderOutput::Single(doc) => vec![doc],
            RenderOutput::Pair { portrait, landscape } => vec![portrait, landscape],
            RenderOutput::Rotatable(set) => vec![&set.portrait, &set.landscape, &set.rotatable],
        }
    }
}

/// Render a portrait (9:16) document from one asset
pub fn render_portrait(asset: &MediaAsset) -> EndcardDocument {
    EndcardDocument {
        orientation: OrientationMode::Portrait,
        base_filename: asset.base_filename().to_string(),
        html: template::render_single(false, asset.base_filename(), asset.is_video(), &asset.data_url()),
    }
}

/// Render a landscape (16:9) document from one asset
pub fn render_landscape(asset: &MediaAsset) -> EndcardDocument {
    EndcardDocument {
        orientation: OrientationMode::Landscape,
        base_filename: asset.base_filename().to_string(),
        html: template::render_single(true, asset.base_filename(), asset.is_video(), &asset.data_url()),
    }
}

/// Legacy `both` mode: portrait then landscape from a single asset
pub fn render_both(asset: &MediaAsset) -> (EndcardDocument, EndcardDocument) {
    (render_portrait(asset), render_landscape(asset))
}

/// Rotatable mode: two independently framed sources of the same content.
///
/// Each source is encoded into its own data URL; the combined document
/// embeds both. The sources share the original filename, so they share the
/// kind/MIME inference.
pub fn render_rotatable(portrait_source: &MediaAsset, landscape_source: &MediaAsset) -> RotatableSet {
    let portrait = render_portrait(portrait_source);
    let landscape = render_landscape(landscape_source);
    let rotatable = EndcardDocument {
        orientation: OrientationMode::Rotatable,
        base_filename: portrait_source.base_filename().to_string(),
        html: template::render_rotatable(
            portrait_source.base_filename(),
            portrait_source.is_video(),
            &portrait_source.data_url(),
            &landscape_source.data_url(),
        ),
    };
    RotatableSet { portrait, landscape, rotatable }
}

/// Path-level entry point: read the asset(s) and render for `mode`.
///
/// `primary` backs every mode; `landscape_source` is required by
/// `rotatable` (the landscape-framed version of the same content) and
/// ignored by the other modes. `original_filename` drives MIME/kind
/// inference and download naming, independent of the temp path names.
pub fn render(
    primary: &Path,
    landscape_source: Option<&Path>,
    original_filename: &str,
    mode: OrientationMode,
) -> Result<RenderOutput> {
    debug!("rendering {} endcard(s) for {}", mode, original_filename);
    match mode {
        OrientationMode::Portrait => {
            let asset = MediaAsset::from_path(primary, original_filename)?;
            Ok(RenderOutput::Single(render_portrait(&asset)))
        }
        OrientationMode::Landscape => {
            let asset = MediaAsset::from_path(primary, original_filename)?;
            Ok(RenderOutput::Single(render_landscape(&asset)))
        }
        OrientationMode::Both => {
            let asset = MediaAsset::from_path(primary, original_filename)?;
            let (portrait, landscape) = render_both(&asset);
            Ok(RenderOutput::Pair { portrait, landscape })
        }
        OrientationMode::Rotatable => {
            let landscape_path = landscape_source.ok_or_else(|| {
                Error::MissingAsset(
                    "rotatable mode requires both a portrait and a landscape source".to_string(),
                )
            })?;
            let portrait = MediaAsset::from_path(primary, original_filename)?;
            let landscape = MediaAsset::from_path(landscape_path, original_filename)?;
            Ok(RenderOutput::Rotatable(render_rotatable(&portrait, &landscape)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_asset() -> MediaAsset {
        MediaAsset::from_bytes(vec![1, 2, 3, 4], "photo.png")
    }

    #[test]
    fn portrait_and_landscape_share_the_data_url() {
        let asset = image_asset();
        let (portrait, landscape) = render_both(&asset);
        let url = asset.data_url();
        assert!(portrait.html.contains(&url));
        assert!(landscape.html.contains(&url));
        assert_eq!(portrait.orientation, OrientationMode::Portrait);
        assert_eq!(landscape.orientation, OrientationMode::Landscape);
    }

    #[test]
    fn rendering_is_deterministic() {
        let asset = image_asset();
        assert_eq!(render_portrait(&asset).html, render_portrait(&asset).html);
    }

    #[test]
    fn rotatable_set_contains_three_entries() {
        let portrait = MediaAsset::from_bytes(vec![1, 1, 1], "clip.mp4");
        let landscape = MediaAsset::from_bytes(vec![2, 2, 2], "clip.mp4");
        let set = render_rotatable(&portrait, &landscape);
        let map = set.to_map();
        assert_eq!(map.len(), 3);
        assert!(map.keys().copied().eq(["landscape", "portrait", "rotatable"]));
    }

    #[test]
    fn rotatable_requires_a_second_path() {
        let err = render(
            Path::new("does-not-matter.mp4"),
            None,
            "clip.mp4",
            OrientationMode::Rotatable,
        )
        .unwrap_err();
        assert!(matches!(err, Error::MissingAsset(_)));
    }

    #[test]
    fn unreadable_asset_propagates_io_error() {
        let err = render(
            Path::new("/nonexistent/asset.png"),
            None,
            "asset.png",
            OrientationMode::Portrait,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn download_names_follow_the_convention() {
        let asset = image_asset();
        assert_eq!(render_portrait(&asset).download_name(), "photo_portrait.html");
        assert_eq!(render_landscape(&asset).download_name(), "photo_landscape.html");

        let p = MediaAsset::from_bytes(vec![1], "clip.mp4");
        let l = MediaAsset::from_bytes(vec![2], "clip.mp4");
        let set = render_rotatable(&p, &l);
        assert_eq!(set.rotatable.download_name(), "clip_endcard.html");
    }
}
