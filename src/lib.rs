//! Endcard Renderer
//!
//! Converts an image or short video into a self-contained HTML "endcard":
//! a single document with the media embedded as a base64 data URL, framed
//! for portrait, landscape, or both (with a client-side rotation toggle).
//!
//! # Features
//!
//! - **Pure rendering**: identical inputs produce byte-identical HTML; the
//!   only side effect is reading asset bytes
//! - **Extension-based typing**: MIME and image/video classification come
//!   from the filename extension alone, never from content sniffing
//! - **Intake contract**: the validation policy and temp-file lifecycle an
//!   upload handler needs, without the web framework
//!
//! # Example
//!
//! ```no_run
//! use endcard::{render, OrientationMode, RenderOutput};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let output = render(
//!     Path::new("/tmp/uploads/abc_photo.png"),
//!     None,
//!     "photo.png",
//!     OrientationMode::Portrait,
//! )?;
//! if let RenderOutput::Single(doc) = output {
//!     println!("{} ({} bytes)", doc.download_name(), doc.html.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod config;
pub mod intake;
pub mod media;
pub mod orientation;
pub mod record;
pub mod render;
pub mod template;

pub use config::AppConfig;
pub use intake::{TempUpload, UploadPolicy, ALLOWED_EXTENSIONS};
pub use media::{MediaAsset, MediaKind};
pub use orientation::OrientationMode;
pub use record::EndcardRecord;
pub use render::{
    render, render_both, render_landscape, render_portrait, render_rotatable, EndcardDocument,
    RenderOutput, RotatableSet,
};
