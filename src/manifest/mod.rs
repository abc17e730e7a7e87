//! Web app manifest document.
//!
//! A manifest is rebuilt for every request and discarded once serialized:
//! - [`types`]: the document and icon value types
//! - [`format`]: the JSON layout manifests are served in
//! - constants shared by every document

pub mod format;
pub mod types;

pub use format::ManifestFormatter;
pub use types::{Icon, ManifestDocument};

/// Display mode advertised to browsers.
pub const DISPLAY_MODE: &str = "standalone";

/// Path of the single icon. Served by separate static asset hosting.
pub const ICON_SRC: &str = "/static/icon.png";

/// Pixel dimensions of the icon.
pub const ICON_SIZES: &str = "256x256";
