//! Levelgen Manifest - Job manifests for the level image-to-tile compiler.
//!
//! This crate scans a directory of numerically named level images
//! (`<id>.png`) and produces the JSON manifest consumed by the tile compiler:
//! one entry per level with its input image, generated C output path, shared
//! palette image and bits-per-pixel.
//!
//! # Modules
//!
//! - [`level`]: Level id recognition and the per-level manifest entry.
//! - [`scan`]: Directory scanning and entry ordering.
//! - [`manifest`]: The manifest document and the generator that writes it.
//! - [`format`]: JSON layouts, including the legacy compact layout.
//!
//! # Example
//!
//! ```no_run
//! use levelgen_manifest::prelude::*;
//!
//! let config = GeneratorConfig::new("assets/levels", "build/levels", "levels.json");
//! let manifest = ManifestGenerator::new(config).run()?;
//! println!("{} levels", manifest.len());
//! # Ok::<(), ManifestError>(())
//! ```

#![deny(unsafe_code)]

pub mod format;
pub mod level;
pub mod manifest;
pub mod scan;

use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced while generating or reading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The input directory could not be listed (missing, not a directory,
    /// or unreadable).
    #[error("failed to list input directory '{}': {source}", path.display())]
    ListDir {
        /// The directory that was being listed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An individual directory entry could not be read during the listing.
    #[error("failed to read an entry of '{}': {source}", path.display())]
    ReadEntry {
        /// The directory that was being listed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest file could not be opened for writing.
    #[error("failed to create manifest file '{}': {source}", path.display())]
    CreateOutput {
        /// The manifest destination.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the manifest text failed part-way.
    #[error("failed to write manifest file '{}': {source}", path.display())]
    Write {
        /// The manifest destination.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest could not be opened for reading.
    #[error("failed to open manifest file '{}': {source}", path.display())]
    OpenManifest {
        /// The manifest that was being read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON (de)serialization failed.
    #[error("manifest JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Serialized manifest text was not valid UTF-8.
    #[error("manifest text is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::format::ManifestLayout;
    pub use crate::level::{LevelEntry, LevelId, LEVEL_BPP, PALETTE_FILE_NAME};
    pub use crate::manifest::{GeneratorConfig, Manifest, ManifestGenerator};
    pub use crate::scan::{scan_level_ids, EntryOrder};
    pub use crate::ManifestError;
}
