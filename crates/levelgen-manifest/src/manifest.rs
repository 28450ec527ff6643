//! Manifest generation for the level tile compiler.
//!
//! The [`ManifestGenerator`] turns a directory of level images into a
//! [`Manifest`] and writes it to disk. A run follows this flow:
//!
//! 1. [`scan_level_ids`](crate::scan::scan_level_ids) -- list the input
//!    directory and keep the level images.
//! 2. [`Manifest::from_level_ids`] -- build one [`LevelEntry`] per id.
//! 3. [`Manifest::write_to`] -- serialize under the `"images"` key in the
//!    configured [`ManifestLayout`].
//!
//! # JSON Serialization
//!
//! All manifest types derive `Serialize` and `Deserialize`, so a manifest
//! written by the generator can be loaded back with [`Manifest::load`].
//!
//! # Example
//!
//! ```
//! use levelgen_manifest::prelude::*;
//!
//! let ids: Vec<LevelId> = ["2.png", "1.png"]
//!     .into_iter()
//!     .filter_map(LevelId::from_file_name)
//!     .collect();
//! let manifest = Manifest::from_level_ids(&ids, "levels", "out");
//!
//! assert_eq!(manifest.images[0].name, "level_2");
//! assert_eq!(manifest.images[1].output, "out/1.c");
//! ```

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::format::{self, ManifestLayout};
use crate::level::{LevelEntry, LevelId};
use crate::scan::{self, EntryOrder};
use crate::ManifestError;

// ---------------------------------------------------------------------------
// Manifest
// ---------------------------------------------------------------------------

/// The job list handed to the tile compiler.
///
/// Serializes as `{"images": [...]}`, one [`LevelEntry`] per level in
/// emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Conversion jobs, in emission order.
    pub images: Vec<LevelEntry>,
}

impl Manifest {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Self { images: Vec::new() }
    }

    /// Build a manifest with one entry per id, keeping the order of `ids`.
    pub fn from_level_ids(ids: &[LevelId], input_dir: &str, output_dir: &str) -> Self {
        Self {
            images: ids
                .iter()
                .map(|id| LevelEntry::new(id, input_dir, output_dir))
                .collect(),
        }
    }

    /// Number of levels in the manifest.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` if the manifest lists no levels.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Serialize the manifest to `writer`.
    pub fn write_to<W: Write>(&self, writer: W, layout: ManifestLayout) -> serde_json::Result<()> {
        format::write_json(writer, self, layout)
    }

    /// Serialize the manifest to a string.
    pub fn to_json_string(&self, layout: ManifestLayout) -> Result<String, ManifestError> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, layout)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Parse a manifest from any reader, in either layout.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ManifestError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a manifest file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ManifestError::OpenManifest {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }
}

// ---------------------------------------------------------------------------
// GeneratorConfig
// ---------------------------------------------------------------------------

/// Configuration for a [`ManifestGenerator`] run.
///
/// `input_dir` and `output_dir` are kept as strings because entry paths are
/// built by plain concatenation of exactly what the caller passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory holding `<id>.png` level images and the palette image.
    pub input_dir: String,
    /// Prefix for generated `.c` paths. Never read or created.
    pub output_dir: String,
    /// File the manifest is written to, replacing existing content.
    pub manifest_path: PathBuf,
    /// Order of entries in the manifest.
    pub order: EntryOrder,
    /// Text layout of the manifest.
    pub layout: ManifestLayout,
}

impl GeneratorConfig {
    /// Config with the default order and layout.
    pub fn new(
        input_dir: impl Into<String>,
        output_dir: impl Into<String>,
        manifest_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            manifest_path: manifest_path.into(),
            ..Default::default()
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_dir: ".".to_owned(),
            output_dir: ".".to_owned(),
            manifest_path: PathBuf::from("levels.json"),
            order: EntryOrder::default(),
            layout: ManifestLayout::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// ManifestGenerator
// ---------------------------------------------------------------------------

/// Scans an input directory and writes the level manifest.
pub struct ManifestGenerator {
    config: GeneratorConfig,
}

impl ManifestGenerator {
    /// Create a generator for the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The generator's configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Scan the input directory and build the manifest without writing it.
    pub fn build(&self) -> Result<Manifest, ManifestError> {
        let ids = scan::scan_level_ids(Path::new(&self.config.input_dir), self.config.order)?;
        let manifest =
            Manifest::from_level_ids(&ids, &self.config.input_dir, &self.config.output_dir);
        for entry in &manifest.images {
            tracing::debug!(name = %entry.name, input = %entry.input, output = %entry.output, "level entry");
        }
        Ok(manifest)
    }

    /// Build the manifest and write it to the configured path.
    ///
    /// The destination is created or truncated before anything is written,
    /// so a failure part-way can leave a partial file behind.
    pub fn run(&self) -> Result<Manifest, ManifestError> {
        let manifest = self.build()?;
        self.write(&manifest)?;
        tracing::info!(
            levels = manifest.len(),
            path = %self.config.manifest_path.display(),
            "wrote level manifest"
        );
        Ok(manifest)
    }

    /// Write `manifest` to the configured path in the configured layout.
    pub fn write(&self, manifest: &Manifest) -> Result<(), ManifestError> {
        let path = &self.config.manifest_path;
        let file = File::create(path).map_err(|source| ManifestError::CreateOutput {
            path: path.clone(),
            source,
        })?;
        let write_err = |source: io::Error| ManifestError::Write {
            path: path.clone(),
            source,
        };

        let mut writer = BufWriter::new(file);
        manifest
            .write_to(&mut writer, self.config.layout)
            .map_err(|e| {
                if e.is_io() {
                    write_err(e.into())
                } else {
                    ManifestError::Json(e)
                }
            })?;
        writer.flush().map_err(write_err)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
