//! Level ids and per-level manifest entries.
//!
//! A level image is any file whose whole name is a run of ASCII digits
//! followed by `.png` (`7.png`, `012.png`). The digit run is the level's
//! [`LevelId`] and is kept verbatim: `01.png` is level `01`, not level `1`.
//!
//! Each level becomes one [`LevelEntry`] in the manifest, telling the tile
//! compiler where the source image lives, where to write the generated C
//! file, which palette to use and at what bit depth.

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// File name of the palette image shared by every level in a directory.
pub const PALETTE_FILE_NAME: &str = "pix-to-tile.png";

/// Bits per pixel the tile compiler encodes levels at.
pub const LEVEL_BPP: u8 = 8;

static LEVEL_FILE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.png$").expect("level file name pattern is valid"));

// ---------------------------------------------------------------------------
// LevelId
// ---------------------------------------------------------------------------

/// The numeric id of a level image, as the digit string from its file name.
///
/// Ordering is by numeric value without converting to an integer, so ids of
/// any length compare correctly. Ids with the same value but different
/// zero-padding (`1` and `01`) are ordered by their raw text, shorter first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LevelId(String);

impl LevelId {
    /// Recognize a level image file name, returning its id.
    ///
    /// The whole name must match `^[0-9]+\.png$`; anything else (prefixes,
    /// suffixes, other extensions, upper-case `.PNG`, non-ASCII digits)
    /// yields `None`.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        LEVEL_FILE_NAME
            .captures(file_name)
            .and_then(|caps| caps.get(1))
            .map(|digits| Self(digits.as_str().to_owned()))
    }

    /// The id exactly as it appeared in the file name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The digits with leading zeros removed (`"0"` stays `"0"`).
    fn significant_digits(&self) -> &str {
        let trimmed = self.0.trim_start_matches('0');
        if trimmed.is_empty() {
            &self.0[self.0.len() - 1..]
        } else {
            trimmed
        }
    }
}

impl Ord for LevelId {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.significant_digits(), other.significant_digits());
        a.len()
            .cmp(&b.len())
            .then_with(|| a.cmp(b))
            .then_with(|| self.0.len().cmp(&other.0.len()))
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for LevelId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// LevelEntry
// ---------------------------------------------------------------------------

/// One conversion job in the manifest.
///
/// Field declaration order is the serialized key order and must stay
/// `name`, `input`, `output`, `palette`, `bpp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelEntry {
    /// Symbol name for the generated data, `level_<id>`.
    pub name: String,
    /// Path of the level image, `<input_dir>/<id>.png`.
    pub input: String,
    /// Path of the generated C source, `<output_dir>/<id>.c`.
    pub output: String,
    /// Path of the shared palette image, `<input_dir>/pix-to-tile.png`.
    pub palette: String,
    /// Bits per pixel, always [`LEVEL_BPP`].
    pub bpp: u8,
}

impl LevelEntry {
    /// Build the entry for `id`.
    ///
    /// Directory arguments are joined with a literal `/` exactly as given;
    /// they are not normalized, so a trailing slash produces `//`.
    pub fn new(id: &LevelId, input_dir: &str, output_dir: &str) -> Self {
        Self {
            name: format!("level_{id}"),
            input: format!("{input_dir}/{id}.png"),
            output: format!("{output_dir}/{id}.c"),
            palette: format!("{input_dir}/{PALETTE_FILE_NAME}"),
            bpp: LEVEL_BPP,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
