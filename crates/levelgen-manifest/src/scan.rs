//! Directory scanning for level images.
//!
//! [`scan_level_ids`] lists the immediate children of an input directory and
//! keeps the ones that are level images (see [`LevelId::from_file_name`]).
//! Everything else -- the palette, stray files, names that are not UTF-8,
//! sub-directories -- is skipped without comment.

use std::fs;
use std::path::Path;

use crate::level::LevelId;
use crate::ManifestError;

/// Order in which matched levels are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryOrder {
    /// Sorted by numeric id value, giving the same output on every platform.
    #[default]
    Numeric,
    /// Whatever order the operating system lists the directory in.
    Listing,
}

/// List the level ids found directly inside `input_dir`.
///
/// Errors if the directory cannot be listed or one of its entries cannot be
/// read. Duplicated values with different padding (`1.png` and `01.png`) are
/// both returned.
pub fn scan_level_ids(input_dir: &Path, order: EntryOrder) -> Result<Vec<LevelId>, ManifestError> {
    let read_dir = fs::read_dir(input_dir).map_err(|source| ManifestError::ListDir {
        path: input_dir.to_path_buf(),
        source,
    })?;

    let read_entry_err = |source| ManifestError::ReadEntry {
        path: input_dir.to_path_buf(),
        source,
    };

    let mut ids = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(read_entry_err)?;
        let file_name = entry.file_name();
        let Some(id) = file_name.to_str().and_then(LevelId::from_file_name) else {
            continue;
        };
        // Follows symlinks, so a link to a directory is skipped too.
        if entry.path().is_dir() {
            continue;
        }
        ids.push(id);
    }

    if order == EntryOrder::Numeric {
        ids.sort();
    }

    tracing::debug!(
        dir = %input_dir.display(),
        count = ids.len(),
        ?order,
        "scanned level images"
    );

    Ok(ids)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    fn names(ids: &[LevelId]) -> Vec<&str> {
        ids.iter().map(LevelId::as_str).collect()
    }

    #[test]
    fn keeps_only_level_images() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["1.png", "2.png", "pix-to-tile.png", "notes.txt", "3.png~", "x4.png"] {
            touch(dir.path(), name);
        }

        let ids = scan_level_ids(dir.path(), EntryOrder::Numeric).unwrap();
        assert_eq!(names(&ids), ["1", "2"]);
    }

    #[test]
    fn numeric_order_is_by_value() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["10.png", "9.png", "100.png", "02.png", "1.png"] {
            touch(dir.path(), name);
        }

        let ids = scan_level_ids(dir.path(), EntryOrder::Numeric).unwrap();
        assert_eq!(names(&ids), ["1", "02", "9", "10", "100"]);
    }

    #[test]
    fn listing_order_follows_read_dir() {
        let dir = tempfile::tempdir().unwrap();
        for i in (0..40).rev() {
            touch(dir.path(), &format!("{i}.png"));
            touch(dir.path(), &format!("note{i}.md"));
        }

        let listed: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .filter_map(|n| n.strip_suffix(".png").map(str::to_owned))
            .collect();

        let ids = scan_level_ids(dir.path(), EntryOrder::Listing).unwrap();
        assert_eq!(ids.len(), 40);
        assert_eq!(names(&ids), listed);
    }

    #[test]
    fn directories_named_like_levels_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("5.png")).unwrap();
        touch(dir.path(), "6.png");

        let ids = scan_level_ids(dir.path(), EntryOrder::Numeric).unwrap();
        assert_eq!(names(&ids), ["6"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_to_directories_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("sub"), dir.path().join("9.png")).unwrap();
        touch(dir.path(), "2.png");

        let ids = scan_level_ids(dir.path(), EntryOrder::Numeric).unwrap();
        assert_eq!(names(&ids), ["2"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_to_files_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "art.png");
        std::os::unix::fs::symlink(dir.path().join("art.png"), dir.path().join("4.png")).unwrap();

        let ids = scan_level_ids(dir.path(), EntryOrder::Numeric).unwrap();
        assert_eq!(names(&ids), ["4"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join(OsStr::from_bytes(b"\xff1.png"))).unwrap();
        touch(dir.path(), "3.png");

        let ids = scan_level_ids(dir.path(), EntryOrder::Numeric).unwrap();
        assert_eq!(names(&ids), ["3"]);
    }

    #[test]
    fn nested_files_are_not_scanned() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("sub"), "7.png");

        let ids = scan_level_ids(dir.path(), EntryOrder::Numeric).unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = scan_level_ids(&missing, EntryOrder::Numeric).unwrap_err();
        match err {
            ManifestError::ListDir { path, .. } => assert_eq!(path, missing),
            other => panic!("expected ListDir, got {other:?}"),
        }
    }

    #[test]
    fn file_instead_of_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "1.png");

        let err = scan_level_ids(&dir.path().join("1.png"), EntryOrder::Numeric).unwrap_err();
        assert!(matches!(err, ManifestError::ListDir { .. }));
    }
}
