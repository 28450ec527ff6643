//! JSON layouts for manifest output.
//!
//! The tile compiler's existing manifests use a compact, line-per-level
//! layout:
//!
//! ```text
//! { "images": [
//! {"name": "level_1","input": "in/1.png","output": "out/1.c","palette": "in/pix-to-tile.png","bpp": 8},
//! {"name": "level_2","input": "in/2.png","output": "out/2.c","palette": "in/pix-to-tile.png","bpp": 8}
//! ]}
//! ```
//!
//! [`LegacyFormatter`] reproduces that layout through `serde_json`, so the
//! output is always well-formed JSON (separators only go between emitted
//! values). It is not byte-identical to manifests from the old script: the
//! closing `]` of a non-empty list goes on its own line, where the script
//! wrote `}]}`.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

/// How the manifest text is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManifestLayout {
    /// One level per line, in the shape of the original tooling.
    #[default]
    Compact,
    /// `serde_json`'s standard two-space pretty printing.
    Pretty,
}

/// Serialize `value` to `writer` in the given layout.
///
/// No trailing newline is written in either layout.
pub fn write_json<W, T>(writer: W, value: &T, layout: ManifestLayout) -> serde_json::Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    match layout {
        ManifestLayout::Compact => {
            let mut ser = serde_json::Serializer::with_formatter(writer, LegacyFormatter::default());
            value.serialize(&mut ser)
        }
        ManifestLayout::Pretty => serde_json::to_writer_pretty(writer, value),
    }
}

// ---------------------------------------------------------------------------
// LegacyFormatter
// ---------------------------------------------------------------------------

/// `serde_json` formatter producing the compact manifest layout.
///
/// - The outermost object opens with `{ `.
/// - Arrays open with `[` and a newline; elements are separated by `,` and a
///   newline; a non-empty array closes on its own line, an empty one is
///   `[\n]`.
/// - Keys are followed by `": "`, members are separated by a bare `,`.
#[derive(Debug, Default)]
pub struct LegacyFormatter {
    object_depth: usize,
    /// One flag per open array: whether it has emitted an element yet.
    open_arrays: Vec<bool>,
}

impl Formatter for LegacyFormatter {
    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.object_depth += 1;
        if self.object_depth == 1 {
            writer.write_all(b"{ ")
        } else {
            writer.write_all(b"{")
        }
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.object_depth = self.object_depth.saturating_sub(1);
        writer.write_all(b"}")
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.open_arrays.push(false);
        writer.write_all(b"[\n")
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if let Some(has_values) = self.open_arrays.last_mut() {
            *has_values = true;
        }
        if first {
            Ok(())
        } else {
            writer.write_all(b",\n")
        }
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if self.open_arrays.pop().unwrap_or(false) {
            writer.write_all(b"\n]")
        } else {
            writer.write_all(b"]")
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
