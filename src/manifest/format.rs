//! JSON layout of served manifests.
//!
//! Separators are `", "` and `": "`, and every character outside printable ASCII
//! is written as a lowercase `\uXXXX` escape (surrogate pairs above the BMP).

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

/// serde_json formatter producing the manifest wire layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestFormatter;

impl Formatter for ManifestFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;

        for (index, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }

            writer.write_all(&fragment.as_bytes()[start..index])?;

            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }

            start = index + ch.len_utf8();
        }

        writer.write_all(&fragment.as_bytes()[start..])
    }
}

/// Serialize a value with [`ManifestFormatter`].
///
/// The output is pure ASCII.
pub fn to_string<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    let mut serializer = serde_json::Serializer::with_formatter(Vec::new(), ManifestFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(serializer.into_inner()).map_err(serde::ser::Error::custom)
}
