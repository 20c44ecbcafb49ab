use std::io::Cursor;
use std::path::Path;

use byyte::be::ByteReader;

use crate::{color, error::DecodeError, string, swatch::Swatch};

/// Options for decoding a swatch file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Whether to drop the unnamed version 1 records when the file
    /// also carries a trailing version 2 block for the same swatches.
    pub dedupe_legacy: bool,
}

/// An Adobe colour swatch (ACO) file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchFile {
    /// The swatches, in file order.
    pub swatches: Vec<Swatch>,
}

// MARK: Creation

impl SwatchFile {
    /// Reads and decodes the swatch file at a path.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let data = std::fs::read(path)?;
        Ok(Self::from_data(&data)?)
    }

    /// Decodes a swatch file from its data.
    pub fn from_data(data: &[u8]) -> Result<Self, DecodeError> {
        Self::from_data_with_options(data, DecodeOptions::default())
    }

    /// Decodes a swatch file from its data.
    ///
    /// A file whose header matches neither version yields an empty
    /// swatch list rather than an error.
    pub fn from_data_with_options(
        data: &[u8],
        options: DecodeOptions,
    ) -> Result<Self, DecodeError> {
        if data.len() < 4 {
            return Err(DecodeError::TooShort);
        }

        let mut cursor = Cursor::new(data);
        let version = cursor.read_u16()?;
        let count = cursor.read_u16()? as usize;

        // A version 1 file may carry a redundant version 2 block after
        // its fixed-size records, repeating the swatches with names.
        let has_legacy_trailer = if version == 1 && data.len() > count * 10 + 8 {
            cursor.set_position((4 + count * 10) as u64);
            let trailer_version = cursor.read_u16()?;
            let trailer_count = cursor.read_u16()? as usize;
            cursor.set_position(4);
            trailer_version == 2 && trailer_count == count
        } else {
            false
        };

        let mut swatches = Vec::new();

        // Version 1: the rest of the file must be exactly `count`
        // ten-byte records.
        if version == 1
            && data.len() - 4 == count * 10
            && !(options.dedupe_legacy && has_legacy_trailer)
        {
            while (cursor.position() as usize) < data.len() {
                let color_space = cursor.read_u16()?;
                let w = cursor.read_u16()?;
                let x = cursor.read_u16()?;
                let y = cursor.read_u16()?;
                let z = cursor.read_u16()?;

                swatches.push(Swatch {
                    name: None,
                    color: color::hex_value(color_space, w, x, y, z),
                });
            }
        }

        // Version 2, either as the whole file or as a legacy trailer.
        if version == 2 || has_legacy_trailer {
            if version == 2 {
                cursor.set_position(4);
            } else {
                // Skip the version 1 records and the trailer’s own header.
                cursor.set_position((4 + count * 10 + 4) as u64);
            }

            while (cursor.position() as usize) < data.len() {
                let color_space = cursor.read_u16()?;
                let w = cursor.read_u16()?;
                let x = cursor.read_u16()?;
                let y = cursor.read_u16()?;
                let z = cursor.read_u16()?;

                // Two reserved bytes sit before the name length.
                cursor.read_u16()?;

                // The length counts UTF-16 code units, including the
                // null terminator.
                let name_length = cursor.read_u16()? as usize;
                let mut code_units = Vec::with_capacity(name_length.saturating_sub(1));
                if name_length > 0 {
                    for _ in 0..name_length - 1 {
                        code_units.push(cursor.read_u16()?);
                    }
                    // Consume the null terminator.
                    cursor.read_u16()?;
                }

                swatches.push(Swatch {
                    name: Some(string::unicode::string_from_code_units(&code_units)),
                    color: color::hex_value(color_space, w, x, y, z),
                });
            }
        }

        Ok(Self { swatches })
    }
}
