use crate::{
    models::{Compression, SaveHeader, SaveReport, SaveString, Screenshot, Sex},
    reader::Reader,
    FileTime, FosError, FosErrorKind,
};
use tracing::{debug, trace};

/// Leading bytes of every save.
///
/// The literal names a sibling game from the same engine family, but it is
/// what Fallout 4 writes.
pub const MAGIC: &[u8; 13] = b"TESV_SAVEGAME";

const DEFAULT_MAX_DECOMPRESSED_LEN: usize = 256 * 1024 * 1024;

/// Returns true if the data starts with the save magic
///
/// ```
/// assert!(fossave::is_save(b"TESV_SAVEGAME\x00\x00"));
/// assert!(!fossave::is_save(b"TESV"));
/// ```
pub fn is_save(data: &[u8]) -> bool {
    data.get(..MAGIC.len()) == Some(&MAGIC[..])
}

/// Decode a save with the default options
pub fn decode(data: &[u8]) -> Result<SaveReport, FosError> {
    SaveDecoder::new().decode(data)
}

impl SaveReport {
    /// Decode a save with the default options
    pub fn from_slice(data: &[u8]) -> Result<Self, FosError> {
        decode(data)
    }
}

/// Customizes how saves are decoded
#[derive(Debug, Clone)]
pub struct SaveDecoder {
    max_decompressed_len: usize,
}

impl Default for SaveDecoder {
    fn default() -> Self {
        SaveDecoder {
            max_decompressed_len: DEFAULT_MAX_DECOMPRESSED_LEN,
        }
    }
}

/// Where the fields after the screenshot are read from
enum Body<'a> {
    Inline(Reader<'a>),
    Decompressed(Vec<u8>),
}

impl<'a> Body<'a> {
    fn reader(&self) -> Reader<'_> {
        match self {
            Body::Inline(reader) => reader.clone(),
            Body::Decompressed(data) => Reader::new(data),
        }
    }
}

impl SaveDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upper bound on the declared size of the lz4 compressed tail. Saves
    /// that declare more fail before anything is allocated.
    pub fn max_decompressed_len(&mut self, len: usize) -> &mut Self {
        self.max_decompressed_len = len;
        self
    }

    pub fn decode(&self, data: &[u8]) -> Result<SaveReport, FosError> {
        if !is_save(data) {
            return Err(FosErrorKind::BadMagic.into());
        }

        let mut reader = Reader::new(data);
        reader.read_bytes("magic", MAGIC.len() as u64)?;
        reader.read_u32("header size")?;

        let header = read_header(&mut reader)?;
        let newest = header.is_newest_format();
        debug!(
            engine_version = header.engine_version,
            save_number = header.save_number,
            "decoded save header"
        );

        let width = reader.read_u32("screenshot width")?;
        let height = reader.read_u32("screenshot height")?;
        let compression_type = if newest {
            reader.read_u16("compression type")?
        } else {
            0
        };

        let screenshot = Screenshot {
            width,
            height,
            channels: if newest { 4 } else { 3 },
        };

        // no buffer can satisfy a size that overflows
        let pixel_len = screenshot.pixel_len().unwrap_or(u64::MAX);
        reader.read_bytes("screenshot pixels", pixel_len)?;

        let (compression, body) = if compression_type != 0 {
            let uncompressed_len = reader.read_u32("uncompressed length")?;
            let compressed_len = reader.read_u32("compressed length")?;
            let decompressed =
                self.decompress_tail(data, &reader, uncompressed_len, compressed_len)?;
            let compression = Compression::Lz4 {
                uncompressed_len,
                compressed_len,
            };
            (compression, Body::Decompressed(decompressed))
        } else {
            (Compression::None, Body::Inline(reader))
        };

        let mut reader = body.reader();
        let format_version = reader.read_u8("format version")?;
        reader.read_u32("reserved")?;

        let plugin_count = reader.read_u8("plugin count")?;
        trace!(count = plugin_count, "reading plugins");
        let plugins = read_plugins(&mut reader, usize::from(plugin_count), "plugin name")?;

        let light_plugins = if newest {
            let count = reader.read_u16("light plugin count")?;
            trace!(count, "reading light plugins");
            Some(read_plugins(
                &mut reader,
                usize::from(count),
                "light plugin name",
            )?)
        } else {
            None
        };

        Ok(SaveReport {
            header,
            screenshot,
            compression,
            format_version,
            plugins,
            light_plugins,
        })
    }

    /// The compressed block is the last `compressed_len` bytes of the file
    /// and decompresses into a buffer that replaces everything read so far.
    fn decompress_tail(
        &self,
        data: &[u8],
        reader: &Reader,
        uncompressed_len: u32,
        compressed_len: u32,
    ) -> Result<Vec<u8>, FosError> {
        debug!(uncompressed_len, compressed_len, "decompressing lz4 tail");

        let uncompressed_len = uncompressed_len as usize;
        if uncompressed_len > self.max_decompressed_len {
            return Err(FosErrorKind::DecompressionFailure {
                msg: format!(
                    "declared size of {} bytes exceeds the limit of {} bytes",
                    uncompressed_len, self.max_decompressed_len
                ),
            }
            .into());
        }

        let block = data
            .len()
            .checked_sub(compressed_len as usize)
            .map(|start| &data[start..])
            .ok_or_else(|| {
                FosError::from(FosErrorKind::TruncatedBuffer {
                    field: "compressed block",
                    position: reader.position(),
                    needed: u64::from(compressed_len),
                    available: data.len(),
                })
            })?;

        let mut out = vec![0u8; uncompressed_len];
        let written = lz4_flex::block::decompress_into(block, &mut out).map_err(|e| {
            FosError::from(FosErrorKind::DecompressionFailure { msg: e.to_string() })
        })?;

        if written != uncompressed_len {
            return Err(FosErrorKind::DecompressionFailure {
                msg: format!(
                    "expected {} bytes but the block held {}",
                    uncompressed_len, written
                ),
            }
            .into());
        }

        Ok(out)
    }
}

fn read_header(reader: &mut Reader) -> Result<SaveHeader, FosError> {
    let engine_version = reader.read_u32("engine version")?;
    let save_number = reader.read_u32("save number")?;
    let character_name = read_string(reader, "character name")?;
    let character_level = reader.read_u32("character level")?;
    let character_location = read_string(reader, "character location")?;
    let character_playtime = read_string(reader, "character playtime")?;
    let character_race = read_string(reader, "character race")?;
    let character_sex = Sex::from(reader.read_u16("character sex")?);
    reader.read_f32("current experience")?;
    reader.read_f32("required experience")?;
    let filetime = FileTime::from_ticks(reader.read_u64("filetime")?);

    Ok(SaveHeader {
        engine_version,
        save_number,
        character_name,
        character_level,
        character_location,
        character_playtime,
        character_race,
        character_sex,
        filetime,
    })
}

#[inline]
fn read_string(reader: &mut Reader, field: &'static str) -> Result<SaveString, FosError> {
    reader.read_prefixed(field).map(SaveString::from)
}

fn read_plugins(
    reader: &mut Reader,
    count: usize,
    field: &'static str,
) -> Result<Vec<SaveString>, FosError> {
    let mut plugins = Vec::with_capacity(count);
    for _ in 0..count {
        plugins.push(read_string(reader, field)?);
    }
    Ok(plugins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_buffer_is_bad_magic() {
        for data in [&b""[..], &b"TESV"[..], &b"TESV_SAVEGAM"[..]] {
            let err = decode(data).unwrap_err();
            assert!(matches!(err.kind(), FosErrorKind::BadMagic));
        }
    }

    #[test]
    fn test_wrong_magic() {
        let err = decode(b"FO4_SAVEGAME_\x00\x00\x00\x00").unwrap_err();
        assert!(matches!(err.kind(), FosErrorKind::BadMagic));
    }

    #[test]
    fn test_magic_only_is_truncated() {
        let err = decode(MAGIC).unwrap_err();
        match err.kind() {
            FosErrorKind::TruncatedBuffer {
                field, position, ..
            } => {
                assert_eq!(*field, "header size");
                assert_eq!(*position, 13);
            }
            x => panic!("unexpected error: {:?}", x),
        }
    }

    #[test]
    fn test_body_reader_starts_at_zero() {
        let body = Body::Decompressed(vec![1, 2, 3]);
        let mut reader = body.reader();
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read_u8("first").unwrap(), 1);
    }
}
