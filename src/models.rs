use crate::FileTime;
use std::{borrow::Cow, fmt};

/// Engine version of the newest save layout.
///
/// Saves with this version carry RGBA screenshots, an optional lz4
/// compressed tail, and a light plugin list.
pub const NEWEST_ENGINE_VERSION: u32 = 12;

/// Everything decoded from a save
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct SaveReport {
    pub header: SaveHeader,
    pub screenshot: Screenshot,
    pub compression: Compression,
    pub format_version: u8,
    pub plugins: Vec<SaveString>,

    /// Only present in saves with the newest engine version
    pub light_plugins: Option<Vec<SaveString>>,
}

/// The fixed position fields at the start of a save
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct SaveHeader {
    pub engine_version: u32,
    pub save_number: u32,
    pub character_name: SaveString,
    pub character_level: u32,
    pub character_location: SaveString,
    pub character_playtime: SaveString,
    pub character_race: SaveString,
    pub character_sex: Sex,
    pub filetime: FileTime,
}

impl SaveHeader {
    /// If the save uses the newest layout
    pub fn is_newest_format(&self) -> bool {
        self.engine_version == NEWEST_ENGINE_VERSION
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum Sex {
    Male,
    Female,
}

impl From<u16> for Sex {
    fn from(value: u16) -> Self {
        if value == 0 {
            Sex::Male
        } else {
            Sex::Female
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => f.write_str("Male"),
            Sex::Female => f.write_str("Female"),
        }
    }
}

/// Dimensions of the embedded screenshot. The pixels are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
}

impl Screenshot {
    /// Number of bytes the pixel data occupies, `None` on overflow
    ///
    /// ```
    /// use fossave::Screenshot;
    /// let shot = Screenshot { width: 320, height: 192, channels: 4 };
    /// assert_eq!(shot.pixel_len(), Some(245_760));
    /// ```
    pub fn pixel_len(&self) -> Option<u64> {
        u64::from(self.width)
            .checked_mul(u64::from(self.height))?
            .checked_mul(u64::from(self.channels))
    }
}

/// How the tail of the save following the screenshot is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[cfg_attr(feature = "serialize", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Compression {
    None,
    Lz4 {
        uncompressed_len: u32,
        compressed_len: u32,
    },
}

/// Raw bytes of a length prefixed string.
///
/// Saves make no promises about the encoding, so the text is only ever
/// decoded lossily for display.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct SaveString(Vec<u8>);

impl SaveString {
    pub fn new(data: Vec<u8>) -> Self {
        SaveString(data)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_str_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl From<&[u8]> for SaveString {
    fn from(value: &[u8]) -> Self {
        SaveString(value.to_vec())
    }
}

impl From<&str> for SaveString {
    fn from(value: &str) -> Self {
        SaveString(value.as_bytes().to_vec())
    }
}

impl PartialEq<str> for SaveString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for SaveString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl fmt::Debug for SaveString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_str_lossy(), f)
    }
}

impl fmt::Display for SaveString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_lossy())
    }
}

#[cfg(feature = "serialize")]
impl serde::Serialize for SaveString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_str_lossy())
    }
}
