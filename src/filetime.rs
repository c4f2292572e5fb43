use chrono::{DateTime, Utc};
use std::fmt;

/// Number of 100 ns ticks between 1601-01-01 and the unix epoch
const UNIX_EPOCH_TICKS: i64 = 116_444_736_000_000_000;
const TICKS_PER_SECOND: i64 = 10_000_000;

/// A Windows `FILETIME` recorded when the save was written.
///
/// The raw value counts 100 nanosecond intervals since 1601-01-01 UTC and is
/// stored on disk as a little-endian low / high `u32` pair, which is the same
/// layout as a little-endian `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileTime(u64);

impl FileTime {
    /// Create a filetime from a raw tick count
    ///
    /// ```
    /// use fossave::FileTime;
    /// let time = FileTime::from_ticks(116_444_736_000_000_000);
    /// assert_eq!(time.to_datetime().unwrap().timestamp(), 0);
    /// ```
    pub fn from_ticks(ticks: u64) -> Self {
        FileTime(ticks)
    }

    /// Create a filetime from the two halves as they appear on disk
    pub fn from_parts(low: u32, high: u32) -> Self {
        FileTime((u64::from(high) << 32) | u64::from(low))
    }

    /// The raw tick count
    pub fn ticks(&self) -> u64 {
        self.0
    }

    /// Convert to a calendar time.
    ///
    /// Returns `None` when the tick count lies outside of what chrono can
    /// represent.
    ///
    /// ```
    /// use fossave::FileTime;
    /// let time = FileTime::from_ticks(132_223_104_000_000_000);
    /// assert_eq!(time.to_datetime().unwrap().to_rfc3339(), "2020-01-01T00:00:00+00:00");
    /// ```
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let ticks = i64::try_from(self.0).ok()?;
        let since_epoch = ticks - UNIX_EPOCH_TICKS;
        let secs = since_epoch.div_euclid(TICKS_PER_SECOND);
        let nanos = since_epoch.rem_euclid(TICKS_PER_SECOND) * 100;
        DateTime::<Utc>::from_timestamp(secs, nanos as u32)
    }
}

impl fmt::Display for FileTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(date) => write!(f, "{}", date.format("%Y-%m-%d %H:%M:%S UTC")),
            None => write!(f, "{} ticks", self.0),
        }
    }
}

#[cfg(feature = "serialize")]
impl serde::Serialize for FileTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.to_datetime() {
            Some(date) => serializer.serialize_str(date.to_rfc3339().as_str()),
            None => serializer.serialize_u64(self.0),
        }
    }
}
