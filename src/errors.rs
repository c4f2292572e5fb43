use std::{io, path::PathBuf};

/// A Fos Error
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct FosError(#[from] Box<FosErrorKind>);

impl FosError {
    pub(crate) fn new(kind: FosErrorKind) -> FosError {
        FosError(Box::new(kind))
    }

    /// Return the specific type of error
    pub fn kind(&self) -> &FosErrorKind {
        &self.0
    }

    /// Consume self and return the specific type of error
    pub fn into_kind(self) -> FosErrorKind {
        *self.0
    }
}

impl From<FosErrorKind> for FosError {
    fn from(err: FosErrorKind) -> Self {
        FosError::new(err)
    }
}

/// Specific type of error
#[derive(thiserror::Error, Debug)]
pub enum FosErrorKind {
    #[error("{}: not a file", .path.display())]
    NotAFile { path: PathBuf },

    #[error("couldn't read file {}: {source}", .path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("not a Fallout 4 savefile")]
    BadMagic,

    #[error("not enough data to read {field} at {position}: needed {needed} bytes, {available} remaining")]
    TruncatedBuffer {
        field: &'static str,
        position: usize,
        needed: u64,
        available: usize,
    },

    #[error("unable to decompress lz4 block: {msg}")]
    DecompressionFailure { msg: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_of_error_test() {
        assert_eq!(std::mem::size_of::<FosError>(), 8);
    }

    #[test]
    fn truncated_message_names_the_field() {
        let err = FosError::from(FosErrorKind::TruncatedBuffer {
            field: "plugin name",
            position: 120,
            needed: 10,
            available: 4,
        });
        assert_eq!(
            err.to_string(),
            "not enough data to read plugin name at 120: needed 10 bytes, 4 remaining"
        );
    }
}
