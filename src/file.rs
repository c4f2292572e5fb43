use crate::{FosError, FosErrorKind};
use std::{fs, path::Path};
use tracing::debug;

/// Read an entire save into memory.
///
/// Directories are rejected with [`FosErrorKind::NotAFile`] and any other
/// I/O failure is reported as [`FosErrorKind::UnreadableFile`].
pub fn read_save<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, FosError> {
    let path = path.as_ref();
    let unreadable = |source| {
        FosError::from(FosErrorKind::UnreadableFile {
            path: path.to_path_buf(),
            source,
        })
    };

    let metadata = fs::metadata(path).map_err(unreadable)?;
    if metadata.is_dir() {
        return Err(FosErrorKind::NotAFile {
            path: path.to_path_buf(),
        }
        .into());
    }

    let data = fs::read(path).map_err(unreadable)?;
    debug!(path = %path.display(), len = data.len(), "read save");
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_is_not_a_file() {
        let err = read_save(std::env::temp_dir()).unwrap_err();
        assert!(matches!(err.kind(), FosErrorKind::NotAFile { .. }));
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let path = std::env::temp_dir().join("fossave-definitely-missing.fos");
        let err = read_save(&path).unwrap_err();
        match err.into_kind() {
            FosErrorKind::UnreadableFile { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            x => panic!("unexpected error: {:?}", x),
        }
    }
}
