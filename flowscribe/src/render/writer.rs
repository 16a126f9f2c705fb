use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::EngineError;

/// Writes `contents` to `dir/file_name`, creating `dir` if absent.
///
/// The document is rendered into a temporary file in the target directory
/// and atomically persisted, so a failure mid-write never leaves a
/// truncated file that could be mistaken for success.
pub fn write_atomic(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf, EngineError> {
    let target = dir.join(file_name);
    let write_err = |source: std::io::Error| EngineError::Write {
        path: target.clone(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(write_err)?;

    let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
    temp.write_all(contents.as_bytes()).map_err(write_err)?;
    temp.flush().map_err(write_err)?;
    temp.persist(&target)
        .map_err(|persist_error| write_err(persist_error.error))?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_missing_directories_and_writes() {
        let root = tempdir().expect("tempdir");
        let out = root.path().join("Gen").join("nested");

        let path = write_atomic(&out, "Fn.md", "content").expect("write");
        assert_eq!(path, out.join("Fn.md"));
        assert_eq!(std::fs::read_to_string(&path).expect("read back"), "content");
    }

    #[test]
    fn overwrites_existing_file_completely() {
        let root = tempdir().expect("tempdir");
        let dir = root.path();

        write_atomic(dir, "Fn.md", "long old content that should vanish").expect("first write");
        write_atomic(dir, "Fn.md", "new").expect("second write");

        assert_eq!(
            std::fs::read_to_string(dir.join("Fn.md")).expect("read back"),
            "new"
        );
    }
}
