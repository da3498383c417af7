//! Whole-file reads and atomic overwrites

use std::fs::{self, OpenOptions};
use std::io::Write;

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so the target holds either its previous
/// content or `content`, never a partial write. The temp file lives next to
/// the target so the rename stays on one filesystem.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    if let Err(e) = temp_file.write_all(content).and_then(|_| temp_file.sync_all()) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(&temp_path, e));
    }

    // Keep the target's mode across the rename
    if let Ok(metadata) = fs::metadata(&native_path) {
        temp_file
            .set_permissions(metadata.permissions())
            .map_err(|e| Error::io(&temp_path, e))?;
    }

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;
    drop(temp_file);

    fs::rename(&temp_path, &native_path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        Error::io(&native_path, e)
    })?;

    tracing::debug!(path = %path, bytes = content.len(), "wrote file");
    Ok(())
}

/// Read the whole file as UTF-8 text.
///
/// Missing files, permission failures and invalid UTF-8 all surface as
/// [`Error::Io`].
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    let content = fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))?;
    tracing::debug!(path = %path, bytes = content.len(), "read file");
    Ok(content)
}

/// Overwrite the file with `content`.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_atomic_leaves_no_temp_file_behind() {
        let temp = TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path().join("service.ts"));

        write_atomic(&path, b"content").unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec!["service.ts".to_string()]);
    }

    #[test]
    fn read_text_rejects_invalid_utf8() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("binary.ts");
        fs::write(&file_path, [0xff, 0xfe, 0x00]).unwrap();

        let err = read_text(&NormalizedPath::new(&file_path)).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
