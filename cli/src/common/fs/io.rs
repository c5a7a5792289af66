//! # Linkstamp Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes the filesystem I/O the link file writer performs:
//! ensuring parent directories exist, reading an existing file as text to look
//! for the generated-file stamp, writing bytes (creating parents), and removing
//! a directory tree that stands in the way of a link file.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: `mkdir -p`, rejecting a path that exists as a non-directory.
//! - **`read_file_lossy`**: Reads bytes and decodes them as UTF-8, replacing invalid sequences.
//! - **`write_bytes_to_file`**: Ensures the parent exists, then creates or truncates the file.
//! - **`remove_dir_tree`**: Recursive removal of a directory.
//! - **`expand_tilde`**: `~` expansion for paths typed on the command line.
//!
//! All async helpers go through `tokio::fs` and return the raw `std::io::Error`,
//! so the writer can classify failures (e.g. "is a directory") before mapping
//! them to `LinkFileError`.
//!
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Ensures that a directory exists at `path`, creating parents as needed.
///
/// # Errors
///
/// Returns an `io::Error` if creation fails, or one of kind `AlreadyExists`
/// if the path exists but is not a directory.
pub async fn ensure_dir_exists(path: &Path) -> io::Result<()> {
    match fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => {
            debug!("Directory already exists: {:?}", path);
            Ok(())
        }
        Ok(_) => Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {:?}", path),
        )),
        Err(_) => {
            fs::create_dir_all(path).await?;
            debug!("Created directory: {:?}", path);
            Ok(())
        }
    }
}

/// Reads the whole file and decodes it as UTF-8, lossily.
///
/// Stamp detection only needs a substring match, so invalid UTF-8 in a foreign
/// file must not turn into an error.
pub async fn read_file_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes `content` to `path`, creating missing parent directories and
/// truncating any existing file.
pub async fn write_bytes_to_file(path: &Path, content: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent).await?;
    }
    fs::write(path, content).await?;
    debug!("Wrote {} bytes to file: {:?}", content.len(), path);
    Ok(())
}

/// Removes the directory at `path` and everything below it.
pub async fn remove_dir_tree(path: &Path) -> io::Result<()> {
    fs::remove_dir_all(path).await
}

/// Expands a leading `~` to the user's home directory.
pub fn expand_tilde(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Parent directories are created on demand.
    #[tokio::test]
    async fn test_write_bytes_creates_parents() -> io::Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("dist/nested/index.js");
        write_bytes_to_file(&file_path, b"export {};").await?;
        assert_eq!(std::fs::read(&file_path)?, b"export {};");
        Ok(())
    }

    /// An existing file is truncated, not appended to.
    #[tokio::test]
    async fn test_write_bytes_overwrites() -> io::Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("a.js");
        std::fs::write(&file_path, "a much longer original body")?;
        write_bytes_to_file(&file_path, b"short").await?;
        assert_eq!(std::fs::read_to_string(&file_path)?, "short");
        Ok(())
    }

    /// Writing onto a directory fails and leaves the directory alone.
    #[tokio::test]
    async fn test_write_bytes_onto_directory_fails() -> io::Result<()> {
        let base_dir = tempdir()?;
        let dir_path = base_dir.path().join("index.js");
        std::fs::create_dir(&dir_path)?;
        assert!(write_bytes_to_file(&dir_path, b"x").await.is_err());
        assert!(dir_path.is_dir());
        Ok(())
    }

    #[tokio::test]
    async fn test_ensure_dir_exists_path_is_file() -> io::Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("a_file.txt");
        std::fs::write(&file_path, "hello")?;
        let err = ensure_dir_exists(&file_path).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert!(err.to_string().contains("Path exists but is not a directory"));
        Ok(())
    }

    #[tokio::test]
    async fn test_read_file_lossy_tolerates_invalid_utf8() -> io::Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("bin.js");
        std::fs::write(&file_path, [0xff, 0xfe, b'O', b'K'])?;
        let text = read_file_lossy(&file_path).await?;
        assert!(text.ends_with("OK"));
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_dir_tree() -> io::Result<()> {
        let base_dir = tempdir()?;
        let tree = base_dir.path().join("tree");
        std::fs::create_dir_all(tree.join("a/b"))?;
        std::fs::write(tree.join("a/b/c.txt"), "c")?;
        remove_dir_tree(&tree).await?;
        assert!(!tree.exists());
        Ok(())
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("dist/index.js"), PathBuf::from("dist/index.js"));
        assert_eq!(expand_tilde("/abs/a~b"), PathBuf::from("/abs/a~b"));
    }
}
