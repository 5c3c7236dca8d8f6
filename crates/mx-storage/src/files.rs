//! Whole-file text IO and directory enumeration for the compressor.

use mx_core::{MxError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

pub fn exists(path: &Path) -> bool {
    path.exists()
}

pub fn is_file(path: &Path) -> bool {
    path.is_file()
}

pub fn is_dir(path: &Path) -> bool {
    path.is_dir()
}

fn not_found(path: &Path) -> MxError {
    MxError::NotFound(path.display().to_string())
}

/// Read a whole file as UTF-8 text.
pub fn read_to_string_sync(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(not_found(path));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Async variant of [`read_to_string_sync`].
pub async fn read_to_string(path: &Path) -> Result<String> {
    if !fs::try_exists(path).await.unwrap_or(false) {
        return Err(not_found(path));
    }
    Ok(fs::read_to_string(path).await?)
}

/// Write a whole file as UTF-8 text, creating parent directories.
pub fn write_string_sync(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(std::fs::write(path, content)?)
}

/// Async variant of [`write_string_sync`].
pub async fn write_string(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    Ok(fs::write(path, content).await?)
}

/// Recursively enumerate files under a directory whose extension is in
/// the allow-list. The result is sorted for deterministic processing.
pub fn collect_files(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(not_found(dir));
    }
    let mut files = Vec::new();
    walk(dir, extensions, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk(dir: &Path, extensions: &[&str], out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk(&path, extensions, out)?;
        } else if matches_extension(&path, extensions) {
            out.push(path);
        }
    }
    Ok(())
}

fn matches_extension(path: &Path, extensions: &[&str]) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    extensions
        .iter()
        .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = read_to_string_sync(&tmp.path().join("absent.xml")).unwrap_err();
        assert!(matches!(err, MxError::NotFound(_)));
    }

    #[test]
    fn test_write_and_read_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/dir/file.xml");
        write_string_sync(&path, "<a/>").unwrap();
        assert_eq!(read_to_string_sync(&path).unwrap(), "<a/>");
    }

    #[tokio::test]
    async fn test_async_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("file.xml");
        write_string(&path, "<a/>").await.unwrap();
        assert_eq!(read_to_string(&path).await.unwrap(), "<a/>");
    }

    #[test]
    fn test_collect_files_filters_and_sorts() {
        let tmp = TempDir::new().unwrap();
        write_string_sync(&tmp.path().join("b.xml"), "x").unwrap();
        write_string_sync(&tmp.path().join("a.xml"), "x").unwrap();
        write_string_sync(&tmp.path().join("sub/c.xml"), "x").unwrap();
        write_string_sync(&tmp.path().join("skip.txt"), "x").unwrap();

        let files = collect_files(tmp.path(), &[".xml"]).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(tmp.path()).unwrap().display().to_string())
            .collect();
        assert_eq!(names, ["a.xml", "b.xml", "sub/c.xml"]);
    }

    #[test]
    fn test_collect_files_on_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a.xml");
        write_string_sync(&path, "x").unwrap();
        assert!(matches!(
            collect_files(&path, &[".xml"]),
            Err(MxError::NotFound(_))
        ));
    }
}
