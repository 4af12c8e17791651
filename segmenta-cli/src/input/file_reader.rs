//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads input files, decoding malformed UTF-8 lossily
pub struct FileReader;

impl FileReader {
    /// Read a file as text, replacing invalid UTF-8 with U+FFFD
    pub fn read_text(path: &Path) -> Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        let text = segmenta_core::decode_lossy(&bytes);
        if let std::borrow::Cow::Owned(_) = text {
            log::warn!("{} is not valid UTF-8; invalid bytes replaced", path.display());
        }
        Ok(text.into_owned())
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let content = "Hello, world!\nThis is a test.";
        fs::write(&file_path, content).unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let result = FileReader::read_text(Path::new("/nonexistent/file.txt"));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read file"));
    }

    #[test]
    fn test_read_text_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("latin1.txt");
        fs::write(&file_path, b"caf\xE9 ok").unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), "caf\u{FFFD} ok");
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");
        File::create(&file_path).unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), "");
        assert_eq!(FileReader::file_size(&file_path).unwrap(), 0);
    }
}
