use super::{LoadError, LoadedDocument};
use std::io::ErrorKind;
use std::path::Path;

/// Read a file as UTF-8 text into ordered lines, whatever its extension.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            LoadError::FileNotFound(path.to_path_buf())
        } else {
            LoadError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "read text file");

    Ok(LoadedDocument::from_text(
        &content,
        format!("text:{}", path.display()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Test that load returns FileNotFound for non-existent files.
    #[test]
    fn test_text_load_nonexistent_file() {
        let result = load(Path::new("/nonexistent/path/book.txt"));
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    /// Test that lines come back in file order without terminators.
    #[test]
    fn test_text_load_preserves_line_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.txt");
        fs::write(&path, "one two\nthree\r\nfour").unwrap();

        let doc = load(&path).unwrap();
        assert_eq!(doc.lines, vec!["one two", "three", "four"]);
        assert!(doc.source.starts_with("text:"));
    }

    /// Test that the extension does not change how a file is read.
    #[test]
    fn test_text_load_ignores_extension() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["notes.pdf", "notes.epub", "notes"] {
            let path = dir.path().join(name);
            fs::write(&path, "hello, world\n").unwrap();

            let doc = load(&path).unwrap();
            assert_eq!(doc.lines, vec!["hello, world"], "{name} should load as text");
        }
    }

    /// Test that bytes which are not UTF-8 surface as Unreadable.
    #[test]
    fn test_text_load_invalid_utf8_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.txt");
        fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let result = load(&path);
        assert!(matches!(result, Err(LoadError::Unreadable { .. })));
    }

    /// Test that a directory path surfaces as Unreadable.
    #[test]
    fn test_text_load_directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(dir.path());
        assert!(matches!(result, Err(LoadError::Unreadable { .. })));
    }
}
