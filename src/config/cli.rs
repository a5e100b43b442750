use crate::core::Storage;
use crate::utils::error::{PhoneError, Result};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Reads inputs from the local filesystem and standard input.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &Path) -> Result<String> {
        let label = path.display().to_string();
        let data = tokio::fs::read(path)
            .await
            .map_err(|e| PhoneError::retrieval(&label, e))?;
        String::from_utf8(data).map_err(|e| PhoneError::retrieval(label, e))
    }

    async fn read_stdin(&self) -> Result<String> {
        let mut data = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut data)
            .await
            .map_err(|e| PhoneError::retrieval("<stdin>", e))?;
        String::from_utf8(data).map_err(|e| PhoneError::retrieval("<stdin>", e))
    }

    async fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(path, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("phones.txt");
        let storage = LocalStorage::new();

        tokio_test::block_on(storage.write_file(&path, b"+7(913)111-22-33\n")).unwrap();
        let text = tokio_test::block_on(storage.read_file(&path)).unwrap();

        assert_eq!(text, "+7(913)111-22-33\n");
    }

    #[test]
    fn test_read_missing_file_is_retrieval_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        let err = tokio_test::block_on(LocalStorage::new().read_file(&path)).unwrap_err();

        assert!(matches!(err, PhoneError::RetrievalError { .. }));
    }

    #[test]
    fn test_read_non_utf8_is_retrieval_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cp1251.txt");
        std::fs::write(&path, [0xcd, 0xee, 0xec, 0xe5, 0xf0]).unwrap();

        let err = tokio_test::block_on(LocalStorage::new().read_file(&path)).unwrap_err();

        assert!(matches!(err, PhoneError::RetrievalError { .. }));
    }
}
