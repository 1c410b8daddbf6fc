use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Files rooted at the output directory on the local disk.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    async fn exists(&self, path: &str) -> bool {
        tokio::fs::try_exists(self.full_path(path))
            .await
            .unwrap_or(false)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }

    async fn create_dir(&self, path: &str) -> Result<()> {
        tokio::fs::create_dir_all(self.full_path(path)).await?;
        Ok(())
    }

    fn display_path(&self, path: &str) -> String {
        let base = self.base_path.trim_end_matches(['/', '\\']);
        if base.is_empty() {
            path.to_string()
        } else {
            format!("{}/{}", base, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_exists() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        tokio_test::block_on(async {
            assert!(!storage.exists("base-set/1.jpg").await);
            storage.write_file("base-set/1.jpg", b"jpeg").await.unwrap();
            assert!(storage.exists("base-set/1.jpg").await);
        });

        let written = std::fs::read(temp_dir.path().join("base-set").join("1.jpg")).unwrap();
        assert_eq!(written, b"jpeg");
    }

    #[test]
    fn test_display_path() {
        let storage = LocalStorage::new("database/pkmn-images/".to_string());
        assert_eq!(
            storage.display_path("base-set/4.jpg"),
            "database/pkmn-images/base-set/4.jpg"
        );
    }
}
