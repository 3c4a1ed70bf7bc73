use log::info;
use std::{
    io,
    path::{Path, PathBuf},
};

use crate::{error::UploadError, naming::UploadTarget};

/// Flat directory of `.upload` files. Nothing is ever read back.
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the storage directory if needed. Existing uploads are left alone.
    pub fn ensure_dir(&self) -> io::Result<()> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root)?;
            info!("Created storage directory {}", self.root.display());
        }
        Ok(())
    }

    pub fn path_for(&self, target: &UploadTarget) -> PathBuf {
        self.root.join(target.file_name())
    }

    /// Writes `content` to the file for `target`, truncating any previous one.
    ///
    /// Returns once the write call completes; the data is not synced to disk.
    pub async fn write(&self, target: &UploadTarget, content: &str) -> Result<PathBuf, UploadError> {
        let path = self.path_for(target);
        tokio::fs::write(&path, content)
            .await
            .map_err(|source| UploadError::Write {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use tempfile::TempDir;

    #[tokio::test]
    async fn writes_random_upload() {
        let temp = TempDir::new().unwrap();
        let store = UploadStore::new(temp.path());

        let path = store.write(&UploadTarget::random(), "hello").await.unwrap();

        assert_eq!(path.parent().unwrap(), temp.path());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    }

    #[tokio::test]
    async fn same_second_named_upload_overwrites() {
        let temp = TempDir::new().unwrap();
        let store = UploadStore::new(temp.path());
        let at = Local.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let target = UploadTarget::named("server1", at).unwrap();

        store.write(&target, "first, and longer").await.unwrap();
        let path = store.write(&target, "second").await.unwrap();

        assert_eq!(
            path.file_name().unwrap(),
            "server1.2024-01-01.10:00:00.upload"
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn missing_directory_is_a_write_error() {
        let temp = TempDir::new().unwrap();
        let store = UploadStore::new(temp.path().join("gone"));

        let err = store.write(&UploadTarget::random(), "x").await.unwrap_err();
        assert!(matches!(err, UploadError::Write { .. }));
    }

    #[test]
    fn ensure_dir_keeps_existing_files() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("drops");
        let store = UploadStore::new(&root);

        store.ensure_dir().unwrap();
        std::fs::write(root.join("old.upload"), "keep me").unwrap();
        store.ensure_dir().unwrap();

        assert_eq!(
            std::fs::read_to_string(root.join("old.upload")).unwrap(),
            "keep me"
        );
    }
}
