use super::backend::StorageBackend;
use crate::error::{PrintdeskError, Result};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// File-per-key backend rooted at a data directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(PrintdeskError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(PrintdeskError::Io)?;
        Ok(Some(content))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        let target = self.key_path(key);
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, value).map_err(PrintdeskError::Io)?;
        if let Err(err) = fs::rename(&tmp, target) {
            let _ = fs::remove_file(&tmp);
            return Err(PrintdeskError::Io(err));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(dir.path());
        assert_eq!(backend.read("printers").unwrap(), None);
    }

    #[test]
    fn write_creates_root_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(dir.path().join("nested").join("data"));

        backend.write("printers", "[1]").unwrap();
        backend.write("printers", "[2]").unwrap();

        assert_eq!(backend.read("printers").unwrap().as_deref(), Some("[2]"));
        assert!(backend.key_path("printers").ends_with("printers.json"));
    }

    #[test]
    fn write_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(dir.path());
        backend.write("printers", "[]").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["printers.json".to_string()]);
    }

    #[test]
    fn failed_rename_cleans_up_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(dir.path());
        // A non-empty directory where the file should go makes the rename fail.
        let blocker = backend.key_path("printers");
        fs::create_dir(&blocker).unwrap();
        fs::write(blocker.join("keep"), "x").unwrap();

        assert!(backend.write("printers", "[]").is_err());

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["printers.json".to_string()]);
    }
}
