use super::fs_backend::FsBackend;
use super::printer_store::PrinterStore;
use crate::error::Result;
use std::path::PathBuf;

/// Production store: the inventory persisted under a data directory.
pub type FileStore = PrinterStore<FsBackend>;

impl FileStore {
    /// Opens the store rooted at `root`, seeding it if `seed_when_empty` and
    /// no snapshot exists yet.
    pub fn open_dir(root: impl Into<PathBuf>, seed_when_empty: bool) -> Result<Self> {
        PrinterStore::open_with(FsBackend::new(root), seed_when_empty)
    }
}
