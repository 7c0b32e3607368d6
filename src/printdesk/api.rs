//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for UI clients. It dispatches to `commands::*::run` and hands
//! back `Result<CmdResult>`; it holds no business logic of its own.
//!
//! `PrintdeskApi<B: StorageBackend>` owns the store it was built with:
//! - Production: `PrintdeskApi<FsBackend>`
//! - Testing: `PrintdeskApi<MemBackend>`
//!
//! API tests only check dispatch. Command behavior is tested next to each
//! command.

use crate::commands;
use crate::error::Result;
use crate::filter::FilterState;
use crate::store::backend::StorageBackend;
use crate::store::PrinterStore;
use crate::validation::PrinterForm;
use std::path::{Path, PathBuf};

pub struct PrintdeskApi<B: StorageBackend> {
    store: PrinterStore<B>,
    data_dir: PathBuf,
}

impl<B: StorageBackend> PrintdeskApi<B> {
    pub fn new(store: PrinterStore<B>, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn create_printer(&mut self, form: PrinterForm) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, form)
    }

    pub fn get_printer(&self, id: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn list_printers(&self, filter: &FilterState, page: usize) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter, page)
    }

    pub fn update_printer(&mut self, id: &str, form: PrinterForm) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, form)
    }

    pub fn delete_printer<C: Confirm + ?Sized>(
        &mut self,
        id: &str,
        confirm: &mut C,
    ) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id, confirm)
    }

    pub fn reset<C: Confirm + ?Sized>(&mut self, confirm: &mut C) -> Result<commands::CmdResult> {
        commands::reset::run(&mut self.store, confirm)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn store(&self) -> &PrinterStore<B> {
        &self.store
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, Confirm, MessageLevel, Preconfirmed};
