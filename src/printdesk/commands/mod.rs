//! # Command Layer
//!
//! This module contains the **core business logic** of printdesk. Each command
//! lives in its own submodule as a plain function over a [`PrinterStore`].
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Validate raw form input before it reaches the store
//! - Run the filter/sort pipeline and the paginator for listings
//! - Return a structured [`CmdResult`] with printers and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr or formatting
//! - **Argument parsing**: that's the CLI layer's job
//! - **Prompting**: destructive commands ask a [`Confirm`] implementation
//!   supplied by the caller and never read stdin themselves
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests run
//! against `InMemoryStore` and check both the returned `CmdResult` and the
//! state left behind in the store.
//!
//! ## Command Modules
//!
//! - [`create`]: Add a printer
//! - [`get`]: Show one printer by id
//! - [`list`]: Filtered, sorted, paginated listing
//! - [`update`]: Edit a printer
//! - [`delete`]: Remove a printer after confirmation
//! - [`reset`]: Restore the seed inventory after confirmation
//! - [`config`]: Manage configuration

use crate::config::PrintdeskConfig;
use crate::error::Result;
use crate::model::PrinterRecord;
use crate::paginate::Page;
use serde::Serialize;

pub mod config;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod reset;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Printers created, changed or removed by the command.
    pub affected_printers: Vec<PrinterRecord>,
    /// Printers to display.
    pub listed_printers: Vec<PrinterRecord>,
    /// Pager state for listings.
    pub page: Option<Page<PrinterRecord>>,
    pub config: Option<PrintdeskConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_printers(mut self, printers: Vec<PrinterRecord>) -> Self {
        self.affected_printers = printers;
        self
    }

    pub fn with_listed_printers(mut self, printers: Vec<PrinterRecord>) -> Self {
        self.listed_printers = printers;
        self
    }

    pub fn with_config(mut self, config: PrintdeskConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Asks the user to approve a destructive action.
pub trait Confirm {
    /// Returns `Ok(true)` when the user agreed to `message`.
    fn request_confirmation(&mut self, message: &str) -> Result<bool>;
}

/// A fixed answer, for `--yes` flags and tests.
#[derive(Debug, Clone, Copy)]
pub struct Preconfirmed(pub bool);

impl Confirm for Preconfirmed {
    fn request_confirmation(&mut self, _message: &str) -> Result<bool> {
        Ok(self.0)
    }
}

/// Short label used in messages: `HP LaserJet (H1-201)`.
pub(crate) fn describe(printer: &PrinterRecord) -> String {
    format!("{} ({})", printer.brand_key(), printer.position_key())
}

#[cfg(test)]
pub(crate) fn ids<B: crate::store::backend::StorageBackend>(
    store: &crate::store::PrinterStore<B>,
) -> Vec<String> {
    store.list().iter().map(|p| p.id.clone()).collect()
}
