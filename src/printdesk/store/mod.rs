//! # Storage Layer
//!
//! Printers live in a durable key-value store under a single key
//! ([`PRINTERS_KEY`]). The whole inventory is serialized as one JSON array and
//! rewritten on every mutation; there is no incremental diffing.
//!
//! ## Two Halves
//!
//! - [`backend::StorageBackend`]: raw key/value I/O. Knows nothing about printers.
//!   - [`fs_backend::FsBackend`]: one file per key under a data directory.
//!   - [`mem_backend::MemBackend`]: a `HashMap`, for tests.
//! - [`printer_store::PrinterStore`]: the inventory itself. Owns the canonical
//!   list in memory, loads it once on open, and writes it back through the
//!   backend after each create, update or delete.
//!
//! The store is an explicit value handed to whoever needs it. There is no
//! process-wide instance; the CLI builds one per invocation.
//!
//! ## Loading
//!
//! On open the store reads [`PRINTERS_KEY`]:
//! - present and parseable → adopted as-is
//! - absent → replaced by the seed list, which is written back immediately
//! - present but malformed → an empty list is adopted and a warning is logged.
//!   The broken payload stays on disk until the next mutation overwrites it.
//!
//! ## Storage Layout
//!
//! For `FsBackend`:
//! ```text
//! <data dir>/
//! ├── printers.json       # JSON array of printer records
//! └── config.json         # printdesk configuration
//! ```

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod printer_store;

pub use printer_store::{LoadSource, Mutation, PrinterStore};

/// Storage key holding the serialized printer list.
pub const PRINTERS_KEY: &str = "printers";
