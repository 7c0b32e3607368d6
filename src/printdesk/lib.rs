//! # Printdesk Architecture
//!
//! Printdesk manages the printer inventory of a campus print service: which
//! printers exist, where they are, how much paper they hold and whether they
//! are in service. Like its CLI, any other front end (a web admin page, a TUI)
//! talks to the same library through [`api::PrintdeskApi`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints tables and messages    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Form validation, listing pipeline, confirmations         │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - PrinterStore over a StorageBackend                       │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! Listings flow one way: store → [`filter::apply`] → [`paginate::paginate`]
//! → display. Create, update and delete go straight to the store, which
//! rewrites its whole snapshot; the listing is recomputed from scratch on the
//! next read.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Key-value backends and the printer store
//! - [`model`]: `PrinterRecord` and its enums, plus the seed inventory
//! - [`validation`]: Form input checks (building, floor, required fields)
//! - [`filter`]: The filter/sort pipeline
//! - [`paginate`]: Fixed-size pages over a listing
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod paginate;
pub mod store;
pub mod validation;
