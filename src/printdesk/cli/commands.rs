//! # CLI Layer
//!
//! This module is **one possible UI client** for printdesk. It is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin prompts)
//! - Resolves the data directory from flags and the environment
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Open the store and load configuration into `AppContext`
//! 3. **API Dispatch**: Call the matching `PrintdeskApi` method
//! 4. **Output Formatting**: Turn a `CmdResult` into tables and colored messages
//!
//! Errors bubble up to `main.rs`, which prints them and exits with status 1.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call API and format output

use super::logging::init_tracing;
use super::print::{print_config, print_messages, print_page, print_printer};
use super::prompt::StdinConfirm;
use super::setup::{Cli, Commands, ListArgs};
use clap::Parser;
use directories::ProjectDirs;
use printdesk::api::{CmdMessage, ConfigAction, Confirm, Preconfirmed, PrintdeskApi};
use printdesk::config::PrintdeskConfig;
use printdesk::error::{PrintdeskError, Result};
use printdesk::paginate::{clamp_page, page_count};
use printdesk::store::fs::FileStore;
use printdesk::store::fs_backend::FsBackend;
use printdesk::store::LoadSource;
use printdesk::validation::PrinterForm;
use std::path::PathBuf;
use tracing::debug;

/// Overrides the platform data directory when `--data-dir` is not given.
pub const HOME_ENV: &str = "PRINTDESK_HOME";

struct AppContext {
    api: PrintdeskApi<FsBackend>,
    config: PrintdeskConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { printer }) => handle_add(&mut ctx, printer.into()),
        Some(Commands::List { listing }) => handle_list(&ctx, listing),
        Some(Commands::Show { id }) => handle_show(&ctx, &id),
        Some(Commands::Edit { id, printer }) => handle_edit(&mut ctx, &id, printer.into()),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, &id, yes),
        Some(Commands::Reset { yes }) => handle_reset(&mut ctx, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, ListArgs::default()),
    }
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("edu", "printdesk", "printdesk")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PrintdeskError::Api("Could not determine data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    debug!(data_dir = %data_dir.display(), "resolved data directory");

    let config = PrintdeskConfig::load(&data_dir)?;
    let store = FileStore::open_dir(&data_dir, config.seed)?;

    if store.source() == LoadSource::Recovered {
        print_messages(&[CmdMessage::warning(
            "Stored printer data could not be read; starting from an empty inventory. \
             It will be overwritten by the next change.",
        )]);
    }

    Ok(AppContext {
        api: PrintdeskApi::new(store, data_dir),
        config,
    })
}

fn confirmer(yes: bool) -> Box<dyn Confirm> {
    if yes {
        Box::new(Preconfirmed(true))
    } else {
        Box::new(StdinConfirm)
    }
}

fn handle_add(ctx: &mut AppContext, form: PrinterForm) -> Result<()> {
    let result = ctx.api.create_printer(form)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, listing: ListArgs) -> Result<()> {
    let mut filter = listing.filter();
    if !listing.all {
        filter = filter.or(ctx.config.default_filter);
    }

    let total_pages = page_count(ctx.api.store().len());
    let page = clamp_page(listing.page, total_pages);
    if page != listing.page {
        debug!(requested = listing.page, page, "clamped page number");
    }

    let result = ctx.api.list_printers(&filter, page)?;
    if let Some(page) = &result.page {
        print_page(page);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.get_printer(id)?;
    for printer in &result.listed_printers {
        print_printer(printer);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: &str, form: PrinterForm) -> Result<()> {
    let result = ctx.api.update_printer(id, form)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str, yes: bool) -> Result<()> {
    let mut confirm = confirmer(yes);
    let result = ctx.api.delete_printer(id, confirm.as_mut())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let mut confirm = confirmer(yes);
    let result = ctx.api.reset(confirm.as_mut())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
