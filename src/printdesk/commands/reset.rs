use crate::commands::{CmdMessage, CmdResult, Confirm};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::PrinterStore;

/// Replaces the whole inventory with the seed printers once `confirm` approves.
pub fn run<B: StorageBackend, C: Confirm + ?Sized>(
    store: &mut PrinterStore<B>,
    confirm: &mut C,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let question = format!(
        "Replace all {} printers with the example inventory?",
        store.len()
    );
    if !confirm.request_confirmation(&question)? {
        result.add_message(CmdMessage::info("Operation cancelled."));
        return Ok(result);
    }

    store.reset()?;
    result.add_message(CmdMessage::success(format!(
        "Inventory reset ({} printers).",
        store.len()
    )));
    Ok(result.with_listed_printers(store.list().to_vec()))
}
