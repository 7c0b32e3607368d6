use crate::commands::{describe, CmdMessage, CmdResult, Confirm};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::{Mutation, PrinterStore};

/// Removes the printer with `id` once `confirm` approves.
pub fn run<B: StorageBackend, C: Confirm + ?Sized>(
    store: &mut PrinterStore<B>,
    id: &str,
    confirm: &mut C,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(printer) = store.get(id) else {
        result.add_message(CmdMessage::warning(format!("Printer not found: {}", id)));
        return Ok(result);
    };

    let question = format!(
        "Delete printer {}? This cannot be undone.",
        describe(printer)
    );
    if !confirm.request_confirmation(&question)? {
        result.add_message(CmdMessage::info("Operation cancelled."));
        return Ok(result);
    }

    match store.delete(id)? {
        Mutation::Applied(printer) => {
            result.add_message(CmdMessage::success(format!(
                "Printer deleted: {}",
                describe(&printer)
            )));
            result.affected_printers.push(printer);
        }
        Mutation::NotFound => {
            result.add_message(CmdMessage::warning(format!("Printer not found: {}", id)));
        }
    }
    Ok(result)
}
