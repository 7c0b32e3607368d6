use crate::commands::{describe, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::{Mutation, PrinterStore};
use crate::validation::PrinterForm;

/// Applies `form` on top of the printer with `id`.
///
/// An unknown id is reported as a warning rather than an error, and nothing
/// is validated or written in that case.
pub fn run<B: StorageBackend>(
    store: &mut PrinterStore<B>,
    id: &str,
    form: PrinterForm,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(current) = store.get(id) else {
        result.add_message(CmdMessage::warning(format!("Printer not found: {}", id)));
        return Ok(result);
    };

    if form.is_empty() {
        result.add_message(CmdMessage::info("Nothing to update."));
        return Ok(result);
    }

    let fields = form.into_fields(current.fields.clone())?;
    match store.update(id, fields)? {
        Mutation::Applied(printer) => {
            result.add_message(CmdMessage::success(format!(
                "Printer updated: {}",
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
