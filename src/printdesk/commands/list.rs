use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{self, FilterState};
use crate::paginate::paginate;
use crate::store::backend::StorageBackend;
use crate::store::PrinterStore;

/// Runs the pipeline over the whole inventory and returns page `page` of it.
///
/// The page is not clamped here; the CLI clamps user input before calling.
pub fn run<B: StorageBackend>(
    store: &PrinterStore<B>,
    filter: &FilterState,
    page: usize,
) -> Result<CmdResult> {
    let view = filter::apply(store.list(), filter);
    let page = paginate(&view, store.len(), page);

    let mut result = CmdResult::default().with_listed_printers(page.items.clone());
    if store.is_empty() {
        result.add_message(CmdMessage::info("No printers in the inventory."));
    } else if view.is_empty() {
        result.add_message(CmdMessage::info("No printers match the current filter."));
    } else if page.items.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Page {} has no printers.",
            page.page
        )));
    }
    result.page = Some(page);
    Ok(result)
}
