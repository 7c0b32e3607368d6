use crate::commands::{describe, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PrinterFields;
use crate::store::backend::StorageBackend;
use crate::store::PrinterStore;
use crate::validation::PrinterForm;

pub fn run<B: StorageBackend>(store: &mut PrinterStore<B>, form: PrinterForm) -> Result<CmdResult> {
    let fields = form.into_fields(PrinterFields::default())?;
    let printer = store.create(fields)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Printer added: {}",
        describe(&printer)
    )));
    Ok(result.with_affected_printers(vec![printer]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrintdeskError;
    use crate::model::{PrinterStatus, PrinterType};
    use crate::store::memory::InMemoryStore;

    fn form() -> PrinterForm {
        PrinterForm {
            brand: Some("Canon".into()),
            model: Some("LBP 2900".into()),
            paper_quantity: Some("0".into()),
            building: Some("h1".into()),
            floor: Some("201".into()),
            ..Default::default()
        }
    }

    #[test]
    fn creates_printer_with_form_defaults() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, form()).unwrap();

        assert_eq!(store.len(), 1);
        let printer = &result.affected_printers[0];
        assert_eq!(store.list()[0], *printer);
        assert_eq!(printer.fields.building, "H1");
        assert_eq!(printer.fields.printer_type, PrinterType::Laser);
        assert_eq!(printer.fields.status, PrinterStatus::Active);
        assert!(result.messages[0].content.contains("Canon LBP 2900"));
    }

    #[test]
    fn invalid_form_never_reaches_store() {
        let mut store = InMemoryStore::new();
        let bad = PrinterForm {
            floor: Some("2".into()),
            ..form()
        };

        assert!(matches!(
            run(&mut store, bad),
            Err(PrintdeskError::Validation(_))
        ));
        assert!(store.is_empty());
        assert_eq!(store.backend().write_count(), 0);
    }
}
