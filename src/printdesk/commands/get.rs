use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::PrinterStore;

pub fn run<B: StorageBackend>(store: &PrinterStore<B>, id: &str) -> Result<CmdResult> {
    let printer = store.require(id)?.clone();
    Ok(CmdResult::default().with_listed_printers(vec![printer]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrintdeskError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn returns_the_printer() {
        let fixture = StoreFixture::seeded();
        let result = run(&fixture.store, "2").unwrap();
        assert_eq!(result.listed_printers[0].fields.brand, "Đéll");
    }

    #[test]
    fn unknown_id_is_an_error() {
        let fixture = StoreFixture::seeded();
        assert!(matches!(
            run(&fixture.store, "42"),
            Err(PrintdeskError::PrinterNotFound(_))
        ));
    }
}
