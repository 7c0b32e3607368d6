use super::mem_backend::MemBackend;
use super::printer_store::{LoadSource, PrinterStore};

pub type InMemoryStore = PrinterStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// An empty, unseeded store. Nothing is written until the first mutation.
    pub fn new() -> Self {
        PrinterStore::from_parts(MemBackend::new(), Vec::new(), LoadSource::Empty)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{PrinterFields, PrinterStatus, PrinterType};
    use chrono::NaiveDate;

    /// Valid fields for a printer located in `H1-201`.
    pub fn sample_fields(brand: &str, paper_quantity: u32) -> PrinterFields {
        PrinterFields {
            brand: brand.to_string(),
            model: "Model".to_string(),
            paper_quantity,
            date_added: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            printer_type: PrinterType::Laser,
            note: String::new(),
            building: "H1".to_string(),
            floor: "201".to_string(),
            status: PrinterStatus::Active,
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Starts from the two seed printers, as a first launch would.
        pub fn seeded() -> Self {
            Self {
                store: PrinterStore::open(MemBackend::new()).unwrap(),
            }
        }

        pub fn with_printers(mut self, count: usize) -> Self {
            for i in 0..count {
                let mut fields = sample_fields(&format!("Brand {:02}", i + 1), i as u32);
                fields.floor = format!("{:03}", 100 + i);
                self.store.create(fields).unwrap();
            }
            self
        }

        pub fn with_printer(
            mut self,
            brand: &str,
            model: &str,
            location: (&str, &str),
            paper_quantity: u32,
            status: PrinterStatus,
        ) -> Self {
            let fields = PrinterFields {
                model: model.to_string(),
                building: location.0.to_string(),
                floor: location.1.to_string(),
                status,
                ..sample_fields(brand, paper_quantity)
            };
            self.store.create(fields).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::store::PRINTERS_KEY;

    #[test]
    fn new_store_is_empty_and_unwritten() {
        let store = InMemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.backend().raw(PRINTERS_KEY), None);
    }

    #[test]
    fn fixture_builds_printers() {
        let fixture = StoreFixture::new().with_printers(3);
        assert_eq!(fixture.store.len(), 3);
        assert_eq!(fixture.store.backend().write_count(), 3);
    }

    #[test]
    fn seeded_fixture_has_two_printers() {
        let fixture = StoreFixture::seeded();
        assert_eq!(fixture.store.len(), 2);
    }
}
