use super::backend::StorageBackend;
use super::PRINTERS_KEY;
use crate::error::{PrintdeskError, Result};
use crate::model::{generate_id, seed_printers, PrinterFields, PrinterRecord};
use tracing::{debug, info, warn};

/// Where the in-memory list came from when the store was loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from the persisted snapshot.
    Persisted,
    /// No snapshot existed; the seed list was adopted and written.
    Seeded,
    /// No snapshot existed and seeding is disabled.
    Empty,
    /// The snapshot could not be parsed; an empty list was adopted.
    Recovered,
}

/// Outcome of an update or delete addressed by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// The record was changed (or removed); carries its post-operation value.
    Applied(PrinterRecord),
    /// No record had the given id. The list is unchanged.
    NotFound,
}

impl Mutation {
    pub fn is_applied(&self) -> bool {
        matches!(self, Mutation::Applied(_))
    }
}

/// The printer inventory.
///
/// Holds the canonical list in memory and mirrors it to the backend as a
/// single JSON array under [`PRINTERS_KEY`]. Every mutation writes the full
/// list; the new list only replaces the in-memory one once that write has
/// succeeded, so a failed write leaves the store as it was.
pub struct PrinterStore<B: StorageBackend> {
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    printers: Vec<PrinterRecord>,
    source: LoadSource,
}

impl<B: StorageBackend> PrinterStore<B> {
    /// Opens the store, seeding it when no snapshot exists yet.
    pub fn open(backend: B) -> Result<Self> {
        Self::open_with(backend, true)
    }

    pub fn open_with(backend: B, seed_when_empty: bool) -> Result<Self> {
        let mut store = Self::from_parts(backend, Vec::new(), LoadSource::Empty);
        store.load(seed_when_empty)?;
        Ok(store)
    }

    pub(crate) fn from_parts(backend: B, printers: Vec<PrinterRecord>, source: LoadSource) -> Self {
        Self {
            backend,
            printers,
            source,
        }
    }

    /// (Re)reads the persisted snapshot.
    ///
    /// Only backend I/O failures are returned as errors. A payload that does
    /// not parse is logged and replaced by an empty list.
    pub fn load(&mut self, seed_when_empty: bool) -> Result<LoadSource> {
        let source = match self.backend.read(PRINTERS_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<PrinterRecord>>(&raw) {
                Ok(printers) => {
                    debug!(count = printers.len(), "loaded printer snapshot");
                    self.printers = printers;
                    LoadSource::Persisted
                }
                Err(err) => {
                    warn!(error = %err, "printer snapshot is malformed, starting empty");
                    self.printers = Vec::new();
                    LoadSource::Recovered
                }
            },
            None if seed_when_empty => {
                let seed = seed_printers();
                self.persist(&seed)?;
                info!(count = seed.len(), "seeded empty printer store");
                self.printers = seed;
                LoadSource::Seeded
            }
            None => {
                self.printers = Vec::new();
                LoadSource::Empty
            }
        };
        self.source = source;
        Ok(source)
    }

    pub fn source(&self) -> LoadSource {
        self.source
    }

    pub fn list(&self) -> &[PrinterRecord] {
        &self.printers
    }

    pub fn len(&self) -> usize {
        self.printers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.printers.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&PrinterRecord> {
        self.printers.iter().find(|p| p.id == id)
    }

    /// Fetches a record, turning absence into [`PrintdeskError::PrinterNotFound`].
    pub fn require(&self, id: &str) -> Result<&PrinterRecord> {
        self.get(id)
            .ok_or_else(|| PrintdeskError::PrinterNotFound(id.to_string()))
    }

    /// Appends a new record under a freshly generated id.
    pub fn create(&mut self, fields: PrinterFields) -> Result<PrinterRecord> {
        let mut id = generate_id();
        while self.get(&id).is_some() {
            id = generate_id();
        }
        let record = PrinterRecord::new(id, fields);

        let mut next = self.printers.clone();
        next.push(record.clone());
        self.commit(next)?;

        info!(id = %record.id, brand = %record.fields.brand, "printer created");
        Ok(record)
    }

    /// Replaces every field of the record with `id`, keeping the id.
    pub fn update(&mut self, id: &str, fields: PrinterFields) -> Result<Mutation> {
        let mut next = self.printers.clone();
        let outcome = match next.iter_mut().find(|p| p.id == id) {
            Some(record) => {
                record.fields = fields;
                Mutation::Applied(record.clone())
            }
            None => Mutation::NotFound,
        };
        self.commit(next)?;

        match &outcome {
            Mutation::Applied(_) => info!(%id, "printer updated"),
            Mutation::NotFound => debug!(%id, "update skipped, no such printer"),
        }
        Ok(outcome)
    }

    /// Removes the record with `id` if present.
    pub fn delete(&mut self, id: &str) -> Result<Mutation> {
        let mut next = self.printers.clone();
        let outcome = match next.iter().position(|p| p.id == id) {
            Some(pos) => Mutation::Applied(next.remove(pos)),
            None => Mutation::NotFound,
        };
        self.commit(next)?;

        match &outcome {
            Mutation::Applied(_) => info!(%id, "printer deleted"),
            Mutation::NotFound => debug!(%id, "delete skipped, no such printer"),
        }
        Ok(outcome)
    }

    /// Throws away the current inventory and writes the seed list.
    pub fn reset(&mut self) -> Result<()> {
        self.commit(seed_printers())?;
        self.source = LoadSource::Seeded;
        info!("printer store reset to seed list");
        Ok(())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn commit(&mut self, next: Vec<PrinterRecord>) -> Result<()> {
        self.persist(&next)?;
        self.printers = next;
        Ok(())
    }

    fn persist(&self, printers: &[PrinterRecord]) -> Result<()> {
        let payload = serde_json::to_string(printers).map_err(PrintdeskError::Serialization)?;
        self.backend.write(PRINTERS_KEY, &payload)?;
        debug!(count = printers.len(), bytes = payload.len(), "persisted printers");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PrinterStatus;
    use crate::store::mem_backend::MemBackend;
    use crate::store::memory::fixtures::sample_fields;
    use std::collections::HashSet;

    fn persisted(store: &PrinterStore<MemBackend>) -> Vec<PrinterRecord> {
        let raw = store.backend().raw(PRINTERS_KEY).expect("nothing persisted");
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn open_seeds_and_persists_when_absent() {
        let store = PrinterStore::open(MemBackend::new()).unwrap();

        assert_eq!(store.source(), LoadSource::Seeded);
        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[0].fields.brand, "HP");
        assert_eq!(store.list()[1].fields.brand, "Đéll");
        assert_eq!(persisted(&store), seed_printers());
    }

    #[test]
    fn open_without_seeding_stays_empty_and_unwritten() {
        let store = PrinterStore::open_with(MemBackend::new(), false).unwrap();
        assert_eq!(store.source(), LoadSource::Empty);
        assert!(store.is_empty());
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn open_adopts_existing_snapshot() {
        let only = vec![seed_printers().remove(1)];
        let backend = MemBackend::with_entry(PRINTERS_KEY, &serde_json::to_string(&only).unwrap());

        let store = PrinterStore::open(backend).unwrap();
        assert_eq!(store.source(), LoadSource::Persisted);
        assert_eq!(store.list(), only.as_slice());
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn open_recovers_from_malformed_snapshot() {
        let backend = MemBackend::with_entry(PRINTERS_KEY, "{not json");
        let store = PrinterStore::open(backend).unwrap();

        assert_eq!(store.source(), LoadSource::Recovered);
        assert!(store.is_empty());
        // The broken payload is left alone until the next mutation.
        assert_eq!(store.backend().raw(PRINTERS_KEY).as_deref(), Some("{not json"));
    }

    #[test]
    fn created_ids_are_unique() {
        let mut store = PrinterStore::open(MemBackend::new()).unwrap();
        for _ in 0..50 {
            store.create(sample_fields("HP", 10)).unwrap();
        }
        let ids: HashSet<_> = store.list().iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn create_appends_and_persists_whole_list() {
        let mut store = PrinterStore::open(MemBackend::new()).unwrap();
        let record = store.create(sample_fields("Canon", 0)).unwrap();

        assert_eq!(store.list().last(), Some(&record));
        assert_eq!(persisted(&store).len(), 3);
    }

    #[test]
    fn update_replaces_fields_but_keeps_id() {
        let mut store = PrinterStore::open(MemBackend::new()).unwrap();
        let mut fields = store.require("2").unwrap().fields.clone();
        fields.status = PrinterStatus::Active;
        fields.paper_quantity = 42;

        let outcome = store.update("2", fields.clone()).unwrap();
        assert_eq!(outcome, Mutation::Applied(PrinterRecord::new("2", fields)));
        assert_eq!(store.require("2").unwrap().fields.paper_quantity, 42);
        assert_eq!(persisted(&store)[1].fields.paper_quantity, 42);
    }

    #[test]
    fn update_missing_id_reports_not_found() {
        let mut store = PrinterStore::open(MemBackend::new()).unwrap();
        let before = store.list().to_vec();

        let outcome = store.update("nope", sample_fields("X", 1)).unwrap();
        assert_eq!(outcome, Mutation::NotFound);
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn delete_removes_record() {
        let mut store = PrinterStore::open(MemBackend::new()).unwrap();
        let outcome = store.delete("1").unwrap();

        assert!(outcome.is_applied());
        assert!(store.get("1").is_none());
        assert_eq!(persisted(&store).len(), 1);
    }

    #[test]
    fn delete_missing_id_is_a_no_op() {
        let mut store = PrinterStore::open(MemBackend::new()).unwrap();
        let before = store.list().to_vec();

        let outcome = store.delete("does-not-exist").unwrap();
        assert_eq!(outcome, Mutation::NotFound);
        assert_eq!(store.list(), before.as_slice());
        assert_eq!(persisted(&store), before);
    }

    #[test]
    fn failed_write_leaves_store_unchanged() {
        let mut store = PrinterStore::open(MemBackend::new()).unwrap();
        store.delete("1").unwrap();
        let before = store.list().to_vec();
        store.backend().set_simulate_write_error(true);

        assert!(store.create(sample_fields("Epson", 5)).is_err());
        assert!(store.delete("2").is_err());

        let mut fields = store.require("2").unwrap().fields.clone();
        fields.paper_quantity = 999;
        assert!(store.update("2", fields).is_err());
        assert_eq!(store.require("2").unwrap().fields.paper_quantity, 200);

        // Reset would bring printer "1" back.
        assert!(store.reset().is_err());
        assert!(store.get("1").is_none());

        assert_eq!(store.list(), before.as_slice());
        assert_eq!(persisted(&store), before);
    }

    #[test]
    fn reset_restores_seed() {
        let mut store = PrinterStore::open(MemBackend::new()).unwrap();
        store.delete("1").unwrap();
        store.create(sample_fields("Brother", 3)).unwrap();

        store.reset().unwrap();
        assert_eq!(store.list(), seed_printers().as_slice());
        assert_eq!(persisted(&store), seed_printers());
    }

    #[test]
    fn require_missing_is_not_found_error() {
        let store = PrinterStore::open(MemBackend::new()).unwrap();
        assert!(matches!(
            store.require("zzz"),
            Err(PrintdeskError::PrinterNotFound(id)) if id == "zzz"
        ));
    }
}
