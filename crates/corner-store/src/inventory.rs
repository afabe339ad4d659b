//! # Inventory Repository
//!
//! The single owner of the in-memory catalog and every mutation to it.
//!
//! ## Key Operations
//! - Load the catalog file (sorted, then swept for low stock)
//! - CRUD on product records with id-uniqueness enforcement
//! - Delta stock adjustments with the replenishment policy applied
//! - Persist-after-every-mutation so the file always trails by at most one
//!   failed save
//!
//! ## Replenishment Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              Automatic Replenishment (no reorder workflow)              │
//! │                                                                         │
//! │  after load:          every record is observed                          │
//! │  after adjust_stock:  the adjusted record only is observed              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  observed stock <= 10 ──► stock := 100                                  │
//! │       │                                                                 │
//! │       ├── catalog persisted (one rewrite for the whole sweep)           │
//! │       └── StockEvent::Replenished emitted per product                   │
//! │                                                                         │
//! │  add/update are NOT observation points: a record created with low       │
//! │  stock stays low until a load or its own adjustment observes it.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency Model
//! Mutations apply in memory first, then rewrite the file. A failed rewrite
//! leaves memory ahead of disk; the error propagates and [`InventoryRepository::save`]
//! is the retry hook. Nothing is ever rolled back in memory.

use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use corner_core::validation::validate_record;
use corner_core::{CoreError, ProductRecord, REPLENISH_STOCK_LEVEL};

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::events::{StockEvent, StockEventSink, TracingSink};
use crate::store::FileStore;

// =============================================================================
// Repository
// =============================================================================

/// Repository over the catalog file.
///
/// Holds the full catalog in memory (these catalogs are hundreds of records,
/// not millions) and rewrites the file after every mutation.
///
/// ## Usage
/// ```rust,no_run
/// use corner_store::config::StoreConfig;
/// use corner_store::inventory::InventoryRepository;
///
/// let config = StoreConfig::from_env();
/// let repo = InventoryRepository::open(&config)?;
/// for record in repo.list_active() {
///     println!("{} {}", record.id, record.selling_price());
/// }
/// # Ok::<(), corner_store::error::StoreError>(())
/// ```
pub struct InventoryRepository {
    store: FileStore,
    products: Vec<ProductRecord>,
    sink: Box<dyn StockEventSink>,
}

impl InventoryRepository {
    /// Creates an empty repository over the given store. Nothing is read
    /// until [`load`](Self::load) is called. Events go to a [`TracingSink`].
    pub fn new(store: FileStore) -> Self {
        Self::with_sink(store, Box::new(TracingSink))
    }

    /// Creates a repository with an injected event sink.
    pub fn with_sink(store: FileStore, sink: Box<dyn StockEventSink>) -> Self {
        InventoryRepository {
            store,
            products: Vec::new(),
            sink,
        }
    }

    /// Opens the configured catalog: builds the repository and loads it.
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        let mut repo = InventoryRepository::new(config.file_store());
        repo.load()?;
        Ok(repo)
    }

    /// Loads (or reloads) the catalog from disk.
    ///
    /// Records are sorted ascending by id (case-insensitively) and then
    /// swept by the replenishment policy. A read or parse failure leaves
    /// the previous in-memory catalog untouched; if the sweep's persist
    /// fails instead, the loaded catalog is already in memory and
    /// [`save`](Self::save) is the retry hook.
    ///
    /// ## Returns
    /// The number of records loaded.
    pub fn load(&mut self) -> StoreResult<usize> {
        let mut incoming = self.store.load()?;
        incoming.sort_by(|a, b| a.id.to_ascii_lowercase().cmp(&b.id.to_ascii_lowercase()));

        self.products = incoming;
        info!(count = self.products.len(), "Catalog loaded");

        self.replenish_where_low()?;
        Ok(self.products.len())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns every record, any status, in catalog order.
    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    /// Returns the number of records in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks whether the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a record by id, regardless of status.
    pub fn get(&self, id: &str) -> Option<&ProductRecord> {
        self.position(id).map(|pos| &self.products[pos])
    }

    /// Looks up a record by id, but only if it is sellable.
    ///
    /// Inactive products are invisible here: shopper-facing flows treat an
    /// inactive id exactly like an unknown one.
    pub fn get_active(&self, id: &str) -> Option<&ProductRecord> {
        self.get(id).filter(|record| record.is_active())
    }

    /// Iterates over the sellable subset of the catalog, in catalog order.
    ///
    /// Inactive records are filtered lazily; call again for a fresh pass.
    pub fn list_active(&self) -> impl Iterator<Item = &ProductRecord> {
        self.products.iter().filter(|record| record.is_active())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds a new record to the catalog and persists.
    ///
    /// The record appends at the end; the next [`load`](Self::load)
    /// re-establishes id order.
    ///
    /// ## Errors
    /// - `CoreError::Validation` if any field fails validation
    /// - `CoreError::DuplicateId` if the id (case-insensitive) already exists
    pub fn add(&mut self, record: ProductRecord) -> StoreResult<()> {
        validate_record(&record)?;

        if self.position(&record.id).is_some() {
            return Err(CoreError::DuplicateId { id: record.id }.into());
        }

        debug!(id = %record.id, name = %record.name, "Adding product");
        self.products.push(record);
        self.save()
    }

    /// Replaces the record identified by `id` with `record` and persists.
    ///
    /// The replacement may change every field including the id itself, as
    /// long as the new id does not collide with a DIFFERENT record. Changing
    /// only the casing of the same id is allowed.
    ///
    /// ## Errors
    /// - `CoreError::Validation` if any field fails validation
    /// - `CoreError::NotFound` if `id` names no record
    /// - `CoreError::DuplicateId` if the new id belongs to another record
    pub fn update(&mut self, id: &str, record: ProductRecord) -> StoreResult<()> {
        validate_record(&record)?;

        let pos = self.position(id).ok_or_else(|| CoreError::NotFound {
            id: id.to_string(),
        })?;

        if let Some(other) = self.position(&record.id) {
            if other != pos {
                return Err(CoreError::DuplicateId { id: record.id }.into());
            }
        }

        debug!(id = %id, new_id = %record.id, "Updating product");
        self.products[pos] = record;
        self.save()
    }

    /// Removes the record identified by `id` and persists.
    ///
    /// ## Errors
    /// - `CoreError::NotFound` if `id` names no record
    pub fn remove(&mut self, id: &str) -> StoreResult<()> {
        let pos = self.position(id).ok_or_else(|| CoreError::NotFound {
            id: id.to_string(),
        })?;

        let removed = self.products.remove(pos);
        debug!(id = %removed.id, "Removed product");
        self.save()
    }

    /// Applies a signed delta to a record's stock and persists.
    ///
    /// ## Delta Pattern
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  Checkout sells 3      → adjust_stock(id, -3)                       │
    /// │  Manual intake of 24   → adjust_stock(id, 24)                       │
    /// │                                                                     │
    /// │  The check is against the CURRENT level: a delta that would take    │
    /// │  stock below zero is rejected before anything changes.              │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// After the adjustment the replenishment policy observes this record
    /// only; other records stay as they are until a load observes them.
    ///
    /// ## Errors
    /// - `CoreError::NotFound` if `id` names no record
    /// - `CoreError::InvalidQuantity` if the delta overflows the stock counter
    /// - `CoreError::InsufficientStock` if the delta would drive stock negative
    ///
    /// ## Returns
    /// The record's stock level after the adjustment AND any replenishment;
    /// an adjustment down to the threshold reports the replenished level.
    pub fn adjust_stock(&mut self, id: &str, delta: i64) -> StoreResult<i64> {
        let pos = self.position(id).ok_or_else(|| CoreError::NotFound {
            id: id.to_string(),
        })?;

        let current = self.products[pos].stock;
        let new_stock = match current.checked_add(delta) {
            Some(level) => level,
            None => {
                return Err(CoreError::InvalidQuantity {
                    requested: delta,
                    reason: "stock adjustment overflows".to_string(),
                }
                .into())
            }
        };
        if new_stock < 0 {
            return Err(CoreError::InsufficientStock {
                id: self.products[pos].id.clone(),
                available: current,
                requested: -delta,
            }
            .into());
        }

        debug!(id = %self.products[pos].id, delta, new_stock, "Adjusting stock");
        self.products[pos].stock = new_stock;

        // Replenishment persists when it fires; otherwise the plain
        // adjustment still needs its own rewrite.
        if !self.replenish_at(pos)? {
            self.save()?;
        }

        Ok(self.products[pos].stock)
    }

    /// Rewrites the catalog file from the in-memory records.
    ///
    /// Called after every mutation; public so a caller can retry after a
    /// failed persist left disk behind memory.
    pub fn save(&self) -> StoreResult<()> {
        self.store.save(&self.products)
    }

    /// Writes the current catalog to an arbitrary path (export).
    pub fn export(&self, path: &Path) -> StoreResult<()> {
        self.store.save_as(&self.products, path)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Applies the replenishment policy to every record.
    ///
    /// Returns how many records were replenished. If any were, the catalog
    /// is persisted once and an event emitted per record, in catalog order.
    /// Events go out only after the rewrite succeeds, so a consumer never
    /// hears about a level that is not on disk.
    fn replenish_where_low(&mut self) -> StoreResult<usize> {
        let mut events = Vec::new();
        for record in &mut self.products {
            if record.is_low_stock() {
                let observed = record.stock;
                record.stock = REPLENISH_STOCK_LEVEL;
                events.push(StockEvent::Replenished {
                    product_id: record.id.clone(),
                    name: record.name.clone(),
                    observed_stock: observed,
                    new_stock: REPLENISH_STOCK_LEVEL,
                });
            }
        }

        if events.is_empty() {
            return Ok(0);
        }

        self.save()?;

        let count = events.len();
        for event in events {
            self.sink.on_event(event);
        }
        Ok(count)
    }

    /// Applies the replenishment policy to the record at `pos` alone.
    ///
    /// Returns whether it fired. If it did, the catalog was persisted and
    /// the event emitted, with the same ordering as the full sweep.
    fn replenish_at(&mut self, pos: usize) -> StoreResult<bool> {
        if !self.products[pos].is_low_stock() {
            return Ok(false);
        }

        let observed = self.products[pos].stock;
        self.products[pos].stock = REPLENISH_STOCK_LEVEL;
        self.save()?;

        let record = &self.products[pos];
        self.sink.on_event(StockEvent::Replenished {
            product_id: record.id.clone(),
            name: record.name.clone(),
            observed_stock: observed,
            new_stock: REPLENISH_STOCK_LEVEL,
        });
        Ok(true)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.products.iter().position(|record| record.id_matches(id))
    }
}

// =============================================================================
// Shared Handle
// =============================================================================

/// Cloneable handle to one shared repository.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<InventoryRepository>>` because:
/// - `Arc`: catalog views and cart services share ONE repository instance
/// - `Mutex`: only one of them mutates (and persists) at a time
///
/// ## Why Not RwLock?
/// Most operations mutate (every mutation also persists), and the critical
/// sections are short. A RwLock would add complexity with minimal benefit.
#[derive(Clone)]
pub struct Inventory {
    inner: Arc<Mutex<InventoryRepository>>,
}

impl Inventory {
    /// Wraps a repository in a shared handle.
    pub fn new(repository: InventoryRepository) -> Self {
        Inventory {
            inner: Arc::new(Mutex::new(repository)),
        }
    }

    /// Opens the configured catalog and wraps it: `InventoryRepository::open`
    /// plus sharing in one call.
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        Ok(Inventory::new(InventoryRepository::open(config)?))
    }

    /// Executes a function with read access to the repository.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let names: Vec<String> =
    ///     inventory.with(|repo| repo.list_active().map(|r| r.name.clone()).collect());
    /// ```
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InventoryRepository) -> R,
    {
        let repo = self.inner.lock().expect("Inventory mutex poisoned");
        f(&repo)
    }

    /// Executes a function with write access to the repository.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// inventory.with_mut(|repo| repo.adjust_stock("B1", -3))?;
    /// ```
    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InventoryRepository) -> R,
    {
        let mut repo = self.inner.lock().expect("Inventory mutex poisoned");
        f(&mut repo)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use corner_core::money::Money;
    use corner_core::ValidationError;
    use tempfile::TempDir;

    use crate::error::StoreError;
    use crate::events::MemorySink;

    fn record(id: &str, stock: i64, status: &str) -> ProductRecord {
        ProductRecord::new(
            id,
            format!("Product {id}"),
            "General",
            stock,
            Money::from_cents(250),
            10,
            NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
            status,
        )
    }

    /// Repository over a fresh temp catalog, with a shared MemorySink.
    fn fresh_repo() -> (TempDir, InventoryRepository, Arc<MemorySink>) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("products.txt"));
        let sink = Arc::new(MemorySink::new());
        let repo = InventoryRepository::with_sink(store, Box::new(sink.clone()));
        (dir, repo, sink)
    }

    /// What the catalog file actually contains, bypassing any repository.
    fn reload_from_disk(repo: &InventoryRepository) -> Vec<ProductRecord> {
        FileStore::new(repo.store.path()).load().unwrap()
    }

    #[test]
    fn test_load_sorts_case_insensitively_by_id() {
        let (_dir, mut repo, _sink) = fresh_repo();
        repo.add(record("c3", 50, "Active")).unwrap();
        repo.add(record("A1", 50, "Active")).unwrap();
        repo.add(record("b2", 50, "Active")).unwrap();

        repo.load().unwrap();

        let ids: Vec<&str> = repo.products().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["A1", "b2", "c3"]);
    }

    #[test]
    fn test_load_replenishes_low_stock_and_persists() {
        let (_dir, mut repo, sink) = fresh_repo();
        repo.add(record("B1", 8, "Active")).unwrap();
        repo.add(record("S1", 50, "Active")).unwrap();

        // add is not an observation point; B1 is still low on disk
        assert_eq!(repo.get("B1").unwrap().stock, 8);
        assert!(sink.events().is_empty());

        repo.load().unwrap();

        assert_eq!(repo.get("B1").unwrap().stock, 100);
        assert_eq!(repo.get("S1").unwrap().stock, 50);
        assert_eq!(
            sink.events(),
            vec![StockEvent::Replenished {
                product_id: "B1".to_string(),
                name: "Product B1".to_string(),
                observed_stock: 8,
                new_stock: 100,
            }]
        );

        // The replenished level is on disk, not just in memory
        let on_disk = reload_from_disk(&repo);
        assert_eq!(on_disk.iter().find(|r| r.id == "B1").unwrap().stock, 100);
    }

    #[test]
    fn test_failed_reload_keeps_the_previous_catalog() {
        let (_dir, mut repo, _sink) = fresh_repo();
        repo.add(record("B1", 50, "Active")).unwrap();

        std::fs::write(repo.store.path(), "not a catalog line\n").unwrap();

        assert!(repo.load().is_err());
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get("B1").unwrap().stock, 50);
    }

    #[test]
    fn test_add_rejects_case_insensitive_duplicates() {
        let (_dir, mut repo, _sink) = fresh_repo();
        repo.add(record("B1", 50, "Active")).unwrap();

        let err = repo.add(record("b1", 20, "Active")).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::DuplicateId { .. })
        ));

        // The failed add left nothing behind
        assert_eq!(repo.len(), 1);
        assert_eq!(reload_from_disk(&repo).len(), 1);
    }

    #[test]
    fn test_add_rejects_invalid_records_before_touching_disk() {
        let (_dir, mut repo, _sink) = fresh_repo();

        let mut bad = record("B1", 50, "Active");
        bad.name = "Cola, Diet".to_string();
        let err = repo.add(bad).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::Validation(ValidationError::ReservedCharacter { .. }))
        ));

        assert!(repo.is_empty());
        assert!(!repo.store.exists());
    }

    #[test]
    fn test_update_replaces_and_persists() {
        let (_dir, mut repo, _sink) = fresh_repo();
        repo.add(record("B1", 50, "Active")).unwrap();

        let mut replacement = record("B1", 60, "Active");
        replacement.name = "Cola Zero".to_string();
        repo.update("b1", replacement).unwrap();

        assert_eq!(repo.get("B1").unwrap().name, "Cola Zero");
        assert_eq!(repo.get("B1").unwrap().stock, 60);
        assert_eq!(reload_from_disk(&repo)[0].name, "Cola Zero");
    }

    #[test]
    fn test_update_missing_and_colliding_ids() {
        let (_dir, mut repo, _sink) = fresh_repo();
        repo.add(record("B1", 50, "Active")).unwrap();
        repo.add(record("S1", 20, "Active")).unwrap();

        let err = repo.update("Z9", record("Z9", 1, "Active")).unwrap_err();
        assert!(matches!(err, StoreError::Core(CoreError::NotFound { .. })));

        // Renaming S1 onto B1 collides
        let err = repo.update("S1", record("b1", 20, "Active")).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::DuplicateId { .. })
        ));

        // Re-casing a record's own id is fine
        repo.update("B1", record("b1", 50, "Active")).unwrap();
        assert_eq!(repo.get("B1").unwrap().id, "b1");
    }

    #[test]
    fn test_remove() {
        let (_dir, mut repo, _sink) = fresh_repo();
        repo.add(record("B1", 50, "Active")).unwrap();
        repo.add(record("S1", 20, "Active")).unwrap();

        repo.remove("b1").unwrap();

        assert_eq!(repo.len(), 1);
        assert!(repo.get("B1").is_none());
        assert_eq!(reload_from_disk(&repo).len(), 1);

        let err = repo.remove("B1").unwrap_err();
        assert!(matches!(err, StoreError::Core(CoreError::NotFound { .. })));
    }

    #[test]
    fn test_adjust_stock_applies_deltas() {
        let (_dir, mut repo, _sink) = fresh_repo();
        repo.add(record("B1", 50, "Active")).unwrap();

        assert_eq!(repo.adjust_stock("B1", -3).unwrap(), 47);
        assert_eq!(repo.adjust_stock("B1", 13).unwrap(), 60);
        assert_eq!(reload_from_disk(&repo)[0].stock, 60);
    }

    #[test]
    fn test_adjust_stock_rejects_going_negative() {
        let (_dir, mut repo, _sink) = fresh_repo();
        repo.add(record("B1", 50, "Active")).unwrap();

        let err = repo.adjust_stock("B1", -51).unwrap_err();
        match err {
            StoreError::Core(CoreError::InsufficientStock {
                id,
                available,
                requested,
            }) => {
                assert_eq!(id, "B1");
                assert_eq!(available, 50);
                assert_eq!(requested, 51);
            }
            other => panic!("unexpected error: {other}"),
        }

        // Nothing changed
        assert_eq!(repo.get("B1").unwrap().stock, 50);
    }

    #[test]
    fn test_adjust_stock_rejects_overflowing_delta() {
        let (_dir, mut repo, _sink) = fresh_repo();
        repo.add(record("B1", 50, "Active")).unwrap();

        let err = repo.adjust_stock("B1", i64::MAX).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::InvalidQuantity { .. })
        ));

        // Nothing changed
        assert_eq!(repo.get("B1").unwrap().stock, 50);
    }

    #[test]
    fn test_adjust_stock_to_threshold_replenishes() {
        let (_dir, mut repo, sink) = fresh_repo();
        repo.add(record("B1", 12, "Active")).unwrap();

        // 12 - 2 = 10, at the threshold, so the sweep kicks in
        let final_stock = repo.adjust_stock("B1", -2).unwrap();

        assert_eq!(final_stock, 100);
        assert_eq!(repo.get("B1").unwrap().stock, 100);
        assert_eq!(reload_from_disk(&repo)[0].stock, 100);
        assert_eq!(
            sink.events(),
            vec![StockEvent::Replenished {
                product_id: "B1".to_string(),
                name: "Product B1".to_string(),
                observed_stock: 10,
                new_stock: 100,
            }]
        );
    }

    #[test]
    fn test_adjust_stock_upward_landing_low_replenishes() {
        let (_dir, mut repo, sink) = fresh_repo();
        repo.add(record("B1", 3, "Active")).unwrap();

        // An intake of 4 lands at 7, still under the threshold
        let final_stock = repo.adjust_stock("B1", 4).unwrap();

        assert_eq!(final_stock, 100);
        assert_eq!(reload_from_disk(&repo)[0].stock, 100);
        assert_eq!(
            sink.events(),
            vec![StockEvent::Replenished {
                product_id: "B1".to_string(),
                name: "Product B1".to_string(),
                observed_stock: 7,
                new_stock: 100,
            }]
        );
    }

    #[test]
    fn test_adjust_stock_observes_only_the_adjusted_record() {
        let (_dir, mut repo, sink) = fresh_repo();
        repo.add(record("B1", 50, "Active")).unwrap();
        // Created low; add does not run the policy
        repo.add(record("S1", 5, "Active")).unwrap();
        assert!(sink.events().is_empty());

        repo.adjust_stock("B1", -1).unwrap();

        // B1's adjustment does not look at S1
        assert_eq!(repo.get("S1").unwrap().stock, 5);
        assert!(sink.events().is_empty());

        // The next load observes every record
        repo.load().unwrap();
        assert_eq!(repo.get("S1").unwrap().stock, 100);
        assert_eq!(sink.events().len(), 1);
    }

    #[test]
    fn test_get_active_hides_inactive_records() {
        let (_dir, mut repo, _sink) = fresh_repo();
        repo.add(record("B1", 50, "Active")).unwrap();
        repo.add(record("S1", 20, "Inactive")).unwrap();

        assert!(repo.get("S1").is_some());
        assert!(repo.get_active("S1").is_none());
        assert!(repo.get_active("b1").is_some());

        let active: Vec<_> = repo.list_active().collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "B1");

        // A second call starts a fresh pass
        assert_eq!(repo.list_active().count(), 1);
    }

    #[test]
    fn test_export_writes_a_copy() {
        let (dir, mut repo, _sink) = fresh_repo();
        repo.add(record("B1", 50, "Active")).unwrap();

        let export = dir.path().join("backup.txt");
        repo.export(&export).unwrap();

        let copied = FileStore::new(export).load().unwrap();
        assert_eq!(copied, repo.products());
    }

    #[test]
    fn test_shared_handle_sees_one_repository() {
        let (_dir, repo, _sink) = fresh_repo();
        let inventory = Inventory::new(repo);
        let other_handle = inventory.clone();

        inventory
            .with_mut(|repo| repo.add(record("B1", 50, "Active")))
            .unwrap();

        assert_eq!(other_handle.with(|repo| repo.len()), 1);
        let stock = other_handle
            .with_mut(|repo| repo.adjust_stock("B1", -5))
            .unwrap();
        assert_eq!(stock, 45);
        assert_eq!(inventory.with(|repo| repo.get("B1").unwrap().stock), 45);
    }
}
