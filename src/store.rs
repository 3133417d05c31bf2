//! Store Module
//!
//! The item store that keeps both collections in sync with persistence.
//!
//! ## Responsibilities
//! - Load both collections from the adapter on startup
//! - Apply appends and multi-offset removals
//! - Persist the affected collection after every mutation
//! - Notify subscribers with the new contents
//!
//! ## Mutation Flow
//! ```text
//! append / remove_at
//!        │
//!        ▼
//!  update in-memory list ──► encode_items ──► adapter.set(key)
//!        │                                          │
//!        │                          failure: warn (Lenient) or Err (Strict)
//!        ▼
//!  notify subscribers
//! ```

use std::collections::BTreeSet;

use crate::codec::{decode_items, encode_items};
use crate::config::ErrorPolicy;
use crate::error::{CashError, Result};
use crate::model::{Collection, Item};
use crate::persistence::PersistenceAdapter;

/// What happened when a collection was loaded
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Decoded this many items
    Loaded(usize),

    /// Nothing stored under the key
    Absent,

    /// Stored data could not be read or decoded; started empty
    Corrupt(String),
}

/// Load outcome of both collections
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub private: LoadOutcome,
    pub business: LoadOutcome,
}

impl LoadReport {
    pub fn outcome(&self, collection: Collection) -> &LoadOutcome {
        match collection {
            Collection::Private => &self.private,
            Collection::Business => &self.business,
        }
    }
}

/// Handle returned by `subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(Collection, &[Item])>;

/// Holds the private and business collections
///
/// ## Ownership Model
/// - The store exclusively owns both lists and the adapter
/// - Mutations take `&mut self` and run to completion: update, persist, notify
/// - The in-memory lists are authoritative; a failed write never rolls back
pub struct ItemStore<P: PersistenceAdapter> {
    /// Backing key-value store
    adapter: P,

    /// How load/save failures are reported
    policy: ErrorPolicy,

    /// Private collection, insertion order
    private: Vec<Item>,

    /// Business collection, insertion order
    business: Vec<Item>,

    /// Outcome of the initial load
    report: LoadReport,

    /// Registered change callbacks
    observers: Vec<(SubscriptionId, Observer)>,

    /// Next subscription id
    next_subscription: u64,
}

impl<P: PersistenceAdapter> ItemStore<P> {
    /// Open a store over `adapter`, masking load failures
    ///
    /// Missing or undecodable data for a collection yields an empty
    /// collection; the other collection is unaffected.
    pub fn open(adapter: P) -> Self {
        let (private, private_outcome) = Self::load_lenient(&adapter, Collection::Private);
        let (business, business_outcome) = Self::load_lenient(&adapter, Collection::Business);

        Self::from_parts(
            adapter,
            ErrorPolicy::Lenient,
            private,
            business,
            LoadReport {
                private: private_outcome,
                business: business_outcome,
            },
        )
    }

    /// Open a store with an explicit error policy
    ///
    /// Under `Strict`, a collection that cannot be read or decoded fails the
    /// whole open with the underlying error (`DataCorrupt` for bad data).
    pub fn with_policy(adapter: P, policy: ErrorPolicy) -> Result<Self> {
        match policy {
            ErrorPolicy::Lenient => Ok(Self::open(adapter)),
            ErrorPolicy::Strict => {
                let private = Self::read_collection(&adapter, Collection::Private)?;
                let business = Self::read_collection(&adapter, Collection::Business)?;

                let report = LoadReport {
                    private: Self::outcome_of(&private),
                    business: Self::outcome_of(&business),
                };

                Ok(Self::from_parts(
                    adapter,
                    policy,
                    private.unwrap_or_default(),
                    business.unwrap_or_default(),
                    report,
                ))
            }
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append `item` to the end of `collection`, then persist and notify
    pub fn append(&mut self, collection: Collection, item: Item) -> Result<()> {
        tracing::debug!(%collection, id = %item.id(), "append item");

        self.list_mut(collection).push(item);
        self.commit(collection)
    }

    /// Create an item and append it to the collection its category routes to
    ///
    /// Returns the collection the item landed in.
    pub fn add_entry(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Result<Collection> {
        let item = Item::new(name, category, price);
        let collection = Collection::for_category(item.category());

        self.append(collection, item)?;
        Ok(collection)
    }

    /// Remove the items at `offsets` from `collection`, then persist and notify
    ///
    /// Offsets refer to the order before removal and are applied as one set;
    /// duplicates are ignored. Any offset past the end rejects the whole call
    /// with `OffsetOutOfRange` and leaves the collection untouched. An empty
    /// set is a no-op.
    pub fn remove_at<I>(&mut self, collection: Collection, offsets: I) -> Result<()>
    where
        I: IntoIterator<Item = usize>,
    {
        let offsets: BTreeSet<usize> = offsets.into_iter().collect();
        if offsets.is_empty() {
            return Ok(());
        }

        let len = self.len(collection);
        if let Some(&offset) = offsets.iter().next_back().filter(|&&max| max >= len) {
            return Err(CashError::OffsetOutOfRange {
                collection,
                offset,
                len,
            });
        }

        tracing::debug!(%collection, ?offsets, "remove items");

        let mut index = 0;
        self.list_mut(collection).retain(|_| {
            let keep = !offsets.contains(&index);
            index += 1;
            keep
        });

        self.commit(collection)
    }

    // =========================================================================
    // Read Access
    // =========================================================================

    /// Current contents of `collection`, in display order
    pub fn items(&self, collection: Collection) -> &[Item] {
        match collection {
            Collection::Private => &self.private,
            Collection::Business => &self.business,
        }
    }

    pub fn private_items(&self) -> &[Item] {
        &self.private
    }

    pub fn business_items(&self) -> &[Item] {
        &self.business
    }

    pub fn len(&self, collection: Collection) -> usize {
        self.items(collection).len()
    }

    pub fn is_empty(&self, collection: Collection) -> bool {
        self.items(collection).is_empty()
    }

    /// Sum of prices in `collection`; `0.0` (never `-0.0`) when empty
    pub fn total(&self, collection: Collection) -> f64 {
        self.items(collection)
            .iter()
            .fold(0.0, |acc, item| acc + item.price())
    }

    /// Outcome of the initial load
    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    pub fn adapter(&self) -> &P {
        &self.adapter
    }

    /// Consume the store and return its adapter
    pub fn into_adapter(self) -> P {
        self.adapter
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Register a callback run after every mutation with the new contents
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(Collection, &[Item]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn from_parts(
        adapter: P,
        policy: ErrorPolicy,
        private: Vec<Item>,
        business: Vec<Item>,
        report: LoadReport,
    ) -> Self {
        tracing::debug!(
            private = private.len(),
            business = business.len(),
            ?policy,
            "item store ready"
        );

        Self {
            adapter,
            policy,
            private,
            business,
            report,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    fn list_mut(&mut self, collection: Collection) -> &mut Vec<Item> {
        match collection {
            Collection::Private => &mut self.private,
            Collection::Business => &mut self.business,
        }
    }

    /// Read and decode one collection; decode failures become `DataCorrupt`
    fn read_collection(adapter: &P, collection: Collection) -> Result<Option<Vec<Item>>> {
        let key = collection.key();

        let Some(bytes) = adapter.get(key)? else {
            return Ok(None);
        };

        decode_items(&bytes)
            .map(Some)
            .map_err(|e| CashError::DataCorrupt {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    fn load_lenient(adapter: &P, collection: Collection) -> (Vec<Item>, LoadOutcome) {
        match Self::read_collection(adapter, collection) {
            Ok(Some(items)) => {
                let count = items.len();
                (items, LoadOutcome::Loaded(count))
            }
            Ok(None) => (Vec::new(), LoadOutcome::Absent),
            Err(e) => {
                tracing::warn!(%collection, error = %e, "discarding unreadable collection");
                (Vec::new(), LoadOutcome::Corrupt(e.to_string()))
            }
        }
    }

    fn outcome_of(items: &Option<Vec<Item>>) -> LoadOutcome {
        match items {
            Some(items) => LoadOutcome::Loaded(items.len()),
            None => LoadOutcome::Absent,
        }
    }

    /// Persist `collection`, then notify; the persist result is returned last
    fn commit(&mut self, collection: Collection) -> Result<()> {
        let persisted = self.persist(collection);
        self.notify(collection);
        persisted
    }

    fn persist(&self, collection: Collection) -> Result<()> {
        let key = collection.key();
        let items = self.items(collection);

        let written = encode_items(items).and_then(|bytes| self.adapter.set(key, &bytes));

        match written {
            Ok(()) => {
                tracing::debug!(key, count = items.len(), "persisted collection");
                Ok(())
            }
            Err(e) => match self.policy {
                ErrorPolicy::Lenient => {
                    tracing::warn!(key, error = %e, "persisting collection failed");
                    Ok(())
                }
                ErrorPolicy::Strict => match e {
                    CashError::PersistenceWriteFailed { .. } => Err(e),
                    other => Err(CashError::PersistenceWriteFailed {
                        key: key.to_string(),
                        reason: other.to_string(),
                    }),
                },
            },
        }
    }

    fn notify(&mut self, collection: Collection) {
        let items = match collection {
            Collection::Private => &self.private,
            Collection::Business => &self.business,
        };

        for (_, observer) in self.observers.iter_mut() {
            observer(collection, items);
        }
    }
}
