mod availability;
mod conflict;
mod error;
mod mutations;
mod queries;

pub use availability::{available_tables, occupied_slots};
pub use error::EngineError;

use std::collections::HashSet;
use std::time::Instant;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::model::{Booking, Table, default_tables};
use crate::store::StateStore;

/// Store key for the table inventory document.
pub const TABLES_KEY: &str = "tables";

/// Store key for the booking list document.
pub const BOOKINGS_KEY: &str = "bookings";

/// The reservation rule engine: one logical session's table inventory and
/// booking list, flushed to the backing store after every mutation.
///
/// The engine owns both collections exclusively; all mutation goes through
/// its methods. Bookings are kept newest-first. A failed flush is logged and
/// counted but never fails the operation; memory stays authoritative.
pub struct Engine<S: StateStore> {
    tables: Vec<Table>,
    bookings: Vec<Booking>,
    store: S,
}

impl<S: StateStore> Engine<S> {
    /// Open a session against `store`, loading both collections once.
    ///
    /// Falls back to the fixed default inventory when no `tables` document
    /// exists and to an empty list when no `bookings` document exists. An
    /// unreadable or undecodable document is a hard error: silently starting
    /// from defaults would overwrite the persisted state on the next flush.
    pub fn open(store: S) -> Result<Self, EngineError> {
        let tables: Vec<Table> =
            Self::load_collection(&store, TABLES_KEY)?.unwrap_or_else(default_tables);
        let bookings: Vec<Booking> =
            Self::load_collection(&store, BOOKINGS_KEY)?.unwrap_or_default();

        // Generated ids cannot collide; a hand-edited document can. Reject
        // rather than serve an inventory that breaks the uniqueness invariant.
        let mut seen = HashSet::new();
        for table in &tables {
            if !seen.insert(table.id.as_str()) {
                return Err(EngineError::Storage(format!(
                    "duplicate table id in persisted state: {}",
                    table.id
                )));
            }
        }

        let n_tables = tables.len();
        let n_bookings = bookings.len();
        tracing::debug!("session opened: {n_tables} tables, {n_bookings} bookings");
        metrics::gauge!(crate::observability::TABLES_ACTIVE).set(n_tables as f64);
        metrics::gauge!(crate::observability::BOOKINGS_ACTIVE).set(n_bookings as f64);

        Ok(Self {
            tables,
            bookings,
            store,
        })
    }

    fn load_collection<T: DeserializeOwned>(
        store: &S,
        key: &str,
    ) -> Result<Option<Vec<T>>, EngineError> {
        match store
            .load(key)
            .map_err(|e| EngineError::Storage(format!("load {key}: {e}")))?
        {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| EngineError::Storage(format!("decode {key}: {e}"))),
            None => Ok(None),
        }
    }

    /// Serialize one collection and save it under `key`. Fire-and-forget:
    /// failures are logged and counted, never propagated to the caller.
    fn flush<T: Serialize>(&self, key: &'static str, collection: &[T]) {
        let value = match serde_json::to_value(collection) {
            Ok(value) => value,
            Err(e) => {
                metrics::counter!(crate::observability::STATE_SAVE_FAILURES_TOTAL, "key" => key)
                    .increment(1);
                tracing::error!("state snapshot encode failed for {key}: {e}");
                return;
            }
        };

        let start = Instant::now();
        let result = self.store.save(key, &value);
        metrics::histogram!(crate::observability::STATE_SAVE_DURATION_SECONDS, "key" => key)
            .record(start.elapsed().as_secs_f64());

        if let Err(e) = result {
            metrics::counter!(crate::observability::STATE_SAVE_FAILURES_TOTAL, "key" => key)
                .increment(1);
            tracing::error!("state save failed for {key}, serving from memory: {e}");
        }
    }

    /// Flush both collections. Mutations always save the whole state, so a
    /// fresh session's default inventory is frozen into the store by the
    /// first mutation, whichever collection it touched.
    fn flush_state(&self) {
        self.flush(TABLES_KEY, &self.tables);
        self.flush(BOOKINGS_KEY, &self.bookings);
        metrics::gauge!(crate::observability::TABLES_ACTIVE).set(self.tables.len() as f64);
        metrics::gauge!(crate::observability::BOOKINGS_ACTIVE).set(self.bookings.len() as f64);
    }
}
