use crate::model::*;
use crate::store::StateStore;

use super::conflict::validate_guests;
use super::{Engine, EngineError, availability};

impl<S: StateStore> Engine<S> {
    /// Tables that seat at least `guests` and are free at `(date, time)`,
    /// in inventory order.
    ///
    /// An empty `date` short-circuits to an empty result before guest
    /// validation; there is no slot to check against.
    pub fn available_tables(
        &self,
        date: &str,
        time: &str,
        guests: u32,
    ) -> Result<Vec<Table>, EngineError> {
        let free = if date.is_empty() {
            Vec::new()
        } else {
            validate_guests(guests)?;
            availability::available_tables(&self.tables, &self.bookings, date, time, guests)
                .into_iter()
                .cloned()
                .collect()
        };

        metrics::counter!(crate::observability::OPERATIONS_TOTAL, "operation" => "find_available")
            .increment(1);
        Ok(free)
    }

    /// The full table inventory, in creation order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// All bookings, newest first.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn table(&self, table_id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == table_id)
    }

    pub fn booking(&self, booking_id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == booking_id)
    }
}
