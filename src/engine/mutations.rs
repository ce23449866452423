use ulid::Ulid;

use crate::limits::*;
use crate::model::*;
use crate::store::StateStore;

use super::conflict::{
    find_slot_conflict, now_ms, validate_guests, validate_slot, validate_table_name,
};
use super::{Engine, EngineError};

impl<S: StateStore> Engine<S> {
    /// Book `table_id` for `(date, time)`.
    ///
    /// The slot is re-checked against the live booking list right before
    /// committing, so a stale availability result cannot double-book. The
    /// stored booking snapshots the table's name and seat count as of now;
    /// later inventory edits do not rewrite it. New bookings go to the head
    /// of the list.
    pub fn create_booking(
        &mut self,
        table_id: &str,
        date: &str,
        time: &str,
        guests: u32,
    ) -> Result<Booking, EngineError> {
        validate_slot(date, time)?;
        validate_guests(guests)?;
        if guests > MAX_PARTY_SIZE {
            return Err(EngineError::Validation("party size exceeds limit"));
        }
        if self.bookings.len() >= MAX_BOOKINGS {
            return Err(EngineError::Validation("too many bookings"));
        }

        let table = self
            .tables
            .iter()
            .find(|t| t.id == table_id)
            .ok_or_else(|| EngineError::NotFound(table_id.to_string()))?;

        if let Some(existing) = find_slot_conflict(&self.bookings, table_id, date, time) {
            return Err(EngineError::Conflict(existing.id.clone()));
        }

        let booking = Booking {
            id: Ulid::new().to_string(),
            table_id: table.id.clone(),
            table_name: table.name.clone(),
            seats: table.seats,
            date: date.to_string(),
            time: time.to_string(),
            guests,
            created_at: now_ms(),
            status: BookingStatus::Confirmed,
        };
        self.bookings.insert(0, booking.clone());
        self.flush_state();

        metrics::counter!(crate::observability::OPERATIONS_TOTAL, "operation" => "create_booking")
            .increment(1);
        Ok(booking)
    }

    /// Cancel a booking by id. Returns whether a booking was removed;
    /// cancelling an unknown id is a no-op.
    pub fn cancel_booking(&mut self, booking_id: &str) -> bool {
        let Some(pos) = self.bookings.iter().position(|b| b.id == booking_id) else {
            return false;
        };
        self.bookings.remove(pos);
        self.flush_state();

        metrics::counter!(crate::observability::OPERATIONS_TOTAL, "operation" => "cancel_booking")
            .increment(1);
        true
    }

    /// Add a table with a generated id. Appended, so inventory order (and
    /// with it availability order) is creation order.
    pub fn add_table(&mut self, name: &str, seats: u32) -> Result<Table, EngineError> {
        validate_table_name(name)?;
        if seats == 0 {
            return Err(EngineError::Validation("seats must be positive"));
        }
        if seats > MAX_TABLE_SEATS {
            return Err(EngineError::Validation("seat count exceeds limit"));
        }
        if self.tables.len() >= MAX_TABLES {
            return Err(EngineError::Validation("too many tables"));
        }

        let table = Table {
            id: Ulid::new().to_string(),
            name: name.trim().to_string(),
            seats,
        };
        self.tables.push(table.clone());
        self.flush_state();

        metrics::counter!(crate::observability::OPERATIONS_TOTAL, "operation" => "add_table")
            .increment(1);
        Ok(table)
    }

    /// Remove a table and every booking that references it, as one update.
    /// Both collections are modified before either is flushed, so no flush
    /// can observe a booking pointing at a removed table. Returns the number
    /// of bookings cascaded away.
    pub fn remove_table(&mut self, table_id: &str) -> Result<usize, EngineError> {
        let pos = self
            .tables
            .iter()
            .position(|t| t.id == table_id)
            .ok_or_else(|| EngineError::NotFound(table_id.to_string()))?;
        self.tables.remove(pos);

        let before = self.bookings.len();
        self.bookings.retain(|b| b.table_id != table_id);
        let cascaded = before - self.bookings.len();

        self.flush_state();

        metrics::counter!(crate::observability::OPERATIONS_TOTAL, "operation" => "remove_table")
            .increment(1);
        Ok(cascaded)
    }
}
