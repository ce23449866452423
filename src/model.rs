use serde::{Deserialize, Serialize};

/// Milliseconds since Unix epoch.
pub type Ms = i64;

/// A bookable table in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Unique across the inventory, immutable once created.
    pub id: String,
    pub name: String,
    pub seats: u32,
}

/// Booking lifecycle marker. There is no state machine: cancellation deletes
/// the record, so `Confirmed` is the only value a live booking ever carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
}

/// A reservation of one table for one date/time slot.
///
/// `table_name` and `seats` are snapshots of the referenced table taken at
/// creation time; later inventory edits do not touch them. `table_id` is a
/// weak reference: removing the table cascades to delete the booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub table_id: String,
    pub table_name: String,
    pub seats: u32,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Time of day, 24-hour `HH:MM`.
    pub time: String,
    pub guests: u32,
    pub created_at: Ms,
    pub status: BookingStatus,
}

impl Booking {
    /// The slot this booking occupies, as the `(date, time, table_id)` triple
    /// used for exclusivity checks.
    pub fn slot(&self) -> (&str, &str, &str) {
        (&self.date, &self.time, &self.table_id)
    }
}

/// Fixed seed inventory used when no persisted tables exist: two deuces, two
/// four-tops, one six-top.
pub fn default_tables() -> Vec<Table> {
    let seed = [
        ("T1", "Table 1", 2),
        ("T2", "Table 2", 2),
        ("T3", "Table 3", 4),
        ("T4", "Table 4", 4),
        ("T5", "Table 5", 6),
    ];
    seed.iter()
        .map(|&(id, name, seats)| Table {
            id: id.to_string(),
            name: name.to_string(),
            seats,
        })
        .collect()
}
