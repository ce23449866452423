use std::collections::HashSet;

use crate::model::*;

// ── Availability Algorithm ────────────────────────────────────────

/// Build the occupied slot set: every `(date, time, table_id)` triple held
/// by an existing booking.
pub fn occupied_slots(bookings: &[Booking]) -> HashSet<(&str, &str, &str)> {
    bookings.iter().map(|b| b.slot()).collect()
}

/// Filter `tables` down to those seating at least `guests` whose
/// `(date, time, id)` slot is not already booked.
///
/// Preserves the inventory's order; no re-sorting by capacity or name.
pub fn available_tables<'t>(
    tables: &'t [Table],
    bookings: &[Booking],
    date: &str,
    time: &str,
    guests: u32,
) -> Vec<&'t Table> {
    let occupied = occupied_slots(bookings);
    tables
        .iter()
        .filter(|t| t.seats >= guests && !occupied.contains(&(date, time, t.id.as_str())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(id: &str, seats: u32) -> Table {
        Table {
            id: id.into(),
            name: format!("Table {id}"),
            seats,
        }
    }

    fn booking(table_id: &str, date: &str, time: &str) -> Booking {
        Booking {
            id: format!("bk-{table_id}-{date}-{time}"),
            table_id: table_id.into(),
            table_name: format!("Table {table_id}"),
            seats: 4,
            date: date.into(),
            time: time.into(),
            guests: 2,
            created_at: 0,
            status: BookingStatus::Confirmed,
        }
    }

    fn ids(tables: &[&Table]) -> Vec<String> {
        tables.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn filters_by_capacity() {
        let tables = vec![table("T1", 2), table("T2", 4), table("T3", 6)];
        let free = available_tables(&tables, &[], "2024-06-01", "19:00", 4);
        assert_eq!(ids(&free), vec!["T2", "T3"]);
    }

    #[test]
    fn seats_equal_to_guests_included() {
        let tables = vec![table("T1", 4)];
        let free = available_tables(&tables, &[], "2024-06-01", "19:00", 4);
        assert_eq!(free.len(), 1);
    }

    #[test]
    fn excludes_occupied_slot() {
        let tables = vec![table("T1", 4), table("T2", 4)];
        let bookings = vec![booking("T1", "2024-06-01", "19:00")];
        let free = available_tables(&tables, &bookings, "2024-06-01", "19:00", 2);
        assert_eq!(ids(&free), vec!["T2"]);
    }

    #[test]
    fn same_table_free_at_other_time() {
        let tables = vec![table("T1", 4)];
        let bookings = vec![booking("T1", "2024-06-01", "19:00")];
        let free = available_tables(&tables, &bookings, "2024-06-01", "20:00", 2);
        assert_eq!(ids(&free), vec!["T1"]);
    }

    #[test]
    fn same_table_free_on_other_date() {
        let tables = vec![table("T1", 4)];
        let bookings = vec![booking("T1", "2024-06-01", "19:00")];
        let free = available_tables(&tables, &bookings, "2024-06-02", "19:00", 2);
        assert_eq!(ids(&free), vec!["T1"]);
    }

    #[test]
    fn preserves_inventory_order() {
        // Not sorted by capacity; the result must keep inventory order.
        let tables = vec![table("T9", 6), table("T1", 4), table("T5", 8)];
        let free = available_tables(&tables, &[], "2024-06-01", "19:00", 1);
        assert_eq!(ids(&free), vec!["T9", "T1", "T5"]);
    }

    #[test]
    fn occupied_slots_holds_one_triple_per_booking() {
        let bookings = vec![
            booking("T1", "2024-06-01", "19:00"),
            booking("T1", "2024-06-01", "20:00"),
            booking("T2", "2024-06-01", "19:00"),
        ];
        let occupied = occupied_slots(&bookings);
        assert_eq!(occupied.len(), 3);
        assert!(occupied.contains(&("2024-06-01", "19:00", "T1")));
        assert!(occupied.contains(&("2024-06-01", "20:00", "T1")));
        assert!(!occupied.contains(&("2024-06-01", "20:00", "T2")));
    }

    #[test]
    fn no_tables_fit_oversized_party() {
        let tables = vec![table("T1", 2), table("T2", 4)];
        let free = available_tables(&tables, &[], "2024-06-01", "19:00", 10);
        assert!(free.is_empty());
    }
}
