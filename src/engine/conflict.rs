use crate::limits::*;
use crate::model::*;

use super::EngineError;

pub(crate) fn now_ms() -> Ms {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as Ms
}

/// Find the booking already holding `(date, time, table_id)`, if any.
///
/// The availability query is the caller-facing filter; this is the write-time
/// guard that closes the gap between querying and booking.
pub(crate) fn find_slot_conflict<'b>(
    bookings: &'b [Booking],
    table_id: &str,
    date: &str,
    time: &str,
) -> Option<&'b Booking> {
    bookings
        .iter()
        .find(|b| b.table_id == table_id && b.date == date && b.time == time)
}

pub(crate) fn validate_table_name(name: &str) -> Result<(), EngineError> {
    if name.trim().is_empty() {
        return Err(EngineError::Validation("table name must not be empty"));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(EngineError::Validation("table name too long"));
    }
    Ok(())
}

pub(crate) fn validate_slot(date: &str, time: &str) -> Result<(), EngineError> {
    if date.is_empty() {
        return Err(EngineError::Validation("date must not be empty"));
    }
    if time.is_empty() {
        return Err(EngineError::Validation("time must not be empty"));
    }
    if date.len() > MAX_FIELD_LEN || time.len() > MAX_FIELD_LEN {
        return Err(EngineError::Validation("date/time string too long"));
    }
    Ok(())
}

pub(crate) fn validate_guests(guests: u32) -> Result<(), EngineError> {
    if guests == 0 {
        return Err(EngineError::Validation("guests must be positive"));
    }
    Ok(())
}
