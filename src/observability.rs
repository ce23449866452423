// ── RED metrics (operation-driven) ──────────────────────────────

/// Counter: total engine operations applied. Labels: operation.
pub const OPERATIONS_TOTAL: &str = "maitred_operations_total";

// ── USE metrics (state and persistence) ─────────────────────────

/// Gauge: tables currently in the inventory.
pub const TABLES_ACTIVE: &str = "maitred_tables_active";

/// Gauge: bookings currently held.
pub const BOOKINGS_ACTIVE: &str = "maitred_bookings_active";

/// Histogram: state-save (snapshot flush) duration in seconds. Labels: key.
pub const STATE_SAVE_DURATION_SECONDS: &str = "maitred_state_save_duration_seconds";

/// Counter: state saves that failed and were dropped (the engine keeps
/// serving from memory). Labels: key.
pub const STATE_SAVE_FAILURES_TOTAL: &str = "maitred_state_save_failures_total";
