//! Hard caps on write-path inputs. Breaches surface as
//! [`EngineError::Validation`](crate::engine::EngineError); read queries are
//! never capped.

/// Max length of a table display name, in bytes.
pub const MAX_NAME_LEN: usize = 120;

/// Max length of a booking's date or time string, in bytes.
pub const MAX_FIELD_LEN: usize = 32;

/// Max seat count accepted for a single table.
pub const MAX_TABLE_SEATS: u32 = 100;

/// Max party size accepted on booking creation.
pub const MAX_PARTY_SIZE: u32 = 100;

/// Max number of tables in the inventory.
pub const MAX_TABLES: usize = 512;

/// Max number of concurrent bookings.
pub const MAX_BOOKINGS: usize = 10_000;
