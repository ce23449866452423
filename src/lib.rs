//! Restaurant-table reservation rule engine.
//!
//! A single logical session owns two collections, the table inventory and
//! the booking list, behind an [`engine::Engine`] that answers availability
//! queries and applies booking/inventory mutations, flushing every change to
//! a pluggable key-value [`store::StateStore`].

pub mod engine;
pub mod limits;
pub mod model;
pub mod observability;
pub mod store;
