//! Domain core for the lotwatch occupancy service.
//!
//! Pure types and policy logic with no I/O: request validation, cooldown
//! classification, clamped occupancy arithmetic, event-id generation, and
//! the engine configuration. The `db` and `api` crates build on these.

pub mod config;
pub mod cooldown;
pub mod error;
pub mod event_id;
pub mod occupancy;
pub mod types;
pub mod validation;
