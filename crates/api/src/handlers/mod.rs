pub mod events;
pub mod lots;
