pub mod cooldown;
pub mod event;
pub mod lot;
pub mod status;

pub use cooldown::CooldownRecord;
pub use event::StoredEvent;
pub use lot::{CreateLot, Lot};
pub use status::OccupancyStatus;
