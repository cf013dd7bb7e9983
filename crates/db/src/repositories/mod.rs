pub mod cooldown_repo;
pub mod event_repo;
pub mod lot_repo;
pub mod status_repo;

pub use cooldown_repo::CooldownRepo;
pub use event_repo::EventRepo;
pub use lot_repo::LotRepo;
pub use status_repo::StatusRepo;
