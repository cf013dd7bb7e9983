//! Lot entity models.
//!
//! Lots are static configuration owned by an out-of-band provisioning
//! process; the occupancy engine only ever reads them.

use lotwatch_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `lots` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lot {
    pub id: String,
    pub name: String,
    /// `None` means the lot is unbounded.
    pub capacity: Option<i64>,
    pub permit: String,
    pub description: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: Timestamp,
}

/// Input for provisioning a lot (seed tooling and tests).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLot {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub capacity: Option<i64>,
    #[serde(default)]
    pub permit: String,
    #[serde(default)]
    pub description: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
