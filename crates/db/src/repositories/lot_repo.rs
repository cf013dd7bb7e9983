//! Repository for the `lots` table.
//!
//! The engine only reads lots; `create` exists for the provisioning seed
//! binary and for tests.

use sqlx::PgPool;

use crate::models::lot::{CreateLot, Lot};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, capacity, permit, description, latitude, longitude, created_at";

pub struct LotRepo;

impl LotRepo {
    /// Insert a new lot, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLot) -> Result<Lot, sqlx::Error> {
        let query = format!(
            "INSERT INTO lots (id, name, capacity, permit, description, latitude, longitude)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lot>(&query)
            .bind(&input.id)
            .bind(&input.name)
            .bind(input.capacity)
            .bind(&input.permit)
            .bind(&input.description)
            .bind(input.latitude)
            .bind(input.longitude)
            .fetch_one(pool)
            .await
    }

    /// Find a lot by its identifier.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Lot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lots WHERE id = $1");
        sqlx::query_as::<_, Lot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all lots ordered by identifier.
    pub async fn list(pool: &PgPool) -> Result<Vec<Lot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lots ORDER BY id");
        sqlx::query_as::<_, Lot>(&query).fetch_all(pool).await
    }
}
