//! Provisioning stand-in: seed lots from a JSON file or built-in defaults.
//!
//! Lots are owned by an out-of-band provisioning process; this binary plays
//! that role for local development. Existing lots are left untouched.
//!
//! Usage: `seed_lots [path/to/lots.json]`

use anyhow::{Context, Result};

use lotwatch_db::models::lot::CreateLot;
use lotwatch_db::repositories::LotRepo;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = lotwatch_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    lotwatch_db::run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;

    let lots: Vec<CreateLot> = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read seed file {path}"))?;
            serde_json::from_str(&json).context("Seed file is not a JSON array of lots")?
        }
        None => default_lots(),
    };

    let mut created = 0usize;
    let mut skipped = 0usize;
    for input in &lots {
        if LotRepo::find_by_id(&pool, &input.id).await?.is_some() {
            skipped += 1;
            continue;
        }
        LotRepo::create(&pool, input)
            .await
            .with_context(|| format!("Failed to create lot {}", input.id))?;
        created += 1;
    }

    println!("Seeded lots: {created} created, {skipped} already present");
    Ok(())
}

/// Built-in demo lots used when no seed file is given.
fn default_lots() -> Vec<CreateLot> {
    vec![
        CreateLot {
            id: "lot-1".into(),
            name: "North Visitor Lot".into(),
            capacity: Some(120),
            permit: "Visitor".into(),
            description: "Main visitor parking by the north entrance".into(),
            latitude: Some(44.9745),
            longitude: Some(-93.2354),
        },
        CreateLot {
            id: "lot-2".into(),
            name: "East Staff Ramp".into(),
            capacity: Some(340),
            permit: "Staff".into(),
            description: "Covered ramp, staff permits only".into(),
            latitude: Some(44.9731),
            longitude: Some(-93.2289),
        },
        CreateLot {
            id: "overflow".into(),
            name: "Overflow Field".into(),
            capacity: None,
            permit: "Open".into(),
            description: "Unpaved overflow area, unbounded".into(),
            latitude: None,
            longitude: None,
        },
    ]
}
