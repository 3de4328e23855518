// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the rainharvest feasibility engine.
//!
//! This crate provides `SQLite` persistence, built on Diesel, for the two
//! stored concerns the engine's collaborators own:
//!
//! - **Regional pricing**: one row per country with a UNIQUE constraint.
//!   Lookup is get-or-create: a miss inserts the built-in default row with
//!   `ON CONFLICT DO NOTHING` and re-queries, so concurrent first lookups
//!   of the same country converge on one row. From the engine's
//!   perspective the operation is atomic and idempotent.
//! - **Calculation history**: one append-only row per completed estimate,
//!   keyed by an opaque caller-supplied `user_ref` and a store-assigned
//!   timestamp. The engine treats recording as fire-and-forget.
//!
//! In-memory databases receive a unique shared-cache name per call via an
//! atomic counter, ensuring deterministic test isolation without
//! time-based collisions.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod data_models;
mod diesel_schema;
mod error;

#[cfg(test)]
mod tests;

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use rainharvest_domain::RegionalPricing;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;

pub use data_models::{CalculationRecordData, NewCalculationRecord, PricingRow};
pub use error::PersistenceError;

use data_models::{InsertCalculationRow, NewPricingRow};

/// Embedded `SQLite` migrations.
const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for regional pricing and calculation history.
pub struct SqlitePersistence {
    conn: SqliteConnection,
}

impl SqlitePersistence {
    /// Creates a persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via an atomic
    /// counter, ensuring deterministic test isolation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let url: String = format!("file:rainharvest_mem_{db_id}?mode=memory&cache=shared");
        Self::initialize(&url)
    }

    /// Creates a persistence adapter with a file-based `SQLite` database.
    ///
    /// Enables WAL mode for better read concurrency.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;
        let mut persistence: Self = Self::initialize(path_str)?;
        persistence
            .conn
            .batch_execute("PRAGMA journal_mode = WAL;")
            .map_err(|e| PersistenceError::InitializationError(e.to_string()))?;
        Ok(persistence)
    }

    /// Opens a connection and runs pending migrations.
    fn initialize(database_url: &str) -> Result<Self, PersistenceError> {
        let mut conn: SqliteConnection = SqliteConnection::establish(database_url)?;
        conn.batch_execute("PRAGMA foreign_keys = ON;")
            .map_err(|e| PersistenceError::InitializationError(e.to_string()))?;

        info!("Running SQLite database migrations");
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

        Ok(Self { conn })
    }

    /// Looks up the regional pricing for a country, creating the built-in
    /// default row on first use.
    ///
    /// The create path inserts with `ON CONFLICT DO NOTHING` and
    /// re-queries, so a concurrent first lookup of the same country never
    /// fails and both callers observe the same row.
    ///
    /// # Errors
    ///
    /// Returns an error if a query or the fallback insert fails.
    pub fn pricing_for_country(
        &mut self,
        country_code: &str,
    ) -> Result<RegionalPricing, PersistenceError> {
        use crate::diesel_schema::regional_pricing::dsl;

        let existing: Option<PricingRow> = dsl::regional_pricing
            .filter(dsl::country.eq(country_code))
            .first::<PricingRow>(&mut self.conn)
            .optional()?;

        if let Some(row) = existing {
            return Ok(row.into_domain());
        }

        info!(country = country_code, "Seeding default regional pricing");
        let defaults: RegionalPricing = RegionalPricing::default_for_country(country_code);
        let now: String = rfc3339_now()?;
        let new_row: NewPricingRow<'_> = NewPricingRow {
            country: &defaults.country,
            base_cost_multiplier: defaults.base_cost_multiplier,
            labor_cost_multiplier: defaults.labor_cost_multiplier,
            material_cost_multiplier: defaults.material_cost_multiplier,
            currency: &defaults.currency,
            currency_symbol: &defaults.currency_symbol,
            updated_at: &now,
        };
        diesel::insert_into(dsl::regional_pricing)
            .values(&new_row)
            .on_conflict(dsl::country)
            .do_nothing()
            .execute(&mut self.conn)?;

        let row: PricingRow = dsl::regional_pricing
            .filter(dsl::country.eq(country_code))
            .first::<PricingRow>(&mut self.conn)?;
        Ok(row.into_domain())
    }

    /// Records a completed calculation for history and audit.
    ///
    /// Returns the new row's identifier. The creation timestamp is
    /// assigned here.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn record_calculation(
        &mut self,
        record: &NewCalculationRecord,
    ) -> Result<i64, PersistenceError> {
        use crate::diesel_schema::calculations::dsl;

        let now: String = rfc3339_now()?;
        let row: InsertCalculationRow<'_> = InsertCalculationRow {
            user_ref: &record.user_ref,
            location: &record.location,
            latitude: record.latitude,
            longitude: record.longitude,
            roof_area_sqft: record.roof_area_sqft,
            roof_type: &record.roof_type,
            soil_type: &record.soil_type,
            available_space_sqft: record.available_space_sqft,
            num_people: record.num_people,
            annual_rainfall_mm: record.annual_rainfall_mm,
            collection_potential: &record.collection_potential,
            feasibility_score: record.feasibility_score,
            recommended_system: &record.recommended_system,
            cost_analysis: &record.cost_analysis,
            regional_pricing: &record.regional_pricing,
            created_at: &now,
        };

        let id: i64 = diesel::insert_into(dsl::calculations)
            .values(&row)
            .returning(dsl::id)
            .get_result(&mut self.conn)?;
        Ok(id)
    }

    /// Lists a user's calculation history, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn calculations_for_user(
        &mut self,
        user_ref: &str,
        limit: i64,
    ) -> Result<Vec<CalculationRecordData>, PersistenceError> {
        use crate::diesel_schema::calculations::dsl;

        Ok(dsl::calculations
            .filter(dsl::user_ref.eq(user_ref))
            .order(dsl::id.desc())
            .limit(limit)
            .load::<CalculationRecordData>(&mut self.conn)?)
    }

    /// Returns the number of stored calculation records.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn calculation_count(&mut self) -> Result<i64, PersistenceError> {
        use crate::diesel_schema::calculations::dsl;

        Ok(dsl::calculations.count().get_result(&mut self.conn)?)
    }
}

/// Formats the current UTC instant as RFC 3339.
fn rfc3339_now() -> Result<String, PersistenceError> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::Other(format!("Timestamp formatting failed: {e}")))
}
