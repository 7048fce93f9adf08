//! Repository for the `avion` table.

use sqlx::PgPool;
use avion_core::types::DbId;

use crate::models::avion::{Avion, CreateAvion, UpdateAvion};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id_avion, id_aerolinea, fabricante, tipo, capacidad";

/// Provides CRUD operations for airplanes.
pub struct AvionRepo;

impl AvionRepo {
    /// Insert a new airplane, returning the id assigned by the store.
    pub async fn create(pool: &PgPool, input: &CreateAvion) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO avion (id_aerolinea, fabricante, tipo, capacidad)
             VALUES ($1, $2, $3, $4)
             RETURNING id_avion",
        )
        .bind(input.airline_id)
        .bind(&input.manufacturer)
        .bind(&input.aircraft_type)
        .bind(input.capacity)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Find an airplane by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Avion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM avion WHERE id_avion = $1");
        sqlx::query_as::<_, Avion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all airplanes in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Avion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM avion ORDER BY id_avion");
        sqlx::query_as::<_, Avion>(&query).fetch_all(pool).await
    }

    /// Update an airplane. Only `Some` fields in `input` change; the full row
    /// is rewritten.
    ///
    /// Runs in a transaction: the existing row is read with `FOR UPDATE`, so
    /// concurrent updates of the same id apply one after the other instead of
    /// overwriting each other's fields. Returns `None` if no row has `id`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: UpdateAvion,
    ) -> Result<Option<Avion>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM avion WHERE id_avion = $1 FOR UPDATE");
        let Some(existing) = sqlx::query_as::<_, Avion>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let row = input.apply_to(existing);
        let query = format!(
            "UPDATE avion SET
                id_aerolinea = $2,
                fabricante = $3,
                tipo = $4,
                capacidad = $5
             WHERE id_avion = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Avion>(&query)
            .bind(row.id)
            .bind(row.airline_id)
            .bind(&row.manufacturer)
            .bind(&row.aircraft_type)
            .bind(row.capacity)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Permanently delete an airplane by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM avion WHERE id_avion = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
