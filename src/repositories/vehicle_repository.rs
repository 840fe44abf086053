use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::revision::RevisionType;
use crate::models::vehicle::{HodometroRow, VehicleReading};
use crate::utils::errors::{conflict_error, AppError, AppResult};

use super::VehicleStore;

const SELECT_VEHICLES: &str = r#"
    SELECT id::BIGINT AS id, placa, tipo, marca, modelo,
           hodometro_km::NUMERIC AS hodometro_km,
           ultima_revisao_km::NUMERIC AS ultima_revisao_km,
           ultima_revisao_tipo, created_at, updated_at
    FROM hodometro
    ORDER BY placa ASC
"#;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Decodifica las filas; las inválidas se registran y se descartan
fn decode_rows(rows: Vec<HodometroRow>) -> Vec<VehicleReading> {
    let total = rows.len();
    let vehicles: Vec<VehicleReading> = rows
        .into_iter()
        .filter_map(|row| match VehicleReading::try_from(row) {
            Ok(vehicle) => Some(vehicle),
            Err(e) => {
                log::warn!("⚠️ Fila de hodometro descartada: {}", e);
                None
            }
        })
        .collect();

    if vehicles.len() < total {
        log::warn!("⚠️ {} de {} filas de hodometro no se pudieron decodificar", total - vehicles.len(), total);
    }
    vehicles
}

#[async_trait]
impl VehicleStore for VehicleRepository {
    async fn list(&self) -> AppResult<Vec<VehicleReading>> {
        let rows = sqlx::query_as::<_, HodometroRow>(SELECT_VEHICLES)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                log::error!("❌ Error listando vehículos: {}", e);
                AppError::Database(e)
            })?;

        Ok(decode_rows(rows))
    }

    async fn insert(&self, vehicle: &VehicleReading) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO hodometro (placa, tipo, marca, modelo, hodometro_km, ultima_revisao_km, updated_at)
            VALUES ($1, $2, $3, $4, $5, 0, $6)
            "#,
        )
        .bind(&vehicle.plate)
        .bind(&vehicle.vehicle_type)
        .bind(&vehicle.brand)
        .bind(&vehicle.model)
        .bind(Decimal::from(vehicle.current_km))
        .bind(Utc::now())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                log::info!("✅ Vehículo {} creado", vehicle.plate);
                Ok(())
            }
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(conflict_error("Vehicle", "plate", &vehicle.plate))
            }
            Err(e) => {
                log::error!("❌ Error creando vehículo {}: {}", vehicle.plate, e);
                Err(AppError::Database(e))
            }
        }
    }

    async fn update_odometer(&self, plate: &str, current_km: u64) -> AppResult<bool> {
        let result = sqlx::query("UPDATE hodometro SET hodometro_km = $2, updated_at = $3 WHERE placa = $1")
            .bind(plate)
            .bind(Decimal::from(current_km))
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                log::error!("❌ Error actualizando odómetro de {}: {}", plate, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn register_revision(
        &self,
        plate: &str,
        revision_km: u64,
        revision_type: Option<RevisionType>,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE hodometro
            SET ultima_revisao_km = $2, ultima_revisao_tipo = $3, updated_at = $4
            WHERE placa = $1
            "#,
        )
        .bind(plate)
        .bind(Decimal::from(revision_km))
        .bind(revision_type.map(|t| t.as_db_str()))
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            log::error!("❌ Error registrando revisión de {}: {}", plate, e);
            AppError::Database(e)
        })?;

        Ok(result.rows_affected() > 0)
    }
}
