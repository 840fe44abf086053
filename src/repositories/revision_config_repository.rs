use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::revision_config_dto::{CreateRevisionConfigRequest, UpdateRevisionConfigRequest};
use crate::models::revision_config::RevisionIntervalConfig;
use crate::utils::errors::{AppError, AppResult};

use super::RevisionConfigStore;

const CONFIG_COLUMNS: &str =
    "id, brand, revision_name, interval_km::BIGINT AS interval_km, description, created_at, updated_at";

pub struct RevisionConfigRepository {
    pool: PgPool,
}

impl RevisionConfigRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<RevisionIntervalConfig>> {
        let query = format!("SELECT {} FROM revision_config WHERE id = $1", CONFIG_COLUMNS);
        sqlx::query_as::<_, RevisionIntervalConfig>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                log::error!("❌ Error buscando configuración {}: {}", id, e);
                AppError::Database(e)
            })
    }
}

#[async_trait]
impl RevisionConfigStore for RevisionConfigRepository {
    async fn list(&self) -> AppResult<Vec<RevisionIntervalConfig>> {
        let query = format!(
            "SELECT {} FROM revision_config ORDER BY brand ASC, interval_km ASC",
            CONFIG_COLUMNS
        );
        sqlx::query_as::<_, RevisionIntervalConfig>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                log::error!("❌ Error listando configuraciones de revisión: {}", e);
                AppError::Database(e)
            })
    }

    async fn insert(&self, request: &CreateRevisionConfigRequest) -> AppResult<RevisionIntervalConfig> {
        let query = format!(
            r#"
            INSERT INTO revision_config (id, brand, revision_name, interval_km, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING {}
            "#,
            CONFIG_COLUMNS
        );
        let config = sqlx::query_as::<_, RevisionIntervalConfig>(&query)
            .bind(Uuid::new_v4())
            .bind(request.brand.trim())
            .bind(request.revision_name.trim())
            .bind(request.interval_km)
            .bind(&request.description)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                log::error!("❌ Error creando configuración de revisión: {}", e);
                AppError::Database(e)
            })?;

        log::info!(
            "✅ Configuración creada: {} / {} cada {} km",
            config.brand,
            config.revision_name,
            config.interval_km
        );
        Ok(config)
    }

    async fn update(
        &self,
        id: Uuid,
        request: &UpdateRevisionConfigRequest,
    ) -> AppResult<Option<RevisionIntervalConfig>> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let query = format!(
            r#"
            UPDATE revision_config
            SET brand = $2, revision_name = $3, interval_km = $4, description = $5, updated_at = $6
            WHERE id = $1
            RETURNING {}
            "#,
            CONFIG_COLUMNS
        );
        let config = sqlx::query_as::<_, RevisionIntervalConfig>(&query)
            .bind(id)
            .bind(request.brand.as_deref().map(str::trim).unwrap_or(current.brand.as_str()))
            .bind(
                request
                    .revision_name
                    .as_deref()
                    .map(str::trim)
                    .unwrap_or(current.revision_name.as_str()),
            )
            .bind(request.interval_km.unwrap_or(current.interval_km))
            .bind(match &request.description {
                Some(description) => description.as_ref(),
                None => current.description.as_ref(),
            })
            .bind(Utc::now())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                log::error!("❌ Error actualizando configuración {}: {}", id, e);
                AppError::Database(e)
            })?;

        Ok(config)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM revision_config WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                log::error!("❌ Error eliminando configuración {}: {}", id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
