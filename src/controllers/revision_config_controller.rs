use uuid::Uuid;
use validator::Validate;

use crate::dto::revision_config_dto::{CreateRevisionConfigRequest, UpdateRevisionConfigRequest};
use crate::dto::ApiResponse;
use crate::models::revision_config::{BrandIntervalOverview, RevisionIntervalConfig};
use crate::services::fleet_aggregator;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, not_found_error, AppResult};

pub struct RevisionConfigController {
    state: AppState,
}

impl RevisionConfigController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Lectura directa del almacén, sin pasar por el cache
    pub async fn list(&self) -> AppResult<Vec<RevisionIntervalConfig>> {
        self.state.revision_configs.list().await
    }

    pub async fn overview(&self) -> AppResult<Vec<BrandIntervalOverview>> {
        let configs = self.state.revision_configs.list().await?;
        Ok(fleet_aggregator::brand_interval_overview(&configs))
    }

    pub async fn create(
        &self,
        request: CreateRevisionConfigRequest,
    ) -> AppResult<ApiResponse<RevisionIntervalConfig>> {
        request.validate()?;

        let config = self.state.revision_configs.insert(&request).await?;
        self.state.config_cache.invalidate().await;

        Ok(ApiResponse::success_with_message(
            config,
            "Revision config created successfully".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateRevisionConfigRequest,
    ) -> AppResult<ApiResponse<RevisionIntervalConfig>> {
        if request.is_empty() {
            return Err(bad_request_error("No fields to update"));
        }
        request.validate()?;

        let config = self
            .state
            .revision_configs
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("RevisionConfig", &id.to_string()))?;
        self.state.config_cache.invalidate().await;

        Ok(ApiResponse::success_with_message(
            config,
            "Revision config updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<ApiResponse<()>> {
        if !self.state.revision_configs.delete(id).await? {
            return Err(not_found_error("RevisionConfig", &id.to_string()));
        }
        self.state.config_cache.invalidate().await;
        log::info!("🗑️ Configuración {} eliminada", id);

        Ok(ApiResponse::message("Revision config deleted successfully".to_string()))
    }
}
