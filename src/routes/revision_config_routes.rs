use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::RevisionConfigController;
use crate::dto::revision_config_dto::{CreateRevisionConfigRequest, UpdateRevisionConfigRequest};
use crate::dto::ApiResponse;
use crate::models::revision_config::{BrandIntervalOverview, RevisionIntervalConfig};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_revision_config_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_configs).post(create_config))
        .route("/overview", get(get_overview))
        .route("/:id", put(update_config).delete(delete_config))
}

async fn list_configs(
    State(state): State<AppState>,
) -> Result<Json<Vec<RevisionIntervalConfig>>, AppError> {
    let controller = RevisionConfigController::new(state);
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_overview(
    State(state): State<AppState>,
) -> Result<Json<Vec<BrandIntervalOverview>>, AppError> {
    let controller = RevisionConfigController::new(state);
    let response = controller.overview().await?;
    Ok(Json(response))
}

async fn create_config(
    State(state): State<AppState>,
    Json(request): Json<CreateRevisionConfigRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RevisionIntervalConfig>>), AppError> {
    let controller = RevisionConfigController::new(state);
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_config(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRevisionConfigRequest>,
) -> Result<Json<ApiResponse<RevisionIntervalConfig>>, AppError> {
    let controller = RevisionConfigController::new(state);
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_config(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = RevisionConfigController::new(state);
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
