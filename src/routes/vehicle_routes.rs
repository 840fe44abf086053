use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::VehicleController;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, RegisterRevisionRequest, UpdateOdometerRequest, VehicleListQuery,
};
use crate::dto::ApiResponse;
use crate::models::revision::{FleetStats, VehicleRevisionRecord};
use crate::models::vehicle::VehicleReading;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/", post(create_vehicle))
        .route("/stats", get(get_stats))
        .route("/:plate/odometer", put(update_odometer))
        .route("/:plate/revision", post(register_revision))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<VehicleListQuery>,
) -> Result<Json<Vec<VehicleReading>>, AppError> {
    let controller = VehicleController::new(state);
    let response = controller.list(query).await?;
    Ok(Json(response))
}

async fn get_stats(State(state): State<AppState>) -> Result<Json<FleetStats>, AppError> {
    let controller = VehicleController::new(state);
    let response = controller.stats().await?;
    Ok(Json(response))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<VehicleRevisionRecord>>), AppError> {
    let controller = VehicleController::new(state);
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_odometer(
    State(state): State<AppState>,
    Path(plate): Path<String>,
    Json(request): Json<UpdateOdometerRequest>,
) -> Result<Json<ApiResponse<VehicleRevisionRecord>>, AppError> {
    let controller = VehicleController::new(state);
    let response = controller.update_odometer(&plate, request).await?;
    Ok(Json(response))
}

async fn register_revision(
    State(state): State<AppState>,
    Path(plate): Path<String>,
    Json(request): Json<RegisterRevisionRequest>,
) -> Result<Json<ApiResponse<VehicleRevisionRecord>>, AppError> {
    let controller = VehicleController::new(state);
    let response = controller.register_revision(&plate, request).await?;
    Ok(Json(response))
}
