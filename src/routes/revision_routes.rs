use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::RevisionController;
use crate::dto::vehicle_dto::RevisionListQuery;
use crate::models::revision::{FleetRevisionSummary, VehicleRevisionRecord};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_revision_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_revisions))
        .route("/summary", get(get_summary))
}

async fn list_revisions(
    State(state): State<AppState>,
    Query(query): Query<RevisionListQuery>,
) -> Result<Json<Vec<VehicleRevisionRecord>>, AppError> {
    let controller = RevisionController::new(state);
    let response = controller.list(query.q.as_deref()).await?;
    Ok(Json(response))
}

async fn get_summary(
    State(state): State<AppState>,
) -> Result<Json<FleetRevisionSummary>, AppError> {
    let controller = RevisionController::new(state);
    let response = controller.summary().await?;
    Ok(Json(response))
}
