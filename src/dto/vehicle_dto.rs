use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::revision::RevisionType;
use crate::services::fleet_query::ReadingSort;
use crate::utils::validation::{validate_license_plate, validate_not_empty};

// Request para registrar un vehículo nuevo
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(custom = "validate_license_plate")]
    pub plate: String,

    #[validate(custom = "validate_not_empty")]
    pub brand: String,

    #[serde(default)]
    pub model: String,

    #[serde(default)]
    pub vehicle_type: String,

    #[validate(range(min = 0))]
    pub current_km: i64,
}

// Request para actualizar el odómetro
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateOdometerRequest {
    #[validate(range(min = 0))]
    pub current_km: i64,
}

// Request para registrar una revisión realizada
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRevisionRequest {
    #[validate(range(min = 1))]
    pub revision_km: i64,

    pub revision_type: Option<RevisionType>,
}

// Query string de los listados
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleListQuery {
    pub q: Option<String>,
    pub sort: Option<ReadingSort>,
}

// Query string del listado de revisiones
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RevisionListQuery {
    pub q: Option<String>,
}
