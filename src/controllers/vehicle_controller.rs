use validator::Validate;

use crate::dto::vehicle_dto::{
    CreateVehicleRequest, RegisterRevisionRequest, UpdateOdometerRequest, VehicleListQuery,
};
use crate::dto::ApiResponse;
use crate::models::revision::{FleetStats, VehicleRevisionRecord};
use crate::models::vehicle::VehicleReading;
use crate::services::{fleet_aggregator, fleet_query};
use crate::state::AppState;
use crate::utils::errors::{internal_error, not_found_error, AppResult};
use crate::utils::validation::normalize_plate;

pub struct VehicleController {
    state: AppState,
}

/// Los DTOs validan `>= 0`, así que la conversión sólo falla con datos corruptos
fn to_km(value: i64) -> AppResult<u64> {
    u64::try_from(value).map_err(|_| internal_error("negative km passed validation"))
}

impl VehicleController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn list(&self, query: VehicleListQuery) -> AppResult<Vec<VehicleReading>> {
        let mut vehicles = self.state.vehicles.list().await?;
        if let Some(q) = query.q.as_deref() {
            vehicles = fleet_query::search_readings(vehicles, q);
        }
        fleet_query::sort_readings(&mut vehicles, query.sort.unwrap_or_default());
        Ok(vehicles)
    }

    pub async fn stats(&self) -> AppResult<FleetStats> {
        let vehicles = self.state.vehicles.list().await?;
        Ok(fleet_aggregator::vehicle_stats(&vehicles))
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleRevisionRecord>> {
        request.validate()?;

        let vehicle = VehicleReading::new(
            normalize_plate(&request.plate),
            request.brand.trim(),
            to_km(request.current_km)?,
        )
        .with_model(request.model.trim())
        .with_type(request.vehicle_type.trim());

        self.state.vehicles.insert(&vehicle).await?;
        log::info!("✅ Vehículo {} registrado con {} km", vehicle.plate, vehicle.current_km);

        let configs = self.state.revision_config_snapshot().await;
        let record = self.state.calculator.calculate(&vehicle, &configs);
        Ok(ApiResponse::success_with_message(
            record,
            "Vehicle created successfully".to_string(),
        ))
    }

    pub async fn update_odometer(
        &self,
        plate: &str,
        request: UpdateOdometerRequest,
    ) -> AppResult<ApiResponse<VehicleRevisionRecord>> {
        request.validate()?;
        let plate = plate.trim();

        if !self
            .state
            .vehicles
            .update_odometer(plate, to_km(request.current_km)?)
            .await?
        {
            return Err(not_found_error("Vehicle", plate));
        }
        log::info!("✅ Odómetro de {} actualizado a {} km", plate, request.current_km);

        let record = self.record_for(plate).await?;
        Ok(ApiResponse::success_with_message(
            record,
            "Odometer updated successfully".to_string(),
        ))
    }

    pub async fn register_revision(
        &self,
        plate: &str,
        request: RegisterRevisionRequest,
    ) -> AppResult<ApiResponse<VehicleRevisionRecord>> {
        request.validate()?;
        let plate = plate.trim();

        if !self
            .state
            .vehicles
            .register_revision(plate, to_km(request.revision_km)?, request.revision_type)
            .await?
        {
            return Err(not_found_error("Vehicle", plate));
        }
        log::info!("✅ Revisión registrada para {} en {} km", plate, request.revision_km);

        let record = self.record_for(plate).await?;
        Ok(ApiResponse::success_with_message(
            record,
            "Revision registered successfully".to_string(),
        ))
    }

    /// Recalcula el registro de una placa después de una escritura.
    /// La placa se compara tal cual está guardada.
    async fn record_for(&self, plate: &str) -> AppResult<VehicleRevisionRecord> {
        let vehicle = self
            .state
            .vehicles
            .list()
            .await?
            .into_iter()
            .find(|v| v.plate == plate)
            .ok_or_else(|| not_found_error("Vehicle", plate))?;

        let configs = self.state.revision_config_snapshot().await;
        Ok(self.state.calculator.calculate(&vehicle, &configs))
    }
}
