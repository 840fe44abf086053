use crate::models::revision::{FleetRevisionSummary, VehicleRevisionRecord};
use crate::services::{fleet_aggregator, fleet_query};
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct RevisionController {
    state: AppState,
}

impl RevisionController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Registros de toda la flota, del más urgente al menos urgente
    pub async fn list(&self, query: Option<&str>) -> AppResult<Vec<VehicleRevisionRecord>> {
        let mut records = self.fleet_records().await?;
        if let Some(query) = query {
            records = fleet_query::search(records, query);
        }
        fleet_query::sort_by_urgency(&mut records);
        Ok(records)
    }

    pub async fn summary(&self) -> AppResult<FleetRevisionSummary> {
        let records = self.fleet_records().await?;
        let summary = fleet_aggregator::summarize(&records);
        log::info!(
            "🔍 Resumen de flota: {} vehículos, {} atrasados, {} críticos",
            summary.total_vehicles,
            summary.overdue,
            summary.critical
        );
        Ok(summary)
    }

    async fn fleet_records(&self) -> AppResult<Vec<VehicleRevisionRecord>> {
        let vehicles = self.state.vehicles.list().await?;
        let configs = self.state.revision_config_snapshot().await;
        Ok(self.state.calculator.calculate_fleet(&vehicles, &configs))
    }
}
