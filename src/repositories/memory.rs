//! Almacenes en memoria
//!
//! Implementan los mismos traits que los repositorios Postgres. Se usan en
//! los tests de controllers y rutas.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::dto::revision_config_dto::{CreateRevisionConfigRequest, UpdateRevisionConfigRequest};
use crate::models::revision::RevisionType;
use crate::models::revision_config::RevisionIntervalConfig;
use crate::models::vehicle::VehicleReading;
use crate::utils::errors::{conflict_error, AppResult};

use super::{RevisionConfigStore, VehicleStore};

#[derive(Debug, Clone, Default)]
pub struct InMemoryVehicleStore {
    vehicles: Arc<RwLock<Vec<VehicleReading>>>,
}

impl InMemoryVehicleStore {
    pub fn new(vehicles: Vec<VehicleReading>) -> Self {
        Self {
            vehicles: Arc::new(RwLock::new(vehicles)),
        }
    }

    pub async fn get(&self, plate: &str) -> Option<VehicleReading> {
        self.vehicles.read().await.iter().find(|v| v.plate == plate).cloned()
    }
}

#[async_trait]
impl VehicleStore for InMemoryVehicleStore {
    async fn list(&self) -> AppResult<Vec<VehicleReading>> {
        let mut vehicles = self.vehicles.read().await.clone();
        vehicles.sort_by(|a, b| a.plate.cmp(&b.plate));
        Ok(vehicles)
    }

    async fn insert(&self, vehicle: &VehicleReading) -> AppResult<()> {
        let mut vehicles = self.vehicles.write().await;
        if vehicles.iter().any(|v| v.plate == vehicle.plate) {
            return Err(conflict_error("Vehicle", "plate", &vehicle.plate));
        }
        vehicles.push(vehicle.clone());
        Ok(())
    }

    async fn update_odometer(&self, plate: &str, current_km: u64) -> AppResult<bool> {
        let mut vehicles = self.vehicles.write().await;
        Ok(match vehicles.iter_mut().find(|v| v.plate == plate) {
            Some(vehicle) => {
                vehicle.current_km = current_km;
                vehicle.updated_at = Some(Utc::now());
                true
            }
            None => false,
        })
    }

    async fn register_revision(
        &self,
        plate: &str,
        revision_km: u64,
        _revision_type: Option<RevisionType>,
    ) -> AppResult<bool> {
        let mut vehicles = self.vehicles.write().await;
        Ok(match vehicles.iter_mut().find(|v| v.plate == plate) {
            Some(vehicle) => {
                vehicle.last_revision_km = Some(revision_km).filter(|km| *km > 0);
                vehicle.updated_at = Some(Utc::now());
                true
            }
            None => false,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryRevisionConfigStore {
    configs: Arc<RwLock<Vec<RevisionIntervalConfig>>>,
}

impl InMemoryRevisionConfigStore {
    pub fn new(configs: Vec<RevisionIntervalConfig>) -> Self {
        Self {
            configs: Arc::new(RwLock::new(configs)),
        }
    }
}

#[async_trait]
impl RevisionConfigStore for InMemoryRevisionConfigStore {
    async fn list(&self) -> AppResult<Vec<RevisionIntervalConfig>> {
        let mut configs = self.configs.read().await.clone();
        configs.sort_by(|a, b| a.brand.cmp(&b.brand).then(a.interval_km.cmp(&b.interval_km)));
        Ok(configs)
    }

    async fn insert(&self, request: &CreateRevisionConfigRequest) -> AppResult<RevisionIntervalConfig> {
        let now = Utc::now();
        let config = RevisionIntervalConfig {
            id: Uuid::new_v4(),
            brand: request.brand.trim().to_string(),
            revision_name: request.revision_name.trim().to_string(),
            interval_km: request.interval_km,
            description: request.description.clone(),
            created_at: Some(now),
            updated_at: Some(now),
        };
        self.configs.write().await.push(config.clone());
        Ok(config)
    }

    async fn update(
        &self,
        id: Uuid,
        request: &UpdateRevisionConfigRequest,
    ) -> AppResult<Option<RevisionIntervalConfig>> {
        let mut configs = self.configs.write().await;
        let Some(config) = configs.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };

        if let Some(brand) = &request.brand {
            config.brand = brand.trim().to_string();
        }
        if let Some(name) = &request.revision_name {
            config.revision_name = name.trim().to_string();
        }
        if let Some(interval_km) = request.interval_km {
            config.interval_km = interval_km;
        }
        if let Some(description) = &request.description {
            config.description = description.clone();
        }
        config.updated_at = Some(Utc::now());
        Ok(Some(config.clone()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut configs = self.configs.write().await;
        let before = configs.len();
        configs.retain(|c| c.id != id);
        Ok(configs.len() < before)
    }
}
