//! Repositorios
//!
//! Acceso a las tablas `hodometro` y `revision_config`. Los controllers
//! dependen de los traits, no de Postgres, para poder probarse en memoria.

pub mod memory;
pub mod revision_config_repository;
pub mod vehicle_repository;

use async_trait::async_trait;
use uuid::Uuid;

use crate::dto::revision_config_dto::{CreateRevisionConfigRequest, UpdateRevisionConfigRequest};
use crate::models::revision::RevisionType;
use crate::models::revision_config::RevisionIntervalConfig;
use crate::models::vehicle::VehicleReading;
use crate::utils::errors::AppResult;

pub use memory::{InMemoryRevisionConfigStore, InMemoryVehicleStore};
pub use revision_config_repository::RevisionConfigRepository;
pub use vehicle_repository::VehicleRepository;

/// Almacén de lecturas de odómetro, indexado por placa
#[async_trait]
pub trait VehicleStore: Send + Sync {
    /// Todas las lecturas ordenadas por placa
    async fn list(&self) -> AppResult<Vec<VehicleReading>>;

    async fn insert(&self, vehicle: &VehicleReading) -> AppResult<()>;

    /// `false` si ninguna placa coincide
    async fn update_odometer(&self, plate: &str, current_km: u64) -> AppResult<bool>;

    /// `false` si ninguna placa coincide
    async fn register_revision(
        &self,
        plate: &str,
        revision_km: u64,
        revision_type: Option<RevisionType>,
    ) -> AppResult<bool>;
}

/// Almacén de configuraciones de revisión
#[async_trait]
pub trait RevisionConfigStore: Send + Sync {
    /// Todas las configuraciones ordenadas por marca e intervalo
    async fn list(&self) -> AppResult<Vec<RevisionIntervalConfig>>;

    async fn insert(&self, request: &CreateRevisionConfigRequest) -> AppResult<RevisionIntervalConfig>;

    async fn update(
        &self,
        id: Uuid,
        request: &UpdateRevisionConfigRequest,
    ) -> AppResult<Option<RevisionIntervalConfig>>;

    /// `false` si el id no existe
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
