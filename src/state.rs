//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use tracing::warn;

use crate::cache::RevisionConfigCache;
use crate::config::environment::EnvironmentConfig;
use crate::models::revision_config::RevisionIntervalConfig;
use crate::repositories::{RevisionConfigStore, VehicleStore};
use crate::services::brand_matcher::build_matcher;
use crate::services::DynRevisionCalculator;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub vehicles: Arc<dyn VehicleStore>,
    pub revision_configs: Arc<dyn RevisionConfigStore>,
    pub config_cache: RevisionConfigCache,
    pub calculator: Arc<DynRevisionCalculator>,
}

impl AppState {
    pub fn new(
        config: EnvironmentConfig,
        vehicles: Arc<dyn VehicleStore>,
        revision_configs: Arc<dyn RevisionConfigStore>,
    ) -> Self {
        let matcher = build_matcher(config.brand_matching, &config.brand_aliases);
        let config_cache = RevisionConfigCache::from_config(&config.cache);

        Self {
            config,
            vehicles,
            revision_configs,
            config_cache,
            calculator: Arc::new(DynRevisionCalculator::new(matcher)),
        }
    }

    /// Configuraciones vigentes desde el cache. Si la carga falla se sigue
    /// con una lista vacía y cada vehículo usa el intervalo por defecto.
    pub async fn revision_config_snapshot(&self) -> Arc<Vec<RevisionIntervalConfig>> {
        let store = Arc::clone(&self.revision_configs);
        match self.config_cache.get_or_load(|| async move { store.list().await }).await {
            Ok(configs) => configs,
            Err(e) => {
                warn!("⚠️ No se pudieron cargar las configuraciones de revisión: {}", e);
                Arc::new(Vec::new())
            }
        }
    }
}
