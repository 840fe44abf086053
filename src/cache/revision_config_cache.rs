//! Cache de configuraciones de revisión
//!
//! Snapshot en memoria de la tabla `revision_config` con TTL explícito. El
//! handle es clonable y se comparte a través de `AppState`; toda escritura de
//! configuraciones debe llamar a `invalidate`.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::revision_config::RevisionIntervalConfig;

use super::CacheConfig;

#[derive(Debug)]
struct CachedConfigs {
    configs: Arc<Vec<RevisionIntervalConfig>>,
    loaded_at: Instant,
}

/// `generation` sube en cada `invalidate`; una carga iniciada antes de una
/// invalidación no se guarda
#[derive(Debug, Default)]
struct CacheState {
    snapshot: Option<CachedConfigs>,
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct RevisionConfigCache {
    ttl: Duration,
    inner: Arc<RwLock<CacheState>>,
}

impl RevisionConfigCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: Arc::new(RwLock::new(CacheState::default())),
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.ttl())
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Snapshot vigente, si existe
    pub async fn get(&self) -> Option<Arc<Vec<RevisionIntervalConfig>>> {
        let guard = self.inner.read().await;
        guard
            .snapshot
            .as_ref()
            .filter(|cached| cached.loaded_at.elapsed() < self.ttl)
            .map(|cached| Arc::clone(&cached.configs))
    }

    /// Devuelve el snapshot vigente o ejecuta `loader` y guarda el resultado.
    /// Un error del loader no toca el cache.
    pub async fn get_or_load<F, Fut, E>(&self, loader: F) -> Result<Arc<Vec<RevisionIntervalConfig>>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<RevisionIntervalConfig>, E>>,
    {
        if let Some(configs) = self.get().await {
            debug!("📥 Cache HIT de configuraciones ({} registros)", configs.len());
            return Ok(configs);
        }

        debug!("📤 Cache MISS de configuraciones, cargando desde la base");
        let generation = self.inner.read().await.generation;
        let configs = Arc::new(loader().await?);

        let mut guard = self.inner.write().await;
        if guard.generation == generation {
            guard.snapshot = Some(CachedConfigs {
                configs: Arc::clone(&configs),
                loaded_at: Instant::now(),
            });
        } else {
            debug!("⏭️ Configuraciones invalidadas durante la carga, no se guardan");
        }
        Ok(configs)
    }

    pub async fn invalidate(&self) {
        let mut guard = self.inner.write().await;
        guard.generation = guard.generation.wrapping_add(1);
        if guard.snapshot.take().is_some() {
            info!("🗑️ Cache de configuraciones invalidado");
        }
    }
}
