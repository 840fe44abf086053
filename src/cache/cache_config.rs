//! Configuración de cache
//! 
//! Este módulo contiene la configuración para el cache de configuraciones.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuración del cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Segundos de validez de un snapshot de configuraciones
    pub default_ttl: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: 60, // 1 minuto
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl)
    }
}
