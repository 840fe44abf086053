//! Modelo de configuración de revisiones
//!
//! Cada fila de `revision_config` define un ciclo de mantenimiento (tier)
//! para una marca. Varias filas pueden compartir marca.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Intervalo usado cuando ninguna configuración coincide con la marca
pub const DEFAULT_INTERVAL_KM: i64 = 20_000;

/// Nombre del tier sintético devuelto cuando no hay configuraciones
pub const DEFAULT_REVISION_NAME: &str = "Revision";

/// Configuración de un ciclo de revisión para una marca
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RevisionIntervalConfig {
    pub id: Uuid,
    /// Texto libre, sin normalizar
    pub brand: String,
    pub revision_name: String,
    pub interval_km: i64,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl RevisionIntervalConfig {
    pub fn new(brand: impl Into<String>, revision_name: impl Into<String>, interval_km: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            brand: brand.into(),
            revision_name: revision_name.into(),
            interval_km,
            description: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Un tier de revisión ya resuelto para una marca
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalTier {
    pub name: String,
    pub interval_km: i64,
}

impl IntervalTier {
    pub fn default_tier() -> Self {
        Self {
            name: DEFAULT_REVISION_NAME.to_string(),
            interval_km: DEFAULT_INTERVAL_KM,
        }
    }
}

/// Menor intervalo configurado por marca, para mostrar en el dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandIntervalOverview {
    pub brand: String,
    pub interval_km: i64,
    pub description: String,
}
