//! Modelo de Vehicle
//!
//! Este módulo contiene la lectura de odómetro de un vehículo y el paso de
//! decodificación desde la fila cruda de la tabla `hodometro`.

use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

/// Estado actual de un vehículo de la flota
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleReading {
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub vehicle_type: String,
    pub current_km: u64,
    /// `None` cuando no hay revisión registrada y hay que estimarla
    #[serde(rename = "recorded_revision_km")]
    pub last_revision_km: Option<u64>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl VehicleReading {
    pub fn new(plate: impl Into<String>, brand: impl Into<String>, current_km: u64) -> Self {
        Self {
            plate: plate.into(),
            brand: brand.into(),
            model: String::new(),
            vehicle_type: String::new(),
            current_km,
            last_revision_km: None,
            updated_at: None,
        }
    }

    pub fn with_last_revision(mut self, km: u64) -> Self {
        self.last_revision_km = Some(km);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_type(mut self, vehicle_type: impl Into<String>) -> Self {
        self.vehicle_type = vehicle_type.into();
        self
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }
}

/// Fila cruda de la tabla `hodometro`, tal cual la devuelve Postgres
#[derive(Debug, Clone, FromRow)]
pub struct HodometroRow {
    pub id: i64,
    pub placa: Option<String>,
    pub tipo: Option<String>,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub hodometro_km: Option<Decimal>,
    pub ultima_revisao_km: Option<Decimal>,
    pub ultima_revisao_tipo: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Errores al convertir una fila cruda en `VehicleReading`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VehicleDecodeError {
    #[error("row {row_id}: missing plate")]
    MissingPlate { row_id: i64 },

    #[error("row {row_id}: {field} is negative ({value})")]
    NegativeKm { row_id: i64, field: &'static str, value: Decimal },

    #[error("row {row_id}: {field} is not a whole number ({value})")]
    FractionalKm { row_id: i64, field: &'static str, value: Decimal },

    #[error("row {row_id}: {field} is out of range ({value})")]
    KmOutOfRange { row_id: i64, field: &'static str, value: Decimal },
}

fn decode_km(row_id: i64, field: &'static str, value: Decimal) -> Result<u64, VehicleDecodeError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(VehicleDecodeError::NegativeKm { row_id, field, value });
    }
    if !value.fract().is_zero() {
        return Err(VehicleDecodeError::FractionalKm { row_id, field, value });
    }
    value
        .to_u64()
        .ok_or(VehicleDecodeError::KmOutOfRange { row_id, field, value })
}

impl TryFrom<HodometroRow> for VehicleReading {
    type Error = VehicleDecodeError;

    fn try_from(row: HodometroRow) -> Result<Self, Self::Error> {
        let plate = row
            .placa
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .ok_or(VehicleDecodeError::MissingPlate { row_id: row.id })?;

        let current_km = match row.hodometro_km {
            Some(km) => decode_km(row.id, "hodometro_km", km)?,
            None => 0,
        };

        // 0 y NULL significan "sin revisión registrada"
        let last_revision_km = match row.ultima_revisao_km {
            Some(km) => Some(decode_km(row.id, "ultima_revisao_km", km)?).filter(|km| *km > 0),
            None => None,
        };

        Ok(Self {
            plate,
            brand: row.marca.unwrap_or_default(),
            model: row.modelo.unwrap_or_default(),
            vehicle_type: row.tipo.unwrap_or_default(),
            current_km,
            last_revision_km,
            updated_at: row.updated_at,
        })
    }
}
