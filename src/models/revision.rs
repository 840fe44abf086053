//! Modelos derivados de revisión
//!
//! Estos registros nunca se persisten: se calculan en cada lectura a partir
//! de las lecturas de odómetro y las configuraciones de intervalo.

use serde::{Deserialize, Serialize};

use super::vehicle::VehicleReading;

/// Urgencia de la próxima revisión, ordenada por severidad
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RevisionStatus {
    #[serde(rename = "ok")]
    OnTrack,
    #[serde(rename = "warning")]
    Attention,
    #[serde(rename = "critical")]
    Critical,
    #[serde(rename = "overdue")]
    Overdue,
}

impl RevisionStatus {
    /// Orden de presentación en el dashboard
    pub const ALL: [RevisionStatus; 4] = [
        RevisionStatus::OnTrack,
        RevisionStatus::Attention,
        RevisionStatus::Critical,
        RevisionStatus::Overdue,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::OnTrack => "On track",
            Self::Attention => "Attention",
            Self::Critical => "Critical",
            Self::Overdue => "Overdue",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::OnTrack => "#10B981",
            Self::Attention => "#F59E0B",
            Self::Critical => "#EF4444",
            Self::Overdue => "#7C3AED",
        }
    }
}

/// Tipo de la próxima revisión
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevisionType {
    Complete,
    Intermediate,
}

impl RevisionType {
    /// Valor de la columna `ultima_revisao_tipo`
    pub fn as_db_str(&self) -> &'static str {
        match self {
            Self::Complete => "Completa",
            Self::Intermediate => "Intermediária",
        }
    }
}

/// Lectura de vehículo extendida con los campos de planificación
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRevisionRecord {
    #[serde(flatten)]
    pub vehicle: VehicleReading,
    pub revision_interval: i64,
    pub last_revision_km: i64,
    pub next_revision_km: i64,
    /// Cero o negativo significa revisión atrasada
    pub km_until_revision: i64,
    /// Satura en 100; puede ser negativo con datos desactualizados
    pub revision_percentage: i64,
    pub revision_status: RevisionStatus,
    pub next_revision_type: RevisionType,
}

/// Conteo y porcentaje de un grupo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub name: String,
    pub value: usize,
    pub percentage: i64,
}

/// Conteo por estado, con etiqueta y color para los gráficos
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    pub status: RevisionStatus,
    pub label: String,
    pub value: usize,
    pub percentage: i64,
    pub color: String,
}

/// Resumen de revisiones de toda la flota
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetRevisionSummary {
    pub total_vehicles: usize,
    pub overdue: usize,
    pub critical: usize,
    pub attention: usize,
    pub on_track: usize,
    pub by_status: Vec<StatusBreakdown>,
    pub by_brand: Vec<Breakdown>,
}

impl FleetRevisionSummary {
    pub fn count_for(&self, status: RevisionStatus) -> usize {
        match status {
            RevisionStatus::OnTrack => self.on_track,
            RevisionStatus::Attention => self.attention,
            RevisionStatus::Critical => self.critical,
            RevisionStatus::Overdue => self.overdue,
        }
    }
}

/// Resumen de odómetros de la flota
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetStats {
    pub total_vehicles: usize,
    pub total_km: u64,
    pub avg_km: u64,
    pub by_brand: Vec<Breakdown>,
    pub by_type: Vec<Breakdown>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_severity_order() {
        assert!(RevisionStatus::OnTrack < RevisionStatus::Attention);
        assert!(RevisionStatus::Attention < RevisionStatus::Critical);
        assert!(RevisionStatus::Critical < RevisionStatus::Overdue);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_string(&RevisionStatus::OnTrack).unwrap(), "\"ok\"");
        assert_eq!(serde_json::to_string(&RevisionStatus::Attention).unwrap(), "\"warning\"");
        let parsed: RevisionStatus = serde_json::from_str("\"overdue\"").unwrap();
        assert_eq!(parsed, RevisionStatus::Overdue);
    }

    #[test]
    fn test_revision_type_storage_values() {
        assert_eq!(RevisionType::Complete.as_db_str(), "Completa");
        assert_eq!(RevisionType::Intermediate.as_db_str(), "Intermediária");
        assert_eq!(serde_json::to_string(&RevisionType::Complete).unwrap(), "\"Complete\"");
    }

    #[test]
    fn test_record_flattens_vehicle_fields() {
        let record = VehicleRevisionRecord {
            vehicle: VehicleReading::new("ABC1234", "VOLVO", 873_000),
            revision_interval: 20_000,
            last_revision_km: 860_000,
            next_revision_km: 880_000,
            km_until_revision: 7_000,
            revision_percentage: 65,
            revision_status: RevisionStatus::OnTrack,
            next_revision_type: RevisionType::Complete,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["plate"], "ABC1234");
        assert_eq!(json["current_km"], 873_000);
        assert_eq!(json["revision_status"], "ok");
        assert_eq!(json["next_revision_type"], "Complete");
        assert_eq!(json["last_revision_km"], 860_000);
        assert!(json["recorded_revision_km"].is_null());
    }
}
