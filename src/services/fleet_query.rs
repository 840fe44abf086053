//! Búsqueda y ordenamiento de vehículos para los listados

use std::cmp::Reverse;

use serde::Deserialize;

use crate::models::revision::VehicleRevisionRecord;
use crate::models::vehicle::VehicleReading;

/// Campos de texto sobre los que se busca
fn matches_query(vehicle: &VehicleReading, query: &str) -> bool {
    [&vehicle.plate, &vehicle.brand, &vehicle.model, &vehicle.vehicle_type]
        .iter()
        .any(|field| field.to_lowercase().contains(query))
}

fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Filtra lecturas por placa, marca, modelo o tipo (sin distinguir mayúsculas)
pub fn search_readings(vehicles: Vec<VehicleReading>, query: &str) -> Vec<VehicleReading> {
    let query = normalize_query(query);
    if query.is_empty() {
        return vehicles;
    }
    vehicles
        .into_iter()
        .filter(|vehicle| matches_query(vehicle, &query))
        .collect()
}

/// Igual que `search_readings` sobre registros de revisión
pub fn search(records: Vec<VehicleRevisionRecord>, query: &str) -> Vec<VehicleRevisionRecord> {
    let query = normalize_query(query);
    if query.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| matches_query(&record.vehicle, &query))
        .collect()
}

/// Más urgentes primero; dentro del mismo estado, menos km restantes primero
pub fn sort_by_urgency(records: &mut [VehicleRevisionRecord]) {
    records.sort_by_key(|record| (Reverse(record.revision_status), record.km_until_revision));
}

/// Criterios de ordenamiento del listado de odómetros
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingSort {
    #[default]
    PlateAsc,
    PlateDesc,
    KmAsc,
    KmDesc,
    BrandAsc,
    /// Actualizados más recientemente primero; sin fecha al final
    Recent,
}

pub fn sort_readings(vehicles: &mut [VehicleReading], sort: ReadingSort) {
    match sort {
        ReadingSort::PlateAsc => vehicles.sort_by(|a, b| a.plate.cmp(&b.plate)),
        ReadingSort::PlateDesc => vehicles.sort_by(|a, b| b.plate.cmp(&a.plate)),
        ReadingSort::KmAsc => vehicles.sort_by_key(|v| v.current_km),
        ReadingSort::KmDesc => vehicles.sort_by_key(|v| Reverse(v.current_km)),
        ReadingSort::BrandAsc => vehicles.sort_by(|a, b| a.brand.cmp(&b.brand)),
        ReadingSort::Recent => vehicles.sort_by_key(|v| Reverse(v.updated_at)),
    }
}
