//! Agregación de la flota para el dashboard
//!
//! Conteos por estado y por marca sobre los registros de revisión, más el
//! resumen de odómetros y la vista de configuraciones por marca.

use std::collections::{BTreeMap, HashMap};

use crate::models::revision::{
    Breakdown, FleetRevisionSummary, FleetStats, RevisionStatus, StatusBreakdown, VehicleRevisionRecord,
};
use crate::models::revision_config::{BrandIntervalOverview, RevisionIntervalConfig};
use crate::models::vehicle::VehicleReading;

use super::revision_calculator::round_half_up;

/// Grupo usado cuando la marca o el tipo vienen vacíos
pub const UNKNOWN_GROUP: &str = "Others";

/// `round(count / total * 100)`, o 0 cuando no hay vehículos
pub fn percentage_of(count: usize, total: usize) -> i64 {
    if total == 0 {
        return 0;
    }
    round_half_up(count as f64 / total as f64 * 100.0)
}

fn group_key(raw: &str) -> &str {
    if raw.is_empty() {
        UNKNOWN_GROUP
    } else {
        raw
    }
}

/// Cuenta por clave y ordena por conteo descendente (empate: nombre)
fn breakdown<'a>(keys: impl Iterator<Item = &'a str>, total: usize) -> Vec<Breakdown> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for key in keys {
        *counts.entry(group_key(key)).or_insert(0) += 1;
    }

    let mut groups: Vec<Breakdown> = counts
        .into_iter()
        .map(|(name, value)| Breakdown {
            name: name.to_string(),
            value,
            percentage: percentage_of(value, total),
        })
        .collect();
    groups.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    groups
}

/// Resume los registros de revisión por estado y por marca.
///
/// La marca se agrupa tal cual viene: "VOLVO" y "Volvo" son grupos distintos.
pub fn summarize(records: &[VehicleRevisionRecord]) -> FleetRevisionSummary {
    let total = records.len();

    let mut counts: HashMap<RevisionStatus, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.revision_status).or_insert(0) += 1;
    }
    let count = |status: RevisionStatus| counts.get(&status).copied().unwrap_or(0);

    let by_status = RevisionStatus::ALL
        .iter()
        .map(|status| StatusBreakdown {
            status: *status,
            label: status.label().to_string(),
            value: count(*status),
            percentage: percentage_of(count(*status), total),
            color: status.color().to_string(),
        })
        .filter(|entry| entry.value > 0)
        .collect();

    let by_brand = breakdown(records.iter().map(|r| r.vehicle.brand.as_str()), total);

    FleetRevisionSummary {
        total_vehicles: total,
        overdue: count(RevisionStatus::Overdue),
        critical: count(RevisionStatus::Critical),
        attention: count(RevisionStatus::Attention),
        on_track: count(RevisionStatus::OnTrack),
        by_status,
        by_brand,
    }
}

/// Resumen de odómetros: km totales, promedio y distribución por marca y tipo
pub fn vehicle_stats(vehicles: &[VehicleReading]) -> FleetStats {
    let total = vehicles.len();
    let total_km: u64 = vehicles.iter().map(|v| v.current_km).sum();
    let avg_km = if total == 0 {
        0
    } else {
        round_half_up(total_km as f64 / total as f64).max(0) as u64
    };

    FleetStats {
        total_vehicles: total,
        total_km,
        avg_km,
        by_brand: breakdown(vehicles.iter().map(|v| v.brand.as_str()), total),
        by_type: breakdown(vehicles.iter().map(|v| v.vehicle_type.as_str()), total),
    }
}

/// Agrupa las configuraciones por marca (sin normalizar), cada grupo ordenado
/// por intervalo ascendente
pub fn group_configs_by_brand(configs: &[RevisionIntervalConfig]) -> BTreeMap<String, Vec<RevisionIntervalConfig>> {
    let mut grouped: BTreeMap<String, Vec<RevisionIntervalConfig>> = BTreeMap::new();
    for config in configs {
        grouped.entry(config.brand.clone()).or_default().push(config.clone());
    }
    for items in grouped.values_mut() {
        items.sort_by_key(|config| config.interval_km);
    }
    grouped
}

/// Menor intervalo por marca configurada
pub fn brand_interval_overview(configs: &[RevisionIntervalConfig]) -> Vec<BrandIntervalOverview> {
    group_configs_by_brand(configs)
        .into_iter()
        .filter_map(|(brand, items)| {
            let interval_km = items.first()?.interval_km;
            Some(BrandIntervalOverview {
                brand,
                interval_km,
                description: format!("Every {} km", interval_km),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::revision_calculator::calculate_fleet;
    use proptest::prelude::*;

    fn fleet() -> Vec<VehicleReading> {
        vec![
            VehicleReading::new("AAA0001", "VOLVO", 873_000).with_type("CAVALO"),
            VehicleReading::new("AAA0002", "VOLVO", 879_000).with_type("CAVALO"),
            VehicleReading::new("AAA0003", "Volvo", 881_000).with_last_revision(860_000),
            VehicleReading::new("AAA0004", "SCANIA", 16_000).with_type("TRUCK"),
            VehicleReading::new("AAA0005", "", 2_000),
        ]
    }

    #[test]
    fn test_percentage_of_zero_total() {
        assert_eq!(percentage_of(0, 0), 0);
        assert_eq!(percentage_of(1, 3), 33);
        assert_eq!(percentage_of(2, 3), 67);
        assert_eq!(percentage_of(1, 8), 13);
    }

    #[test]
    fn test_summarize_counts_by_status() {
        let summary = summarize(&calculate_fleet(&fleet(), &[]));
        assert_eq!(summary.total_vehicles, 5);
        assert_eq!(summary.on_track, 2);
        assert_eq!(summary.critical, 1);
        assert_eq!(summary.overdue, 1);
        assert_eq!(summary.attention, 1);
        assert_eq!(
            summary.on_track + summary.attention + summary.critical + summary.overdue,
            summary.total_vehicles
        );

        let statuses: Vec<RevisionStatus> = summary.by_status.iter().map(|s| s.status).collect();
        assert_eq!(
            statuses,
            vec![
                RevisionStatus::OnTrack,
                RevisionStatus::Attention,
                RevisionStatus::Critical,
                RevisionStatus::Overdue
            ]
        );
        assert_eq!(summary.by_status[0].percentage, 40);
        assert_eq!(summary.by_status[0].color, "#10B981");
    }

    #[test]
    fn test_summarize_omits_empty_status_groups() {
        let vehicles = vec![VehicleReading::new("AAA0001", "VOLVO", 1_000)];
        let summary = summarize(&calculate_fleet(&vehicles, &[]));
        assert_eq!(summary.by_status.len(), 1);
        assert_eq!(summary.by_status[0].status, RevisionStatus::OnTrack);
        assert_eq!(summary.by_status[0].percentage, 100);
    }

    #[test]
    fn test_summarize_groups_raw_brand() {
        let summary = summarize(&calculate_fleet(&fleet(), &[]));
        let brands: Vec<(&str, usize, i64)> = summary
            .by_brand
            .iter()
            .map(|b| (b.name.as_str(), b.value, b.percentage))
            .collect();
        assert_eq!(
            brands,
            vec![("VOLVO", 2, 40), ("Others", 1, 20), ("SCANIA", 1, 20), ("Volvo", 1, 20)]
        );
    }

    #[test]
    fn test_summarize_empty_fleet() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_vehicles, 0);
        assert!(summary.by_status.is_empty());
        assert!(summary.by_brand.is_empty());
        assert_eq!(summary.count_for(RevisionStatus::Overdue), 0);
    }

    #[test]
    fn test_vehicle_stats() {
        let stats = vehicle_stats(&fleet());
        assert_eq!(stats.total_vehicles, 5);
        assert_eq!(stats.total_km, 2_651_000);
        assert_eq!(stats.avg_km, 530_200);
        assert_eq!(stats.by_type[0].name, "CAVALO");
        assert_eq!(stats.by_type[0].value, 2);
        assert_eq!(stats.by_type[1].name, "Others");
        assert_eq!(stats.by_type[2].name, "TRUCK");
    }

    #[test]
    fn test_vehicle_stats_empty() {
        let stats = vehicle_stats(&[]);
        assert_eq!(stats.avg_km, 0);
        assert!(stats.by_brand.is_empty());
    }

    #[test]
    fn test_brand_interval_overview_uses_smallest_interval() {
        let configs = vec![
            RevisionIntervalConfig::new("VOLVO", "Complete", 40_000),
            RevisionIntervalConfig::new("VOLVO", "Oil", 10_000),
            RevisionIntervalConfig::new("DAF", "Complete", 25_000),
        ];
        let overview = brand_interval_overview(&configs);
        assert_eq!(overview.len(), 2);
        assert_eq!(overview[0].brand, "DAF");
        assert_eq!(overview[1].interval_km, 10_000);
        assert_eq!(overview[1].description, "Every 10000 km");

        let grouped = group_configs_by_brand(&configs);
        assert_eq!(grouped["VOLVO"][0].revision_name, "Oil");
    }

    proptest! {
        #[test]
        fn test_status_counts_sum_to_total(
            readings in proptest::collection::vec(
                (0u64..2_000_000, proptest::option::of(0u64..2_000_000), 0usize..3),
                0..40,
            ),
        ) {
            let brands = ["VOLVO", "SCANIA", ""];
            let vehicles: Vec<VehicleReading> = readings
                .iter()
                .enumerate()
                .map(|(i, (km, last, brand))| {
                    let mut vehicle = VehicleReading::new(format!("AAA{:04}", i), brands[*brand], *km);
                    vehicle.last_revision_km = *last;
                    vehicle
                })
                .collect();
            let configs = vec![RevisionIntervalConfig::new("VOLVO", "Oil", 10_000)];
            let summary = summarize(&calculate_fleet(&vehicles, &configs));

            prop_assert_eq!(summary.total_vehicles, vehicles.len());
            prop_assert_eq!(
                summary.overdue + summary.critical + summary.attention + summary.on_track,
                summary.total_vehicles
            );
            prop_assert_eq!(
                summary.by_status.iter().map(|s| s.value).sum::<usize>(),
                summary.total_vehicles
            );
            prop_assert_eq!(
                summary.by_brand.iter().map(|b| b.value).sum::<usize>(),
                summary.total_vehicles
            );
        }
    }
}
