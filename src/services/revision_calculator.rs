//! Cálculo del estado de revisión de cada vehículo
//!
//! Combina el odómetro actual, la última revisión conocida (o su estimación)
//! y el intervalo de la marca para producir el registro de planificación.

use tracing::debug;

use crate::models::revision::{RevisionStatus, VehicleRevisionRecord};
use crate::models::revision_config::RevisionIntervalConfig;
use crate::models::vehicle::VehicleReading;

use super::brand_matcher::{BrandMatcher, SubstringBrandMatcher};
use super::interval_resolver::IntervalResolver;

/// Km restantes a partir de los cuales la revisión es crítica
pub const CRITICAL_THRESHOLD_KM: i64 = 2_000;

/// Km restantes a partir de los cuales la revisión requiere atención
pub const ATTENTION_THRESHOLD_KM: i64 = 5_000;

/// Redondeo "half-up" hacia +∞, el mismo que usa el dashboard
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Clasifica la urgencia según los km que faltan para la próxima revisión
pub fn status_for_remaining_km(km_until_revision: i64) -> RevisionStatus {
    if km_until_revision <= 0 {
        RevisionStatus::Overdue
    } else if km_until_revision <= CRITICAL_THRESHOLD_KM {
        RevisionStatus::Critical
    } else if km_until_revision <= ATTENTION_THRESHOLD_KM {
        RevisionStatus::Attention
    } else {
        RevisionStatus::OnTrack
    }
}

/// Última revisión estimada: mayor múltiplo del intervalo que no supera el odómetro
fn estimate_last_revision(current_km: i64, interval: i64) -> i64 {
    if interval <= 0 {
        return 0;
    }
    (current_km / interval) * interval
}

#[derive(Debug, Clone, Default)]
pub struct RevisionCalculator<M = SubstringBrandMatcher> {
    resolver: IntervalResolver<M>,
}

impl<M: BrandMatcher> RevisionCalculator<M> {
    pub fn new(matcher: M) -> Self {
        Self {
            resolver: IntervalResolver::new(matcher),
        }
    }

    pub fn calculate(&self, vehicle: &VehicleReading, configs: &[RevisionIntervalConfig]) -> VehicleRevisionRecord {
        let interval = self.resolver.min_interval(&vehicle.brand, configs);
        let current_km = i64::try_from(vehicle.current_km).unwrap_or(i64::MAX);

        let last_revision_km = match vehicle.last_revision_km {
            Some(km) if km > 0 => i64::try_from(km).unwrap_or(i64::MAX),
            _ => estimate_last_revision(current_km, interval),
        };

        let next_revision_km = last_revision_km.saturating_add(interval);
        let km_until_revision = next_revision_km.saturating_sub(current_km);
        let km_since_last_revision = current_km.saturating_sub(last_revision_km);

        // Sin piso en 0: una revisión por encima del odómetro da porcentaje negativo
        let revision_percentage =
            round_half_up(km_since_last_revision as f64 / interval as f64 * 100.0).min(100);

        let revision_status = status_for_remaining_km(km_until_revision);
        let next_revision_type = self
            .resolver
            .classify_upcoming(next_revision_km, &vehicle.brand, configs);

        VehicleRevisionRecord {
            vehicle: vehicle.clone(),
            revision_interval: interval,
            last_revision_km,
            next_revision_km,
            km_until_revision,
            revision_percentage,
            revision_status,
            next_revision_type,
        }
    }

    pub fn calculate_fleet(
        &self,
        vehicles: &[VehicleReading],
        configs: &[RevisionIntervalConfig],
    ) -> Vec<VehicleRevisionRecord> {
        debug!(
            "🔧 Calculando revisiones para {} vehículos con {} configuraciones",
            vehicles.len(),
            configs.len()
        );
        vehicles
            .iter()
            .map(|vehicle| self.calculate(vehicle, configs))
            .collect()
    }
}

/// `RevisionCalculator::calculate` con matching por substrings
pub fn calculate_revision(vehicle: &VehicleReading, configs: &[RevisionIntervalConfig]) -> VehicleRevisionRecord {
    RevisionCalculator::<SubstringBrandMatcher>::default().calculate(vehicle, configs)
}

/// `RevisionCalculator::calculate_fleet` con matching por substrings
pub fn calculate_fleet(vehicles: &[VehicleReading], configs: &[RevisionIntervalConfig]) -> Vec<VehicleRevisionRecord> {
    RevisionCalculator::<SubstringBrandMatcher>::default().calculate_fleet(vehicles, configs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::revision::RevisionType;
    use proptest::prelude::*;

    fn volvo(current_km: u64) -> VehicleReading {
        VehicleReading::new("ABC1234", "VOLVO", current_km)
    }

    #[test]
    fn test_estimated_cycle_on_track() {
        let record = calculate_revision(&volvo(873_000), &[]);
        assert_eq!(record.revision_interval, 20_000);
        assert_eq!(record.last_revision_km, 860_000);
        assert_eq!(record.next_revision_km, 880_000);
        assert_eq!(record.km_until_revision, 7_000);
        assert_eq!(record.revision_status, RevisionStatus::OnTrack);
        assert_eq!(record.revision_percentage, 65);
        assert_eq!(record.next_revision_type, RevisionType::Complete);
    }

    #[test]
    fn test_critical_close_to_next_point() {
        let record = calculate_revision(&volvo(879_000).with_last_revision(860_000), &[]);
        assert_eq!(record.km_until_revision, 1_000);
        assert_eq!(record.revision_status, RevisionStatus::Critical);
        assert_eq!(record.revision_percentage, 95);
    }

    #[test]
    fn test_overdue_past_next_point() {
        let record = calculate_revision(&volvo(881_000).with_last_revision(860_000), &[]);
        assert_eq!(record.km_until_revision, -1_000);
        assert_eq!(record.revision_status, RevisionStatus::Overdue);
        assert_eq!(record.revision_percentage, 100);
    }

    #[test]
    fn test_status_threshold_boundaries() {
        assert_eq!(status_for_remaining_km(0), RevisionStatus::Overdue);
        assert_eq!(status_for_remaining_km(-1), RevisionStatus::Overdue);
        assert_eq!(status_for_remaining_km(1), RevisionStatus::Critical);
        assert_eq!(status_for_remaining_km(2_000), RevisionStatus::Critical);
        assert_eq!(status_for_remaining_km(2_001), RevisionStatus::Attention);
        assert_eq!(status_for_remaining_km(5_000), RevisionStatus::Attention);
        assert_eq!(status_for_remaining_km(5_001), RevisionStatus::OnTrack);
    }

    #[test]
    fn test_exact_grid_point_starts_new_cycle() {
        let record = calculate_revision(&volvo(880_000), &[]);
        assert_eq!(record.last_revision_km, 880_000);
        assert_eq!(record.next_revision_km, 900_000);
        assert_eq!(record.revision_percentage, 0);
        assert_eq!(record.revision_status, RevisionStatus::OnTrack);
    }

    #[test]
    fn test_stale_revision_above_odometer_gives_negative_percentage() {
        let record = calculate_revision(&volvo(10_000).with_last_revision(15_000), &[]);
        assert_eq!(record.next_revision_km, 35_000);
        assert_eq!(record.km_until_revision, 25_000);
        assert_eq!(record.revision_percentage, -25);
        assert_eq!(record.revision_status, RevisionStatus::OnTrack);
    }

    #[test]
    fn test_new_vehicle_at_zero_km() {
        let record = calculate_revision(&volvo(0), &[]);
        assert_eq!(record.last_revision_km, 0);
        assert_eq!(record.next_revision_km, 20_000);
        assert_eq!(record.revision_percentage, 0);
    }

    #[test]
    fn test_uses_minimum_brand_interval_and_classifies() {
        let configs = vec![
            RevisionIntervalConfig::new("VOLVO", "Complete", 20_000),
            RevisionIntervalConfig::new("VOLVO", "Intermediate", 10_000),
        ];
        let record = calculate_revision(&volvo(873_000), &configs);
        assert_eq!(record.revision_interval, 10_000);
        assert_eq!(record.last_revision_km, 870_000);
        assert_eq!(record.next_revision_km, 880_000);
        assert_eq!(record.next_revision_type, RevisionType::Complete);

        let record = calculate_revision(&volvo(863_000), &configs);
        assert_eq!(record.next_revision_km, 870_000);
        assert_eq!(record.next_revision_type, RevisionType::Intermediate);
    }

    #[test]
    fn test_zero_interval_config_does_not_panic() {
        let configs = vec![RevisionIntervalConfig::new("VOLVO", "Broken", 0)];
        let record = calculate_revision(&volvo(5_000), &configs);
        assert_eq!(record.revision_interval, 0);
        assert_eq!(record.last_revision_km, 0);
        assert_eq!(record.revision_percentage, 100);
    }

    #[test]
    fn test_calculate_fleet_keeps_order() {
        let vehicles = vec![volvo(10), VehicleReading::new("XYZ9876", "SCANIA", 19_500)];
        let records = calculate_fleet(&vehicles, &[]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].vehicle.plate, "ABC1234");
        assert_eq!(records[1].revision_status, RevisionStatus::Critical);
    }

    proptest! {
        #[test]
        fn test_estimated_revision_is_aligned_below_odometer(
            current_km in 0u64..10_000_000,
            interval in 1i64..100_000,
        ) {
            let configs = vec![RevisionIntervalConfig::new("VOLVO", "Cycle", interval)];
            let record = calculate_revision(&volvo(current_km), &configs);

            prop_assert!(record.last_revision_km >= 0);
            prop_assert_eq!(record.last_revision_km % interval, 0);
            prop_assert!(record.last_revision_km <= current_km as i64);
            prop_assert!(record.km_until_revision > 0);
        }

        #[test]
        fn test_next_and_remaining_km_are_exact(
            current_km in 0u64..10_000_000,
            last_revision in proptest::option::of(0u64..10_000_000),
            interval in 1i64..100_000,
        ) {
            let mut vehicle = volvo(current_km);
            vehicle.last_revision_km = last_revision;
            let configs = vec![RevisionIntervalConfig::new("VOLVO", "Cycle", interval)];
            let record = calculate_revision(&vehicle, &configs);

            prop_assert_eq!(record.next_revision_km, record.last_revision_km + interval);
            prop_assert_eq!(record.km_until_revision, record.next_revision_km - current_km as i64);
            prop_assert_eq!(record.revision_status, status_for_remaining_km(record.km_until_revision));
        }

        #[test]
        fn test_percentage_never_exceeds_100(
            current_km in 0u64..10_000_000,
            last_revision in proptest::option::of(0u64..20_000_000),
            interval in -1_000i64..100_000,
        ) {
            let mut vehicle = volvo(current_km);
            vehicle.last_revision_km = last_revision;
            let configs = vec![RevisionIntervalConfig::new("VOLVO", "Cycle", interval)];
            let record = calculate_revision(&vehicle, &configs);

            prop_assert!(record.revision_percentage <= 100);
        }
    }
}
