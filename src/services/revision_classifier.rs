//! Clasificación de la próxima revisión: completa o intermedia

use crate::models::revision::RevisionType;
use crate::models::revision_config::RevisionIntervalConfig;

use super::brand_matcher::{BrandMatcher, SubstringBrandMatcher};
use super::interval_resolver::IntervalResolver;

impl<M: BrandMatcher> IntervalResolver<M> {
    /// El tier de mayor intervalo es el ciclo completo; los demás quedan
    /// anidados dentro de él. Con un solo tier no hay distinción posible.
    ///
    /// La prueba de múltiplo asume una grilla alineada en cero: si la última
    /// revisión no es múltiplo del ciclo completo, la revisión nunca sale
    /// como completa.
    pub fn classify_upcoming(
        &self,
        next_revision_km: i64,
        brand: &str,
        configs: &[RevisionIntervalConfig],
    ) -> RevisionType {
        let tiers = self.all_intervals(brand, configs);
        if tiers.len() <= 1 {
            return RevisionType::Complete;
        }

        let complete_interval = tiers
            .iter()
            .map(|tier| tier.interval_km)
            .max()
            .unwrap_or_default();

        match next_revision_km.checked_rem(complete_interval) {
            Some(0) => RevisionType::Complete,
            _ => RevisionType::Intermediate,
        }
    }
}

/// `IntervalResolver::classify_upcoming` con matching por substrings
pub fn classify_upcoming_revision(
    next_revision_km: i64,
    brand: &str,
    configs: &[RevisionIntervalConfig],
) -> RevisionType {
    IntervalResolver::<SubstringBrandMatcher>::default().classify_upcoming(next_revision_km, brand, configs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tiers() -> Vec<RevisionIntervalConfig> {
        vec![
            RevisionIntervalConfig::new("VOLVO", "Intermediate", 10_000),
            RevisionIntervalConfig::new("VOLVO", "Complete", 20_000),
        ]
    }

    #[test]
    fn test_multiple_of_largest_interval_is_complete() {
        assert_eq!(classify_upcoming_revision(880_000, "VOLVO", &two_tiers()), RevisionType::Complete);
    }

    #[test]
    fn test_non_multiple_is_intermediate() {
        assert_eq!(classify_upcoming_revision(870_000, "VOLVO", &two_tiers()), RevisionType::Intermediate);
    }

    #[test]
    fn test_single_tier_is_always_complete() {
        let configs = vec![RevisionIntervalConfig::new("SCANIA", "Revision", 15_000)];
        assert_eq!(classify_upcoming_revision(7, "SCANIA", &configs), RevisionType::Complete);
    }

    #[test]
    fn test_no_configs_is_always_complete() {
        assert_eq!(classify_upcoming_revision(870_000, "ANY", &[]), RevisionType::Complete);
        assert_eq!(classify_upcoming_revision(12_345, "VOLVO", &two_tiers()[..0]), RevisionType::Complete);
    }

    #[test]
    fn test_unaligned_grid_never_reaches_complete() {
        // última revisión registrada en 865.000: la grilla queda corrida 5.000 km
        for next in [875_000, 885_000, 895_000, 905_000] {
            assert_eq!(classify_upcoming_revision(next, "VOLVO", &two_tiers()), RevisionType::Intermediate);
        }
    }

    #[test]
    fn test_zero_complete_interval_does_not_panic() {
        let configs = vec![
            RevisionIntervalConfig::new("DAF", "Broken", 0),
            RevisionIntervalConfig::new("DAF", "Broken too", 0),
        ];
        assert_eq!(classify_upcoming_revision(10_000, "DAF", &configs), RevisionType::Intermediate);
    }
}
