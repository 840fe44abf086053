//! Resolución de intervalos de revisión por marca

use crate::models::revision_config::{IntervalTier, RevisionIntervalConfig, DEFAULT_INTERVAL_KM};

use super::brand_matcher::{BrandMatcher, SubstringBrandMatcher};

/// Resuelve los tiers de revisión aplicables a una marca
#[derive(Debug, Clone, Default)]
pub struct IntervalResolver<M = SubstringBrandMatcher> {
    matcher: M,
}

impl<M: BrandMatcher> IntervalResolver<M> {
    pub fn new(matcher: M) -> Self {
        Self { matcher }
    }

    fn matching<'a>(
        &'a self,
        brand: &'a str,
        configs: &'a [RevisionIntervalConfig],
    ) -> impl Iterator<Item = &'a RevisionIntervalConfig> + 'a {
        configs
            .iter()
            .filter(move |config| self.matcher.matches(brand, &config.brand))
    }

    /// Menor intervalo entre las configuraciones de la marca, o el intervalo
    /// por defecto si ninguna coincide
    pub fn min_interval(&self, brand: &str, configs: &[RevisionIntervalConfig]) -> i64 {
        self.matching(brand, configs)
            .map(|config| config.interval_km)
            .min()
            .unwrap_or(DEFAULT_INTERVAL_KM)
    }

    /// Todos los tiers de la marca ordenados por intervalo ascendente
    pub fn all_intervals(&self, brand: &str, configs: &[RevisionIntervalConfig]) -> Vec<IntervalTier> {
        let mut tiers: Vec<IntervalTier> = self
            .matching(brand, configs)
            .map(|config| IntervalTier {
                name: config.revision_name.clone(),
                interval_km: config.interval_km,
            })
            .collect();

        if tiers.is_empty() {
            return vec![IntervalTier::default_tier()];
        }

        tiers.sort_by_key(|tier| tier.interval_km);
        tiers
    }
}

/// `IntervalResolver::min_interval` con matching por substrings
pub fn resolve_min_interval(brand: &str, configs: &[RevisionIntervalConfig]) -> i64 {
    IntervalResolver::<SubstringBrandMatcher>::default().min_interval(brand, configs)
}

/// `IntervalResolver::all_intervals` con matching por substrings
pub fn resolve_all_intervals(brand: &str, configs: &[RevisionIntervalConfig]) -> Vec<IntervalTier> {
    IntervalResolver::<SubstringBrandMatcher>::default().all_intervals(brand, configs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::brand_matcher::ExactBrandMatcher;

    fn configs() -> Vec<RevisionIntervalConfig> {
        vec![
            RevisionIntervalConfig::new("MERCEDES-BENZ", "Complete service", 40_000),
            RevisionIntervalConfig::new("MERCEDES-BENZ", "Oil change", 10_000),
            RevisionIntervalConfig::new("VOLVO", "Complete", 30_000),
        ]
    }

    #[test]
    fn test_no_match_returns_default() {
        assert_eq!(resolve_min_interval("SCANIA", &configs()), 20_000);
        assert_eq!(resolve_min_interval("SCANIA", &[]), 20_000);
    }

    #[test]
    fn test_min_interval_among_matches() {
        assert_eq!(resolve_min_interval("mercedes-benz caminhoes", &configs()), 10_000);
        assert_eq!(resolve_min_interval("VOLVO", &configs()), 30_000);
    }

    #[test]
    fn test_config_brand_containing_vehicle_brand_matches() {
        let configs = vec![RevisionIntervalConfig::new("MERCEDES-BENZ CAMINHOES", "Intermediate", 15_000)];
        assert_eq!(resolve_min_interval("Mercedes-Benz", &configs), 15_000);
    }

    #[test]
    fn test_empty_brand_matches_every_config() {
        assert_eq!(resolve_min_interval("", &configs()), 10_000);
        assert_eq!(resolve_min_interval("", &[]), 20_000);
    }

    #[test]
    fn test_all_intervals_sorted_ascending() {
        let tiers = resolve_all_intervals("MERCEDES-BENZ", &configs());
        assert_eq!(
            tiers,
            vec![
                IntervalTier { name: "Oil change".to_string(), interval_km: 10_000 },
                IntervalTier { name: "Complete service".to_string(), interval_km: 40_000 },
            ]
        );
    }

    #[test]
    fn test_all_intervals_without_match_is_synthetic_default() {
        assert_eq!(
            resolve_all_intervals("IVECO", &configs()),
            vec![IntervalTier { name: "Revision".to_string(), interval_km: 20_000 }]
        );
    }

    #[test]
    fn test_resolver_with_exact_matcher() {
        let resolver = IntervalResolver::new(ExactBrandMatcher);
        assert_eq!(resolver.min_interval("MERCEDES-BENZ CAMINHOES", &configs()), 20_000);
        assert_eq!(resolver.min_interval(" mercedes-benz ", &configs()), 10_000);
    }
}
