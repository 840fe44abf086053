//! Estrategias de matching de marcas
//!
//! La marca del vehículo y la de la configuración son texto libre. Cada
//! estrategia decide si una configuración aplica a un vehículo.

use std::collections::HashMap;
use std::str::FromStr;

/// Normaliza una marca: mayúsculas y sin espacios en los extremos
pub fn normalize_brand(brand: &str) -> String {
    brand.trim().to_uppercase()
}

/// Decide si la marca configurada aplica a la marca del vehículo
pub trait BrandMatcher: Send + Sync {
    fn matches(&self, vehicle_brand: &str, config_brand: &str) -> bool;
}

/// Contención de substrings en ambos sentidos.
///
/// "MERCEDES-BENZ CAMINHOES" coincide con "MERCEDES-BENZ" y viceversa. La
/// marca configurada sólo se pasa a mayúsculas, sin trim.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringBrandMatcher;

impl BrandMatcher for SubstringBrandMatcher {
    fn matches(&self, vehicle_brand: &str, config_brand: &str) -> bool {
        let vehicle = normalize_brand(vehicle_brand);
        let config = config_brand.to_uppercase();
        vehicle.contains(&config) || config.contains(&vehicle)
    }
}

/// Igualdad exacta después de normalizar ambos lados
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactBrandMatcher;

impl BrandMatcher for ExactBrandMatcher {
    fn matches(&self, vehicle_brand: &str, config_brand: &str) -> bool {
        normalize_brand(vehicle_brand) == normalize_brand(config_brand)
    }
}

/// Traduce variantes conocidas a una marca canónica antes de delegar
#[derive(Debug, Clone, Default)]
pub struct AliasBrandMatcher<M> {
    aliases: HashMap<String, String>,
    inner: M,
}

impl<M: BrandMatcher> AliasBrandMatcher<M> {
    pub fn new(inner: M) -> Self {
        Self {
            aliases: HashMap::new(),
            inner,
        }
    }

    pub fn with_alias(mut self, alias: &str, canonical: &str) -> Self {
        self.aliases.insert(normalize_brand(alias), normalize_brand(canonical));
        self
    }

    fn canonical(&self, brand: &str) -> String {
        let normalized = normalize_brand(brand);
        self.aliases.get(&normalized).cloned().unwrap_or(normalized)
    }
}

impl<M: BrandMatcher> BrandMatcher for AliasBrandMatcher<M> {
    fn matches(&self, vehicle_brand: &str, config_brand: &str) -> bool {
        self.inner
            .matches(&self.canonical(vehicle_brand), &self.canonical(config_brand))
    }
}

impl<T: BrandMatcher + ?Sized> BrandMatcher for Box<T> {
    fn matches(&self, vehicle_brand: &str, config_brand: &str) -> bool {
        (**self).matches(vehicle_brand, config_brand)
    }
}

/// Regla de matching seleccionable por configuración
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStrategy {
    #[default]
    Substring,
    Exact,
}

impl FromStr for MatchStrategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "exact" => Ok(Self::Exact),
            other => Err(format!("unknown brand matching strategy '{}'", other)),
        }
    }
}

/// Construye el matcher; con alias envuelve la estrategia elegida
pub fn build_matcher(strategy: MatchStrategy, aliases: &[(String, String)]) -> Box<dyn BrandMatcher> {
    let base: Box<dyn BrandMatcher> = match strategy {
        MatchStrategy::Substring => Box::new(SubstringBrandMatcher),
        MatchStrategy::Exact => Box::new(ExactBrandMatcher),
    };

    if aliases.is_empty() {
        return base;
    }

    let matcher = aliases
        .iter()
        .fold(AliasBrandMatcher::new(base), |matcher, (alias, canonical)| {
            matcher.with_alias(alias, canonical)
        });
    Box::new(matcher)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_strategy_from_str() {
        assert_eq!("Substring".parse::<MatchStrategy>(), Ok(MatchStrategy::Substring));
        assert_eq!(" exact ".parse::<MatchStrategy>(), Ok(MatchStrategy::Exact));
        assert!("fuzzy".parse::<MatchStrategy>().is_err());
    }

    #[test]
    fn test_build_matcher_with_aliases() {
        let aliases = vec![("MB".to_string(), "MERCEDES-BENZ".to_string())];
        let matcher = build_matcher(MatchStrategy::Exact, &aliases);
        assert!(matcher.matches("mb", "MERCEDES-BENZ"));

        let plain = build_matcher(MatchStrategy::Exact, &[]);
        assert!(!plain.matches("mb", "MERCEDES-BENZ"));
    }

    #[test]
    fn test_normalize_brand() {
        assert_eq!(normalize_brand("  volvo "), "VOLVO");
        assert_eq!(normalize_brand(""), "");
    }

    #[test]
    fn test_substring_matches_both_directions() {
        let matcher = SubstringBrandMatcher;
        assert!(matcher.matches("MERCEDES-BENZ CAMINHOES", "MERCEDES-BENZ"));
        assert!(matcher.matches("mercedes-benz", "MERCEDES-BENZ CAMINHOES"));
        assert!(matcher.matches(" Volvo ", "volvo"));
        assert!(!matcher.matches("SCANIA", "VOLVO"));
    }

    #[test]
    fn test_substring_empty_vehicle_brand_matches_everything() {
        assert!(SubstringBrandMatcher.matches("", "VOLVO"));
    }

    #[test]
    fn test_exact_matcher() {
        let matcher = ExactBrandMatcher;
        assert!(matcher.matches(" volvo", "VOLVO "));
        assert!(!matcher.matches("MERCEDES-BENZ CAMINHOES", "MERCEDES-BENZ"));
    }

    #[test]
    fn test_alias_matcher() {
        let matcher = AliasBrandMatcher::new(ExactBrandMatcher)
            .with_alias("MB", "MERCEDES-BENZ")
            .with_alias("M. BENZ", "MERCEDES-BENZ");
        assert!(matcher.matches("mb", "Mercedes-Benz"));
        assert!(matcher.matches("M. Benz", "MB"));
        assert!(!matcher.matches("VW", "MERCEDES-BENZ"));
    }
}
