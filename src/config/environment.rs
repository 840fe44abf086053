//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use anyhow::{anyhow, Context, Result};
use std::env;
use std::str::FromStr;

use crate::cache::CacheConfig;
use crate::services::brand_matcher::MatchStrategy;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub log_level: tracing::Level,
    pub cache: CacheConfig,
    pub brand_matching: MatchStrategy,
    /// Pares (alias, marca canónica), p. ej. `MB=MERCEDES-BENZ`
    pub brand_aliases: Vec<(String, String)>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            log_level: tracing::Level::INFO,
            cache: CacheConfig::default(),
            brand_matching: MatchStrategy::default(),
            brand_aliases: Vec::new(),
        }
    }
}

fn parse_var<T>(name: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map_err(|e| anyhow!("{} must be valid: {}", name, e)),
        _ => Ok(default),
    }
}

fn parse_aliases(raw: &str) -> Result<Vec<(String, String)>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (alias, canonical) = entry
                .split_once('=')
                .with_context(|| format!("BRAND_ALIASES entry '{}' must look like ALIAS=BRAND", entry))?;
            Ok((alias.trim().to_string(), canonical.trim().to_string()))
        })
        .collect()
}

impl EnvironmentConfig {
    /// Leer la configuración de las variables de entorno
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var("PORT", lookup("PORT"), defaults.port)?,
            host: lookup("HOST").unwrap_or(defaults.host),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            log_level: parse_var("LOG_LEVEL", lookup("LOG_LEVEL"), defaults.log_level)?,
            cache: CacheConfig {
                default_ttl: parse_var(
                    "CONFIG_CACHE_TTL_SECS",
                    lookup("CONFIG_CACHE_TTL_SECS"),
                    defaults.cache.default_ttl,
                )?,
            },
            brand_matching: parse_var("BRAND_MATCHING", lookup("BRAND_MATCHING"), defaults.brand_matching)?,
            brand_aliases: match lookup("BRAND_ALIASES") {
                Some(raw) => parse_aliases(&raw)?,
                None => defaults.brand_aliases,
            },
        })
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
