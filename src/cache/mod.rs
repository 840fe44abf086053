//! Cache
//! 
//! Este módulo contiene el cache de configuraciones de revisión.

pub mod cache_config;
pub mod revision_config_cache;

pub use cache_config::CacheConfig;
pub use revision_config_cache::RevisionConfigCache;
