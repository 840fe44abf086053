//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de base de datos, variables de entorno
//! y el matching de marcas.

pub mod database;
pub mod environment;

pub use database::DatabaseConfig;
pub use environment::EnvironmentConfig;
