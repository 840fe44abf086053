//! Modelos de dominio
//!
//! Lecturas de odómetro, configuraciones de intervalos y los registros
//! derivados del cálculo de revisiones.

pub mod revision;
pub mod revision_config;
pub mod vehicle;

pub use revision::{RevisionStatus, RevisionType, VehicleRevisionRecord};
pub use revision_config::{RevisionIntervalConfig, DEFAULT_INTERVAL_KM};
pub use vehicle::VehicleReading;
