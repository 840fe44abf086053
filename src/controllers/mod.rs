//! Controllers
//!
//! Orquestan almacenes, cache y cálculo para cada endpoint.

pub mod revision_config_controller;
pub mod revision_controller;
pub mod vehicle_controller;

pub use revision_config_controller::RevisionConfigController;
pub use revision_controller::RevisionController;
pub use vehicle_controller::VehicleController;
