//! Planificación de revisiones de flota
//!
//! Calcula cuándo cada vehículo necesita su próxima revisión a partir del
//! odómetro y de los intervalos configurados por marca, y lo expone por HTTP.

pub mod cache;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_router;
pub use state::AppState;
