//! Services module
//! 
//! Este módulo contiene el núcleo de cálculo de revisiones. Todo es puro y
//! síncrono: sin I/O ni estado compartido.

pub mod brand_matcher;
pub mod fleet_aggregator;
pub mod fleet_query;
pub mod interval_resolver;
pub mod revision_calculator;
pub mod revision_classifier;

pub use brand_matcher::{BrandMatcher, MatchStrategy};
pub use fleet_aggregator::{summarize, vehicle_stats};
pub use interval_resolver::{resolve_all_intervals, resolve_min_interval, IntervalResolver};
pub use revision_calculator::{calculate_fleet, calculate_revision, status_for_remaining_km, RevisionCalculator};
pub use revision_classifier::classify_upcoming_revision;

/// Calculadora con la regla de matching elegida en tiempo de ejecución
pub type DynRevisionCalculator = RevisionCalculator<Box<dyn BrandMatcher>>;
