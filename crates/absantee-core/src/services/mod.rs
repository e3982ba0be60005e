//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete implementations.

mod app_core;
mod category_service;
mod colaborator_service;
mod weather_service;

pub use app_core::AppCore;
pub use category_service::CategoryService;
pub use colaborator_service::ColaboratorService;
pub use weather_service::{FORECAST_DAYS, WeatherService};
