//! Domain types.
//!
//! These types represent the persisted entities and value objects of the
//! application, independent of any infrastructure concerns.

mod category;
mod colaborator;
mod weather;

pub use category::{Category, CategoryUpdate, NewCategory};
pub use colaborator::{Colaborator, NewColaborator};
pub use weather::{WEATHER_SUMMARIES, WeatherForecast};
