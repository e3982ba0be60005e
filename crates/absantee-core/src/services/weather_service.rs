//! Weather service - generates sample forecasts.

use chrono::{Days, Local, NaiveDate};
use rand::Rng;

use crate::domain::{WEATHER_SUMMARIES, WeatherForecast};

/// Number of days covered by a forecast.
pub const FORECAST_DAYS: u64 = 5;

/// Service producing randomized forecasts for the days after today.
#[derive(Debug, Default)]
pub struct WeatherService;

impl WeatherService {
    /// Create a new weather service.
    pub const fn new() -> Self {
        Self
    }

    /// Forecast for the next [`FORECAST_DAYS`] days, starting tomorrow.
    pub fn forecast(&self) -> Vec<WeatherForecast> {
        let today = Local::now().date_naive();
        self.forecast_from(today, &mut rand::thread_rng())
    }

    /// Forecast starting the day after `today` with the given RNG.
    pub fn forecast_from<R: Rng>(
        &self,
        today: NaiveDate,
        rng: &mut R,
    ) -> Vec<WeatherForecast> {
        (1..=FORECAST_DAYS)
            .filter_map(|offset| today.checked_add_days(Days::new(offset)))
            .map(|date| {
                let temperature_c = rng.gen_range(-20..55);
                let summary = WEATHER_SUMMARIES[rng.gen_range(0..WEATHER_SUMMARIES.len())];
                WeatherForecast::new(date, temperature_c, Some(summary.to_string()))
            })
            .collect()
    }
}
