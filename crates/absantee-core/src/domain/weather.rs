//! Weather forecast value object.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Summaries a forecast may carry.
pub const WEATHER_SUMMARIES: [&str; 10] = [
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

/// A single day's forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    pub date: NaiveDate,
    #[serde(rename = "temperatureC")]
    pub temperature_c: i32,
    #[serde(rename = "temperatureF")]
    pub temperature_f: i32,
    pub summary: Option<String>,
}

impl WeatherForecast {
    /// Build a forecast, deriving the Fahrenheit temperature.
    pub fn new(date: NaiveDate, temperature_c: i32, summary: Option<String>) -> Self {
        Self {
            date,
            temperature_c,
            temperature_f: to_fahrenheit(temperature_c),
            summary,
        }
    }
}

/// `32 + trunc(c / 0.5556)`.
#[allow(clippy::cast_possible_truncation)]
fn to_fahrenheit(celsius: i32) -> i32 {
    32 + (f64::from(celsius) / 0.5556) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fahrenheit_conversion_truncates() {
        assert_eq!(to_fahrenheit(0), 32);
        assert_eq!(to_fahrenheit(100), 211);
        assert_eq!(to_fahrenheit(-20), -3);
    }

    #[test]
    fn test_serializes_with_api_field_names() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let forecast = WeatherForecast::new(date, 10, Some("Mild".to_string()));
        let json = serde_json::to_value(&forecast).unwrap();

        assert_eq!(json["date"], "2024-03-01");
        assert_eq!(json["temperatureC"], 10);
        assert_eq!(json["temperatureF"], 49);
        assert_eq!(json["summary"], "Mild");
    }
}
