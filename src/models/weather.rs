//! Weather widget and data availability from the portal API

use crate::decode::{ApiDate, ApiDateTimeOffset};
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    pub live_weather: LiveWeather,
    pub weather_forecasts: Vec<WeatherForecast>,
    pub sun_time: SunTime,
    pub system_unit: String,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveWeather {
    pub latitude: f64,
    pub longitude: f64,
    #[serde_as(as = "ApiDateTimeOffset")]
    pub weather_date: DateTime<FixedOffset>,
    pub humidity: i64,
    #[serde(rename = "currentTemp")]
    pub current_temperature: f64,
    pub wind_speed: f64,
    pub wind_direction: String,
    #[serde(rename = "feelsLike")]
    pub feels_like_temperature: f64,
    pub current_condition: String,
}

/// One forecast day
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    pub latitude: f64,
    pub longitude: f64,
    #[serde_as(as = "ApiDate")]
    pub weather_date: NaiveDate,
    #[serde(rename = "tempHigh")]
    pub temperature_high: f64,
    #[serde(rename = "tempLow")]
    pub temperature_low: f64,
    pub description: String,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunTime {
    #[serde(rename = "Sunrise")]
    #[serde_as(as = "ApiDateTimeOffset")]
    pub sunrise: DateTime<FixedOffset>,
    #[serde(rename = "Sunset")]
    #[serde_as(as = "ApiDateTimeOffset")]
    pub sunset: DateTime<FixedOffset>,
}

/// First and last moment the dashboard has data for
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataAvailability {
    #[serde_as(as = "ApiDateTimeOffset")]
    pub start_date: DateTime<FixedOffset>,
    #[serde_as(as = "ApiDateTimeOffset")]
    pub end_date: DateTime<FixedOffset>,
}
