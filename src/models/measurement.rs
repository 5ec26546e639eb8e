//! Dashboard measurements and energy overview from the portal API

use crate::decode::{wire_enum, ApiDateTimeSeparated};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

wire_enum! {
    pub enum MeasurementUnit: strict("measurement unit") {
        WattHour => "WATT_HOUR",
        Watt => "WATT",
    }
}

wire_enum! {
    /// Period requested from the measurements endpoint
    pub enum TimePeriod: strict("time period") {
        Day => "DAY",
        Week => "WEEK",
        Month => "MONTH",
        Year => "YEAR",
    }
}

wire_enum! {
    pub enum EnergyOverviewPeriod: strict("time period") {
        LifeTime => "LIFE_TIME",
        LastYear => "LAST_YEAR",
        LastMonth => "LAST_MONTH",
        LastDay => "LAST_DAY",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub summary: MeasurementSummary,
    #[serde(rename = "measurements")]
    pub details: MeasurementDetail,
}

impl Measurement {
    pub fn measurement_unit(&self) -> MeasurementUnit {
        self.details.measurement_unit
    }

    /// Per-interval samples
    pub fn measurements(&self) -> &[MeasurementPoint] {
        &self.details.measurements_list
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementSummary {
    pub measurement_unit: MeasurementUnit,
    pub production: f64,
    pub production_summary: ProductionSummary,
    pub consumption: f64,
    pub consumption_summary: ConsumptionSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementDetail {
    pub measurement_unit: MeasurementUnit,
    pub measurements_list: Vec<MeasurementPoint>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementPoint {
    #[serde_as(as = "ApiDateTimeSeparated")]
    pub measurement_time: NaiveDateTime,
    #[serde(default)]
    pub production: Option<f64>,
    pub production_summary: ProductionSummary,
    #[serde(default)]
    pub consumption: Option<f64>,
    pub consumption_summary: ConsumptionSummary,
}

/// Where produced energy went
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductionSummary {
    pub production_to_home: Option<f64>,
    pub production_to_home_percentage: Option<i64>,
    pub production_unknown: Option<f64>,
    pub production_unknown_percentage: Option<i64>,
    pub production_to_battery: Option<f64>,
    pub production_to_battery_percentage: Option<i64>,
    pub production_to_grid: Option<f64>,
    pub production_to_grid_percentage: Option<i64>,
}

/// Where consumed energy came from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsumptionSummary {
    pub consumption_from_battery: Option<f64>,
    pub consumption_from_battery_percentage: Option<i64>,
    pub consumption_from_solar: Option<f64>,
    pub consumption_from_solar_percentage: Option<i64>,
    pub self_consumption: Option<f64>,
    pub self_consumption_percentage: Option<i64>,
    pub consumption_unknown: Option<f64>,
    pub consumption_unknown_percentage: Option<i64>,
    pub consumption_from_grid: Option<f64>,
    pub consumption_from_grid_percentage: Option<i64>,
}

/// Produced energy for one overview period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyOverview {
    pub time_period: EnergyOverviewPeriod,
    pub energy: f64,
}
