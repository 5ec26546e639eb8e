//! Energy and power time series from the monitoring API

use super::data_point::{DataPoint, LenientDataPoint, Meter};
use crate::decode::wire_enum;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

wire_enum! {
    /// Server-side aggregation granularity
    pub enum TimeUnit: lenient(Unknown) {
        QuarterOfAnHour => "QUARTER_OF_AN_HOUR",
        Hour => "HOUR",
        Day => "DAY",
        Week => "WEEK",
        Month => "MONTH",
        Year => "YEAR",
        Unknown => "UNKNOWN",
    }
}

impl Default for TimeUnit {
    fn default() -> Self {
        TimeUnit::Day
    }
}

/// Per-meter energy for a window (`energyDetails`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyDetail {
    pub time_unit: TimeUnit,
    pub unit: String,
    pub meters: Vec<Meter>,
}

/// Per-meter power for a window (`powerDetails`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerDetail {
    pub time_unit: TimeUnit,
    pub unit: String,
    pub meters: Vec<Meter>,
}

/// Site production energy (`energy`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Energy {
    pub time_unit: TimeUnit,
    pub unit: String,
    pub values: Vec<DataPoint>,
}

/// Site production power (`power`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Power {
    pub time_unit: TimeUnit,
    pub unit: String,
    pub values: Vec<DataPoint>,
}

/// Total energy produced in a date range (`timeFrameEnergy`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeFrameEnergy {
    pub energy: f64,
    pub unit: String,
}

/// Lifetime readings per physical meter (`meterEnergyDetails`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetersData {
    pub time_unit: String,
    pub unit: String,
    pub meters: Vec<MeterDetail>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterDetail {
    pub meter_serial_number: String,
    #[serde(rename = "connectedSolaredgeDeviceSN")]
    pub connected_solaredge_device_sn: String,
    pub model: String,
    pub meter_type: String,
    #[serde_as(as = "Vec<LenientDataPoint>")]
    pub values: Vec<DataPoint>,
}
