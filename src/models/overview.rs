//! Site overview and the monitoring API's current power flow

use crate::decode::ApiDateTime;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::collections::BTreeMap;

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    #[serde_as(as = "ApiDateTime")]
    pub last_update_time: NaiveDateTime,
    pub life_time_data: RevenueDataPoint,
    pub last_year_data: RevenueDataPoint,
    pub last_month_data: RevenueDataPoint,
    pub last_day_data: RevenueDataPoint,
    pub current_power: BTreeMap<String, f64>,
    pub measured_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueDataPoint {
    pub energy: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
}

/// Snapshot of grid, house and PV power (`siteCurrentPowerFlow`)
///
/// Only magnitudes are reported; there is no connection list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentPowerFlow {
    pub update_refresh_rate: u32,
    pub unit: String,
    #[serde(rename = "GRID")]
    pub grid: PowerFlowDetail,
    #[serde(rename = "LOAD")]
    pub load: PowerFlowDetail,
    #[serde(rename = "PV")]
    pub pv: PowerFlowDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerFlowDetail {
    pub status: String,
    pub current_power: f64,
}
