//! Site metadata, equipment and inventory

use crate::decode::{ApiDate, FlexibleDate};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::collections::BTreeMap;

/// A monitored installation
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<u64>,
    pub status: String,
    pub peak_power: f64,
    #[serde_as(as = "FlexibleDate")]
    #[serde(default)]
    pub last_update_time: Option<NaiveDateTime>,
    #[serde_as(as = "Option<ApiDate>")]
    pub installation_date: Option<NaiveDate>,
    #[serde_as(as = "Option<ApiDate>")]
    pub pto_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "type")]
    pub site_type: String,
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_module: Option<PrimaryModule>,
    #[serde(default)]
    pub uris: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_settings: Option<PublicSettings>,
}

/// `sites` envelope of the site list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteList {
    pub count: u64,
    pub site: Vec<Site>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub city: String,
    pub address: String,
    #[serde(default)]
    pub address2: String,
    pub zip: String,
    pub time_zone: String,
    pub country_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryModule {
    pub manufacturer_name: String,
    pub model_name: String,
    pub maximum_power: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_coef: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicSettings {
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// First and last day with data
///
/// Either bound may be missing or unparseable; both decode to `None`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPeriod {
    #[serde_as(as = "FlexibleDate")]
    #[serde(default)]
    pub start_date: Option<NaiveDateTime>,
    #[serde_as(as = "FlexibleDate")]
    #[serde(default)]
    pub end_date: Option<NaiveDateTime>,
}

/// CO2 savings and their everyday equivalents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalBenefits {
    pub gas_emission_saved: GasEmissionSaved,
    pub trees_planted: f64,
    pub light_bulbs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasEmissionSaved {
    pub units: String,
    pub co2: f64,
    pub so2: f64,
    pub nox: f64,
}

/// An inverter or other reporting device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    pub serial_number: String,
}

// ============================================================================
// Inventory
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub meters: Vec<InventoryMeter>,
    #[serde(default)]
    pub sensors: Vec<Sensor>,
    #[serde(default)]
    pub gateways: Vec<Gateway>,
    #[serde(default)]
    pub batteries: Vec<Battery>,
    #[serde(default)]
    pub inverters: Vec<Inverter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryMeter {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub firmware_version: String,
    pub connected_to: String,
    #[serde(rename = "connectedSolaredgeDeviceSN")]
    pub connected_solaredge_device_sn: String,
    #[serde(rename = "type")]
    pub meter_type: String,
    pub form: String,
    #[serde(rename = "SN", default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sensor {
    #[serde(rename = "connectedSolaredgeDeviceSN")]
    pub connected_solaredge_device_sn: String,
    pub id: String,
    pub connected_to: String,
    pub category: String,
    #[serde(rename = "type")]
    pub sensor_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gateway {
    pub name: String,
    #[serde(rename = "SN")]
    pub serial_number: String,
    pub firmware_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battery {
    pub name: String,
    #[serde(rename = "SN")]
    pub serial_number: String,
    pub manufacturer: String,
    pub model: String,
    pub nameplate_capacity: String,
    pub firmware_version: String,
    pub connected_to: String,
    #[serde(rename = "connectedSolaredgeDeviceSN")]
    pub connected_solaredge_device_sn: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inverter {
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communication_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firmware_version: Option<String>,
    #[serde(rename = "SN")]
    pub serial_number: String,
    pub connected_optimizers: u32,
}
