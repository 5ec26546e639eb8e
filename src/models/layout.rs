//! Physical and logical site layouts from the portal API

use crate::decode::wire_enum;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, TimestampMilliSeconds};
use std::collections::BTreeMap;

wire_enum! {
    /// Range for layout energy figures
    pub enum TimeRange: lenient(Unknown) {
        Day => "DAY",
        Week => "WEEK",
        Month => "MONTH",
        Year => "YEAR",
        All => "ALL",
        Unknown => "UNKNOWN",
    }
}

/// Energy attributed to one reporter (inverter, string or module)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutEnergy {
    pub energy: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_energy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unscaled_energy: Option<f64>,
    pub units: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cellular_connection_properties: Option<CellularConnectionProperties>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellularConnectionProperties {
    pub connection_type: String,
    pub connectable: bool,
}

// ============================================================================
// Physical Layout
// ============================================================================

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalLayout {
    pub field_id: i64,
    pub site_dimensions: SiteDimension,
    pub groups: Vec<ModuleGroup>,
    /// Milliseconds since the epoch on the wire
    #[serde_as(as = "TimestampMilliSeconds<f64>")]
    pub last_published: DateTime<Utc>,
    pub inverters: Vec<LayoutInverter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleGroup {
    pub id: i64,
    pub rectangle: Rectangle,
    pub module_orientation: String,
    pub module_tilt: f64,
    pub module_width: f64,
    pub module_height: f64,
    pub v_spacing: i64,
    pub h_spacing: i64,
    pub rows: u32,
    pub columns: u32,
    pub modules: Vec<Module>,
    pub inverters_ids: Vec<i64>,
    pub num_of_optimizers: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub height: f64,
    pub width: f64,
    pub azimuth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub module_id: i64,
    pub row: u32,
    pub column: u32,
    pub id: i64,
    pub inverter_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteDimension {
    pub v_spacing: i64,
    pub h_spacing: i64,
    pub dimension_map: DimensionMap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionMap {
    #[serde(rename = "Inverter")]
    pub inverter: Size,
    #[serde(rename = "Module")]
    pub module: Size,
    #[serde(rename = "SMI")]
    pub smi: Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutInverter {
    pub id: i64,
    #[serde(rename = "type")]
    pub inverter_type: String,
    pub rectangle: Rectangle,
}

// ============================================================================
// Logical Layout
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicalLayout {
    pub site_id: u64,
    pub expanded: bool,
    pub playback: bool,
    pub has_physical: bool,
    pub logical_tree: LogicalTree,
    pub reporters_data: BTreeMap<String, LayoutEnergy>,
}

/// Root of the reporter tree; the root itself may carry no data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicalTree {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<LogicalNodeData>,
    pub number_of_childs: u32,
    pub child_ids: Vec<i64>,
    pub children: Vec<LogicalChild>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicalChild {
    pub data: LogicalNodeData,
    pub number_of_childs: u32,
    pub child_ids: Vec<i64>,
    pub children: Vec<LogicalChild>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicalNodeData {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    pub name: String,
    pub display_name: String,
    pub relative_order: i64,
    #[serde(rename = "type")]
    pub node_type: String,
    pub operations_key: i64,
}
