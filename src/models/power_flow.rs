//! Latest power flow from the portal API
//!
//! Unlike meter types, every enum here is strict: an unknown load type,
//! connection point or status fails the whole decode.

use crate::decode::wire_enum;
use serde::{Deserialize, Serialize};

wire_enum! {
    pub enum LoadType: strict("power flow load type") {
        Residential => "Residential",
    }
}

wire_enum! {
    /// Endpoint of a power-flow connection
    pub enum ConnectionPoint: strict("power flow connection point") {
        Grid => "Grid",
        Load => "Load",
        Pv => "PV",
    }
}

wire_enum! {
    pub enum ConnectionStatus: strict("power flow status") {
        Active => "Active",
        Idle => "Idle",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerFlow {
    #[serde(rename = "updateRefreshRate")]
    pub refresh_rate_seconds: u32,
    pub unit: String,
    pub load_type: LoadType,
    pub connections: Vec<Connection>,
    pub grid: ConnectionDetail,
    pub load: ConnectionDetail,
    pub pv: ConnectionDetail,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<ConnectionDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ev_charger: Option<ConnectionDetail>,
}

/// Directed edge along which power currently flows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub from: ConnectionPoint,
    pub to: ConnectionPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionDetail {
    pub status: ConnectionStatus,
    pub current_power: f64,
}
