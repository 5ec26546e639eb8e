//! Year-over-year energy comparison

use serde::Serialize;
use std::collections::BTreeMap;

/// Comparison at three granularities
///
/// Built by [`decode_energy_compare`](crate::decode::decode_energy_compare);
/// the wire shape has no fixed schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnergyCompare {
    pub month: EnergySeries,
    pub quarter: EnergySeries,
    pub year: EnergySeries,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergySeries {
    /// Labels along the x axis
    pub x_axis: Vec<String>,
    /// Year, then x-axis label, to energy
    pub values: BTreeMap<String, BTreeMap<String, i64>>,
}
