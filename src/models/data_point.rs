//! Time series samples and meters

use crate::decode::{distant_past, wire_enum, ApiDateTime, DateFormat};
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{serde_as, DeserializeAs, SerializeAs};

/// One sample of a time series
///
/// `value` is absent when the inverter reported nothing for the slot; an
/// explicit `null` decodes the same way.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde_as(as = "ApiDateTime")]
    pub date: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// Decodes a [`DataPoint`], substituting [`distant_past`] for a bad date
///
/// ```rust,ignore
/// #[serde_as(as = "Vec<LenientDataPoint>")]
/// values: Vec<DataPoint>,
/// ```
pub struct LenientDataPoint;

#[derive(Deserialize)]
struct RawDataPoint {
    date: String,
    #[serde(default)]
    value: Option<f64>,
}

impl<'de> DeserializeAs<'de, DataPoint> for LenientDataPoint {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<DataPoint, D::Error> {
        let raw = RawDataPoint::deserialize(deserializer)?;
        Ok(DataPoint {
            date: DateFormat::DateTime
                .parse(&raw.date)
                .unwrap_or_else(distant_past),
            value: raw.value,
        })
    }
}

impl SerializeAs<DataPoint> for LenientDataPoint {
    fn serialize_as<S: Serializer>(source: &DataPoint, serializer: S) -> Result<S::Ok, S::Error> {
        source.serialize(serializer)
    }
}

wire_enum! {
    /// What a meter measures; unknown kinds decode to `Unknown`
    pub enum MeterType: lenient(Unknown) {
        Consumption => "Consumption",
        Purchased => "Purchased",
        Production => "Production",
        SelfConsumption => "SelfConsumption",
        FeedIn => "FeedIn",
        Unknown => "Unknown",
    }
}

/// A named measurement channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meter {
    #[serde(rename = "type")]
    pub meter_type: MeterType,
    pub values: Vec<DataPoint>,
}
