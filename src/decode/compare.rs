//! Energy-compare reshaping
//!
//! The payload has no static schema: each of `month`, `quarter` and `year`
//! holds an `xAxis` label array next to one sub-map per available year.

use crate::error::{Error, Result};
use crate::models::{EnergyCompare, EnergySeries};
use crate::types::JsonObject;
use serde_json::Value;
use std::collections::BTreeMap;

const SOURCE: &str = "Error with data from energyCompare";

/// Decode an `energyCompare` body into its three series
pub fn decode_energy_compare(body: &[u8]) -> Result<EnergyCompare> {
    let root: Value = serde_json::from_slice(body).map_err(|_| Error::decoding(SOURCE))?;
    let compare = root
        .get("energyCompare")
        .and_then(Value::as_object)
        .ok_or_else(|| Error::decoding(SOURCE))?;

    let section = |name: &str| -> Result<EnergySeries> {
        let part = compare
            .get(name)
            .and_then(Value::as_object)
            .ok_or_else(|| Error::decoding(SOURCE))?;
        series(part).ok_or_else(|| Error::decoding(format!("{SOURCE} in {name}")))
    };

    Ok(EnergyCompare {
        month: section("month")?,
        quarter: section("quarter")?,
        year: section("year")?,
    })
}

fn series(part: &JsonObject) -> Option<EnergySeries> {
    let x_axis = part
        .get("xAxis")?
        .as_array()?
        .iter()
        .map(|label| label.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()?;

    let mut values = BTreeMap::new();
    for (year, entries) in part.iter().filter(|(key, _)| key.as_str() != "xAxis") {
        let row = entries
            .as_object()?
            .iter()
            .map(|(x, v)| integer(v).map(|v| (x.clone(), v)))
            .collect::<Option<BTreeMap<_, _>>>()?;
        values.insert(year.clone(), row);
    }

    Some(EnergySeries { x_axis, values })
}

// Integral floats such as `100.0` are accepted as integers.
fn integer(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract().abs() < f64::EPSILON)
            .map(|f| f as i64)
    })
}
