//! Meter totals and energy percentages

use crate::models::{EnergyDetail, Meter, MeterType, PowerDetail, TimeFrameEnergy};
use serde::Serialize;
use std::fmt;

/// Sum of every present value in a meter
///
/// An absent meter has no total; a meter with only empty samples totals 0.
pub fn meter_total(meter: Option<&Meter>) -> Option<f64> {
    meter.map(|meter| meter.values.iter().filter_map(|point| point.value).sum())
}

/// `round(numerator / denominator * 100)`
///
/// Empty when either side is missing or the denominator is not positive.
pub fn percentage(numerator: Option<f64>, denominator: Option<f64>) -> Option<i64> {
    let (numerator, denominator) = (numerator?, denominator?);
    if denominator > 0.0 {
        Some((numerator / denominator * 100.0).round() as i64)
    } else {
        None
    }
}

/// Totals and ratios over a set of typed meters
pub trait EnergyBreakdown {
    fn meters(&self) -> &[Meter];

    /// First meter of the given kind
    fn meter(&self, kind: MeterType) -> Option<&Meter> {
        self.meters().iter().find(|meter| meter.meter_type == kind)
    }

    fn production_total_value(&self) -> Option<f64> {
        meter_total(self.meter(MeterType::Production))
    }

    fn consumption_total_value(&self) -> Option<f64> {
        meter_total(self.meter(MeterType::Consumption))
    }

    fn purchased_total_value(&self) -> Option<f64> {
        meter_total(self.meter(MeterType::Purchased))
    }

    fn feed_in_total_value(&self) -> Option<f64> {
        meter_total(self.meter(MeterType::FeedIn))
    }

    fn self_consumption_total_value(&self) -> Option<f64> {
        meter_total(self.meter(MeterType::SelfConsumption))
    }

    /// Share of production exported to the grid
    fn feed_in_percentage(&self) -> Option<i64> {
        percentage(self.feed_in_total_value(), self.production_total_value())
    }

    /// Share of production used on site
    fn self_usage_percentage(&self) -> Option<i64> {
        percentage(self.self_consumption_total_value(), self.production_total_value())
    }

    /// Share of consumption bought from the grid
    fn purchased_percentage(&self) -> Option<i64> {
        percentage(self.purchased_total_value(), self.consumption_total_value())
    }

    /// Share of consumption covered by own production
    fn self_consumption_percentage(&self) -> Option<i64> {
        percentage(self.self_consumption_total_value(), self.consumption_total_value())
    }

    /// Every total and percentage at once
    fn summary(&self) -> EnergySummary {
        EnergySummary {
            production: self.production_total_value(),
            consumption: self.consumption_total_value(),
            purchased: self.purchased_total_value(),
            feed_in: self.feed_in_total_value(),
            self_consumption: self.self_consumption_total_value(),
            feed_in_percentage: self.feed_in_percentage(),
            self_usage_percentage: self.self_usage_percentage(),
            purchased_percentage: self.purchased_percentage(),
            self_consumption_percentage: self.self_consumption_percentage(),
        }
    }
}

impl EnergyBreakdown for EnergyDetail {
    fn meters(&self) -> &[Meter] {
        &self.meters
    }
}

impl PowerDetail {
    /// First meter of the given kind
    pub fn meter(&self, kind: MeterType) -> Option<&Meter> {
        self.meters.iter().find(|meter| meter.meter_type == kind)
    }
}

/// Snapshot of [`EnergyBreakdown`] values
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergySummary {
    pub production: Option<f64>,
    pub consumption: Option<f64>,
    pub purchased: Option<f64>,
    pub feed_in: Option<f64>,
    pub self_consumption: Option<f64>,
    pub feed_in_percentage: Option<i64>,
    pub self_usage_percentage: Option<i64>,
    pub purchased_percentage: Option<i64>,
    pub self_consumption_percentage: Option<i64>,
}

impl fmt::Display for TimeFrameEnergy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.energy, self.unit)
    }
}
