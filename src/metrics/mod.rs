//! Derived metrics
//!
//! Pure functions and accessors over decoded values: meter totals,
//! percentage ratios, grid import/export and layout projections.

mod energy;
mod flow;

pub use energy::{meter_total, percentage, EnergyBreakdown, EnergySummary};

use crate::models::PhysicalLayout;

impl PhysicalLayout {
    /// Module ids per group, in wire order
    pub fn group_ids(&self) -> Vec<Vec<i64>> {
        self.groups
            .iter()
            .map(|group| group.modules.iter().map(|module| module.id).collect())
            .collect()
    }
}
