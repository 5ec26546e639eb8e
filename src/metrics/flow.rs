//! Grid import and export
//!
//! The portal's [`PowerFlow`] names its connections, so direction is read
//! off the connection list. The monitoring API's [`CurrentPowerFlow`] only
//! has magnitudes, so direction is inferred by comparing PV to load. The
//! two are intentionally separate.

use crate::models::{Connection, ConnectionPoint, CurrentPowerFlow, PowerFlow};
use std::fmt;

impl Connection {
    pub fn is_power_imported(&self) -> bool {
        self.from == ConnectionPoint::Grid && self.to == ConnectionPoint::Load
    }

    pub fn is_power_exported(&self) -> bool {
        self.from == ConnectionPoint::Load && self.to == ConnectionPoint::Grid
    }
}

impl PowerFlow {
    /// Any connection runs grid to load
    pub fn is_power_imported(&self) -> bool {
        self.connections.iter().any(Connection::is_power_imported)
    }

    /// Any connection runs load to grid
    pub fn is_power_exported(&self) -> bool {
        self.connections.iter().any(Connection::is_power_exported)
    }

    pub fn current_imported_power(&self) -> Option<f64> {
        self.is_power_imported().then_some(self.grid.current_power)
    }

    pub fn current_exported_power(&self) -> Option<f64> {
        self.is_power_exported().then_some(self.grid.current_power)
    }
}

impl CurrentPowerFlow {
    /// PV produces less than the house uses
    pub fn is_power_imported(&self) -> bool {
        self.pv.current_power < self.load.current_power
    }

    /// PV produces more than the house uses
    pub fn is_power_exported(&self) -> bool {
        self.pv.current_power > self.load.current_power
    }

    pub fn current_imported_power(&self) -> Option<f64> {
        self.is_power_imported().then_some(self.grid.current_power)
    }

    pub fn current_exported_power(&self) -> Option<f64> {
        self.is_power_exported().then_some(self.grid.current_power)
    }
}

impl fmt::Display for CurrentPowerFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = &self.unit;
        writeln!(f, "Current power flow:")?;
        writeln!(f, "PV: {}{unit}", self.pv.current_power)?;
        writeln!(f, "House uses: {}{unit}", self.load.current_power)?;
        write!(f, "Grid: {}{unit}", self.grid.current_power)?;
        if let Some(power) = self.current_imported_power() {
            write!(f, "\nimporting {power}{unit}")?;
        } else if let Some(power) = self.current_exported_power() {
            write!(f, "\nexporting {power}{unit}")?;
        }
        Ok(())
    }
}
