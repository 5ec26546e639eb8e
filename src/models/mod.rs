//! Domain model
//!
//! Every decode target of both API families. Values are produced once from
//! a response body and never mutated afterwards.

mod compare;
mod data_point;
mod energy;
mod layout;
mod measurement;
mod overview;
mod power_flow;
mod site;
mod weather;

pub use compare::{EnergyCompare, EnergySeries};
pub use data_point::{DataPoint, LenientDataPoint, Meter, MeterType};
pub use energy::{
    Energy, EnergyDetail, MeterDetail, MetersData, Power, PowerDetail, TimeFrameEnergy, TimeUnit,
};
pub use layout::{
    CellularConnectionProperties, DimensionMap, LayoutEnergy, LayoutInverter, LogicalChild,
    LogicalLayout, LogicalNodeData, LogicalTree, Module, ModuleGroup, PhysicalLayout, Rectangle,
    SiteDimension, Size, TimeRange,
};
pub use measurement::{
    ConsumptionSummary, EnergyOverview, EnergyOverviewPeriod, Measurement, MeasurementDetail,
    MeasurementPoint, MeasurementSummary, MeasurementUnit, ProductionSummary, TimePeriod,
};
pub use overview::{CurrentPowerFlow, Overview, PowerFlowDetail, RevenueDataPoint};
pub use power_flow::{Connection, ConnectionDetail, ConnectionPoint, ConnectionStatus, LoadType, PowerFlow};
pub use site::{
    Battery, Component, DataPeriod, EnvironmentalBenefits, GasEmissionSaved, Gateway, Inventory,
    InventoryMeter, Inverter, Location, PrimaryModule, PublicSettings, Sensor, Site, SiteList,
};
pub use weather::{DataAvailability, LiveWeather, SunTime, Weather, WeatherForecast};
