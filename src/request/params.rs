//! Typed request parameters

use super::endpoint::{MeterTypes, QueryBuilder};
use crate::decode::wire_enum;
use crate::models::{MeterType, TimePeriod, TimeUnit};
use crate::types::SortOrder;
use chrono::{NaiveDate, NaiveDateTime};

wire_enum! {
    /// Site property the site list can be sorted by
    pub enum SortProperty: strict("sort property") {
        Name => "name",
        Country => "country",
        State => "state",
        City => "city",
        Address => "address",
        Zip => "zip",
        Status => "status",
        PeakPower => "peakPower",
        InstallationDate => "installationDate",
        Amount => "amount",
        MaxSeverity => "maxSeverity",
        CreationTime => "creationTime",
    }
}

wire_enum! {
    pub enum SiteStatus: strict("site status") {
        Active => "active",
        Pending => "pending",
        Disabled => "disabled",
        All => "all",
    }
}

/// Filters for `/sites/list`; every field is optional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteListRequest {
    pub size: Option<u32>,
    pub start_index: Option<u32>,
    pub search_text: Option<String>,
    pub sort_property: Option<SortProperty>,
    pub sort_order: Option<SortOrder>,
    pub status: Option<SiteStatus>,
}

impl SiteListRequest {
    pub(crate) fn append_to(&self, query: QueryBuilder) -> QueryBuilder {
        query
            .push_opt("size", self.size)
            .push_opt("startIndex", self.start_index)
            .push_opt("searchText", self.search_text.as_deref())
            .push_opt("sortProperty", self.sort_property)
            .push_opt("sortOrder", self.sort_order)
            .push_opt("status", self.status)
    }
}

/// Date range and aggregation for `/site/{id}/energy`
///
/// Only the date part is sent.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub time_unit: TimeUnit,
}

impl EnergyRequest {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, time_unit: TimeUnit) -> Self {
        Self {
            start_date,
            end_date,
            time_unit,
        }
    }

    pub(crate) fn append_to(&self, query: QueryBuilder) -> QueryBuilder {
        query
            .push_date("startDate", self.start_date)
            .push_date("endDate", self.end_date)
            .push("timeUnit", self.time_unit)
    }
}

/// Start and end timestamps, sent as `startTime`/`endTime`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub(crate) fn append_to(&self, query: QueryBuilder) -> QueryBuilder {
        query
            .push_date_time("startTime", &self.start)
            .push_date_time("endTime", &self.end)
    }
}

/// Name and scaling options for the site image
#[derive(Debug, Clone, PartialEq)]
pub struct SiteImageRequest {
    pub name: String,
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    pub hash: Option<i64>,
}

impl Default for SiteImageRequest {
    fn default() -> Self {
        Self {
            name: "image.jpg".to_string(),
            max_width: None,
            max_height: None,
            hash: None,
        }
    }
}

impl SiteImageRequest {
    pub(crate) fn append_to(&self, query: QueryBuilder) -> QueryBuilder {
        query
            .push_opt("maxWidth", self.max_width)
            .push_opt("maxHeight", self.max_height)
            .push_opt("hash", self.hash)
    }
}

/// Period and end date for portal measurements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementRequest {
    pub period: TimePeriod,
    /// The day itself for `DAY`, otherwise the last day of the period
    pub end_date: NaiveDate,
}

impl MeasurementRequest {
    pub fn new(period: TimePeriod, end_date: NaiveDate) -> Self {
        Self { period, end_date }
    }

    /// `WATT` for a single day, `WATT_HOUR` for longer periods
    pub fn measurement_unit(&self) -> &'static str {
        match self.period {
            TimePeriod::Day => "WATT",
            _ => "WATT_HOUR",
        }
    }

    pub(crate) fn append_to(&self, query: QueryBuilder) -> QueryBuilder {
        query
            .push("period", self.period)
            .push_date("end-date", self.end_date)
            .push("measurement-unit", self.measurement_unit())
    }
}

/// Window, aggregation and meter filter shared by the detail endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRequest {
    pub window: TimeWindow,
    pub time_unit: TimeUnit,
    pub meters: MeterTypes,
}

impl DetailRequest {
    /// Daily aggregation over every meter type
    pub fn new(window: TimeWindow) -> Self {
        Self {
            window,
            time_unit: TimeUnit::Day,
            meters: MeterTypes::new(),
        }
    }

    #[must_use]
    pub fn with_time_unit(mut self, time_unit: TimeUnit) -> Self {
        self.time_unit = time_unit;
        self
    }

    #[must_use]
    pub fn with_meters(mut self, meters: impl IntoIterator<Item = MeterType>) -> Self {
        self.meters = meters.into_iter().collect();
        self
    }
}
