//! Monitoring API endpoints
//!
//! Paths and queries only; the API key is added by [`crate::auth::ApiKey`].

use super::endpoint::{Endpoint, QueryBuilder};
use super::params::{DetailRequest, EnergyRequest, SiteImageRequest, SiteListRequest, TimeWindow};
use crate::types::{SiteId, SystemUnit};
use chrono::NaiveDate;

pub fn sites(request: &SiteListRequest) -> Endpoint {
    Endpoint::get("/sites/list").with_query(request.append_to(QueryBuilder::new()))
}

pub fn site_details(site: SiteId) -> Endpoint {
    Endpoint::get(format!("/site/{site}/details"))
}

pub fn site_data_period(site: SiteId) -> Endpoint {
    Endpoint::get(format!("/site/{site}/dataPeriod"))
}

pub fn energy(site: SiteId, request: &EnergyRequest) -> Endpoint {
    Endpoint::get(format!("/site/{site}/energy")).with_query(request.append_to(QueryBuilder::new()))
}

/// Total energy between two dates; no aggregation unit
pub fn total_energy(site: SiteId, start_date: NaiveDate, end_date: NaiveDate) -> Endpoint {
    Endpoint::get(format!("/site/{site}/timeFrameEnergy")).with_query(
        QueryBuilder::new()
            .push_date("startDate", start_date)
            .push_date("endDate", end_date),
    )
}

pub fn power(site: SiteId, window: &TimeWindow) -> Endpoint {
    Endpoint::get(format!("/site/{site}/power")).with_query(window.append_to(QueryBuilder::new()))
}

pub fn overview(site: SiteId) -> Endpoint {
    Endpoint::get(format!("/site/{site}/overview"))
}

/// Power per meter; the time unit of `request` is not sent
pub fn power_details(site: SiteId, request: &DetailRequest) -> Endpoint {
    Endpoint::get(format!("/site/{site}/powerDetails")).with_query(
        request
            .window
            .append_to(QueryBuilder::new())
            .push_meter_types("meters", &request.meters),
    )
}

pub fn energy_details(site: SiteId, request: &DetailRequest) -> Endpoint {
    Endpoint::get(format!("/site/{site}/energyDetails")).with_query(detail_query(request))
}

pub fn current_power_flow(site: SiteId) -> Endpoint {
    Endpoint::get(format!("/site/{site}/currentPowerFlow"))
}

pub fn site_image(site: SiteId, request: &SiteImageRequest) -> Endpoint {
    Endpoint::get(format!("/site/{site}/siteImage/{}", request.name))
        .with_query(request.append_to(QueryBuilder::new()))
}

pub fn environmental_benefits(site: SiteId, unit: SystemUnit) -> Endpoint {
    Endpoint::get(format!("/site/{site}/envBenefits"))
        .with_query(QueryBuilder::new().push("systemUnit", unit))
}

pub fn installer_image(site: SiteId, name: &str) -> Endpoint {
    Endpoint::get(format!("/site/{site}/installerImage/{name}"))
}

pub fn components(site: SiteId) -> Endpoint {
    Endpoint::get(format!("/equipment/{site}/list"))
}

pub fn inventory(site: SiteId) -> Endpoint {
    Endpoint::get(format!("/site/{site}/inventory"))
}

pub fn inverter_technical_data(site: SiteId, serial_number: &str, window: &TimeWindow) -> Endpoint {
    Endpoint::get(format!("/equipment/{site}/{serial_number}/data"))
        .with_query(window.append_to(QueryBuilder::new()))
}

pub fn meters_lifetime_data(site: SiteId, request: &DetailRequest) -> Endpoint {
    Endpoint::get(format!("/site/{site}/meters")).with_query(detail_query(request))
}

fn detail_query(request: &DetailRequest) -> QueryBuilder {
    request
        .window
        .append_to(QueryBuilder::new())
        .push("timeUnit", request.time_unit)
        .push_meter_types("meters", &request.meters)
}
