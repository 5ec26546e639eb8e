//! Portal API endpoints
//!
//! Session headers are added by [`crate::auth::PortalSession`].

use super::endpoint::{Endpoint, QueryBuilder};
use super::params::MeasurementRequest;
use crate::models::TimeRange;
use crate::types::SiteId;
use serde_json::json;

pub const LOGIN_PATH: &str = "/solaredge-apigw/api/login";

/// Form login with `j_username`/`j_password`
pub fn login(username: &str, password: &str) -> Endpoint {
    let form = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("j_username", username)
        .append_pair("j_password", password)
        .finish();
    Endpoint::post(LOGIN_PATH).with_form(form)
}

pub fn environmental_benefits(site: SiteId) -> Endpoint {
    Endpoint::get(format!("/solaredge-apigw/api/site/{site}/envBenefits.json"))
}

pub fn weather(site: SiteId) -> Endpoint {
    Endpoint::get("/services/weather/getWeatherWidget")
        .with_query(QueryBuilder::new().push("siteId", site))
}

pub fn data_availability(site: SiteId) -> Endpoint {
    Endpoint::get(format!("/services/so/dashboard/site/{site}/dataAvailability"))
}

pub fn energy_compare(site: SiteId) -> Endpoint {
    Endpoint::get(format!("/solaredge-apigw/api/site/{site}/energyCompare.json"))
}

pub fn energy_overview(site: SiteId) -> Endpoint {
    Endpoint::get(format!("/services/m/so/dashboard/site/{site}/energyOverview"))
}

pub fn energy_measurements(site: SiteId, request: &MeasurementRequest) -> Endpoint {
    Endpoint::get(format!("/services/m/so/dashboard/site/{site}/measurements"))
        .with_query(request.append_to(QueryBuilder::new()))
}

pub fn latest_power_flow(site: SiteId) -> Endpoint {
    Endpoint::get(format!("/services/m/so/dashboard/site/{site}/powerflow/latest"))
}

/// Energy per reporter; every reporter is requested
pub fn layout_energy(site: SiteId, range: Option<TimeRange>) -> Endpoint {
    Endpoint::post(format!("/solaredge-apigw/api/sites/{site}/layout/energy.json"))
        .with_query(QueryBuilder::new().push_opt("timeUnit", range))
        .with_json(json!({ "reporterIds": [1] }))
}

pub fn physical_layout(site: SiteId) -> Endpoint {
    Endpoint::get(format!("/solaredge-apigw/api/sites/{site}/layout/physical.json"))
}

pub fn logical_layout(site: SiteId) -> Endpoint {
    Endpoint::get(format!("/solaredge-apigw/api/sites/{site}/layout/logical.json"))
}
