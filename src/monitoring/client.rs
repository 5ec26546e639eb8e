//! Monitoring API client

use crate::auth::{ApiKey, Credentials};
use crate::config::ClientConfig;
use crate::decode::JsonDecoder;
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClient, HttpRequest, HttpResponse, Transport};
use crate::models::{
    Component, CurrentPowerFlow, DataPeriod, Energy, EnergyDetail, EnvironmentalBenefits,
    Inventory, MetersData, Overview, Power, PowerDetail, Site, SiteList, TimeFrameEnergy,
};
use crate::request::monitoring as endpoints;
use crate::request::{
    DetailRequest, Endpoint, EnergyRequest, SiteImageRequest, SiteListRequest, TimeWindow,
};
use crate::status::{check_optional_response, check_response};
use crate::types::{JsonObject, SiteId, SystemUnit};
use bytes::Bytes;
use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Client for the API-key monitoring API
///
/// ```rust,ignore
/// let client = MonitoringClient::new(ApiKey::new(key), &ClientConfig::default())?;
/// let overview = client.overview(1234).await?;
/// ```
pub struct MonitoringClient<T: Transport = HttpClient> {
    transport: T,
    api_key: ApiKey,
    base_url: String,
    user_agent: HeaderValue,
}

impl MonitoringClient<HttpClient> {
    /// Create a client over a fresh reqwest transport
    pub fn new(api_key: ApiKey, config: &ClientConfig) -> Result<Self> {
        let transport = HttpClient::with_config(config.http_config())?;
        Self::with_transport(transport, api_key, config)
    }
}

impl<T: Transport> MonitoringClient<T> {
    /// Create a client over any transport
    pub fn with_transport(transport: T, api_key: ApiKey, config: &ClientConfig) -> Result<Self> {
        let user_agent = HeaderValue::from_str(&config.monitoring_user_agent)
            .map_err(|_| Error::config("monitoring_user_agent is not a valid header value"))?;
        Ok(Self {
            transport,
            api_key,
            base_url: config.monitoring_base_url.clone(),
            user_agent,
        })
    }

    /// The transport this client sends through
    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ========================================================================
    // Sites
    // ========================================================================

    /// Sites visible to the API key
    pub async fn sites(&self, request: &SiteListRequest) -> Result<Vec<Site>> {
        let list: SiteList = self
            .get("sites", endpoints::sites(request), "sites")
            .await?;
        Ok(list.site)
    }

    pub async fn site_details(&self, site: SiteId) -> Result<Site> {
        self.get("site_details", endpoints::site_details(site), "details")
            .await
    }

    /// First and last day with production data
    pub async fn site_data_period(&self, site: SiteId) -> Result<DataPeriod> {
        self.get("site_data_period", endpoints::site_data_period(site), "dataPeriod")
            .await
    }

    pub async fn overview(&self, site: SiteId) -> Result<Overview> {
        self.get("overview", endpoints::overview(site), "overview")
            .await
    }

    pub async fn environmental_benefits(
        &self,
        site: SiteId,
        unit: SystemUnit,
    ) -> Result<EnvironmentalBenefits> {
        self.get(
            "environmental_benefits",
            endpoints::environmental_benefits(site, unit),
            "envBenefits",
        )
        .await
    }

    // ========================================================================
    // Energy and power
    // ========================================================================

    pub async fn energy(&self, site: SiteId, request: &EnergyRequest) -> Result<Energy> {
        self.get("energy", endpoints::energy(site, request), "energy")
            .await
    }

    /// Total energy produced between two dates
    pub async fn total_energy(
        &self,
        site: SiteId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<TimeFrameEnergy> {
        self.get(
            "total_energy",
            endpoints::total_energy(site, start_date, end_date),
            "timeFrameEnergy",
        )
        .await
    }

    pub async fn power(&self, site: SiteId, window: &TimeWindow) -> Result<Power> {
        self.get("power", endpoints::power(site, window), "power")
            .await
    }

    pub async fn power_details(&self, site: SiteId, request: &DetailRequest) -> Result<PowerDetail> {
        self.get(
            "power_details",
            endpoints::power_details(site, request),
            "powerDetails",
        )
        .await
    }

    pub async fn energy_details(
        &self,
        site: SiteId,
        request: &DetailRequest,
    ) -> Result<EnergyDetail> {
        self.get(
            "energy_details",
            endpoints::energy_details(site, request),
            "energyDetails",
        )
        .await
    }

    pub async fn current_power_flow(&self, site: SiteId) -> Result<CurrentPowerFlow> {
        self.get(
            "current_power_flow",
            endpoints::current_power_flow(site),
            "siteCurrentPowerFlow",
        )
        .await
    }

    /// Lifetime readings per meter device
    ///
    /// Samples with an unparseable date are kept, dated [`crate::decode::distant_past`].
    pub async fn meters_lifetime_data(
        &self,
        site: SiteId,
        request: &DetailRequest,
    ) -> Result<MetersData> {
        self.get(
            "meters_lifetime_data",
            endpoints::meters_lifetime_data(site, request),
            "meterEnergyDetails",
        )
        .await
    }

    // ========================================================================
    // Images
    // ========================================================================

    /// Site image bytes, or `None` when there is no (changed) image
    pub async fn site_image(&self, site: SiteId, request: &SiteImageRequest) -> Result<Option<Bytes>> {
        self.get_optional(endpoints::site_image(site, request))
            .await
    }

    pub async fn installer_image(&self, site: SiteId, name: &str) -> Result<Option<Bytes>> {
        self.get_optional(endpoints::installer_image(site, name))
            .await
    }

    // ========================================================================
    // Equipment
    // ========================================================================

    pub async fn components(&self, site: SiteId) -> Result<Vec<Component>> {
        self.get("components", endpoints::components(site), "reporters.list")
            .await
    }

    pub async fn inventory(&self, site: SiteId) -> Result<Inventory> {
        self.get("inventory", endpoints::inventory(site), "Inventory")
            .await
    }

    /// Raw technical telemetry of one inverter
    pub async fn inverter_technical_data(
        &self,
        site: SiteId,
        serial_number: &str,
        window: &TimeWindow,
    ) -> Result<JsonObject> {
        let response = self
            .send(endpoints::inverter_technical_data(site, serial_number, window))
            .await?;
        check_response(response.status, &response.body)?;
        JsonDecoder::new()
            .decode_object(&response.body)
            .context("inverter_technical_data")
    }

    // ========================================================================
    // Plumbing
    // ========================================================================

    async fn get<D: DeserializeOwned>(
        &self,
        operation: &str,
        endpoint: Endpoint,
        envelope: &str,
    ) -> Result<D> {
        let response = self.send(endpoint).await?;
        check_response(response.status, &response.body)?;
        JsonDecoder::with_envelope(envelope)
            .decode(&response.body)
            .context(operation)
    }

    async fn get_optional(&self, endpoint: Endpoint) -> Result<Option<Bytes>> {
        let response = self.send(endpoint).await?;
        if check_optional_response(response.status, &response.body)? {
            Ok(Some(response.body))
        } else {
            debug!("No image available ({})", response.status);
            Ok(None)
        }
    }

    async fn send(&self, mut endpoint: Endpoint) -> Result<HttpResponse> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, self.user_agent.clone());
        self.api_key.authorize(&mut endpoint, &mut headers)?;

        let request = HttpRequest::build(&self.base_url, endpoint, headers)?;
        self.transport.send(request).await
    }
}

impl<T: Transport> std::fmt::Debug for MonitoringClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonitoringClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}
