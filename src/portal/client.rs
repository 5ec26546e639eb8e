//! Portal API client

use crate::auth::{Credentials, LoginData, PortalSession};
use crate::config::ClientConfig;
use crate::decode::{decode_energy_compare, JsonDecoder};
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClient, HttpRequest, HttpResponse, Transport};
use crate::models::{
    DataAvailability, EnergyCompare, EnergyOverview, EnvironmentalBenefits, LayoutEnergy,
    LogicalLayout, Measurement, PhysicalLayout, PowerFlow, TimeRange, Weather,
};
use crate::request::portal as endpoints;
use crate::request::{Endpoint, MeasurementRequest};
use crate::status::check_response;
use crate::types::SiteId;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONNECTION, CONTENT_TYPE, USER_AGENT};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use tracing::debug;

const CLIENT_VERSION: HeaderName = HeaderName::from_static("client-version");

/// Client for the cookie-authenticated consumer portal API
///
/// ```rust,ignore
/// let client = PortalClient::new(&ClientConfig::default())?;
/// let login = client.login("me@example.com", "secret").await?;
/// let session = PortalSession::from_login(&login);
/// let flow = client.latest_power_flow(1234, &session).await?;
/// ```
pub struct PortalClient<T: Transport = HttpClient> {
    transport: T,
    base_url: String,
    user_agent: HeaderValue,
    client_version: HeaderValue,
}

impl PortalClient<HttpClient> {
    /// Create a client over a fresh reqwest transport
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let transport = HttpClient::with_config(config.http_config())?;
        Self::with_transport(transport, config)
    }
}

impl<T: Transport> PortalClient<T> {
    /// Create a client over any transport
    pub fn with_transport(transport: T, config: &ClientConfig) -> Result<Self> {
        let user_agent = HeaderValue::from_str(&config.portal_user_agent)
            .map_err(|_| Error::config("portal_user_agent is not a valid header value"))?;
        let client_version = HeaderValue::from_str(&config.portal_client_version)
            .map_err(|_| Error::config("portal_client_version is not a valid header value"))?;
        Ok(Self {
            transport,
            base_url: config.portal_base_url.clone(),
            user_agent,
            client_version,
        })
    }

    /// The transport this client sends through
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Log in with portal credentials
    ///
    /// The returned cookie string feeds [`PortalSession::from_login`].
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginData> {
        let response = self.send(endpoints::login(username, password), None).await?;
        check_response(response.status, &response.body)?;
        let login = LoginData::from_response(&response.headers, &response.body)?;
        debug!("Logged in, {} bytes of user data", login.xml_user_data.len());
        Ok(login)
    }

    pub async fn environmental_benefits(
        &self,
        site: SiteId,
        session: &PortalSession,
    ) -> Result<EnvironmentalBenefits> {
        self.get(endpoints::environmental_benefits(site), Some("envBenefits"), session)
            .await
            .context("environmental_benefits")
    }

    /// Live weather, forecast and sun times at the site
    pub async fn weather(&self, site: SiteId, session: &PortalSession) -> Result<Weather> {
        self.get(endpoints::weather(site), None, session)
            .await
            .context("weather")
    }

    pub async fn data_availability(
        &self,
        site: SiteId,
        session: &PortalSession,
    ) -> Result<DataAvailability> {
        self.get(endpoints::data_availability(site), None, session)
            .await
            .context("data_availability")
    }

    /// Month, quarter and year production per year, reshaped by axis label
    pub async fn energy_compare(&self, site: SiteId, session: &PortalSession) -> Result<EnergyCompare> {
        let response = self.send(endpoints::energy_compare(site), Some(session)).await?;
        check_response(response.status, &response.body)?;
        decode_energy_compare(&response.body)
    }

    pub async fn energy_overview(
        &self,
        site: SiteId,
        session: &PortalSession,
    ) -> Result<Vec<EnergyOverview>> {
        self.get(
            endpoints::energy_overview(site),
            Some("energyProducedOverviewList"),
            session,
        )
        .await
        .context("energy_overview")
    }

    pub async fn energy_measurements(
        &self,
        site: SiteId,
        request: &MeasurementRequest,
        session: &PortalSession,
    ) -> Result<Measurement> {
        self.get(endpoints::energy_measurements(site, request), None, session)
            .await
            .context("energy_measurements")
    }

    /// Latest power flow; unknown enum values fail the decode
    pub async fn latest_power_flow(&self, site: SiteId, session: &PortalSession) -> Result<PowerFlow> {
        self.get(endpoints::latest_power_flow(site), None, session)
            .await
            .context("latest_power_flow")
    }

    /// Energy per reporter id
    pub async fn layout_energy(
        &self,
        site: SiteId,
        range: Option<TimeRange>,
        session: &PortalSession,
    ) -> Result<BTreeMap<String, LayoutEnergy>> {
        self.get(endpoints::layout_energy(site, range), None, session)
            .await
            .context("layout_energy")
    }

    pub async fn physical_layout(
        &self,
        site: SiteId,
        session: &PortalSession,
    ) -> Result<PhysicalLayout> {
        self.get(endpoints::physical_layout(site), None, session)
            .await
            .context("physical_layout")
    }

    pub async fn logical_layout(&self, site: SiteId, session: &PortalSession) -> Result<LogicalLayout> {
        self.get(endpoints::logical_layout(site), None, session)
            .await
            .context("logical_layout")
    }

    // ========================================================================
    // Plumbing
    // ========================================================================

    async fn get<D: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        envelope: Option<&str>,
        session: &PortalSession,
    ) -> Result<D> {
        let response = self.send(endpoint, Some(session)).await?;
        check_response(response.status, &response.body)?;
        envelope
            .map_or_else(JsonDecoder::new, JsonDecoder::with_envelope)
            .decode(&response.body)
    }

    async fn send(
        &self,
        mut endpoint: Endpoint,
        session: Option<&PortalSession>,
    ) -> Result<HttpResponse> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(CLIENT_VERSION, self.client_version.clone());
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(USER_AGENT, self.user_agent.clone());
        if let Some(session) = session {
            session.authorize(&mut endpoint, &mut headers)?;
        }

        let request = HttpRequest::build(&self.base_url, endpoint, headers)?;
        self.transport.send(request).await
    }
}

impl<T: Transport> std::fmt::Debug for PortalClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
