//! CLI runner - executes commands

use crate::auth::ApiKey;
use crate::cli::commands::{Cli, Commands};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::metrics::EnergyBreakdown;
use crate::models::{MeterType, TimeUnit};
use crate::monitoring::MonitoringClient;
use crate::request::{DetailRequest, SiteImageRequest, SiteListRequest, TimeWindow};
use crate::types::SiteId;
use chrono::{NaiveDate, NaiveTime, TimeDelta};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::Path;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = self.client()?;
        match &self.cli.command {
            Commands::Sites { size, search } => self.sites(&client, *size, search.clone()).await,
            Commands::Overview => {
                let overview = client.overview(self.site()?).await?;
                output(&overview)
            }
            Commands::EnergyDetails {
                start,
                end,
                time_unit,
                meters,
            } => {
                self.energy_details(&client, *start, *end, *time_unit, meters)
                    .await
            }
            Commands::PowerFlow => self.power_flow(&client).await,
            Commands::SiteImage { output: path, name } => {
                self.site_image(&client, path, name.clone()).await
            }
        }
    }

    /// Load configuration, falling back to defaults
    fn load_config(&self) -> Result<ClientConfig> {
        match &self.cli.config {
            Some(path) => ClientConfig::from_file(path),
            None => Ok(ClientConfig::default()),
        }
    }

    fn client(&self) -> Result<MonitoringClient> {
        let key = self
            .cli
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::config("API key not specified (use --api-key or SOLAREDGE_API_KEY)"))?;
        MonitoringClient::new(ApiKey::new(key), &self.load_config()?)
    }

    fn site(&self) -> Result<SiteId> {
        self.cli
            .site
            .ok_or_else(|| Error::config("Site not specified (use --site or SOLAREDGE_SITE_ID)"))
    }

    async fn sites(
        &self,
        client: &MonitoringClient,
        size: Option<u32>,
        search_text: Option<String>,
    ) -> Result<()> {
        let request = SiteListRequest {
            size,
            search_text,
            ..SiteListRequest::default()
        };
        let sites = client.sites(&request).await?;
        if self.cli.verbose {
            info!("Found {} sites", sites.len());
        }
        output(&sites)
    }

    async fn energy_details(
        &self,
        client: &MonitoringClient,
        start: NaiveDate,
        end: NaiveDate,
        time_unit: TimeUnit,
        meters: &[MeterType],
    ) -> Result<()> {
        if end < start {
            return Err(Error::config(format!(
                "End date {end} is before start date {start}"
            )));
        }

        // The whole last day is included.
        let window = TimeWindow::new(
            start.and_time(NaiveTime::MIN),
            end.and_time(NaiveTime::MIN) + TimeDelta::seconds(86_399),
        );
        let request = DetailRequest::new(window)
            .with_time_unit(time_unit)
            .with_meters(meters.iter().copied());
        let detail = client.energy_details(self.site()?, &request).await?;
        let summary = detail.summary();

        output(&json!({
            "details": detail,
            "summary": summary,
        }))
    }

    async fn power_flow(&self, client: &MonitoringClient) -> Result<()> {
        let flow = client.current_power_flow(self.site()?).await?;
        if self.cli.verbose {
            eprintln!("{flow}");
        }
        output(&flow)
    }

    async fn site_image(&self, client: &MonitoringClient, path: &Path, name: String) -> Result<()> {
        let request = SiteImageRequest {
            name,
            ..SiteImageRequest::default()
        };
        match client.site_image(self.site()?, &request).await? {
            Some(image) => {
                fs::write(path, &image)?;
                output(&json!({
                    "output": path.display().to_string(),
                    "bytes": image.len(),
                }))
            }
            None => {
                eprintln!("No site image available");
                Ok(())
            }
        }
    }
}

/// Print a value as pretty JSON on stdout
fn output<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
