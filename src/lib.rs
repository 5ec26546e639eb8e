// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # SolarEdge API client
//!
//! Typed access to the two SolarEdge HTTP API families.
//!
//! ## Features
//!
//! - **Monitoring API**: sites, energy, power, meters, equipment and images, authenticated with an API key
//! - **Portal API**: the consumer app endpoints, authenticated with a login cookie and CSRF token
//! - **Strict decoding**: every body becomes a domain value or a readable decoding error
//! - **Derived metrics**: meter totals, self-consumption percentages, grid import/export
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use solaredge_api::{ApiKey, ClientConfig, MonitoringClient, Result};
//! use solaredge_api::metrics::EnergyBreakdown;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = MonitoringClient::new(ApiKey::new("KEY"), &ClientConfig::default())?;
//!
//!     let flow = client.current_power_flow(1234).await?;
//!     println!("{flow}");
//!
//!     let request = DetailRequest::new(TimeWindow::new(start, end));
//!     let detail = client.energy_details(1234, &request).await?;
//!     println!("self-consumption: {:?}%", detail.self_consumption_percentage());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │            MonitoringClient              PortalClient           │
//! │  typed operation → Endpoint → Credentials → Transport → decode  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬─────────────┐
//! │ Request  │   Auth    │     HTTP      │  Status   │   Decode    │
//! ├──────────┼───────────┼───────────────┼───────────┼─────────────┤
//! │ Query    │ API key   │ Transport     │ Classify  │ Envelopes   │
//! │ Params   │ Cookie    │ reqwest       │ Enrich    │ Dates       │
//! │ Bodies   │ CSRF      │               │           │ Wire enums  │
//! └──────────┴───────────┴───────────────┴───────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP status classification
pub mod status;

/// Response decoders, date formats and wire enums
pub mod decode;

/// Domain model for both API families
pub mod models;

/// Derived metrics over decoded values
pub mod metrics;

/// Endpoint and query assembly
pub mod request;

/// API key and portal session credentials
pub mod auth;

/// HTTP transport
pub mod http;

/// Monitoring API client
pub mod monitoring;

/// Portal API client
pub mod portal;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::{ApiKey, PortalSession};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use monitoring::MonitoringClient;
pub use portal::PortalClient;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
