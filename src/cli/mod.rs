//! CLI module
//!
//! Command-line interface over the monitoring API.
//!
//! # Commands
//!
//! - `sites` - List sites visible to the API key
//! - `overview` - Site overview
//! - `energy-details` - Per-meter energy with derived metrics
//! - `power-flow` - Current power flow
//! - `site-image` - Download the site image

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
