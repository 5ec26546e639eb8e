//! Monitoring API
//!
//! The public, API-key authenticated family. Every response is checked
//! with [`crate::status::check_response`] and unwrapped from its named
//! envelope before decoding.

mod client;

pub use client::MonitoringClient;
