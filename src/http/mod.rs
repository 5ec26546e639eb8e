//! HTTP transport module
//!
//! [`Transport`] is the seam between the endpoint catalog and the network.
//! [`HttpClient`] implements it over reqwest; tests substitute their own.

mod client;
mod message;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use message::{HttpRequest, HttpResponse, Transport};

#[cfg(test)]
mod tests;
