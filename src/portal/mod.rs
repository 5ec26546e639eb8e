//! Consumer portal API
//!
//! The private family used by the vendor's mobile app. Authentication is a
//! login cookie plus a CSRF token, passed to every call as a
//! [`crate::auth::PortalSession`].

mod client;

pub use client::PortalClient;
