//! Authentication module
//!
//! Supports: monitoring API key, portal cookie plus CSRF token
//!
//! Credentials are always passed explicitly to the client that uses them;
//! nothing is cached between calls.

mod credentials;

pub use credentials::{cookie_string, ApiKey, Credentials, LoginData, PortalSession};
