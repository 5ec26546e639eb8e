//! Credential types and how they are applied to a request

use crate::error::{Error, Result};
use crate::request::Endpoint;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, COOKIE, SET_COOKIE};
use std::fmt;

const CSRF_HEADER: HeaderName = HeaderName::from_static("x-csrf-token");
const CSRF_COOKIE: &str = "CSRF-TOKEN";

/// Something that can authorize an outgoing request
pub trait Credentials {
    /// Add whatever this credential contributes to the query or headers
    fn authorize(&self, endpoint: &mut Endpoint, headers: &mut HeaderMap) -> Result<()>;
}

/// Monitoring API key, sent as the first `api_key` query parameter
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl Credentials for ApiKey {
    fn authorize(&self, endpoint: &mut Endpoint, _headers: &mut HeaderMap) -> Result<()> {
        endpoint
            .query
            .insert(0, ("api_key".to_string(), self.0.clone()));
        Ok(())
    }
}

/// Result of a portal login
#[derive(Clone, PartialEq, Eq)]
pub struct LoginData {
    /// `name=value` pairs from `Set-Cookie`, joined with `"; "`
    pub cookie: String,
    /// Raw user profile returned by the login call
    pub xml_user_data: String,
}

impl fmt::Debug for LoginData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginData")
            .field("cookie", &"***")
            .field("xml_user_data_len", &self.xml_user_data.len())
            .finish()
    }
}

impl LoginData {
    /// Build login data from response headers and body
    ///
    /// Fails when the server set no cookie.
    pub fn from_response(headers: &HeaderMap, body: &[u8]) -> Result<Self> {
        let cookie = cookie_string(headers).ok_or_else(|| Error::auth("Error with cookies"))?;
        let xml_user_data = String::from_utf8(body.to_vec())
            .map_err(|_| Error::auth("login response is not valid UTF-8"))?;
        Ok(Self {
            cookie,
            xml_user_data,
        })
    }

    /// Value of the named cookie, if present
    pub fn cookie_value(&self, name: &str) -> Option<&str> {
        self.cookie.split("; ").find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name).then_some(value)
        })
    }
}

/// Cookie and CSRF token for the portal API
#[derive(Clone, PartialEq, Eq)]
pub struct PortalSession {
    pub cookie: String,
    pub csrf_token: String,
}

impl PortalSession {
    pub fn new(cookie: impl Into<String>, csrf_token: impl Into<String>) -> Self {
        Self {
            cookie: cookie.into(),
            csrf_token: csrf_token.into(),
        }
    }

    /// Session from a login; the token comes from the `CSRF-TOKEN` cookie
    pub fn from_login(login: &LoginData) -> Self {
        Self {
            cookie: login.cookie.clone(),
            csrf_token: login.cookie_value(CSRF_COOKIE).unwrap_or_default().to_string(),
        }
    }
}

impl fmt::Debug for PortalSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortalSession")
            .field("cookie", &"***")
            .field("csrf_token", &"***")
            .finish()
    }
}

impl Credentials for PortalSession {
    fn authorize(&self, _endpoint: &mut Endpoint, headers: &mut HeaderMap) -> Result<()> {
        headers.insert(COOKIE, header_value("cookie", &self.cookie)?);
        headers.insert(CSRF_HEADER, header_value("CSRF token", &self.csrf_token)?);
        Ok(())
    }
}

fn header_value(what: &str, raw: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(raw).map_err(|_| Error::auth(format!("{what} is not a valid header value")))
}

/// Collapse every `Set-Cookie` header into a `Cookie` header value
pub fn cookie_string(headers: &HeaderMap) -> Option<String> {
    let pairs: Vec<&str> = headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .map(str::trim)
        .filter(|pair| pair.contains('='))
        .collect();

    if pairs.is_empty() {
        None
    } else {
        Some(pairs.join("; "))
    }
}
