//! Common types used throughout the SolarEdge client
//!
//! This module contains shared type aliases and the small enums that
//! both API families put on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Ordered query parameters, emitted in insertion order
pub type QueryPairs = Vec<(String, String)>;

/// Numeric site identifier
pub type SiteId = u64;

// ============================================================================
// Sort Order
// ============================================================================

/// Abstract ordering for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Ascending
    #[default]
    Forward,
    /// Descending
    Reverse,
}

impl SortOrder {
    /// Wire token for this ordering
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Forward => "ASC",
            SortOrder::Reverse => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// System Unit
// ============================================================================

/// Unit system for environmental benefits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SystemUnit {
    #[default]
    #[serde(rename = "Metrics")]
    Metric,
    #[serde(rename = "Imperial")]
    Imperial,
}

impl SystemUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            SystemUnit::Metric => "Metrics",
            SystemUnit::Imperial => "Imperial",
        }
    }
}

impl fmt::Display for SystemUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
