//! NetBox object views
//!
//! Only the fields read by the resource are decoded; everything else in the
//! API payload is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Pagination
// ============================================================================

/// One page of a NetBox list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedList<T> {
    /// Total number of matching objects
    #[serde(default)]
    pub count: u64,
    /// URL of the next page, if any
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> PaginatedList<T> {
    /// Whether the server announced a further page
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|next| !next.is_empty())
    }
}

/// limit/offset window of a list request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u32,
    pub offset: u32,
}

impl Page {
    /// First page of the given size
    #[must_use]
    pub fn first(limit: u32) -> Self {
        Self { limit, offset: 0 }
    }

    /// The page following this one
    #[must_use]
    pub fn next(self) -> Self {
        Self {
            limit: self.limit,
            offset: self.offset + self.limit,
        }
    }
}

// ============================================================================
// Devices
// ============================================================================

/// Nested role reference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BriefRole {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub slug: String,
}

/// Device with its rendered config context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: i32,
    /// Canonical API URL
    #[serde(default)]
    pub url: String,
    /// Web UI URL
    #[serde(default)]
    pub display_url: Option<String>,
    #[serde(default)]
    pub display: String,
    /// Devices may be unnamed
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: BriefRole,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub config_context: Option<Map<String, Value>>,
}

impl Device {
    /// Device name, or an empty string for unnamed devices
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn role_slug(&self) -> &str {
        &self.role.slug
    }
}

// ============================================================================
// Interfaces
// ============================================================================

/// Nested device reference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BriefDevice {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub name: Option<String>,
}

/// Interface type choice
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterfaceType {
    /// Machine value (`1000base-t`, `virtual`, ...)
    #[serde(default)]
    pub value: String,
    /// Human label (`1000BASE-T (1GE)`, `Virtual`, ...)
    #[serde(default)]
    pub label: String,
}

/// Nested cable reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefCable {
    pub id: i32,
}

/// Network interface of a device
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interface {
    pub id: i32,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display_url: Option<String>,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub device: BriefDevice,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: InterfaceType,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub mgmt_only: bool,
    #[serde(default)]
    pub cable: Option<BriefCable>,
    #[serde(default)]
    pub connected_endpoints_reachable: Option<bool>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}
