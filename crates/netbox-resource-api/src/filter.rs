//! Inventory filter description
//!
//! Every list is OR-ed within itself and AND-ed with the other fields.
//! An unset or empty field imposes no constraint.

use serde::{Deserialize, Serialize};

/// Selection criteria for devices, plus optional interface drill-down
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceFilter {
    /// Site slugs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub site_name: Vec<String>,
    /// Tag slugs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag: Vec<String>,
    /// Device role slugs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub role: Vec<String>,
    /// Device identifiers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub device_id: Vec<i32>,
    /// Case-insensitive device name substrings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub device_name: Vec<String>,
    /// Device type slugs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub device_type: Vec<String>,
    /// Device status values (active, planned, ...)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub device_status: Vec<String>,
    /// Interface criteria for devices with the `server` role
    #[serde(default, skip_serializing_if = "InterfaceFilter::is_empty")]
    pub server_interface: InterfaceFilter,
    /// Serialize the device config context into each version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get_config_context: Option<bool>,
}

impl DeviceFilter {
    /// Whether the config context was explicitly requested
    #[must_use]
    pub fn wants_config_context(&self) -> bool {
        self.get_config_context == Some(true)
    }
}

/// Selection criteria for the interfaces of a server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceFilter {
    /// Interface identifiers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interface_id: Vec<i32>,
    /// Case-insensitive interface name substrings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interface_name: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mgmt_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cabled: Option<bool>,
    /// Case-insensitive interface type substrings
    #[serde(default, rename = "type", skip_serializing_if = "Vec::is_empty")]
    pub kind: Vec<String>,
}

impl InterfaceFilter {
    /// True when no interface criterion is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interface_id.is_empty()
            && self.interface_name.is_empty()
            && self.enabled.is_none()
            && self.mgmt_only.is_none()
            && self.connected.is_none()
            && self.cabled.is_none()
            && self.kind.is_empty()
    }
}
