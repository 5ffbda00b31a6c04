//! Version records emitted by `check`

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of inventory object a version describes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    #[default]
    Devices,
    Interfaces,
}

impl ObjectType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectType::Devices => "devices",
            ObjectType::Interfaces => "interfaces",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One changed device or interface
///
/// Interface fields are only populated when `object_type` is
/// [`ObjectType::Interfaces`]. Empty optional fields are omitted on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    /// Identifier of the object itself (device or interface)
    #[serde(default)]
    pub id: String,
    /// RFC 3339 UTC timestamp, second precision
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub object_type: ObjectType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub device_id: String,
    #[serde(default)]
    pub device_name: String,
    #[serde(default)]
    pub device_role: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub device_api_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub device_display_url: String,
    /// Compact JSON encoding of the device config context
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub config_context: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub interface_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub interface_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub interface_api_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub interface_display_url: String,
}

impl Version {
    /// True when the record carries no reference point
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.last_updated.is_empty()
    }
}
