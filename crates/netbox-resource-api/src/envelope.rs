//! stdin/stdout envelope of the check/in/out protocol

use serde::{Deserialize, Deserializer, Serialize};

use crate::filter::DeviceFilter;
use crate::version::Version;

/// Request read from stdin by every command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Input {
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: Source,
    /// Last version seen by the caller (empty or null on the first check)
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: Version,
}

/// Connection and selection settings
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Source {
    /// Base URL of the NetBox instance
    #[serde(default)]
    pub url: String,
    /// API token
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub filter: DeviceFilter,
}

/// Decode an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Keep the token out of logs.
impl std::fmt::Debug for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Source")
            .field("url", &self.url)
            .field("token", &if self.token.is_empty() { "" } else { "<redacted>" })
            .field("filter", &self.filter)
            .finish()
    }
}

/// Response written by `in` and `out`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Output {
    pub version: Version,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<Metadata>,
}

impl Output {
    #[must_use]
    pub fn new(version: Version) -> Self {
        Self {
            version,
            metadata: Vec::new(),
        }
    }
}

/// Name/value pair shown next to a fetched version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    pub value: String,
}
