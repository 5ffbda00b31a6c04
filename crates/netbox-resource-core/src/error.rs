//! Error types for netbox-resource-core

use netbox_resource_client::ClientError;
use thiserror::Error;

/// Errors that abort a change resolution
#[derive(Error, Debug)]
pub enum ResolveError {
    /// `source.url` was empty
    #[error("source.url containing the NetBox URL is required")]
    MissingUrl,

    /// `version.last_updated` is not an RFC 3339 timestamp
    #[error("invalid reference time format found in 'version.last_updated' ({value:?}): {source}")]
    InvalidReference {
        /// Rejected input
        value: String,
        /// Parser error
        source: chrono::ParseError,
    },

    /// Paging through the device list failed
    #[error("device query failed: {0}")]
    DeviceQuery(#[source] ClientError),

    /// Paging through the interfaces of a server failed
    #[error("interface query for device {device_id} failed: {source}")]
    InterfaceQuery {
        /// Device whose interfaces were being listed
        device_id: i32,
        /// Underlying client error
        source: ClientError,
    },

    /// The caller cancelled the resolution
    #[error("operation cancelled")]
    Cancelled,
}

impl ResolveError {
    /// Check if the resolution was interrupted rather than failed
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ResolveError::Cancelled)
    }

    /// Check if the error was raised before any network activity
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ResolveError::MissingUrl | ResolveError::InvalidReference { .. }
        )
    }
}
