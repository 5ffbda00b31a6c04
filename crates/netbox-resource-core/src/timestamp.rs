//! Modification timestamps and the reference point they are compared to

use chrono::{DateTime, SecondsFormat, Utc};
use netbox_resource_client::{Device, Interface};

use crate::error::ResolveError;

/// The caller's last-known point in time
///
/// An empty reference is the Unix epoch, so every dated object counts as
/// changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference(DateTime<Utc>);

impl Reference {
    /// Parse `version.last_updated`
    ///
    /// # Errors
    /// Returns [`ResolveError::InvalidReference`] if a non-empty value is not
    /// RFC 3339.
    pub fn parse(value: &str) -> Result<Self, ResolveError> {
        if value.is_empty() {
            return Ok(Self(DateTime::UNIX_EPOCH));
        }

        DateTime::parse_from_rfc3339(value)
            .map(|time| Self(time.with_timezone(&Utc)))
            .map_err(|source| ResolveError::InvalidReference {
                value: value.to_string(),
                source,
            })
    }

    #[must_use]
    pub fn time(&self) -> DateTime<Utc> {
        self.0
    }

    /// Strictly newer than the reference; equal timestamps are unchanged
    #[must_use]
    pub fn is_before(&self, modified: DateTime<Utc>) -> bool {
        modified > self.0
    }
}

impl Default for Reference {
    fn default() -> Self {
        Self(DateTime::UNIX_EPOCH)
    }
}

/// An inventory object carrying a modification timestamp
#[derive(Debug, Clone, Copy)]
pub enum Tracked<'a> {
    Device(&'a Device),
    Interface(&'a Interface),
}

impl Tracked<'_> {
    /// `None` for objects NetBox never stamped
    #[must_use]
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        match self {
            Tracked::Device(device) => device.last_updated,
            Tracked::Interface(iface) => iface.last_updated,
        }
    }

    /// The timestamp if the object changed after `reference`
    #[must_use]
    pub fn changed_since(&self, reference: &Reference) -> Option<DateTime<Utc>> {
        self.last_updated().filter(|time| reference.is_before(*time))
    }
}

/// Fixed-width RFC 3339 UTC rendering, so string order is time order
#[must_use]
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}
