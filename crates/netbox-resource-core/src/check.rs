//! Change detection over a NetBox inventory

use std::sync::Arc;

use netbox_resource_api::{DeviceFilter, Input, Version};
use netbox_resource_client::InventorySource;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use crate::error::ResolveError;
use crate::order::sort_versions;
use crate::pager::{fetch_devices, fetch_interfaces};
use crate::query::device_query;
use crate::resolve::ChangeResolver;
use crate::timestamp::Reference;

/// Validate a check request before any network activity
///
/// # Errors
/// Returns [`ResolveError::MissingUrl`] for an empty `source.url` and
/// [`ResolveError::InvalidReference`] for a malformed
/// `version.last_updated`.
pub fn validate_input(input: &Input) -> Result<Reference, ResolveError> {
    if input.source.url.trim().is_empty() {
        return Err(ResolveError::MissingUrl);
    }
    Reference::parse(&input.version.last_updated)
}

/// Change checker
///
/// Lists the devices selected by a filter, drills servers down to their
/// interfaces when interface criteria are set, and returns the versions that
/// changed after a reference point. Queries run one at a time.
pub struct Checker {
    source: Arc<dyn InventorySource>,
}

impl Checker {
    /// Create a new checker
    pub fn new(source: Arc<dyn InventorySource>) -> Self {
        Self { source }
    }

    /// Versions changed after `reference`, oldest first
    ///
    /// # Errors
    /// Returns an error if any query fails or `cancel` fires. No partial
    /// result is returned in either case.
    #[instrument(skip_all, fields(reference = %reference.time()))]
    pub async fn check(
        &self,
        filter: &DeviceFilter,
        reference: Reference,
        cancel: &CancellationToken,
    ) -> Result<Vec<Version>, ResolveError> {
        let source = self.source.as_ref();
        let resolver = ChangeResolver::new(filter, reference);

        let devices = fetch_devices(source, &device_query(filter), cancel).await?;

        let mut versions = Vec::with_capacity(devices.len());
        for device in &devices {
            if resolver.expands_interfaces(device) {
                let interfaces =
                    fetch_interfaces(source, &filter.server_interface, device.id, cancel).await?;
                let found = resolver.resolve_interfaces(device, &interfaces);
                debug!(
                    device_id = device.id,
                    interfaces = interfaces.len(),
                    changed = found.len(),
                    "resolved server interfaces"
                );
                versions.extend(found);
            } else if let Some(version) = resolver.resolve_device(device) {
                versions.push(version);
            }
        }

        sort_versions(&mut versions);

        info!(
            devices = devices.len(),
            versions = versions.len(),
            "check completed"
        );
        Ok(versions)
    }

    /// Validate `input` and run [`Checker::check`] with its filter
    ///
    /// # Errors
    /// Returns an input error before querying, otherwise as
    /// [`Checker::check`].
    pub async fn check_input(
        &self,
        input: &Input,
        cancel: &CancellationToken,
    ) -> Result<Vec<Version>, ResolveError> {
        let reference = validate_input(input)?;
        self.check(&input.source.filter, reference, cancel).await
    }
}
