//! Per-device change resolution

use netbox_resource_api::{DeviceFilter, Version};
use netbox_resource_client::{Device, Interface};
use tracing::trace;

use crate::compose::{config_context, device_version, interface_version};
use crate::timestamp::{Reference, Tracked};

/// Role whose devices are drilled down to interfaces
pub const SERVER_ROLE: &str = "server";

/// Decides which versions a fetched device contributes
#[derive(Debug, Clone, Copy)]
pub struct ChangeResolver<'a> {
    filter: &'a DeviceFilter,
    reference: Reference,
}

impl<'a> ChangeResolver<'a> {
    #[must_use]
    pub fn new(filter: &'a DeviceFilter, reference: Reference) -> Self {
        Self { filter, reference }
    }

    /// Servers are reported per interface when interface criteria are set
    #[must_use]
    pub fn expands_interfaces(&self, device: &Device) -> bool {
        device.role_slug() == SERVER_ROLE && !self.filter.server_interface.is_empty()
    }

    /// Device-level version, if the device changed
    #[must_use]
    pub fn resolve_device(&self, device: &Device) -> Option<Version> {
        let updated = Tracked::Device(device).changed_since(&self.reference)?;
        let context = config_context(device, self.filter.wants_config_context());
        Some(device_version(device, updated, context))
    }

    /// Interface-level versions of a server
    ///
    /// Inclusion is decided by the owning device's timestamp, not the
    /// interface's own: either every interface is reported or none is.
    #[must_use]
    pub fn resolve_interfaces(&self, device: &Device, interfaces: &[Interface]) -> Vec<Version> {
        let Some(updated) = Tracked::Device(device).changed_since(&self.reference) else {
            return Vec::new();
        };
        let context = config_context(device, self.filter.wants_config_context());

        interfaces
            .iter()
            .map(|iface| {
                trace!(
                    interface_id = iface.id,
                    own_last_updated = ?Tracked::Interface(iface).last_updated(),
                    "reporting interface with device timestamp"
                );
                interface_version(device, iface, updated, context.clone())
            })
            .collect()
    }
}
