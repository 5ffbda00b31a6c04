//! Filter to query descriptor translation

use netbox_resource_api::{DeviceFilter, InterfaceFilter};
use netbox_resource_client::{DeviceQuery, InterfaceQuery};

/// Device list constraints for a filter
///
/// Empty filter fields are left out, so an empty filter lists every device.
#[must_use]
pub fn device_query(filter: &DeviceFilter) -> DeviceQuery {
    DeviceQuery {
        site: filter.site_name.clone(),
        tag: filter.tag.clone(),
        role: filter.role.clone(),
        id: filter.device_id.clone(),
        name_ic: filter.device_name.clone(),
        device_type: filter.device_type.clone(),
        status: filter.device_status.clone(),
    }
}

/// Interface list constraints for a filter
///
/// The owning device is bound when the query is executed.
#[must_use]
pub fn interface_query(filter: &InterfaceFilter) -> InterfaceQuery {
    InterfaceQuery {
        id: filter.interface_id.clone(),
        name_ic: filter.interface_name.clone(),
        enabled: filter.enabled,
        mgmt_only: filter.mgmt_only,
        connected: filter.connected,
        cabled: filter.cabled,
        type_ic: filter.kind.clone(),
    }
}
