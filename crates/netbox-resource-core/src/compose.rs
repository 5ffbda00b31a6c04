//! Version record composition

use chrono::{DateTime, Utc};
use netbox_resource_api::{ObjectType, Version};
use netbox_resource_client::{Device, Interface};
use tracing::warn;

use crate::timestamp::format_timestamp;

/// Compact JSON of the device config context
///
/// Empty unless `include` is set and the device carries a context. An
/// encoding failure also yields an empty string.
#[must_use]
pub fn config_context(device: &Device, include: bool) -> String {
    if !include {
        return String::new();
    }

    match &device.config_context {
        Some(context) => serde_json::to_string(context).unwrap_or_else(|e| {
            warn!(device_id = device.id, error = %e, "failed to encode config context");
            String::new()
        }),
        None => String::new(),
    }
}

/// Version of a changed device
#[must_use]
pub fn device_version(device: &Device, updated: DateTime<Utc>, config_context: String) -> Version {
    Version {
        id: device.id.to_string(),
        last_updated: format_timestamp(updated),
        object_type: ObjectType::Devices,
        device_id: device.id.to_string(),
        device_name: device.name().to_string(),
        device_role: device.role_slug().to_string(),
        device_api_url: device.url.clone(),
        device_display_url: device.display_url.clone().unwrap_or_default(),
        config_context,
        ..Default::default()
    }
}

/// Version of one interface of a changed server
#[must_use]
pub fn interface_version(
    device: &Device,
    iface: &Interface,
    updated: DateTime<Utc>,
    config_context: String,
) -> Version {
    Version {
        id: iface.id.to_string(),
        object_type: ObjectType::Interfaces,
        interface_name: iface.name.clone(),
        interface_type: iface.kind.label.clone(),
        interface_api_url: iface.url.clone(),
        interface_display_url: iface.display_url.clone().unwrap_or_default(),
        ..device_version(device, updated, config_context)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn device(config_context: serde_json::Value) -> Device {
        serde_json::from_value(json!({
            "id": 123,
            "url": "http://netbox.example.local/api/dcim/devices/123/",
            "display_url": "http://netbox.example.local/dcim/devices/123/",
            "name": "test-device",
            "role": {"id": 8, "slug": "server"},
            "last_updated": "2023-10-02T00:00:00Z",
            "config_context": config_context
        }))
        .unwrap()
    }

    fn updated() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2023-10-02T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_config_context_toggle() {
        let device = device(json!({
            "management_ip": "192.168.1.100",
            "location": "rack-1",
            "environment": "production"
        }));

        assert_eq!(config_context(&device, false), "");

        let encoded = config_context(&device, true);
        let parsed: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(parsed["management_ip"], "192.168.1.100");
        assert!(!encoded.contains(' '), "expected compact JSON: {encoded}");
    }

    #[test]
    fn test_config_context_missing_blob() {
        let device = device(serde_json::Value::Null);
        assert_eq!(config_context(&device, true), "");
    }

    #[test]
    fn test_device_version_fields() {
        let device = device(serde_json::Value::Null);
        let version = device_version(&device, updated(), String::new());

        assert_eq!(version.id, "123");
        assert_eq!(version.device_id, "123");
        assert_eq!(version.object_type, ObjectType::Devices);
        assert_eq!(version.last_updated, "2023-10-02T00:00:00Z");
        assert_eq!(version.device_name, "test-device");
        assert_eq!(version.device_role, "server");
        assert_eq!(version.device_display_url, "http://netbox.example.local/dcim/devices/123/");
        assert!(version.interface_name.is_empty());
        assert!(version.interface_api_url.is_empty());
    }

    #[test]
    fn test_interface_version_fields() {
        let device = device(json!({"location": "rack-1"}));
        let iface: Interface = serde_json::from_value(json!({
            "id": 456,
            "url": "http://netbox.example.local/api/dcim/interfaces/456/",
            "name": "eth0",
            "type": {"value": "1000base-t", "label": "1000BASE-T (1GE)"}
        }))
        .unwrap();

        let version = interface_version(&device, &iface, updated(), config_context(&device, true));

        assert_eq!(version.id, "456");
        assert_eq!(version.device_id, "123");
        assert_eq!(version.object_type, ObjectType::Interfaces);
        assert_eq!(version.interface_name, "eth0");
        assert_eq!(version.interface_type, "1000BASE-T (1GE)");
        assert_eq!(version.interface_display_url, "");
        assert_eq!(version.config_context, r#"{"location":"rack-1"}"#);
    }
}
