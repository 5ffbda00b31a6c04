//! Output ordering

use netbox_resource_api::Version;

/// Sort ascending by `last_updated`, keeping discovery order for ties
///
/// Timestamps are fixed-width RFC 3339 UTC, so string order is time order.
pub fn sort_versions(versions: &mut [Version]) {
    versions.sort_by(|a, b| a.last_updated.cmp(&b.last_updated));
}
