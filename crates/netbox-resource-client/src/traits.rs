//! Inventory source trait

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Device, Interface, Page, PaginatedList};
use crate::query::{DeviceQuery, InterfaceQuery};

/// Paged read access to devices and interfaces
#[async_trait]
pub trait InventorySource: Send + Sync {
    /// Fetch one page of devices matching `query`
    async fn list_devices(&self, query: &DeviceQuery, page: Page)
    -> Result<PaginatedList<Device>>;

    /// Fetch one page of the interfaces of `device_id` matching `query`
    async fn list_interfaces(
        &self,
        query: &InterfaceQuery,
        device_id: i32,
        page: Page,
    ) -> Result<PaginatedList<Interface>>;
}
