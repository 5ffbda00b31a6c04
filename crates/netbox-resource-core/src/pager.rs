//! Exhaustive limit/offset paging

use std::future::Future;

use netbox_resource_api::InterfaceFilter;
use netbox_resource_client::{
    ClientError, Device, DeviceQuery, Interface, InventorySource, Page, PaginatedList,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use crate::error::ResolveError;
use crate::query::interface_query;

/// Objects requested per page
pub const PAGE_SIZE: u32 = 25;

/// Why a paging walk stopped early
#[derive(Debug)]
pub(crate) enum PageError {
    Query(ClientError),
    Cancelled,
}

/// Walk every page produced by `fetch_page`
///
/// Stops when the server announces no further page or returns an empty
/// page. The first failure discards everything collected so far.
pub(crate) async fn fetch_all<T, F, Fut>(
    cancel: &CancellationToken,
    mut fetch_page: F,
) -> Result<Vec<T>, PageError>
where
    F: FnMut(Page) -> Fut,
    Fut: Future<Output = netbox_resource_client::Result<PaginatedList<T>>>,
{
    let mut items = Vec::with_capacity(PAGE_SIZE as usize);
    let mut page = Page::first(PAGE_SIZE);

    loop {
        let response = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(PageError::Cancelled),
            response = fetch_page(page) => response.map_err(PageError::Query)?,
        };

        let received = response.results.len();
        let has_next = response.has_next();
        items.extend(response.results);

        debug!(offset = page.offset, received, total = response.count, "page fetched");

        if !has_next || received == 0 {
            break;
        }
        page = page.next();
    }

    Ok(items)
}

/// Every device matching `query`
///
/// # Errors
/// Returns [`ResolveError::DeviceQuery`] if any page fails and
/// [`ResolveError::Cancelled`] if `cancel` fires first.
#[instrument(skip_all)]
pub async fn fetch_devices(
    source: &dyn InventorySource,
    query: &DeviceQuery,
    cancel: &CancellationToken,
) -> Result<Vec<Device>, ResolveError> {
    let devices = fetch_all(cancel, |page| source.list_devices(query, page))
        .await
        .map_err(|e| match e {
            PageError::Query(err) => ResolveError::DeviceQuery(err),
            PageError::Cancelled => ResolveError::Cancelled,
        })?;

    debug!(count = devices.len(), "devices fetched");
    Ok(devices)
}

/// Every interface of `device_id` matching `filter`
///
/// # Errors
/// Returns [`ResolveError::InterfaceQuery`] if any page fails and
/// [`ResolveError::Cancelled`] if `cancel` fires first.
#[instrument(skip(source, filter, cancel))]
pub async fn fetch_interfaces(
    source: &dyn InventorySource,
    filter: &InterfaceFilter,
    device_id: i32,
    cancel: &CancellationToken,
) -> Result<Vec<Interface>, ResolveError> {
    let query = interface_query(filter);
    let interfaces = fetch_all(cancel, |page| {
        source.list_interfaces(&query, device_id, page)
    })
    .await
    .map_err(|e| match e {
        PageError::Query(err) => ResolveError::InterfaceQuery {
            device_id,
            source: err,
        },
        PageError::Cancelled => ResolveError::Cancelled,
    })?;

    debug!(count = interfaces.len(), "interfaces fetched");
    Ok(interfaces)
}
