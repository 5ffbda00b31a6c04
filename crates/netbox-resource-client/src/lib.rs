//! netbox-resource-client: NetBox REST client
//!
//! Read-only access to the device and interface list endpoints of NetBox,
//! one page per request.
//!
//! # Example
//!
//! ```no_run
//! use netbox_resource_client::{DeviceQuery, HttpClient, InventorySource, Page};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new("https://netbox.example.local", "api-token")?;
//!
//! let query = DeviceQuery {
//!     role: vec!["server".into()],
//!     ..Default::default()
//! };
//! let page = client.list_devices(&query, Page::first(25)).await?;
//! for device in &page.results {
//!     println!("{} {}", device.id, device.name());
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;
pub mod models;
pub mod query;
pub mod traits;

pub use error::{ClientError, Result};
pub use http::HttpClient;
pub use models::{Device, Interface, Page, PaginatedList};
pub use query::{DeviceQuery, InterfaceQuery};
pub use traits::InventorySource;
