//! netbox-resource-api: Shared resource types
//!
//! Contains the filter description, the stdin/stdout envelope of the
//! check/in/out protocol and the version records emitted by `check`.

pub mod envelope;
pub mod filter;
pub mod version;

pub use envelope::{Input, Metadata, Output, Source};
pub use filter::{DeviceFilter, InterfaceFilter};
pub use version::{ObjectType, Version};
