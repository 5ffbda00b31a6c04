//! netbox-resource-core: change detection engine
//!
//! Translates a device filter into NetBox queries, pages through the results,
//! decides per device whether to report it or its interfaces, and returns
//! the versions modified after a reference timestamp in ascending order.

pub mod check;
pub mod compose;
pub mod error;
pub mod order;
pub mod pager;
pub mod query;
pub mod resolve;
pub mod timestamp;

pub use check::{Checker, validate_input};
pub use error::ResolveError;
pub use pager::PAGE_SIZE;
pub use resolve::ChangeResolver;
pub use timestamp::Reference;
