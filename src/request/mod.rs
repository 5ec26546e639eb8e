//! Request assembly
//!
//! Turns typed parameters into an [`Endpoint`]: method, path, an ordered
//! query and an optional body. Nothing here touches the network or
//! credentials, so every endpoint can be checked in isolation.
//!
//! ```rust,ignore
//! let endpoint = request::monitoring::energy(1234, &EnergyRequest::new(start, end, TimeUnit::Day));
//! assert_eq!(endpoint.path, "/site/1234/energy");
//! ```

mod endpoint;
pub mod monitoring;
mod params;
pub mod portal;

pub use endpoint::{Endpoint, MeterTypes, QueryBuilder, RequestBody};
pub use params::{
    DetailRequest, EnergyRequest, MeasurementRequest, SiteImageRequest, SiteListRequest,
    SiteStatus, SortProperty, TimeWindow,
};
