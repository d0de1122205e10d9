//! Service layer: HTTP handlers and the upstream lookup provider.

mod lookup;
pub mod provider;

pub use lookup::LookupService;
pub use provider::{ExternalApiProvider, IpInfo, IpInfoLookup};
