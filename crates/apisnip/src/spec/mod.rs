pub mod endpoints;
pub mod loader;

pub use endpoints::{Endpoint, Parameter, ParameterLocation, list_endpoints};
pub use loader::{SpecFormat, fetch_spec, parse_document};
