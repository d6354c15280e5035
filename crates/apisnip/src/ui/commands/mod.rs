pub mod generate;
pub mod list;

pub use generate::{GenerateConfig, generate_scripts};
pub use list::list_endpoints;
