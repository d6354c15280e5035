pub mod binder;
pub mod render;
pub mod writer;

pub use binder::{BoundRequest, bind_request};
pub use render::Language;
pub use writer::save_script;

use indexmap::IndexMap;
use serde_json::Value;

use crate::spec::Endpoint;

/// Bind `values` against `endpoint` and render the bound request in
/// `language`. Stateless; safe to call once per endpoint in any order.
#[must_use]
pub fn generate_script(
  document: &Value,
  endpoint: &Endpoint,
  values: &IndexMap<String, String>,
  language: Language,
) -> String {
  language.render(&bind_request(document, endpoint, values))
}
