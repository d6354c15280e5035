use indexmap::IndexMap;
use serde_json::Value;

use crate::spec::{Endpoint, ParameterLocation};

/// A fully bound request, computed fresh per generation call.
///
/// `body` is spliced verbatim into the rendered snippet: callers must supply
/// text that is already a valid literal/expression in the target language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundRequest {
  pub url: String,
  /// Lowercased verb; each renderer re-cases it per target idiom.
  pub method: String,
  pub query: IndexMap<String, String>,
  pub headers: IndexMap<String, String>,
  pub body: Option<String>,
  pub form: IndexMap<String, String>,
}

/// Base URL resolution: an OpenAPI 3 `servers` entry wins; otherwise Swagger 2
/// `schemes`/`host`/`basePath` are stitched together. `host` is not validated.
pub fn base_url(document: &Value) -> String {
  if let Some(url) = document
    .get("servers")
    .and_then(Value::as_array)
    .and_then(|servers| servers.first())
    .and_then(|server| server.get("url"))
    .and_then(Value::as_str)
  {
    return url.to_string();
  }

  let scheme = document
    .get("schemes")
    .and_then(Value::as_array)
    .and_then(|schemes| schemes.first())
    .and_then(Value::as_str)
    .unwrap_or("https");
  let host = document.get("host").and_then(Value::as_str).unwrap_or_default();
  let base_path = document.get("basePath").and_then(Value::as_str).unwrap_or_default();

  format!("{scheme}://{host}{base_path}")
}

/// Bucket each declared parameter by location and substitute path
/// placeholders. Values absent from `values` bind to the empty string;
/// placeholders without a matching path parameter stay verbatim. Nothing is
/// URL-escaped.
pub fn bind_request(document: &Value, endpoint: &Endpoint, values: &IndexMap<String, String>) -> BoundRequest {
  let mut request = BoundRequest {
    url: format!("{}{}", base_url(document), endpoint.path),
    method: endpoint.method.to_lowercase(),
    ..BoundRequest::default()
  };

  for parameter in &endpoint.parameters {
    let value = values.get(&parameter.name).cloned().unwrap_or_default();
    match parameter.location {
      ParameterLocation::Path => {
        request.url = request.url.replace(&format!("{{{}}}", parameter.name), &value);
      }
      ParameterLocation::Query => {
        request.query.insert(parameter.name.clone(), value);
      }
      ParameterLocation::Header => {
        request.headers.insert(parameter.name.clone(), value);
      }
      ParameterLocation::Body => {
        // A spec models one practical body parameter; the last one wins.
        request.body = Some(value);
      }
      ParameterLocation::FormData => {
        request.form.insert(parameter.name.clone(), value);
      }
    }
  }

  request
}
