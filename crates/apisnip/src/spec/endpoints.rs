use serde_json::Value;

/// Method keys under a path item that count as operations. Anything else
/// (vendor extensions, shared `parameters` blocks) is skipped.
const HTTP_METHODS: [&str; 7] = ["get", "post", "put", "delete", "patch", "options", "head"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLocation {
  Path,
  Query,
  Header,
  Body,
  FormData,
}

impl ParameterLocation {
  fn from_spec(location: &str) -> Option<Self> {
    match location {
      "path" => Some(Self::Path),
      "query" => Some(Self::Query),
      "header" => Some(Self::Header),
      "body" => Some(Self::Body),
      "formData" => Some(Self::FormData),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
  pub name: String,
  pub location: ParameterLocation,
  pub default: Option<String>,
  pub description: Option<String>,
}

/// One (path, method) pair from the specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
  /// Uppercased HTTP verb.
  pub method: String,
  /// Path template with `{name}` placeholders.
  pub path: String,
  pub summary: String,
  /// May be empty; `display_id` derives a stable fallback.
  pub operation_id: String,
  pub parameters: Vec<Parameter>,
}

impl Endpoint {
  /// The operationId when the spec provides one, otherwise an id derived
  /// from the verb and path segments (`get_users_by_id` for `GET /users/{id}`).
  /// Used for endpoint selection and separate-mode file names.
  #[must_use]
  pub fn display_id(&self) -> String {
    if !self.operation_id.is_empty() {
      return self.operation_id.clone();
    }

    let parts: Vec<&str> = self
      .path
      .split('/')
      .filter(|segment| !segment.is_empty())
      .map(|segment| {
        if segment.starts_with('{') && segment.ends_with('}') {
          "by_id"
        } else {
          segment
        }
      })
      .collect();

    let method = self.method.to_lowercase();
    if parts.is_empty() {
      method
    } else {
      format!("{}_{}", method, parts.join("_"))
    }
  }
}

/// Flatten `document.paths` into endpoint descriptors, preserving document
/// declaration order. A missing `paths` mapping yields an empty list.
pub fn list_endpoints(document: &Value) -> Vec<Endpoint> {
  let mut endpoints = Vec::new();
  let Some(paths) = document.get("paths").and_then(Value::as_object) else {
    return endpoints;
  };

  for (path, item) in paths {
    let Some(item) = item.as_object() else { continue };
    for (method, operation) in item {
      if !HTTP_METHODS.contains(&method.to_lowercase().as_str()) {
        continue;
      }

      endpoints.push(Endpoint {
        method: method.to_uppercase(),
        path: path.clone(),
        summary: string_field(operation, "summary"),
        operation_id: string_field(operation, "operationId"),
        parameters: extract_parameters(operation),
      });
    }
  }

  endpoints
}

fn string_field(operation: &Value, key: &str) -> String {
  operation.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
}

fn extract_parameters(operation: &Value) -> Vec<Parameter> {
  let Some(parameters) = operation.get("parameters").and_then(Value::as_array) else {
    return Vec::new();
  };
  parameters.iter().filter_map(parse_parameter).collect()
}

fn parse_parameter(parameter: &Value) -> Option<Parameter> {
  let name = parameter.get("name")?.as_str()?.to_string();
  let location = ParameterLocation::from_spec(parameter.get("in")?.as_str()?)?;

  Some(Parameter {
    name,
    location,
    default: default_value(parameter),
    description: parameter
      .get("description")
      .and_then(Value::as_str)
      .map(str::to_string),
  })
}

/// Swagger 2 carries defaults on the parameter itself, OpenAPI 3 inside the
/// parameter's schema. Non-string scalars are stringified.
fn default_value(parameter: &Value) -> Option<String> {
  let raw = parameter
    .get("default")
    .or_else(|| parameter.get("schema").and_then(|schema| schema.get("default")))?;

  Some(match raw {
    Value::String(text) => text.clone(),
    other => other.to_string(),
  })
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn two_path_spec() -> Value {
    json!({
      "paths": {
        "/users": {
          "get": { "operationId": "listUsers", "summary": "List users" },
          "post": { "operationId": "createUser" },
          "x-internal": { "operationId": "hidden" },
          "parameters": [ { "name": "shared", "in": "query" } ]
        },
        "/users/{id}": {
          "delete": {
            "parameters": [ { "name": "id", "in": "path" } ]
          }
        }
      }
    })
  }

  #[test]
  fn test_one_descriptor_per_path_method_pair() {
    let endpoints = list_endpoints(&two_path_spec());
    assert_eq!(endpoints.len(), 3);
  }

  #[test]
  fn test_non_verb_keys_are_skipped() {
    let endpoints = list_endpoints(&two_path_spec());
    assert!(endpoints.iter().all(|e| e.operation_id != "hidden"));
    assert!(endpoints.iter().all(|e| e.method != "PARAMETERS"));
  }

  #[test]
  fn test_declaration_order_is_preserved() {
    let endpoints = list_endpoints(&two_path_spec());
    let order: Vec<(&str, &str)> = endpoints.iter().map(|e| (e.method.as_str(), e.path.as_str())).collect();
    assert_eq!(
      order,
      vec![("GET", "/users"), ("POST", "/users"), ("DELETE", "/users/{id}")]
    );
  }

  #[test]
  fn test_method_keys_are_case_insensitive() {
    let spec = json!({ "paths": { "/a": { "GET": {}, "Post": {} } } });
    let endpoints = list_endpoints(&spec);
    assert_eq!(endpoints.len(), 2);
    assert_eq!(endpoints[0].method, "GET");
    assert_eq!(endpoints[1].method, "POST");
  }

  #[test]
  fn test_missing_paths_is_empty_not_error() {
    assert!(list_endpoints(&json!({})).is_empty());
    assert!(list_endpoints(&json!({ "paths": null })).is_empty());
  }

  #[test]
  fn test_missing_operation_fields_default() {
    let endpoints = list_endpoints(&json!({ "paths": { "/a": { "get": {} } } }));
    assert_eq!(endpoints[0].summary, "");
    assert_eq!(endpoints[0].operation_id, "");
    assert!(endpoints[0].parameters.is_empty());
  }

  #[test]
  fn test_unknown_parameter_location_is_dropped() {
    let spec = json!({
      "paths": { "/a": { "get": { "parameters": [
        { "name": "c", "in": "cookie" },
        { "name": "q", "in": "query" }
      ] } } }
    });
    let endpoints = list_endpoints(&spec);
    assert_eq!(endpoints[0].parameters.len(), 1);
    assert_eq!(endpoints[0].parameters[0].name, "q");
  }

  #[test]
  fn test_parameter_defaults_from_both_flavors() {
    let spec = json!({
      "paths": { "/a": { "get": { "parameters": [
        { "name": "limit", "in": "query", "default": 20 },
        { "name": "sort", "in": "query", "schema": { "default": "asc" } },
        { "name": "plain", "in": "query" }
      ] } } }
    });
    let parameters = &list_endpoints(&spec)[0].parameters;
    assert_eq!(parameters[0].default.as_deref(), Some("20"));
    assert_eq!(parameters[1].default.as_deref(), Some("asc"));
    assert_eq!(parameters[2].default, None);
  }

  #[test]
  fn test_display_id_prefers_operation_id() {
    let endpoint = Endpoint {
      method: "GET".into(),
      path: "/users/{id}".into(),
      summary: String::new(),
      operation_id: "getUser".into(),
      parameters: vec![],
    };
    assert_eq!(endpoint.display_id(), "getUser");
  }

  #[test]
  fn test_display_id_fallback_collapses_placeholders() {
    let endpoint = Endpoint {
      method: "GET".into(),
      path: "/users/{id}/posts".into(),
      summary: String::new(),
      operation_id: String::new(),
      parameters: vec![],
    };
    assert_eq!(endpoint.display_id(), "get_users_by_id_posts");
  }

  #[test]
  fn test_display_id_fallback_for_root_path() {
    let endpoint = Endpoint {
      method: "GET".into(),
      path: "/".into(),
      summary: String::new(),
      operation_id: String::new(),
      parameters: vec![],
    };
    assert_eq!(endpoint.display_id(), "get");
  }
}
