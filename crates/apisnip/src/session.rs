use indexmap::IndexMap;
use serde_json::Value;

use crate::spec::{Endpoint, list_endpoints};

/// Everything one generation pass needs, built by the shell and passed
/// around explicitly. The core entry points stay stateless; a session is
/// cheap to rebuild whenever the selection changes.
#[derive(Debug)]
pub struct Session {
  pub document: Value,
  pub endpoints: Vec<Endpoint>,
  /// Indices into `endpoints`, in selection order.
  pub selections: Vec<usize>,
  /// Parameter values keyed by endpoint display id, then parameter name.
  pub param_values: IndexMap<String, IndexMap<String, String>>,
}

impl Session {
  /// Select every endpoint and seed each value map with the defaults the
  /// spec declares.
  #[must_use]
  pub fn new(document: Value) -> Self {
    let endpoints = list_endpoints(&document);
    let selections = (0..endpoints.len()).collect();
    let mut session = Self {
      document,
      endpoints,
      selections,
      param_values: IndexMap::new(),
    };
    session.seed_defaults();
    session
  }

  fn seed_defaults(&mut self) {
    let seeded: Vec<(String, String, String)> = self
      .endpoints
      .iter()
      .flat_map(|endpoint| {
        let id = endpoint.display_id();
        endpoint
          .parameters
          .iter()
          .filter_map(move |parameter| {
            parameter
              .default
              .clone()
              .map(|value| (id.clone(), parameter.name.clone(), value))
          })
      })
      .collect();

    for (id, name, value) in seeded {
      self.param_values.entry(id).or_default().insert(name, value);
    }
  }

  /// Restrict the selection to endpoints whose display id is in `ids`,
  /// keeping the order of `ids`. Unrecognized ids are handed back so the
  /// shell can complain.
  pub fn select(&mut self, ids: &[String]) -> Vec<String> {
    let mut unknown = Vec::new();
    let mut selections = Vec::new();

    for id in ids {
      match self.endpoints.iter().position(|endpoint| &endpoint.display_id() == id) {
        Some(index) => selections.push(index),
        None => unknown.push(id.clone()),
      }
    }

    self.selections = selections;
    unknown
  }

  /// Apply one value to every selected endpoint that declares a parameter
  /// with this name, overriding any seeded default.
  pub fn set_param(&mut self, name: &str, value: &str) {
    let targets: Vec<String> = self
      .selected()
      .filter(|endpoint| endpoint.parameters.iter().any(|parameter| parameter.name == name))
      .map(Endpoint::display_id)
      .collect();

    for id in targets {
      self
        .param_values
        .entry(id)
        .or_default()
        .insert(name.to_string(), value.to_string());
    }
  }

  pub fn selected(&self) -> impl Iterator<Item = &Endpoint> {
    self.selections.iter().map(|&index| &self.endpoints[index])
  }

  #[must_use]
  pub fn values_for(&self, endpoint: &Endpoint) -> IndexMap<String, String> {
    self
      .param_values
      .get(&endpoint.display_id())
      .cloned()
      .unwrap_or_default()
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn fixture() -> Value {
    json!({
      "host": "api.example.com",
      "paths": {
        "/pets": {
          "get": {
            "operationId": "listPets",
            "parameters": [ { "name": "limit", "in": "query", "default": 20 } ]
          }
        },
        "/pets/{id}": {
          "get": {
            "operationId": "getPet",
            "parameters": [ { "name": "id", "in": "path" } ]
          }
        }
      }
    })
  }

  #[test]
  fn test_new_selects_all_endpoints() {
    let session = Session::new(fixture());
    assert_eq!(session.selected().count(), 2);
  }

  #[test]
  fn test_defaults_are_seeded() {
    let session = Session::new(fixture());
    let endpoint = session.endpoints[0].clone();
    assert_eq!(session.values_for(&endpoint).get("limit").map(String::as_str), Some("20"));
  }

  #[test]
  fn test_select_reports_unknown_ids() {
    let mut session = Session::new(fixture());
    let unknown = session.select(&["getPet".to_string(), "nope".to_string()]);
    assert_eq!(unknown, vec!["nope".to_string()]);
    assert_eq!(session.selected().count(), 1);
    assert_eq!(session.selected().next().unwrap().operation_id, "getPet");
  }

  #[test]
  fn test_set_param_targets_declaring_endpoints_only() {
    let mut session = Session::new(fixture());
    session.set_param("id", "42");

    let get_pet = session.endpoints[1].clone();
    assert_eq!(session.values_for(&get_pet).get("id").map(String::as_str), Some("42"));

    let list_pets = session.endpoints[0].clone();
    assert!(session.values_for(&list_pets).get("id").is_none());
  }

  #[test]
  fn test_set_param_overrides_seeded_default() {
    let mut session = Session::new(fixture());
    session.set_param("limit", "5");
    let endpoint = session.endpoints[0].clone();
    assert_eq!(session.values_for(&endpoint).get("limit").map(String::as_str), Some("5"));
  }
}
