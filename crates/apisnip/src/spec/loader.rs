use serde_json::Value;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
  Json,
  Yaml,
  /// Nothing identified the format; JSON is tried first, then YAML.
  Unknown,
}

impl SpecFormat {
  /// Detection policy, in order: a JSON content type or `.json` URL wins,
  /// then a YAML content type or `.yaml`/`.yml` URL.
  #[must_use]
  pub fn detect(content_type: Option<&str>, url: &str) -> Self {
    let content_type = content_type.unwrap_or_default();
    if content_type.contains("application/json") || url.ends_with(".json") {
      return Self::Json;
    }
    if content_type.contains("application/yaml")
      || content_type.contains("application/x-yaml")
      || url.ends_with(".yaml")
      || url.ends_with(".yml")
    {
      return Self::Yaml;
    }
    Self::Unknown
  }
}

/// Parse `text` under the detected format into a generic document. YAML is
/// converted to `serde_json::Value` so the rest of the pipeline sees a single
/// document model; key order is preserved either way.
pub fn parse_document(text: &str, format: SpecFormat) -> Result<Value, Error> {
  match format {
    SpecFormat::Json => serde_json::from_str(text).map_err(|err| Error::Parse(err.to_string())),
    SpecFormat::Yaml => parse_yaml(text),
    SpecFormat::Unknown => match serde_json::from_str(text) {
      Ok(document) => Ok(document),
      Err(json_err) => parse_yaml(text)
        .map_err(|yaml_err| Error::Parse(format!("not valid JSON ({json_err}) nor YAML ({yaml_err})"))),
    },
  }
}

fn parse_yaml(text: &str) -> Result<Value, Error> {
  let value: serde_yaml::Value = serde_yaml::from_str(text).map_err(|err| Error::Parse(err.to_string()))?;
  serde_json::to_value(value).map_err(|err| Error::Parse(err.to_string()))
}

/// One plain GET, no custom headers, client-default timeouts and redirect
/// handling. Anything other than a 200 is a fetch failure.
pub async fn fetch_spec(url: &str) -> Result<Value, Error> {
  let response = reqwest::get(url).await?;
  let status = response.status();
  if status != reqwest::StatusCode::OK {
    return Err(Error::Fetch {
      url: url.to_string(),
      status: status.as_u16(),
    });
  }

  let content_type = response
    .headers()
    .get(reqwest::header::CONTENT_TYPE)
    .and_then(|value| value.to_str().ok())
    .map(str::to_owned);
  let body = response.text().await?;

  parse_document(&body, SpecFormat::detect(content_type.as_deref(), url))
}
