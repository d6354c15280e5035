mod csharp;
mod javascript;
mod php;
mod python;

use strum::Display;

use super::BoundRequest;
use crate::error::Error;

/// The closed set of snippet output languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Language {
  #[strum(to_string = "Python")]
  Python,
  #[strum(to_string = "C#")]
  CSharp,
  #[strum(to_string = "JavaScript")]
  JavaScript,
  #[strum(to_string = "PHP")]
  Php,
}

impl Language {
  /// Accepts the four recognized language names, case-insensitively.
  pub fn parse(name: &str) -> Result<Self, Error> {
    match name.to_lowercase().as_str() {
      "python" => Ok(Self::Python),
      "c#" | "csharp" => Ok(Self::CSharp),
      "javascript" | "js" => Ok(Self::JavaScript),
      "php" => Ok(Self::Php),
      _ => Err(Error::UnsupportedLanguage(name.to_string())),
    }
  }

  #[must_use]
  pub const fn extension(self) -> &'static str {
    match self {
      Self::Python => "pyw",
      Self::CSharp => "cs",
      Self::JavaScript => "js",
      Self::Php => "php",
    }
  }

  /// Render a complete runnable program that issues `request` and prints the
  /// response status code and body text.
  #[must_use]
  pub fn render(self, request: &BoundRequest) -> String {
    match self {
      Self::Python => python::render(request),
      Self::CSharp => csharp::render(request),
      Self::JavaScript => javascript::render(request),
      Self::Php => php::render(request),
    }
  }
}

/// `?a=1&b=2` suffix for targets that inline the query into the URL. Values
/// are spliced as-is; the tool never percent-encodes.
fn query_suffix(request: &BoundRequest) -> String {
  if request.query.is_empty() {
    return String::new();
  }

  let joined = request
    .query
    .iter()
    .map(|(name, value)| format!("{name}={value}"))
    .collect::<Vec<_>>()
    .join("&");
  format!("?{joined}")
}
