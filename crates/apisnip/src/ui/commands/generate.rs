use std::path::{Path, PathBuf};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generate::{Language, generate_script, save_script},
  session::Session,
  spec::fetch_spec,
  ui::{Colors, GenerateCommand},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub url: String,
  pub language: Language,
  pub output: PathBuf,
  pub separate: bool,
  pub only: Option<Vec<String>>,
  pub params: Vec<(String, String)>,
  pub quiet: bool,
}

impl GenerateConfig {
  /// Language and parameter parsing happen here, before anything touches
  /// the network or the filesystem.
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      url,
      language,
      output,
      separate,
      only,
      params,
      quiet,
    } = command;

    let language = Language::parse(&language)?;
    let params = parse_params(params)?;

    Ok(Self {
      url,
      language,
      output,
      separate,
      only,
      params,
      quiet,
    })
  }
}

fn parse_params(entries: Vec<String>) -> anyhow::Result<Vec<(String, String)>> {
  entries
    .into_iter()
    .map(|entry| {
      entry
        .split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| anyhow::anyhow!("Invalid param format '{entry}': expected NAME=VALUE (e.g., id=42)"))
    })
    .collect()
}

/// File name and content for every script this run writes. Separate mode
/// yields one file per endpoint named by display id; combined mode yields a
/// single `generated_script.<ext>` holding every selected snippet.
fn render_selected(session: &Session, language: Language, separate: bool) -> Vec<(String, String)> {
  if separate {
    return session
      .selected()
      .map(|endpoint| {
        let script = generate_script(&session.document, endpoint, &session.values_for(endpoint), language);
        (format!("{}.{}", endpoint.display_id(), language.extension()), script)
      })
      .collect();
  }

  let snippets: Vec<String> = session
    .selected()
    .map(|endpoint| generate_script(&session.document, endpoint, &session.values_for(endpoint), language))
    .collect();
  vec![(
    format!("generated_script.{}", language.extension()),
    snippets.join("\n\n"),
  )]
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn log_fetching(&self) {
    self.info(
      &format!("Fetching spec from: {}", self.config.url)
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self, count: usize) {
    self.info(
      &format!("Generating {} {} snippet(s)...", count, self.config.language)
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_written(&self, path: &Path) {
    self.info(
      &format!("Wrote: {}", path.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self, count: usize) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        format!("Successfully generated {count} {} snippet(s)", self.config.language).with(self.colors.success())
      );
    }
  }
}

/// Fetch, select, bind, render, write. Fails fast: the first error aborts
/// the batch and nothing further is written.
pub async fn generate_scripts(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_fetching();
  let document = fetch_spec(&config.url).await?;

  let mut session = Session::new(document);
  if let Some(only) = &config.only {
    let unknown = session.select(only);
    if !unknown.is_empty() {
      anyhow::bail!("unknown endpoint id(s): {}", unknown.join(", "));
    }
  }
  for (name, value) in &config.params {
    session.set_param(name, value);
  }

  let selected = session.selected().count();
  logger.log_generating(selected);
  if selected == 0 {
    logger.info("Specification declares no endpoints; nothing to write");
    return Ok(());
  }

  for (file_name, script) in render_selected(&session, config.language, config.separate) {
    let path = config.output.join(file_name);
    save_script(&script, &path).await?;
    logger.log_written(&path);
  }

  logger.log_success(selected);
  Ok(())
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn session() -> Session {
    Session::new(json!({
      "host": "api.example.com",
      "paths": {
        "/pets": { "get": { "operationId": "listPets" } },
        "/pets/{id}": { "get": { "operationId": "getPet",
          "parameters": [ { "name": "id", "in": "path" } ] } }
      }
    }))
  }

  #[test]
  fn test_parse_params_empty() {
    assert!(parse_params(vec![]).unwrap().is_empty());
  }

  #[test]
  fn test_parse_params_single_entry() {
    let params = parse_params(vec!["id=42".to_string()]).unwrap();
    assert_eq!(params, vec![("id".to_string(), "42".to_string())]);
  }

  #[test]
  fn test_parse_params_keeps_equals_in_value() {
    let params = parse_params(vec!["filter=a=b".to_string()]).unwrap();
    assert_eq!(params, vec![("filter".to_string(), "a=b".to_string())]);
  }

  #[test]
  fn test_parse_params_invalid_format() {
    let err = parse_params(vec!["id".to_string()]).unwrap_err();
    assert!(err.to_string().contains("Invalid param format"));
  }

  #[test]
  fn test_separate_mode_names_files_by_display_id() {
    let outputs = render_selected(&session(), Language::Python, true);
    let names: Vec<&str> = outputs.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["listPets.pyw", "getPet.pyw"]);
  }

  #[test]
  fn test_combined_mode_writes_exactly_one_file() {
    let outputs = render_selected(&session(), Language::Php, false);
    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0].0, "generated_script.php");
  }

  #[test]
  fn test_combined_file_holds_every_snippet() {
    let outputs = render_selected(&session(), Language::JavaScript, false);
    let combined = &outputs[0].1;
    assert_eq!(combined.matches("const url").count(), 2);
    assert!(combined.contains("https://api.example.com/pets\""));
    // The unset path value binds to "", so the template collapses.
    assert!(combined.contains("https://api.example.com/pets/\""));
  }

  #[tokio::test]
  async fn test_outputs_land_in_the_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let session = session();

    for (file_name, script) in render_selected(&session, Language::CSharp, true) {
      save_script(&script, &dir.path().join(file_name)).await.unwrap();
    }

    assert!(dir.path().join("listPets.cs").is_file());
    assert!(dir.path().join("getPet.cs").is_file());
  }
}
