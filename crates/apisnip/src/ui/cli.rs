use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "apisnip")]
#[command(author, version, about = "OpenAPI/Swagger to HTTP request snippet generator")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from a specification URL
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate HTTP request snippets from a specification URL
  Generate(GenerateCommand),
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all endpoints the specification declares, in document order
  Endpoints {
    /// URL of the OpenAPI 3 / Swagger 2 document (JSON or YAML)
    #[arg(short, long, value_name = "URL")]
    url: String,
  },
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// URL of the OpenAPI 3 / Swagger 2 document (JSON or YAML)
  #[arg(short, long, value_name = "URL")]
  pub url: String,

  /// Output language: python, c#, javascript or php
  #[arg(short, long, value_name = "NAME")]
  pub language: String,

  /// Directory the generated scripts are written to
  #[arg(short, long, value_name = "DIR", default_value = ".")]
  pub output: PathBuf,

  /// Write one file per endpoint instead of a single combined script
  #[arg(long, default_value_t = false)]
  pub separate: bool,

  /// Generate only these endpoints (comma-separated operation ids)
  #[arg(long, value_name = "IDS", value_delimiter = ',')]
  pub only: Option<Vec<String>>,

  /// Parameter value as NAME=VALUE, repeatable. A body value is spliced
  /// verbatim into the generated code and must already be a valid
  /// expression in the output language
  #[arg(short, long = "param", value_name = "NAME=VALUE")]
  pub params: Vec<String>,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}
