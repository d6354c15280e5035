use std::path::PathBuf;

/// Failure modes of the snippet pipeline. Each propagates unchanged to the
/// shell, which presents it and stops the current batch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("fetching spec from {url}: HTTP {status}")]
  Fetch { url: String, status: u16 },

  #[error("fetching spec: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("parsing spec: {0}")]
  Parse(String),

  #[error("unsupported output language '{0}'")]
  UnsupportedLanguage(String),

  #[error("writing {path}: {source}")]
  Filesystem {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}
