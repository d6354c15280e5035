use std::path::Path;

use crate::error::Error;

/// Plain overwrite write; parent directories are created on demand.
pub async fn save_script(text: &str, path: &Path) -> Result<(), Error> {
  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    tokio::fs::create_dir_all(parent).await.map_err(|source| Error::Filesystem {
      path: parent.to_path_buf(),
      source,
    })?;
  }

  tokio::fs::write(path, text).await.map_err(|source| Error::Filesystem {
    path: path.to_path_buf(),
    source,
  })
}
