use censor_core::{Error, Result};
use std::path::{Path, PathBuf};

/// Read a document as UTF-8
pub async fn load_document(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        Error::Other(anyhow::anyhow!(
            "Failed to read file {}: {}",
            path.display(),
            e
        ))
    })
}

/// Output file name: the input's stem plus `extension`
pub fn censored_name(path: &Path, extension: &str) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "document".to_string());
    format!("{}.{}", stem, extension)
}

/// Write redacted text to `output_dir/name`, creating the directory if needed
pub async fn write_censored(output_dir: &Path, name: &str, text: &str) -> Result<PathBuf> {
    tokio::fs::create_dir_all(output_dir).await?;

    let path = output_dir.join(name);
    tokio::fs::write(&path, text).await.map_err(|e| {
        Error::Other(anyhow::anyhow!(
            "Failed to write file {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(path)
}
