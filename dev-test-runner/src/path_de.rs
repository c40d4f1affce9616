use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;

/// Deserialize a fixture file with JSON-path context in error messages.
pub fn read_with_path<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read fixture {}", path.display()))?;
    let de = &mut serde_json::Deserializer::from_str(&src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| {
        let at = err.path().to_string();
        anyhow!("{}: at JSON path {at} → {}", path.display(), err.into_inner())
    })
}
