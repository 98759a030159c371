mod types;

pub use types::*;

use crate::{Error, Result};
use std::{
    env,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Config file looked up in the working directory when nothing else is named.
pub const DEFAULT_CONFIG_FILE: &str = "docquery.yaml";

/// Loads configuration from `path`, then `CONFIG_PATH`, then
/// [`DEFAULT_CONFIG_FILE`]. Only the implicit default may be missing.
pub async fn load(path: Option<&Path>) -> Result<Config> {
    let explicit = path
        .map(Path::to_path_buf)
        .or_else(|| env::var("CONFIG_PATH").ok().map(PathBuf::from));

    match explicit {
        Some(path) => load_file(&path).await,
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if tokio::fs::try_exists(&path).await? {
                load_file(&path).await
            } else {
                debug!("No {} found, using default configuration", DEFAULT_CONFIG_FILE);
                Ok(Config::default())
            }
        }
    }
}

pub async fn load_file(path: &Path) -> Result<Config> {
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await.map_err(|e| {
        Error::config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}
