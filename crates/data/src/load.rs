use anyhow::{bail, Context};
use cardpattern_core::LevelConfig;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const LEVELS_DIR: &str = "levels";

pub fn load_level(path: &Path) -> anyhow::Result<LevelConfig> {
    let level: LevelConfig = load_json(path)?;
    level
        .validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), level = %level.name, "level loaded");
    Ok(level)
}

/// The given level, or the built-in default when no path is supplied. A
/// path that fails to load is an error, never a silent fallback.
pub fn load_level_or_default(path: Option<&Path>) -> anyhow::Result<LevelConfig> {
    match path {
        Some(path) => load_level(path),
        None => {
            warn!("no level supplied, using the built-in default level");
            Ok(LevelConfig::default())
        }
    }
}

/// Every `*.json` level in `dir`, ordered by file name.
pub fn load_levels(dir: &Path) -> anyhow::Result<Vec<LevelConfig>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("read {}", dir.display()))?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().map(|ext| ext == "json").unwrap_or(false))
        .collect();
    paths.sort();
    if paths.is_empty() {
        bail!("no level files in {}", dir.display());
    }
    paths.iter().map(|path| load_level(path)).collect()
}

pub fn levels_dir(assets: &Path) -> PathBuf {
    assets.join(LEVELS_DIR)
}

pub(crate) fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
