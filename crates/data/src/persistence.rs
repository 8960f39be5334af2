use crate::load::load_json;
use anyhow::{bail, Context};
use cardpattern_core::{GameState, RngState, SessionSnapshot};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedSession {
    pub version: u32,
    /// Seed of the session's rng, reused when the session is resumed.
    pub seed: u64,
    pub snapshot: SessionSnapshot,
}

impl SavedSession {
    pub fn capture(state: &GameState) -> Self {
        Self {
            version: SNAPSHOT_SCHEMA_VERSION,
            seed: state.rng_seed(),
            snapshot: state.snapshot(),
        }
    }

    pub fn into_state(self) -> anyhow::Result<GameState> {
        let level = self.snapshot.level_name.clone();
        GameState::restore(self.snapshot, RngState::from_seed(self.seed))
            .with_context(|| format!("restore session for level {level:?}"))
    }
}

pub fn save_snapshot(path: &Path, state: &GameState) -> anyhow::Result<()> {
    let payload = SavedSession::capture(state);
    let body = serde_json::to_string_pretty(&payload).context("serialize session")?;
    fs::write(path, body).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), level = %state.level_name(), "session saved");
    Ok(())
}

pub fn load_snapshot(path: &Path) -> anyhow::Result<SavedSession> {
    let payload: SavedSession = load_json(path)?;
    if payload.version != SNAPSHOT_SCHEMA_VERSION {
        bail!(
            "unsupported save version {} in {} (expected {})",
            payload.version,
            path.display(),
            SNAPSHOT_SCHEMA_VERSION
        );
    }
    Ok(payload)
}

pub fn resume_session(path: &Path) -> anyhow::Result<GameState> {
    load_snapshot(path)?.into_state()
}
