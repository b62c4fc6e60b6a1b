use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

const MAX_RECENT_KEYWORDS: usize = 10;

/// Filter state persisted across runs in `~/.ktodo/state.json`.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub last_keyword: String,
    #[serde(default)]
    pub recent_keywords: Vec<String>,
}

impl FilterState {
    pub fn load() -> Result<FilterState> {
        Ok(Self::load_from(&Self::state_path()?))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::state_path()?)
    }

    /// A missing or unparseable state file behaves as the empty default.
    pub fn load_from(path: &Path) -> FilterState {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => FilterState::default(),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        fs::write(path, serde_json::to_string_pretty(self)?)?;

        Ok(())
    }

    /// Records the keyword as last used. Non-empty keywords not already in the
    /// recent list are pushed to the front, keeping at most 10 entries.
    pub fn record_keyword(&mut self, keyword: &str) {
        self.last_keyword = keyword.to_string();

        if keyword.trim().is_empty() || self.recent_keywords.iter().any(|k| k == keyword) {
            return;
        }

        self.recent_keywords.insert(0, keyword.to_string());
        self.recent_keywords.truncate(MAX_RECENT_KEYWORDS);
    }

    fn state_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;

        Ok(home.join(".ktodo").join("state.json"))
    }
}
