use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use lazy_static::lazy_static;

use crate::error::OjError;
use crate::fields::model::ScoreCap;
use crate::problems::problem::Difficulty;

/// Problem score awarded per difficulty. The highest entry is the per-tier
/// maximum used to derive the field score cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemScoreTable {
    pub very_low: u64,
    pub low: u64,
    pub mid: u64,
    pub high: u64,
    pub very_high: u64,
}

impl Default for ProblemScoreTable {
    fn default() -> Self {
        ProblemScoreTable {
            very_low: 1,
            low: 2,
            mid: 3,
            high: 4,
            very_high: 5,
        }
    }
}

impl ProblemScoreTable {
    pub fn score_for(&self, difficulty: Difficulty) -> u64 {
        match difficulty {
            Difficulty::VeryLow => self.very_low,
            Difficulty::Low => self.low,
            Difficulty::Mid => self.mid,
            Difficulty::High => self.high,
            Difficulty::VeryHigh => self.very_high,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub tier_count: u64,
    pub problem_scores: ProblemScoreTable,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            tier_count: 20,
            problem_scores: ProblemScoreTable::default(),
        }
    }
}

impl ScoringConfig {
    pub fn score_cap(&self) -> ScoreCap {
        ScoreCap::from_tiers(self.problem_scores.very_high, self.tier_count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    pub sample_size: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        RecommendConfig { sample_size: 3 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub profiles_path: PathBuf,
    pub problems_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            profiles_path: PathBuf::from("data/profiles.json"),
            problems_dir: PathBuf::from("data/problems"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scoring: ScoringConfig,
    pub recommend: RecommendConfig,
    pub data: DataConfig,
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Settings, OjError> {
        Ok(toml::from_str::<Settings>(content)?)
    }
}

fn get_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os("OJREC_CONFIG") {
        return PathBuf::from(path);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut dir = PathBuf::from(home);
            dir.push("Library/Application Support/com.ojrec");
            dir.push("ojrec.toml");
            return dir;
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            let mut dir = PathBuf::from(appdata);
            dir.push("com.ojrec");
            dir.push("ojrec.toml");
            return dir;
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut dir = PathBuf::from(home);
            dir.push(".local/share/com.ojrec");
            dir.push("ojrec.toml");
            return dir;
        }
    }

    // Fallback
    PathBuf::from("ojrec.toml")
}

fn load_settings_internal() -> Settings {
    let config_path = get_config_path();

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match Settings::from_toml_str(&content) {
            Ok(settings) => {
                tracing::info!(path = ?config_path, "Loaded settings");
                settings
            }
            Err(e) => {
                tracing::warn!(path = ?config_path, error = %e, "Failed to parse settings, using defaults");
                Settings::default()
            }
        },
        Err(e) => {
            tracing::debug!(path = ?config_path, error = %e, "No settings file, using defaults");
            Settings::default()
        }
    }
}

lazy_static! {
    static ref SETTINGS: Settings = load_settings_internal();
}

/// Get the cached settings (loaded once on first access)
pub fn get_settings() -> &'static Settings {
    &SETTINGS
}
