//! Runtime settings resolved from the environment.
//!
//! Artifact locations come from `HOMEWORTH_*` variables (a `.env` file is
//! honored), with `dirs`-based defaults for the model path. Everything is
//! resolved once at startup; the hot estimation path never touches the
//! environment.

use std::env;
use std::path::PathBuf;

/// Resolved locations of the engine's external artifacts.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path to the persisted model artifact.
    pub model_path: PathBuf,
    /// Optional rule table override file.
    pub rules_path: Option<PathBuf>,
    /// Optional historical listings dataset.
    pub dataset_path: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the environment.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let model_path = env::var("HOMEWORTH_MODEL")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::data_dir().join("model.json"));
        let rules_path = env::var("HOMEWORTH_RULES").ok().map(PathBuf::from);
        let dataset_path = env::var("HOMEWORTH_DATASET").ok().map(PathBuf::from);

        Self {
            model_path,
            rules_path,
            dataset_path,
        }
    }

    /// Default data directory for artifacts.
    pub fn data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("homeworth")
    }
}
