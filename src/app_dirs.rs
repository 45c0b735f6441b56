use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    /// Default solve history: `$HOME/.local/state/cubestat/history.csv`,
    /// or the platform data dir when `HOME` is unset.
    pub fn history_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("cubestat");
            Some(state_dir.join("history.csv"))
        } else {
            ProjectDirs::from("", "", "cubestat")
                .map(|proj_dirs| proj_dirs.data_local_dir().join("history.csv"))
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "cubestat").map(|pd| pd.config_dir().join("config.json"))
    }
}
