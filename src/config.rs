use crate::autocorrect::DiffFunction;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub paragraphs_path: Option<PathBuf>,
    pub words_path: Option<PathBuf>,
    pub diff_function: DiffFunction,
    pub limit: i64,
    pub autocorrect: bool,
    pub enable_multiplayer: bool,
    pub log_results: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paragraphs_path: None,
            words_path: None,
            diff_function: DiffFunction::Feline,
            limit: 2,
            autocorrect: false,
            enable_multiplayer: false,
            log_results: false,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "cats") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("cats_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        match fs::read(&self.path) {
            Ok(bytes) => match serde_json::from_slice::<Config>(&bytes) {
                Ok(cfg) => return cfg,
                Err(e) => log::warn!(
                    "ignoring unreadable config {}: {e}",
                    self.path.display()
                ),
            },
            Err(_) => log::debug!("no config at {}, using defaults", self.path.display()),
        }
        Config::default()
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}
