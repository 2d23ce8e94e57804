use crate::error::Result;
use chrono::{DateTime, Local};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// One finished paragraph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub date: DateTime<Local>,
    pub topics: String,
    pub elapsed_secs: f64,
    pub wpm: f64,
    pub accuracy: f64,
}

/// Append-only CSV of round results
#[derive(Debug, Clone)]
pub struct ResultsLog {
    path: PathBuf,
}

impl ResultsLog {
    /// Log in the platform data directory, or the working directory if none
    pub fn default_location() -> Self {
        let path = ProjectDirs::from("", "", "cats")
            .map(|pd| pd.data_local_dir().join("results.csv"))
            .unwrap_or_else(|| PathBuf::from("cats_results.csv"));
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

    pub fn append(&self, result: &RoundResult) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // header only when starting a fresh file
        let needs_header = !self.path.exists();

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(result)?;
        writer.flush()?;
        log::debug!("appended round result to {}", self.path.display());
        Ok(())
    }

    pub fn read_all(&self) -> Result<Vec<RoundResult>> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let rows = reader.deserialize().collect::<std::result::Result<_, _>>()?;
        Ok(rows)
    }
}
