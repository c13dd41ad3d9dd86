//! Benchmark configuration.
//!
//! Read from the TOML file named by the first command-line argument; every
//! field falls back to its default when missing.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Workload settings shared by every strategy under test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchConfig {
    /// Buffer capacity for each run.
    #[serde(default = "default_capacity")]
    pub capacity: i64,

    /// Appends per run.
    #[serde(default = "default_iterations")]
    pub iterations: u64,

    /// Peek both ends whenever the append counter is a multiple of this.
    #[serde(default = "default_peek_every")]
    pub peek_every: u64,

    /// Timed runs per strategy; the mean is reported.
    #[serde(default = "default_runs")]
    pub runs: u32,
}

fn default_capacity() -> i64 {
    10
}

fn default_iterations() -> u64 {
    900_000
}

fn default_peek_every() -> u64 {
    100
}

fn default_runs() -> u32 {
    100
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            iterations: default_iterations(),
            peek_every: default_peek_every(),
            runs: default_runs(),
        }
    }
}

impl BenchConfig {
    /// Loads configuration from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                let config: BenchConfig = toml::from_str(&content)?;
                tracing::debug!(path = %path.display(), "configuration loaded");
                config
            }
            None => BenchConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.peek_every == 0 {
            anyhow::bail!("peekEvery must be at least 1");
        }
        if self.runs == 0 {
            anyhow::bail!("runs must be at least 1");
        }
        Ok(())
    }
}
