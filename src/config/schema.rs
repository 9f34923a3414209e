//! Config schema and deserialization

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root config structure for .resumescorerc.json
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// Minimum score threshold (exit 1 if below). Default: 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u8>,

    /// Glob patterns for files/directories to exclude from analysis
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore: Vec<String>,

    /// Input extensions to pick up when scanning directories (default: txt, text, md, markdown, pdf)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,

    /// Record scores to the history file. Default: true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<bool>,

    /// Job description used for keyword matching when --job is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_description: Option<PathBuf>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(
        mut self,
        cli_threshold: Option<u8>,
        cli_job: Option<PathBuf>,
        no_history: bool,
    ) -> Self {
        if cli_threshold.is_some() {
            self.threshold = cli_threshold;
        }
        if cli_job.is_some() {
            self.job_description = cli_job;
        }
        if no_history {
            self.history = Some(false);
        }
        self
    }

    /// Merge another config into this one (for extends)
    pub fn merge_from(&mut self, base: Config) {
        // Base values are overridden by this config's values
        if self.threshold.is_none() {
            self.threshold = base.threshold;
        }
        if self.extends.is_none() {
            self.extends = base.extends;
        }
        if self.history.is_none() {
            self.history = base.history;
        }
        if self.job_description.is_none() {
            self.job_description = base.job_description;
        }

        // Merge ignore patterns
        let mut all_ignores = base.ignore;
        all_ignores.append(&mut self.ignore);
        self.ignore = all_ignores;

        if self.extensions.is_empty() {
            self.extensions = base.extensions;
        }
    }

    pub fn history_enabled(&self) -> bool {
        self.history.unwrap_or(true)
    }

    /// Extensions to scan for, falling back to every ingestible type
    pub fn supported_extensions(&self) -> Vec<String> {
        if self.extensions.is_empty() {
            crate::ingest::default_extensions()
        } else {
            self.extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect()
        }
    }

    /// Config written by `resume-score init`
    pub fn starter(threshold: u8) -> Self {
        Self {
            threshold: Some(threshold),
            ignore: vec!["**/archive/**".to_string()],
            history: Some(true),
            ..Self::default()
        }
    }
}
