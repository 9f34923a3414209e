//! Score history - persist recent scores to .resume-score-history.json

use crate::config::CONFIG_FILENAME;
use crate::AnalysisResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const HISTORY_FILENAME: &str = ".resume-score-history.json";
pub const MAX_ENTRIES: usize = 10;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct HistoryFile {
    /// Newest first
    #[serde(default)]
    pub entries: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Creation time in milliseconds, base-36
    pub id: String,
    pub score: u8,
    /// RFC 3339 timestamp
    pub date: String,
    pub word_count: usize,
}

/// Find project root (directory containing the history file, a config file, or .git)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut dir = if start.is_file() {
        start.parent()?
    } else {
        start
    };

    loop {
        if dir.join(HISTORY_FILENAME).exists()
            || dir.join(CONFIG_FILENAME).exists()
            || dir.join(".git").exists()
        {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}

/// Load history from project root. Missing or corrupt files yield an empty history.
pub fn load_history(project_root: &Path) -> HistoryFile {
    let path = project_root.join(HISTORY_FILENAME);
    let Ok(content) = fs::read_to_string(&path) else {
        return HistoryFile::default();
    };
    match serde_json::from_str::<HistoryFile>(&content) {
        Ok(history) => history,
        Err(e) => {
            log::warn!("ignoring unreadable history {}: {}", path.display(), e);
            HistoryFile::default()
        }
    }
}

/// Save history to project root
pub fn save_history(project_root: &Path, history: &HistoryFile) -> std::io::Result<()> {
    let path = project_root.join(HISTORY_FILENAME);
    let content = serde_json::to_string_pretty(history).map_err(std::io::Error::other)?;
    fs::write(path, content)
}

/// Remove the history file. A missing file is not an error.
pub fn clear_history(project_root: &Path) -> std::io::Result<()> {
    match fs::remove_file(project_root.join(HISTORY_FILENAME)) {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

/// Render a non-negative integer in base 36 (0-9, a-z)
pub fn base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// Prepend an entry stamped at `now` and keep only the newest entries
pub fn add_entry_at(history: &mut HistoryFile, score: u8, word_count: usize, now: DateTime<Utc>) {
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    history.entries.insert(
        0,
        HistoryEntry {
            id: base36(millis),
            score,
            date: now.to_rfc3339(),
            word_count,
        },
    );
    history.entries.truncate(MAX_ENTRIES);
}

pub fn add_entry(history: &mut HistoryFile, score: u8, word_count: usize) {
    add_entry_at(history, score, word_count, Utc::now());
}

/// Score of the most recent entry
pub fn previous_score(history: &HistoryFile) -> Option<u8> {
    history.entries.first().map(|e| e.score)
}

/// Load, append and save in one step; returns the score that was newest before this one.
/// Blank-input results are not recorded.
pub fn record_analysis(project_root: &Path, result: &AnalysisResult) -> std::io::Result<Option<u8>> {
    let mut history = load_history(project_root);
    let previous = previous_score(&history);
    if result.is_empty() {
        return Ok(previous);
    }
    add_entry(&mut history, result.total_score, result.word_count);
    save_history(project_root, &history)?;
    Ok(previous)
}

/// Format delta for console: "[was 82, down 4]" or "[was 82, up 2]" or ""
pub fn format_delta(previous: Option<u8>, current: u8) -> String {
    let Some(prev) = previous else {
        return String::new();
    };
    if prev == current {
        return format!(" [unchanged at {}]", current);
    }
    let diff = current as i16 - prev as i16;
    if diff > 0 {
        format!(" [was {}, up {}]", prev, diff)
    } else {
        format!(" [was {}, down {}]", prev, -diff)
    }
}
