//! File system watcher for watch mode

use crate::ingest::is_supported;
use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

const DEBOUNCE_MS: u64 = 300;

/// Watches a resume file or directory and emits changed resume paths
pub struct ResumeWatcher {
    _watcher: RecommendedWatcher,
    receiver: Receiver<notify::Result<notify::Event>>,
    extensions: Vec<String>,
    /// Set when watching a single file; other files in its directory are ignored
    only_file: Option<OsString>,
}

fn is_create_or_modify(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Create(_) | EventKind::Modify(_))
}

impl ResumeWatcher {
    /// Start watching the given path (file or directory)
    pub fn watch(path: &Path, extensions: Vec<String>) -> notify::Result<Self> {
        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default().with_poll_interval(Duration::from_millis(DEBOUNCE_MS)),
        )?;

        let mut only_file = None;
        if path.is_dir() {
            watcher.watch(path, RecursiveMode::Recursive)?;
        } else {
            // Editors often replace files on save, so watch the parent directory
            let parent = match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p,
                _ => Path::new("."),
            };
            watcher.watch(parent, RecursiveMode::NonRecursive)?;
            only_file = path.file_name().map(|n| n.to_os_string());
        }

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
            extensions,
            only_file,
        })
    }

    /// Check if the path is a resume file we care about
    pub fn is_resume_file(&self, p: &Path) -> bool {
        if let Some(ref name) = self.only_file {
            if p.file_name() != Some(name.as_os_str()) {
                return false;
            }
        }
        let hidden = p
            .file_name()
            .map(|n| n.to_string_lossy().starts_with('.'))
            .unwrap_or(true);
        if hidden || p.components().any(|c| c.as_os_str() == ".git") {
            return false;
        }
        is_supported(p, &self.extensions)
    }

    /// Collect resume paths from an event
    fn paths_from_event(&self, event: &notify::Event) -> Vec<PathBuf> {
        if !is_create_or_modify(&event.kind) {
            return vec![];
        }
        event
            .paths
            .iter()
            .filter(|p| self.is_resume_file(p))
            .cloned()
            .collect()
    }

    /// Wait for the next batch of changes (debounced). Blocks until at least one change, then drains for DEBOUNCE_MS.
    pub fn next_changes(&self) -> Vec<PathBuf> {
        let mut all = std::collections::BTreeSet::new();

        match self.receiver.recv_timeout(Duration::from_secs(3600)) {
            Ok(Ok(event)) => all.extend(self.paths_from_event(&event)),
            Ok(Err(e)) => {
                log::warn!("watch error: {}", e);
                return vec![];
            }
            Err(_) => return vec![],
        }

        // Debounce: collect further events for a short time
        std::thread::sleep(Duration::from_millis(DEBOUNCE_MS));
        while let Ok(ev) = self.receiver.try_recv() {
            if let Ok(event) = ev {
                all.extend(self.paths_from_event(&event));
            }
        }

        all.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::default_extensions;
    use notify::event::{CreateKind, ModifyKind, RemoveKind};

    fn dir_watcher() -> (tempfile::TempDir, ResumeWatcher) {
        let dir = tempfile::TempDir::new().unwrap();
        let watcher = ResumeWatcher::watch(dir.path(), default_extensions()).unwrap();
        (dir, watcher)
    }

    #[test]
    fn test_is_resume_file_supported_types() {
        let (_dir, watcher) = dir_watcher();
        assert!(watcher.is_resume_file(Path::new("resume.txt")));
        assert!(watcher.is_resume_file(Path::new("cv/jane.md")));
        assert!(watcher.is_resume_file(Path::new("cv/jane.PDF")));
    }

    #[test]
    fn test_is_resume_file_other_types() {
        let (_dir, watcher) = dir_watcher();
        assert!(!watcher.is_resume_file(Path::new("resume.docx")));
        assert!(!watcher.is_resume_file(Path::new("notes.json")));
        assert!(!watcher.is_resume_file(Path::new("")));
    }

    #[test]
    fn test_is_resume_file_hidden_excluded() {
        let (_dir, watcher) = dir_watcher();
        assert!(!watcher.is_resume_file(Path::new(".resume-score-history.json")));
        assert!(!watcher.is_resume_file(Path::new("cv/.draft.txt")));
        assert!(!watcher.is_resume_file(Path::new(".git/COMMIT_EDITMSG.txt")));
    }

    #[test]
    fn test_is_create_or_modify() {
        assert!(is_create_or_modify(&EventKind::Create(CreateKind::File)));
        assert!(is_create_or_modify(&EventKind::Modify(ModifyKind::Data(
            notify::event::DataChange::Content
        ))));
        assert!(!is_create_or_modify(&EventKind::Remove(RemoveKind::File)));
    }

    #[test]
    fn test_paths_from_event_filters_resume_files() {
        let (_dir, watcher) = dir_watcher();

        let event = notify::Event {
            kind: EventKind::Create(CreateKind::File),
            paths: vec![
                PathBuf::from("resumes/jane.txt"),
                PathBuf::from("resumes/photo.png"),
                PathBuf::from("resumes/john.md"),
            ],
            attrs: Default::default(),
        };

        let paths = watcher.paths_from_event(&event);
        assert_eq!(paths.len(), 2);
        assert!(paths.contains(&PathBuf::from("resumes/jane.txt")));
        assert!(paths.contains(&PathBuf::from("resumes/john.md")));

        // Remove event should return empty
        let remove_event = notify::Event {
            kind: EventKind::Remove(RemoveKind::File),
            paths: vec![PathBuf::from("resumes/jane.txt")],
            attrs: Default::default(),
        };
        assert!(watcher.paths_from_event(&remove_event).is_empty());
    }

    #[test]
    fn test_watch_single_file_ignores_siblings() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("resume.txt");
        std::fs::write(&file, "Experience").unwrap();

        let watcher = ResumeWatcher::watch(&file, default_extensions()).unwrap();
        assert!(watcher.is_resume_file(&file));
        assert!(!watcher.is_resume_file(&dir.path().join("other.txt")));
    }

    #[test]
    fn test_custom_extensions() {
        let dir = tempfile::TempDir::new().unwrap();
        let watcher = ResumeWatcher::watch(dir.path(), vec!["rst".to_string()]).unwrap();
        assert!(watcher.is_resume_file(Path::new("cv.rst")));
        assert!(!watcher.is_resume_file(Path::new("cv.txt")));
    }
}
