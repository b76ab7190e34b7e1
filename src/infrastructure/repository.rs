//! Log storage

use crate::domain::{EntryDraft, LogEntry, ValidDraft};
use crate::error::{ImpactLogError, Result};
use crate::infrastructure::config::{Config, META_DIR};
use chrono::{NaiveDate, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that pins the log root
pub const ROOT_ENV: &str = "IMPACTLOG_ROOT";

const LOG_FILE: &str = "logs.json";

/// Access to stored log entries.
///
/// Listing methods return entries newest first. The date is the natural
/// key: at most one entry exists per day.
pub trait LogStore {
    /// All entries, sorted by date descending
    fn get_all(&self) -> Result<Vec<LogEntry>>;

    /// Create or replace an entry and return what was stored
    fn save(&mut self, draft: EntryDraft) -> Result<LogEntry>;

    /// Remove an entry; returns false if no entry had that id
    fn delete(&mut self, id: &str) -> Result<bool>;

    fn get_by_id(&self, id: &str) -> Result<Option<LogEntry>> {
        Ok(self.get_all()?.into_iter().find(|e| e.id == id))
    }

    fn get_by_date(&self, date: NaiveDate) -> Result<Option<LogEntry>> {
        Ok(self.get_all()?.into_iter().find(|e| e.date == date))
    }

    /// Entries with `start <= date <= end`, sorted by date descending
    fn get_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<LogEntry>> {
        let mut entries = self.get_all()?;
        entries.retain(|e| e.date >= start && e.date <= end);
        Ok(entries)
    }
}

fn sort_newest_first(entries: &mut [LogEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Apply a validated draft to `entries` in place.
///
/// With an id the matching entry is replaced; without one the entry for the
/// same day is replaced or a new one is created.
fn upsert(entries: &mut Vec<LogEntry>, draft: ValidDraft) -> Result<LogEntry> {
    let existing = match &draft.id {
        Some(id) => Some(
            entries
                .iter()
                .position(|e| &e.id == id)
                .ok_or_else(|| ImpactLogError::EntryNotFound(id.clone()))?,
        ),
        None => entries.iter().position(|e| e.date == draft.date),
    };

    if let Some(clash) = entries
        .iter()
        .enumerate()
        .find(|(i, e)| e.date == draft.date && Some(*i) != existing)
    {
        return Err(ImpactLogError::InvalidEntry(format!(
            "{} is already logged (entry {})",
            draft.date, clash.1.id
        )));
    }

    let entry = draft.into_entry(existing.map(|i| &entries[i]), Utc::now());
    match existing {
        Some(i) => entries[i] = entry.clone(),
        None => entries.push(entry.clone()),
    }
    Ok(entry)
}

/// File system store: entries live in `.impactlog/logs.json` under the root
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Find the log root: `IMPACTLOG_ROOT` first, then walk up from the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_meta_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            }
            return Err(ImpactLogError::Config(format!(
                "{} is set to '{}' but no {} directory found. \
                Run 'impactlog init' in that directory or unset {}.",
                ROOT_ENV,
                path.display(),
                META_DIR,
                ROOT_ENV
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory holding `.impactlog/` is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_meta_dir(dir))
            .map(|dir| FileSystemRepository::new(dir.to_path_buf()))
            .ok_or_else(|| ImpactLogError::NotImpactLogDirectory(start.to_path_buf()))
    }

    fn has_meta_dir(path: &Path) -> bool {
        path.join(META_DIR).is_dir()
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_meta_dir(&self.root)
    }

    /// Create the `.impactlog` directory; fails if it already exists
    pub fn initialize(&self) -> Result<()> {
        let meta_dir = self.root.join(META_DIR);

        if meta_dir.exists() {
            return Err(ImpactLogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&meta_dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn log_path(&self) -> PathBuf {
        self.root.join(META_DIR).join(LOG_FILE)
    }

    /// Read the log file; a missing file is an empty log
    fn read_entries(&self) -> Result<Vec<LogEntry>> {
        let path = self.log_path();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(ImpactLogError::LoadFailed(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&contents)
            .map_err(|e| ImpactLogError::LoadFailed(format!("{}: {}", path.display(), e)))
    }

    /// Write the log file via a temp file and rename
    fn write_entries(&self, entries: &[LogEntry]) -> Result<()> {
        let path = self.log_path();
        let save_failed = |e: &dyn std::fmt::Display| {
            ImpactLogError::SaveFailed(format!("{}: {}", path.display(), e))
        };

        let contents = serde_json::to_string_pretty(entries).map_err(|e| save_failed(&e))?;

        let tmp_path = path.with_file_name(format!("{}.tmp-{}", LOG_FILE, std::process::id()));
        fs::write(&tmp_path, contents).map_err(|e| save_failed(&e))?;

        if let Err(e) = replace_file(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(save_failed(&e));
        }

        log::info!("saved {} entries to {}", entries.len(), path.display());
        Ok(())
    }
}

fn replace_file(from: &Path, to: &Path) -> std::io::Result<()> {
    if cfg!(windows) && to.exists() {
        fs::remove_file(to)?;
    }
    fs::rename(from, to)
}

impl LogStore for FileSystemRepository {
    fn get_all(&self) -> Result<Vec<LogEntry>> {
        let mut entries = self.read_entries()?;
        sort_newest_first(&mut entries);
        Ok(entries)
    }

    fn save(&mut self, draft: EntryDraft) -> Result<LogEntry> {
        let draft = draft.validate()?;
        let mut entries = self.read_entries()?;
        let saved = upsert(&mut entries, draft)?;
        sort_newest_first(&mut entries);
        self.write_entries(&entries)?;
        Ok(saved)
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let mut entries = self.read_entries()?;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Ok(false);
        }
        self.write_entries(&entries)?;
        Ok(true)
    }
}

/// In-memory store for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryLogStore {
    entries: Vec<LogEntry>,
}

impl MemoryLogStore {
    pub fn new() -> Self {
        MemoryLogStore::default()
    }
}

impl LogStore for MemoryLogStore {
    fn get_all(&self) -> Result<Vec<LogEntry>> {
        Ok(self.entries.clone())
    }

    fn save(&mut self, draft: EntryDraft) -> Result<LogEntry> {
        let saved = upsert(&mut self.entries, draft.validate()?)?;
        sort_newest_first(&mut self.entries);
        Ok(saved)
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        Ok(self.entries.len() != before)
    }
}
