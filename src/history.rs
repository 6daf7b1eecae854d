//! Flat-file persistence for journal entries and the chat transcript.
//!
//! Each log is a pretty-printed JSON array in the data directory. Files are
//! rewritten whole on append; callers serialize access (the HTTP layer holds
//! the store behind a mutex).

use crate::error::{Result, ServiceError};
use crate::sentiment::Mood;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// One saved journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// The journal text as written.
    pub text: String,
    /// Mood assigned to the entry.
    pub mood: Mood,
    /// RFC 3339 timestamp set by the service layer.
    pub timestamp: String,
}

/// One message in the chat transcript, from either side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRecord {
    /// Message text.
    pub message: String,
    /// `true` for the user's message, `false` for the bot reply.
    pub is_user: bool,
    /// RFC 3339 timestamp set by the service layer.
    pub timestamp: String,
}

/// JSON-array log files under a data directory.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    journal_path: PathBuf,
    chat_path: PathBuf,
}

impl HistoryStore {
    /// Create a store rooted at `data_dir`. The directory is created lazily
    /// on first write.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            journal_path: data_dir.join("journal.json"),
            chat_path: data_dir.join("chat.json"),
        }
    }

    /// Append one journal entry.
    pub fn append_journal(&self, entry: JournalEntry) -> Result<()> {
        let mut entries: Vec<JournalEntry> = read_array(&self.journal_path)?;
        entries.push(entry);
        write_array(&self.journal_path, &entries)
    }

    /// All saved journal entries, oldest first. A missing log is empty.
    pub fn journal_entries(&self) -> Result<Vec<JournalEntry>> {
        read_array(&self.journal_path)
    }

    /// Append a user message and the bot reply to the chat transcript.
    pub fn append_chat_exchange(&self, user: ChatRecord, bot: ChatRecord) -> Result<()> {
        let mut records: Vec<ChatRecord> = read_array(&self.chat_path)?;
        records.push(user);
        records.push(bot);
        write_array(&self.chat_path, &records)
    }

    /// The full chat transcript, oldest first. A missing log is empty.
    pub fn chat_history(&self) -> Result<Vec<ChatRecord>> {
        read_array(&self.chat_path)
    }

    /// Delete the chat transcript. Removing an already-missing log is not an
    /// error.
    pub fn clear_chat_history(&self) -> Result<()> {
        match std::fs::remove_file(&self.chat_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ServiceError::Storage(format!(
                "cannot remove {}: {e}",
                self.chat_path.display()
            ))),
        }
    }
}

/// Read a JSON array log. Missing file yields an empty vec; a corrupt file
/// is a storage error rather than silent data loss.
fn read_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(ServiceError::Storage(format!(
                "cannot read {}: {e}",
                path.display()
            )));
        }
    };

    serde_json::from_slice(&bytes)
        .map_err(|e| ServiceError::Storage(format!("cannot parse {}: {e}", path.display())))
}

/// Rewrite a JSON array log, creating the parent directory as needed.
fn write_array<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ServiceError::Storage(format!("cannot create {}: {e}", parent.display()))
        })?;
    }

    let json = serde_json::to_string_pretty(items)
        .map_err(|e| ServiceError::Storage(format!("cannot serialize log: {e}")))?;

    std::fs::write(path, json)
        .map_err(|e| ServiceError::Storage(format!("cannot write {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    fn entry(text: &str, mood: Mood) -> JournalEntry {
        JournalEntry {
            text: text.to_owned(),
            mood,
            timestamp: "2025-01-01T00:00:00Z".to_owned(),
        }
    }

    #[test]
    fn missing_logs_read_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());
        assert!(store.journal_entries().unwrap().is_empty());
        assert!(store.chat_history().unwrap().is_empty());
    }

    #[test]
    fn journal_appends_accumulate_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());

        store.append_journal(entry("first", Mood::Happy)).unwrap();
        store.append_journal(entry("second", Mood::Anxious)).unwrap();

        let entries = store.journal_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "first");
        assert_eq!(entries[1].mood, Mood::Anxious);
    }

    #[test]
    fn chat_exchange_stores_both_sides() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());

        store
            .append_chat_exchange(
                ChatRecord {
                    message: "hello".to_owned(),
                    is_user: true,
                    timestamp: "2025-01-01T00:00:00Z".to_owned(),
                },
                ChatRecord {
                    message: "Hi there!".to_owned(),
                    is_user: false,
                    timestamp: "2025-01-01T00:00:00Z".to_owned(),
                },
            )
            .unwrap();

        let history = store.chat_history().unwrap();
        assert_eq!(history.len(), 2);
        assert!(history[0].is_user);
        assert!(!history[1].is_user);
    }

    #[test]
    fn clear_chat_history_removes_the_log() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());

        store
            .append_chat_exchange(
                ChatRecord {
                    message: "hi".to_owned(),
                    is_user: true,
                    timestamp: String::new(),
                },
                ChatRecord {
                    message: "hello".to_owned(),
                    is_user: false,
                    timestamp: String::new(),
                },
            )
            .unwrap();

        store.clear_chat_history().unwrap();
        assert!(store.chat_history().unwrap().is_empty());

        // Clearing again is a no-op, not an error.
        store.clear_chat_history().unwrap();
    }

    #[test]
    fn corrupt_log_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("journal.json"), "not json {{{").unwrap();

        let store = HistoryStore::new(dir.path());
        assert!(store.journal_entries().is_err());
    }

    #[test]
    fn log_file_is_a_json_array_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());
        store.append_journal(entry("note", Mood::Calm)).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("journal.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(parsed.is_array());
    }
}
