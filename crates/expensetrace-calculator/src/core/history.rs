//! Commit log
//!
//! Every amount the engine commits is appended here by the hosting
//! surface, newest last. The log is bounded; the transaction form only
//! ever shows the recent tail, and export is line-oriented JSON.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::format_amount;

/// One committed amount with the display text at the moment of commit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitEntry {
    /// Display text when the commit happened
    pub display: String,
    /// The committed amount
    pub amount: f64,
}

impl CommitEntry {
    /// Returns a one-line rendering, e.g. `"18 = 18"`
    #[must_use]
    pub fn line(&self) -> String {
        format!("{} = {}", self.display, format_amount(self.amount))
    }
}

/// Bounded log of committed amounts
#[derive(Debug, Clone, Default)]
pub struct CommitLog {
    entries: VecDeque<CommitEntry>,
}

impl CommitLog {
    /// Maximum number of retained entries
    pub const MAX_ENTRIES: usize = 100;

    /// Creates an empty log
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Appends a commit, dropping the oldest entry when full
    pub fn record(&mut self, display: &str, amount: f64) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(CommitEntry {
            display: display.to_string(),
            amount,
        });
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the log is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&CommitEntry> {
        self.entries.back()
    }

    /// Returns an entry by index, oldest first
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CommitEntry> {
        self.entries.get(index)
    }

    /// Iterates oldest first
    pub fn iter(&self) -> impl Iterator<Item = &CommitEntry> {
        self.entries.iter()
    }

    /// Iterates newest first
    pub fn iter_rev(&self) -> impl Iterator<Item = &CommitEntry> {
        self.entries.iter().rev()
    }

    /// Clears the log
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Serializes the entries to JSON, oldest first
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CommitEntry tests =====

    #[test]
    fn test_entry_line() {
        let entry = CommitEntry {
            display: "18".into(),
            amount: 18.0,
        };
        assert_eq!(entry.line(), "18 = 18");
    }

    #[test]
    fn test_entry_line_after_backspace_edit() {
        let entry = CommitEntry {
            display: "1".into(),
            amount: 1.0,
        };
        assert_eq!(entry.line(), "1 = 1");
    }

    #[test]
    fn test_entry_serde_round_trip() {
        let entry = CommitEntry {
            display: "2.5".into(),
            amount: 2.5,
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: CommitEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    // ===== CommitLog tests =====

    #[test]
    fn test_log_new_is_empty() {
        let log = CommitLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.last().is_none());
    }

    #[test]
    fn test_log_record_and_last() {
        let mut log = CommitLog::new();
        log.record("9", 9.0);
        log.record("18", 18.0);
        assert_eq!(log.len(), 2);
        assert_eq!(log.last().unwrap().amount, 18.0);
    }

    #[test]
    fn test_log_get() {
        let mut log = CommitLog::new();
        log.record("1", 1.0);
        log.record("2", 2.0);
        assert_eq!(log.get(0).unwrap().amount, 1.0);
        assert!(log.get(5).is_none());
    }

    #[test]
    fn test_log_iter_order() {
        let mut log = CommitLog::new();
        log.record("1", 1.0);
        log.record("2", 2.0);
        log.record("3", 3.0);
        let oldest_first: Vec<f64> = log.iter().map(|e| e.amount).collect();
        assert_eq!(oldest_first, vec![1.0, 2.0, 3.0]);
        let newest_first: Vec<f64> = log.iter_rev().map(|e| e.amount).collect();
        assert_eq!(newest_first, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_log_bounded() {
        let mut log = CommitLog::new();
        for i in 0..(CommitLog::MAX_ENTRIES + 5) {
            log.record("x", i as f64);
        }
        assert_eq!(log.len(), CommitLog::MAX_ENTRIES);
        assert_eq!(log.get(0).unwrap().amount, 5.0);
    }

    #[test]
    fn test_log_clear() {
        let mut log = CommitLog::new();
        log.record("1", 1.0);
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_log_to_json() {
        let mut log = CommitLog::new();
        log.record("9", 9.0);
        let json = log.to_json().unwrap();
        assert!(json.contains("\"display\":\"9\""));
        assert!(json.contains("\"amount\":9.0"));
    }
}
