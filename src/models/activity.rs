// ============================================================================
// ACTIVITY - Recently viewed subjects and the per-portal activity log
// ============================================================================

use serde::{Deserialize, Serialize};
use crate::models::Subject;

pub const RECENT_VIEWS_CAP: usize = 3;
pub const ACTIVITY_LOG_CAP: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentView {
    pub title: String,
    pub code: String,
    #[serde(default)]
    pub year_level: Option<u32>,
}

impl From<&Subject> for RecentView {
    fn from(subject: &Subject) -> Self {
        Self {
            title: subject.title.clone(),
            code: subject.code.clone(),
            year_level: subject.year_level,
        }
    }
}

/// Most-recent-first, unique by code, at most three entries
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentViews {
    entries: Vec<RecentView>,
}

impl RecentViews {
    /// Rebuilds from persisted data, re-applying dedup and cap
    pub fn from_entries(entries: Vec<RecentView>) -> Self {
        let mut views = Self::default();
        for entry in entries.into_iter().rev() {
            views.push(entry);
        }
        views
    }

    pub fn push(&mut self, view: RecentView) {
        self.entries.retain(|existing| existing.code != view.code);
        self.entries.insert(0, view);
        self.entries.truncate(RECENT_VIEWS_CAP);
    }

    pub fn entries(&self) -> &[RecentView] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub action: String,
    /// RFC 3339
    pub timestamp: String,
}

/// Informational log, newest first, capped at fifty entries
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityLog {
    entries: Vec<ActivityLogEntry>,
}

impl ActivityLog {
    pub fn from_entries(mut entries: Vec<ActivityLogEntry>) -> Self {
        entries.truncate(ACTIVITY_LOG_CAP);
        Self { entries }
    }

    pub fn record(&mut self, action: impl Into<String>, timestamp: impl Into<String>) {
        self.entries.insert(
            0,
            ActivityLogEntry {
                action: action.into(),
                timestamp: timestamp.into(),
            },
        );
        self.entries.truncate(ACTIVITY_LOG_CAP);
    }

    pub fn entries(&self) -> &[ActivityLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
