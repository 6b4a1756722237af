//! Session-local Analysis History
//!
//! Holds past analyses newest first, the way the web front end prepends each
//! new result. The history is an ordinary owned value: callers keep it for
//! the length of a session and pass it where it is needed.

use crate::analysis::{Analysis, AnalysisId};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisHistory {
    entries: VecDeque<Analysis>,
    /// Maximum number of entries kept; `None` is unbounded
    limit: Option<usize>,
}

impl AnalysisHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History that keeps at most `limit` entries (a limit of 0 is treated as 1)
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit.max(1)),
            limit: Some(limit.max(1)),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record an analysis as the newest entry, evicting the oldest if full
    pub fn record(&mut self, analysis: Analysis) -> &Analysis {
        tracing::debug!(analysis_id = %analysis.id, "Recording analysis in history");
        self.entries.push_front(analysis);

        if let Some(limit) = self.limit {
            while self.entries.len() > limit {
                if let Some(evicted) = self.entries.pop_back() {
                    tracing::debug!(analysis_id = %evicted.id, "Evicted oldest analysis");
                }
            }
        }

        &self.entries[0]
    }

    pub fn latest(&self) -> Option<&Analysis> {
        self.entries.front()
    }

    /// Newest analysis and the one recorded before it
    pub fn latest_pair(&self) -> Option<(&Analysis, &Analysis)> {
        Some((self.entries.front()?, self.entries.get(1)?))
    }

    pub fn get(&self, id: &AnalysisId) -> Option<&Analysis> {
        self.entries.iter().find(|a| &a.id == id)
    }

    /// Entries, newest first
    pub fn iter(&self) -> impl Iterator<Item = &Analysis> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
