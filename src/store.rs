//! In-memory, insertion-ordered collection of accepted ideas.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{Idea, IdeaEntry};

/// Ordered ideas for the current session.
///
/// Positions are the current index in insertion order and shift down after a
/// removal. Each entry also has a stable [`Uuid`] for callers that need an
/// identifier that survives other removals. Duplicates are kept.
#[derive(Debug, Default)]
pub struct IdeaStore {
    entries: Vec<IdeaEntry>,
}

impl IdeaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an idea as the new last entry and return its id.
    pub fn append(&mut self, idea: Idea) -> Uuid {
        let entry = IdeaEntry {
            id: Uuid::new_v4(),
            idea,
            added_at: Utc::now(),
        };
        let id = entry.id;
        tracing::debug!(%id, position = self.entries.len(), "appended idea");
        self.entries.push(entry);
        id
    }

    /// Remove the entry at `position`.
    ///
    /// Out-of-range positions leave the store untouched and return `None`.
    pub fn remove_at(&mut self, position: usize) -> Option<Idea> {
        if position >= self.entries.len() {
            tracing::warn!(
                position,
                len = self.entries.len(),
                "ignoring removal of out-of-range position"
            );
            return None;
        }
        let entry = self.entries.remove(position);
        tracing::debug!(id = %entry.id, position, "removed idea");
        Some(entry.idea)
    }

    /// Remove the entry with the given id.
    pub fn remove(&mut self, id: Uuid) -> Option<Idea> {
        let position = self.position_of(id)?;
        self.remove_at(position)
    }

    pub fn position_of(&self, id: Uuid) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Read-only view in insertion order.
    pub fn list(&self) -> &[IdeaEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
