//! A single interactive session: the draft being edited, the accepted ideas,
//! and the pending validation error.
//!
//! A presentation layer drives a [`Session`] with edits and the `submit` and
//! `delete` commands, then reads [`Session::rows`] to display the list. All
//! mutation goes through `&mut self`, so one owner serializes every change.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Draft, Idea, Kano, Moscow, Rice, RiceField};
use crate::scoring::{rice_score, RiceScore};
use crate::store::IdeaStore;
use crate::validation::{validate_submission, ValidationError};

/// One displayable line of the idea list.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Row {
    pub position: usize,
    pub id: Uuid,
    pub name: String,
    pub score: RiceScore,
    pub kano: Kano,
    pub moscow: Moscow,
    pub rice: Rice,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct Session {
    store: IdeaStore,
    draft: Draft,
    error: Option<ValidationError>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn store(&self) -> &IdeaStore {
        &self.store
    }

    /// The error from the last rejected submission, until the next edit or
    /// successful submission.
    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    // ============================================================
    // Draft editing
    // ============================================================

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        self.error = None;
    }

    pub fn set_rice(&mut self, field: RiceField, value: Option<f64>) {
        self.draft.rice.set(field, value);
        self.error = None;
    }

    pub fn set_kano(&mut self, kano: Kano) {
        self.draft.kano = kano;
        self.error = None;
    }

    pub fn set_moscow(&mut self, moscow: Moscow) {
        self.draft.moscow = moscow;
        self.error = None;
    }

    // ============================================================
    // Commands
    // ============================================================

    /// Validate the draft and append it to the store.
    ///
    /// On success the draft is reset for the next idea. On failure the draft
    /// is kept as-is and the error stays visible through [`Session::error`].
    pub fn submit(&mut self) -> Result<Uuid, ValidationError> {
        match validate_submission(self.draft.clone()) {
            Ok(idea) => {
                let id = self.store.append(idea);
                self.draft = Draft::after_submit();
                self.error = None;
                Ok(id)
            }
            Err(e) => {
                tracing::warn!(error = %e, "rejected submission");
                self.error = Some(e);
                Err(e)
            }
        }
    }

    /// Remove the idea at `position`. Out-of-range positions are a no-op.
    pub fn delete(&mut self, position: usize) -> Option<Idea> {
        self.store.remove_at(position)
    }

    /// Remove the idea with the given id.
    pub fn delete_by_id(&mut self, id: Uuid) -> Option<Idea> {
        self.store.remove(id)
    }

    /// The current list, each idea paired with its score.
    pub fn rows(&self) -> Vec<Row> {
        self.store
            .list()
            .iter()
            .enumerate()
            .map(|(position, entry)| Row {
                position,
                id: entry.id,
                name: entry.idea.name().to_string(),
                score: rice_score(entry.idea.rice()),
                kano: entry.idea.kano(),
                moscow: entry.idea.moscow(),
                rice: *entry.idea.rice(),
                added_at: entry.added_at,
            })
            .collect()
    }
}
