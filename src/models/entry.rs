use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::idea::Idea;

/// An accepted idea as held by the store.
///
/// `id` stays fixed for the life of the entry, unlike its position, which
/// shifts whenever an earlier entry is removed.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IdeaEntry {
    pub id: Uuid,
    pub idea: Idea,
    pub added_at: DateTime<Utc>,
}
