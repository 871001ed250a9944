//! Domain models for the idea scorecard.
//!
//! # Core Concepts
//!
//! - [`Draft`]: An idea under construction. Every field is freely editable and
//!   RICE inputs may be unset.
//! - [`Idea`]: An accepted idea. Only produced by
//!   [`validate_submission`](crate::validation::validate_submission), so its
//!   name is never blank.
//! - [`IdeaEntry`]: An idea as held by the store, with a stable id.
//! - [`Kano`] and [`Moscow`]: The two categorization tags every idea carries.

mod entry;
mod idea;
mod tags;

pub use entry::*;
pub use idea::*;
pub use tags::*;
