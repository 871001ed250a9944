//! Score and categorize business ideas.
//!
//! Ideas are drafted, validated and appended to an in-memory [`store::IdeaStore`]
//! for the lifetime of a single [`session::Session`]. Each idea carries RICE
//! inputs plus a Kano and a MoSCoW tag; [`scoring`] turns the RICE inputs into
//! a score for display.

pub mod config;
pub mod models;
pub mod render;
pub mod repl;
pub mod scoring;
pub mod session;
pub mod store;
pub mod validation;
