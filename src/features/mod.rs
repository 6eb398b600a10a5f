//! Feature workflows

pub mod summarize;

pub use summarize::{summarize, summarize_with_profile};
