//! Mood analysis domain module.

mod model;

pub use model::{Mood, SentimentResponse, ToolCategory, ToolInfo};
