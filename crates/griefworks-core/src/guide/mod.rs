//! Personalized grief guide domain module.
//!
//! - `tool`: the fixed tool-title table and the user's tool selection
//! - `content`: generated content and the request that produces it

mod content;
mod tool;

pub use content::{Essay, PersonalizedContentRequest, PersonalizedContentResponse, SongRecommendation};
pub use tool::{ToolSelection, ToolTitle};
