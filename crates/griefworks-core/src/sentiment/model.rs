use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Mood classification returned by the sentiment analysis.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Numb,
    Confused,
}

impl Mood {
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Angry => "😡",
            Mood::Numb => "😐",
            Mood::Confused => "😕",
        }
    }

    /// All moods in the order the mood bar shows them.
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }
}

/// One tool category: a short description and the tools it offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub description: String,
    pub tools: Vec<String>,
}

/// Result of `/sentiment-analyze`, stored under `sentimentResponse`.
///
/// `titles` is keyed by the display label of each category
/// (e.g. "1. Stay Connected") and keeps the order the backend sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentResponse {
    pub mood: Mood,
    pub titles: IndexMap<String, ToolInfo>,
}

/// A borrowed view of one tool card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolCategory<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub tools: &'a [String],
}

impl SentimentResponse {
    /// Tool cards in the order the backend listed them.
    pub fn categories(&self) -> impl Iterator<Item = ToolCategory<'_>> {
        self.titles.iter().map(|(title, info)| ToolCategory {
            title: title.as_str(),
            description: info.description.as_str(),
            tools: info.tools.as_slice(),
        })
    }

    /// Finds the category offering `tool_name`.
    pub fn find_tool(&self, tool_name: &str) -> Option<ToolCategory<'_>> {
        self.categories()
            .find(|category| category.tools.iter().any(|tool| tool == tool_name))
    }
}
