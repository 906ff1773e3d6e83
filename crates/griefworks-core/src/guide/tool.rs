use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{GriefError, Result};

/// Tool category as the backend names it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum ToolTitle {
    #[serde(rename = "Stay connected")]
    #[strum(serialize = "Stay connected")]
    StayConnected,
    #[serde(rename = "Work Through Emotions")]
    #[strum(serialize = "Work Through Emotions")]
    WorkThroughEmotions,
    #[serde(rename = "Find Strength")]
    #[strum(serialize = "Find Strength")]
    FindStrength,
    Mindfulness,
    #[serde(rename = "Check In")]
    #[strum(serialize = "Check In")]
    CheckIn,
    #[serde(rename = "Get Moving")]
    #[strum(serialize = "Get Moving")]
    GetMoving,
}

impl ToolTitle {
    /// The numbered label shown on the tool card.
    pub fn display_label(&self) -> &'static str {
        match self {
            ToolTitle::StayConnected => "1. Stay Connected",
            ToolTitle::WorkThroughEmotions => "2. Work Through Emotions",
            ToolTitle::FindStrength => "3. Find Strength",
            ToolTitle::Mindfulness => "4. Mindfulness",
            ToolTitle::CheckIn => "5. Check In",
            ToolTitle::GetMoving => "6. Get Moving",
        }
    }

    /// Maps a tool card label back to the backend value.
    ///
    /// # Errors
    ///
    /// Returns `GriefError::Contract` for a label outside the fixed table.
    pub fn from_display_label(label: &str) -> Result<Self> {
        Self::iter()
            .find(|title| title.display_label() == label)
            .ok_or_else(|| GriefError::contract(format!("Invalid tool title: {label}")))
    }
}

/// What the user picked on the guide page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSelection {
    /// Display label of the category, e.g. "4. Mindfulness".
    pub title: String,
    pub description: String,
    /// The tool itself, stored as `selectedTool`.
    pub name: String,
}

impl ToolSelection {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            name: name.into(),
        }
    }

    pub fn tool_title(&self) -> Result<ToolTitle> {
        ToolTitle::from_display_label(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_table_covers_all_titles() {
        for title in ToolTitle::iter() {
            assert_eq!(ToolTitle::from_display_label(title.display_label()).unwrap(), title);
        }
    }

    #[test]
    fn test_stay_connected_keeps_backend_casing() {
        let title = ToolTitle::from_display_label("1. Stay Connected").unwrap();
        assert_eq!(title.to_string(), "Stay connected");
        assert_eq!(serde_json::to_value(title).unwrap(), "Stay connected");
    }

    #[test]
    fn test_unknown_label_is_contract_error() {
        let err = ToolTitle::from_display_label("Stay Connected").unwrap_err();
        assert!(err.is_contract());
        assert!(err.to_string().contains("Invalid tool title: Stay Connected"));
    }
}
