use strum::{EnumIter, IntoEnumIterator};

/// The fixed set of keys the session store writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum StorageKey {
    UserInputs,
    SentimentResponse,
    ScheduleResponse,
    PersonalizedContentResponse,
    SelectedTool,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::UserInputs => "userInputs",
            StorageKey::SentimentResponse => "sentimentResponse",
            StorageKey::ScheduleResponse => "scheduleResponse",
            StorageKey::PersonalizedContentResponse => "personalizedContentResponse",
            StorageKey::SelectedTool => "selectedTool",
        }
    }

    pub fn all() -> impl Iterator<Item = StorageKey> {
        Self::iter()
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
