use serde::{Deserialize, Serialize};

use super::tool::ToolTitle;
use crate::inputs::UserInputs;

const YOUTUBE_WATCH: &str = "youtube.com/watch?v=";
const YOUTUBE_SHORT: &str = "youtu.be/";

/// Body of `/personalized-content`: the submission plus the chosen tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalizedContentRequest {
    #[serde(flatten)]
    pub inputs: UserInputs,
    pub tool_title: ToolTitle,
    pub tool_description: String,
    pub tool_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRecommendation {
    pub title: String,
    pub url: String,
    pub reason: String,
}

impl SongRecommendation {
    /// Extracts the YouTube video id from a watch or short link.
    pub fn youtube_video_id(&self) -> Option<&str> {
        let id = if let Some((_, rest)) = self.url.split_once(YOUTUBE_WATCH) {
            rest.split('&').next()
        } else if let Some((_, rest)) = self.url.split_once(YOUTUBE_SHORT) {
            rest.split('?').next()
        } else {
            None
        }?;

        (!id.is_empty()).then_some(id)
    }

    pub fn youtube_embed_url(&self) -> Option<String> {
        self.youtube_video_id().map(|id| {
            format!("https://www.youtube.com/embed/{id}?rel=0&modestbranding=1&controls=1")
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Essay {
    pub quote: String,
    pub welcome_to_grief_works: String,
    pub grief_is_hard_work: String,
    pub about_your_grief: String,
    pub heal_and_grow: String,
}

impl Essay {
    /// Headed sections in reading order (the quote is shown separately).
    pub fn sections(&self) -> [(&'static str, &str); 4] {
        [
            ("Welcome to Grief Works", self.welcome_to_grief_works.as_str()),
            ("Grief is Hard Work", self.grief_is_hard_work.as_str()),
            ("About Your Grief", self.about_your_grief.as_str()),
            ("Healing and Growing", self.heal_and_grow.as_str()),
        ]
    }
}

/// Result of `/personalized-content`, stored under `personalizedContentResponse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalizedContentResponse {
    pub motivation_cards: Vec<String>,
    pub song_recommendation: SongRecommendation,
    pub essay: Essay,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{CauseOfLoss, Relationship};

    fn song(url: &str) -> SongRecommendation {
        SongRecommendation {
            title: "Hallelujah".to_string(),
            url: url.to_string(),
            reason: "Gentle".to_string(),
        }
    }

    #[test]
    fn test_embed_url_from_watch_link() {
        let song = song("https://www.youtube.com/watch?v=abc123&t=42");
        assert_eq!(
            song.youtube_embed_url().as_deref(),
            Some("https://www.youtube.com/embed/abc123?rel=0&modestbranding=1&controls=1")
        );
    }

    #[test]
    fn test_embed_url_from_short_link() {
        assert_eq!(song("https://youtu.be/xyz789?si=share").youtube_video_id(), Some("xyz789"));
    }

    #[test]
    fn test_embed_url_for_other_hosts() {
        assert!(song("https://example.com/song.mp3").youtube_embed_url().is_none());
        assert!(song("").youtube_embed_url().is_none());
    }

    #[test]
    fn test_request_is_flat_on_the_wire() {
        let request = PersonalizedContentRequest {
            inputs: UserInputs::new("I miss him", Relationship::Parent, CauseOfLoss::Illness),
            tool_title: ToolTitle::Mindfulness,
            tool_description: "Be present".to_string(),
            tool_name: "Breathing".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["user_thoughts"], "I miss him");
        assert_eq!(json["relationship"], "Parent");
        assert_eq!(json["tool_title"], "Mindfulness");
        assert_eq!(json["tool_name"], "Breathing");
        assert!(json.get("inputs").is_none());
    }
}
