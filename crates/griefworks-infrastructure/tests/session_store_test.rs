use griefworks_core::guide::{Essay, PersonalizedContentResponse, SongRecommendation};
use griefworks_core::inputs::{CauseOfLoss, Relationship, UserInputs};
use griefworks_core::schedule::{ScheduleActivity, ScheduleResponse};
use griefworks_core::sentiment::{Mood, SentimentResponse, ToolInfo};
use griefworks_infrastructure::SessionStore;
use indexmap::IndexMap;

fn inputs() -> UserInputs {
    UserInputs::new("I miss him", Relationship::Parent, CauseOfLoss::Illness)
}

fn sentiment() -> SentimentResponse {
    let mut titles = IndexMap::new();
    titles.insert(
        "4. Mindfulness".to_string(),
        ToolInfo {
            description: "Stay with the present moment".to_string(),
            tools: vec!["Breathing".to_string(), "Body scan".to_string()],
        },
    );
    SentimentResponse {
        mood: Mood::Sad,
        titles,
    }
}

fn schedule() -> ScheduleResponse {
    let activity = |activity: &str| ScheduleActivity {
        time_frame: "8:00 AM - 8:30 AM".to_string(),
        activity: activity.to_string(),
        description: "Go gently".to_string(),
    };
    ScheduleResponse {
        date: None,
        morning: vec![activity("Walk")],
        noon: vec![activity("Lunch with a friend")],
        afternoon: vec![],
        evening: vec![activity("Journal")],
        night: vec![activity("Read")],
    }
}

fn content() -> PersonalizedContentResponse {
    PersonalizedContentResponse {
        motivation_cards: vec!["One step at a time".to_string()],
        song_recommendation: SongRecommendation {
            title: "Fix You".to_string(),
            url: "https://www.youtube.com/watch?v=k4V3Mo61fJM".to_string(),
            reason: "Comfort".to_string(),
        },
        essay: Essay {
            quote: "Grief is love persevering.".to_string(),
            welcome_to_grief_works: "Welcome".to_string(),
            grief_is_hard_work: "It is work".to_string(),
            about_your_grief: "Yours is unique".to_string(),
            heal_and_grow: "You will grow".to_string(),
        },
    }
}

#[test]
fn test_unset_keys_are_absent() {
    let store = SessionStore::in_memory();
    assert!(store.get_user_inputs().is_none());
    assert!(store.get_sentiment_response().is_none());
    assert!(store.get_schedule_response().is_none());
    assert!(store.get_personalized_content_response().is_none());
    assert!(store.get_selected_tool().is_none());
}

#[test]
fn test_every_record_reads_back_equal() {
    let store = SessionStore::in_memory();

    store.set_user_inputs(&inputs());
    store.set_sentiment_response(&sentiment());
    store.set_schedule_response(&schedule());
    store.set_personalized_content_response(&content());
    store.set_selected_tool("Breathing");

    assert_eq!(store.get_user_inputs(), Some(inputs()));
    assert_eq!(store.get_sentiment_response(), Some(sentiment()));
    assert_eq!(store.get_schedule_response(), Some(schedule()));
    assert_eq!(store.get_personalized_content_response(), Some(content()));
    assert_eq!(store.get_selected_tool().as_deref(), Some("Breathing"));
}

#[test]
fn test_set_overwrites() {
    let store = SessionStore::in_memory();
    store.set_user_inputs(&inputs());

    let newer = UserInputs::new("Still hard", Relationship::Sibling, CauseOfLoss::Accident);
    store.set_user_inputs(&newer);

    assert_eq!(store.get_user_inputs(), Some(newer));
}

#[test]
fn test_clear_all_removes_everything() {
    let store = SessionStore::in_memory();
    store.set_user_inputs(&inputs());
    store.set_sentiment_response(&sentiment());
    store.set_schedule_response(&schedule());
    store.set_personalized_content_response(&content());
    store.set_selected_tool("Breathing");

    store.clear_all();

    assert!(store.get_user_inputs().is_none());
    assert!(store.get_sentiment_response().is_none());
    assert!(store.get_schedule_response().is_none());
    assert!(store.get_personalized_content_response().is_none());
    assert!(store.get_selected_tool().is_none());
}

#[test]
fn test_tool_cards_keep_their_order() {
    let store = SessionStore::in_memory();
    let mut response = sentiment();
    response.titles.insert(
        "1. Stay Connected".to_string(),
        ToolInfo {
            description: "Reach out".to_string(),
            tools: vec!["Call a friend".to_string()],
        },
    );
    store.set_sentiment_response(&response);

    let restored = store.get_sentiment_response().unwrap();
    let titles: Vec<_> = restored.categories().map(|category| category.title).collect();
    assert_eq!(titles, vec!["4. Mindfulness", "1. Stay Connected"]);
}
