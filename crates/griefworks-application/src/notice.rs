//! User-facing notices.
//!
//! Flow results are turned into one of these at the page boundary; no
//! flow error travels further than that.

use griefworks_core::error::{GriefError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Which page raised the notice. Wording differs per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    MoodAnalysis,
    DailySchedule,
    GriefGuide,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    fn new(title: &str, description: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            severity,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Notice for a finished flow invocation.
    pub fn for_outcome<T>(kind: FlowKind, outcome: &Result<T>) -> Self {
        match outcome {
            Ok(_) => Self::success(kind),
            Err(err) => Self::from_error(kind, err),
        }
    }

    pub fn success(kind: FlowKind) -> Self {
        match kind {
            FlowKind::MoodAnalysis => Self::new(
                "Analysis Complete",
                "Your emotional state has been analyzed. You can now explore grief support tools.",
                Severity::Success,
            ),
            FlowKind::DailySchedule => Self::new(
                "Schedule Generated",
                "Your personalized daily schedule is ready.",
                Severity::Success,
            ),
            FlowKind::GriefGuide => Self::new(
                "Content Generated",
                "Your personalized grief support content is ready.",
                Severity::Success,
            ),
        }
    }

    pub fn from_error(kind: FlowKind, err: &GriefError) -> Self {
        match err {
            GriefError::Validation(message) => {
                Self::new("Please fill in all fields", message.clone(), Severity::Error)
            }
            GriefError::MissingData(message) => {
                Self::new("Missing Required Data", message.clone(), Severity::Error)
            }
            GriefError::InProgress => Self::new("Processing", processing_text(kind), Severity::Info),
            other => {
                let text = match other {
                    GriefError::Contract(message) => message.clone(),
                    _ => other.to_string(),
                };
                let description = match text {
                    text if text.trim().is_empty() => fallback_text(kind).to_string(),
                    text => text,
                };
                let title = match kind {
                    FlowKind::MoodAnalysis => "Analysis Failed",
                    FlowKind::DailySchedule | FlowKind::GriefGuide => "Generation Failed",
                };
                Self::new(title, description, Severity::Error)
            }
        }
    }
}

fn processing_text(kind: FlowKind) -> &'static str {
    match kind {
        FlowKind::MoodAnalysis => "Please wait while we analyze your input.",
        FlowKind::DailySchedule => "Please wait while we generate your schedule.",
        FlowKind::GriefGuide => "Please wait while we generate your personalized content.",
    }
}

fn fallback_text(kind: FlowKind) -> &'static str {
    match kind {
        FlowKind::MoodAnalysis => "Unable to analyze your input. Please try again.",
        FlowKind::DailySchedule => "Unable to generate schedule. Please try again.",
        FlowKind::GriefGuide => "Unable to generate content. Please try again.",
    }
}
