//! Application layer: the three page flows and the notices they raise.
//!
//! Each flow checks its preconditions, runs its remote call through a
//! retrying [`Orchestrator`](griefworks_core::retry::Orchestrator), and
//! writes the result to the session store only once the call succeeded.

pub mod daily_schedule;
pub mod grief_guide;
pub mod grief_works;
pub mod mood_analysis;
pub mod notice;
pub mod page;

pub use daily_schedule::{DailyScheduleFlow, ScheduleView};
pub use grief_guide::{GriefGuideFlow, GuideView};
pub use grief_works::GriefWorks;
pub use mood_analysis::{MoodAnalysisFlow, MoodView};
pub use notice::{FlowKind, Notice, Severity};
pub use page::{PageMount, PageState};
