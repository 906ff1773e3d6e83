use std::sync::Arc;

use griefworks_core::api::GriefApi;
use griefworks_core::retry::RetryPolicy;
use griefworks_infrastructure::SessionStore;

use crate::daily_schedule::DailyScheduleFlow;
use crate::grief_guide::GriefGuideFlow;
use crate::mood_analysis::MoodAnalysisFlow;

/// The three pages wired to one session store and one backend client.
pub struct GriefWorks {
    store: SessionStore,
    mood: MoodAnalysisFlow,
    schedule: DailyScheduleFlow,
    guide: GriefGuideFlow,
}

impl GriefWorks {
    pub fn new(store: SessionStore, api: Arc<dyn GriefApi>, policy: RetryPolicy) -> Self {
        Self {
            mood: MoodAnalysisFlow::new(store.clone(), Arc::clone(&api), policy),
            schedule: DailyScheduleFlow::new(store.clone(), Arc::clone(&api), policy),
            guide: GriefGuideFlow::new(store.clone(), api, policy),
            store,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn mood(&self) -> &MoodAnalysisFlow {
        &self.mood
    }

    pub fn schedule(&self) -> &DailyScheduleFlow {
        &self.schedule
    }

    pub fn guide(&self) -> &GriefGuideFlow {
        &self.guide
    }

    /// Forgets everything stored for this session.
    pub fn reset(&self) {
        self.store.clear_all();
        tracing::info!("Session cleared");
    }
}
