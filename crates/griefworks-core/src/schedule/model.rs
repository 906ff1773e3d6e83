use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// A single entry of the generated schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleActivity {
    pub time_frame: String,
    pub activity: String,
    /// The backend may send `null` here; it is kept as empty text.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Part of the day a group of activities belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum DayPeriod {
    Morning,
    Noon,
    Afternoon,
    Evening,
    Night,
}

/// Result of `/daily-schedule`, stored under `scheduleResponse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub morning: Vec<ScheduleActivity>,
    pub noon: Vec<ScheduleActivity>,
    pub afternoon: Vec<ScheduleActivity>,
    pub evening: Vec<ScheduleActivity>,
    pub night: Vec<ScheduleActivity>,
}

impl ScheduleResponse {
    pub fn activities(&self, period: DayPeriod) -> &[ScheduleActivity] {
        match period {
            DayPeriod::Morning => &self.morning,
            DayPeriod::Noon => &self.noon,
            DayPeriod::Afternoon => &self.afternoon,
            DayPeriod::Evening => &self.evening,
            DayPeriod::Night => &self.night,
        }
    }

    /// All five periods in display order.
    pub fn periods(&self) -> Vec<(DayPeriod, &[ScheduleActivity])> {
        DayPeriod::iter()
            .map(|period| (period, self.activities(period)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        DayPeriod::iter().all(|period| self.activities(period).is_empty())
    }
}
