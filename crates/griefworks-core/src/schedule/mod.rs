//! Daily schedule domain module.

mod model;

pub use model::{DayPeriod, ScheduleActivity, ScheduleResponse};
