use serde::Serialize;

use crate::core::calculator::intervals::interval_duration;
use crate::models::time_of_day::TimeOfDay;

/// A single break slot. Only `id`, `start` and `end` are stored; duration and
/// completeness are derived on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakInterval {
    pub id: u32,
    pub start: Option<TimeOfDay>,
    pub end: Option<TimeOfDay>,
}

impl BreakInterval {
    pub fn empty(id: u32) -> Self {
        Self {
            id,
            start: None,
            end: None,
        }
    }

    pub fn new(id: u32, start: Option<TimeOfDay>, end: Option<TimeOfDay>) -> Self {
        Self { id, start, end }
    }

    /// Both endpoints set.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn bounds(&self) -> Option<(TimeOfDay, TimeOfDay)> {
        match (self.start, self.end) {
            (Some(s), Some(e)) => Some((s, e)),
            _ => None,
        }
    }

    pub fn duration_minutes(&self) -> i64 {
        interval_duration(self.start, self.end)
    }
}
