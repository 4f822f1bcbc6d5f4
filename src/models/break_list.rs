//! Editable list of break slots.
//!
//! Mirrors how a form holds breaks: it always starts with one empty slot,
//! new slots get a fresh id, edits happen in place and the last slot can
//! never be removed.

use crate::errors::{AppError, AppResult};
use crate::models::break_interval::BreakInterval;
use crate::models::time_of_day::TimeOfDay;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakList {
    breaks: Vec<BreakInterval>,
    next_id: u32,
}

impl Default for BreakList {
    fn default() -> Self {
        Self::new()
    }
}

impl BreakList {
    pub fn new() -> Self {
        Self {
            breaks: vec![BreakInterval::empty(1)],
            next_id: 2,
        }
    }

    /// A list whose slots hold `pairs` in order; the first pair fills the
    /// initial slot. No pairs leaves the single empty slot.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Option<TimeOfDay>, Option<TimeOfDay>)>,
    {
        let mut list = Self::new();
        for (i, (start, end)) in pairs.into_iter().enumerate() {
            if i == 0 {
                list.breaks[0].start = start;
                list.breaks[0].end = end;
            } else {
                list.push(start, end);
            }
        }
        list
    }

    /// Append an empty slot and return its id.
    pub fn add(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.breaks.push(BreakInterval::empty(id));
        id
    }

    /// Append a slot already holding the given endpoints.
    pub fn push(&mut self, start: Option<TimeOfDay>, end: Option<TimeOfDay>) -> u32 {
        let id = self.add();
        // the slot was just pushed
        if let Some(b) = self.breaks.last_mut() {
            b.start = start;
            b.end = end;
        }
        id
    }

    pub fn set_start(&mut self, id: u32, start: Option<TimeOfDay>) -> AppResult<()> {
        self.get_mut(id)?.start = start;
        Ok(())
    }

    pub fn set_end(&mut self, id: u32, end: Option<TimeOfDay>) -> AppResult<()> {
        self.get_mut(id)?.end = end;
        Ok(())
    }

    pub fn remove(&mut self, id: u32) -> AppResult<BreakInterval> {
        let pos = self
            .breaks
            .iter()
            .position(|b| b.id == id)
            .ok_or(AppError::UnknownBreak(id))?;

        if self.breaks.len() == 1 {
            return Err(AppError::LastBreak);
        }

        Ok(self.breaks.remove(pos))
    }

    pub fn get(&self, id: u32) -> Option<&BreakInterval> {
        self.breaks.iter().find(|b| b.id == id)
    }

    fn get_mut(&mut self, id: u32) -> AppResult<&mut BreakInterval> {
        self.breaks
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(AppError::UnknownBreak(id))
    }

    /// First slot with neither endpoint set, if any.
    pub fn first_empty(&self) -> Option<u32> {
        self.breaks
            .iter()
            .find(|b| b.start.is_none() && b.end.is_none())
            .map(|b| b.id)
    }

    pub fn len(&self) -> usize {
        self.breaks.len()
    }

    /// Always false: a list keeps at least one slot, `remove` refuses to
    /// drop the last one.
    pub fn is_empty(&self) -> bool {
        self.breaks.is_empty()
    }

    pub fn to_vec(&self) -> Vec<BreakInterval> {
        self.breaks.clone()
    }
}
