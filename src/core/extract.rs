//! Best-effort extraction of a login time and breaks from free text.
//!
//! `TimeExtractor` is the seam an image/OCR engine plugs into: given raw
//! bytes it returns whatever time candidates it could find, possibly none.
//! The output carries no trust: it becomes a normal `CalculationInput` and
//! goes through the same validation as typed input.

use regex::Regex;
use tracing::{debug, trace};

use crate::errors::{AppError, AppResult};
use crate::models::break_list::BreakList;
use crate::models::calculation::{CalculationInput, Mode};
use crate::models::time_of_day::TimeOfDay;

/// Candidates found in a source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub login: Option<TimeOfDay>,
    pub breaks: Vec<(Option<TimeOfDay>, Option<TimeOfDay>)>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.login.is_none() && self.breaks.is_empty()
    }

    /// Build a break-list calculation input from the candidates.
    pub fn into_input(self, target_minutes: i64) -> CalculationInput {
        let list = BreakList::from_pairs(self.breaks);

        CalculationInput {
            login: self.login,
            target_minutes,
            mode: Mode::Breaks(list.to_vec()),
        }
    }
}

pub trait TimeExtractor {
    fn extract(&self, source: &[u8]) -> AppResult<Extraction>;
}

/// Scans text (for example the output of an OCR tool) for `HH:MM` values.
///
/// - `HH:MM - HH:MM` (also `–`, `to`, `HH.MM`) is a break.
/// - A time on a line mentioning login/start/in is the login time; otherwise
///   the first time not part of a range is used.
/// - A lone `HH.MM` only counts on a login line, elsewhere it is read as a
///   decimal number.
/// - Times must stand alone: `124:30` is not `24:30`.
pub struct TextExtractor {
    range: Regex,
    single: Regex,
    login_hint: Regex,
}

impl TextExtractor {
    pub fn new() -> AppResult<Self> {
        // groups: hour, separator, minute
        let time = r"([01]?\d|2[0-3])([:.])([0-5]\d)";
        let range = Regex::new(&format!(r"\b{time}\s*(?:-|–|—|to)\s*{time}\b"))
            .map_err(|e| AppError::Extract(e.to_string()))?;
        let single =
            Regex::new(&format!(r"\b{time}\b")).map_err(|e| AppError::Extract(e.to_string()))?;
        let login_hint = Regex::new(r"(?i)\b(log\s*-?\s*in|start|clock(ed)?\s*in|in\s*time)\b")
            .map_err(|e| AppError::Extract(e.to_string()))?;

        Ok(Self {
            range,
            single,
            login_hint,
        })
    }

    fn time_at(caps: &regex::Captures<'_>, h: usize, m: usize) -> Option<TimeOfDay> {
        let hour = caps.get(h)?.as_str().parse().ok()?;
        let minute = caps.get(m)?.as_str().parse().ok()?;
        TimeOfDay::new(hour, minute)
    }

    pub fn extract_text(&self, text: &str) -> Extraction {
        let mut out = Extraction::default();
        let mut hinted_login = None;
        let mut first_single = None;

        for line in text.lines() {
            let mut consumed = Vec::new();

            for caps in self.range.captures_iter(line) {
                if let Some(whole) = caps.get(0) {
                    consumed.push(whole.range());
                }
                let start = Self::time_at(&caps, 1, 3);
                let end = Self::time_at(&caps, 4, 6);
                trace!(?start, ?end, line, "break candidate");
                out.breaks.push((start, end));
            }

            for caps in self.single.captures_iter(line) {
                let Some(whole) = caps.get(0) else {
                    continue;
                };
                if consumed.iter().any(|r| r.contains(&whole.start())) {
                    continue;
                }
                let hinted = self.login_hint.is_match(line);
                let dotted = caps.get(2).is_some_and(|sep| sep.as_str() == ".");
                if dotted && !hinted {
                    continue;
                }
                let Some(t) = Self::time_at(&caps, 1, 3) else {
                    continue;
                };

                if hinted_login.is_none() && hinted {
                    hinted_login = Some(t);
                }
                if first_single.is_none() {
                    first_single = Some(t);
                }
            }
        }

        out.login = hinted_login.or(first_single);
        debug!(login = ?out.login, breaks = out.breaks.len(), "text extraction");
        out
    }
}

impl TimeExtractor for TextExtractor {
    fn extract(&self, source: &[u8]) -> AppResult<Extraction> {
        let text = String::from_utf8_lossy(source);
        Ok(self.extract_text(&text))
    }
}
