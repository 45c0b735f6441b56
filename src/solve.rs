use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Seconds added to a solve carrying a +2 penalty
pub const PLUS_TWO_SECS: f64 = 2.0;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Penalty {
    #[default]
    None,
    PlusTwo,
    Dnf,
}

/// One completed attempt, as recorded in the history
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SolveRecord {
    pub time: f64,
    #[serde(default)]
    pub penalty: Penalty,
    pub timestamp: Option<DateTime<Local>>,
    pub scramble: Option<String>,
    pub comment: Option<String>,
}

impl SolveRecord {
    pub fn new(time: f64, penalty: Penalty, timestamp: Option<DateTime<Local>>) -> Self {
        Self {
            time,
            penalty,
            timestamp,
            scramble: None,
            comment: None,
        }
    }

    pub fn with_scramble(mut self, scramble: impl Into<String>) -> Self {
        self.scramble = Some(scramble.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn is_dnf(&self) -> bool {
        self.penalty == Penalty::Dnf
    }

    /// Raw time plus any +2. DNFs still report their raw time here; callers
    /// that average must filter them out first.
    pub fn penalized_time(&self) -> f64 {
        penalized_time(self.time, self.penalty)
    }
}

pub fn penalized_time(time: f64, penalty: Penalty) -> f64 {
    match penalty {
        Penalty::PlusTwo => time + PLUS_TWO_SECS,
        Penalty::None | Penalty::Dnf => time,
    }
}

/// Orders solves best-first with every DNF after every finished solve.
/// DNFs compare equal to each other so a stable sort keeps their input order.
pub fn compare_dnf_last(a: &SolveRecord, b: &SolveRecord) -> Ordering {
    match (a.is_dnf(), b.is_dnf()) {
        (false, false) => a.penalized_time().total_cmp(&b.penalized_time()),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

/// Stable chronological sort. Solves without a timestamp come first.
pub fn sort_chronologically(solves: &mut [&SolveRecord]) {
    solves.sort_by_key(|s| s.timestamp);
}
