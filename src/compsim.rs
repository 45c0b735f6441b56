//! Competition simulation: solves are taken in consecutive groups of five and
//! each group's trimmed mean is checked against a target average.

use crate::stats::{trim_window, Stats};
use serde::{Deserialize, Serialize};

pub const GROUP_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompSimSummary {
    pub target: f64,
    pub averages: usize,
    pub reached: usize,
}

pub fn number_of_averages(stats: &Stats<'_>) -> usize {
    stats.number_of_solves() / GROUP_SIZE
}

/// Trimmed mean of every complete group, oldest first. `None` marks a DNF
/// average.
pub fn group_averages(stats: &Stats<'_>) -> Vec<Option<f64>> {
    stats
        .solves_by_date()
        .chunks_exact(GROUP_SIZE)
        .map(|group| trim_window(group, 1).mean)
        .collect()
}

/// Number of groups whose average is at or under `target`.
pub fn reached_targets(stats: &Stats<'_>, target: f64) -> usize {
    group_averages(stats)
        .into_iter()
        .flatten()
        .filter(|&avg| avg <= target)
        .count()
}

pub fn summarize(stats: &Stats<'_>, target: f64) -> CompSimSummary {
    CompSimSummary {
        target,
        averages: number_of_averages(stats),
        reached: reached_targets(stats, target),
    }
}
