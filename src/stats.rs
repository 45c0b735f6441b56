use crate::error::StatsError;
use crate::solve::{compare_dnf_last, sort_chronologically, Penalty, SolveRecord};
use crate::util::mean;
use itertools::Itertools;
use tracing::{debug, trace};

/// Result of an average-of-N query.
///
/// `accounted_solves` is newest first. `trimmed_indices` points into
/// `accounted_solves` and marks the best and worst results that were left out
/// of the mean.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatedAverage {
    pub label: String,
    pub average: Option<f64>,
    pub accounted_solves: Vec<SolveRecord>,
    pub trimmed_indices: Vec<usize>,
    pub total_penalty: Penalty,
}

impl CalculatedAverage {
    pub fn is_dnf(&self) -> bool {
        self.total_penalty == Penalty::Dnf
    }

    pub fn is_trimmed(&self, idx: usize) -> bool {
        self.trimmed_indices.contains(&idx)
    }

    pub fn trimmed_solves(&self) -> impl Iterator<Item = &SolveRecord> + '_ {
        self.trimmed_indices
            .iter()
            .filter_map(|&idx| self.accounted_solves.get(idx))
    }

    fn from_window(label: String, window: &[&SolveRecord], trimmed: &TrimmedWindow) -> Self {
        let last = window.len() - 1;
        let trimmed_indices = trimmed
            .trimmed_positions
            .iter()
            .map(|&pos| last - pos)
            .sorted()
            .collect();

        Self {
            label,
            average: trimmed.mean,
            accounted_solves: window.iter().rev().map(|&s| s.clone()).collect(),
            trimmed_indices,
            total_penalty: if trimmed.mean.is_some() {
                Penalty::None
            } else {
                Penalty::Dnf
            },
        }
    }
}

/// Number of results dropped from each end of a window of `period` solves.
pub fn trim_count(period: usize) -> usize {
    match period {
        p if p >= 100 => 5,
        p if p >= 3 => 1,
        // trimming a pair would leave an empty mean (0 / 0), so average both
        _ => 0,
    }
}

/// A window after sorting with DNFs last and trimming both ends.
#[derive(Debug)]
pub(crate) struct TrimmedWindow {
    /// Positions in the input window that were trimmed, best ones first.
    pub trimmed_positions: Vec<usize>,
    /// Mean of the inner results, or `None` if a DNF survived trimming.
    pub mean: Option<f64>,
}

pub(crate) fn trim_window(window: &[&SolveRecord], trim: usize) -> TrimmedWindow {
    let order: Vec<usize> = (0..window.len())
        .sorted_by(|&a, &b| compare_dnf_last(window[a], window[b]))
        .collect();

    let trim = trim.min(order.len() / 2);
    let (head, rest) = order.split_at(trim);
    let (inner, tail) = rest.split_at(rest.len() - trim);

    let inner_mean = if inner.iter().any(|&pos| window[pos].is_dnf()) {
        None
    } else {
        let times: Vec<f64> = inner.iter().map(|&pos| window[pos].penalized_time()).collect();
        mean(&times)
    };

    TrimmedWindow {
        trimmed_positions: head.iter().chain(tail).copied().collect(),
        mean: inner_mean,
    }
}

fn check_period(period: usize) -> Result<(), StatsError> {
    if period <= 1 {
        return Err(StatsError::InvalidPeriod(period));
    }
    Ok(())
}

/// Statistics over one snapshot of solve history.
#[derive(Debug, Clone)]
pub struct Stats<'a> {
    by_date: Vec<&'a SolveRecord>,
    /// Finished solves only, fastest first.
    by_time: Vec<&'a SolveRecord>,
}

impl<'a> Stats<'a> {
    pub fn new(solves: &'a [SolveRecord]) -> Self {
        let mut by_date: Vec<&SolveRecord> = solves.iter().collect();
        sort_chronologically(&mut by_date);

        let by_time = by_date
            .iter()
            .copied()
            .filter(|s| !s.is_dnf())
            .sorted_by(|a, b| compare_dnf_last(a, b))
            .collect();

        Self { by_date, by_time }
    }

    pub fn solves_by_date(&self) -> &[&'a SolveRecord] {
        &self.by_date
    }

    pub fn number_of_solves(&self) -> usize {
        self.by_date.len()
    }

    /// Fastest finished solve. Ties go to the earlier solve.
    pub fn min(&self) -> Option<&'a SolveRecord> {
        self.by_time.first().copied()
    }

    /// Mean of all finished solves. `None` when there is nothing finished.
    pub fn session_mean(&self) -> Option<f64> {
        let times: Vec<f64> = self.by_time.iter().map(|s| s.penalized_time()).collect();
        mean(&times)
    }

    /// Average of the most recent `period` solves.
    pub fn current_average_of(
        &self,
        period: usize,
    ) -> Result<Option<CalculatedAverage>, StatsError> {
        check_period(period)?;
        if self.by_date.len() < period {
            return Ok(None);
        }

        let window = &self.by_date[self.by_date.len() - period..];
        let trimmed = trim_window(window, trim_count(period));
        debug!(period, average = ?trimmed.mean, "current average");

        Ok(Some(CalculatedAverage::from_window(
            format!("Current ao{period}"),
            window,
            &trimmed,
        )))
    }

    /// Lowest average over every run of `period` consecutive solves.
    ///
    /// Windows where a DNF survives trimming can't win. If no window
    /// qualifies, the returned average is empty and marked DNF.
    pub fn best_moving_average_of(
        &self,
        period: usize,
    ) -> Result<Option<CalculatedAverage>, StatsError> {
        check_period(period)?;
        if self.by_date.len() < period {
            return Ok(None);
        }

        let trim = trim_count(period);
        let mut best: Option<(f64, usize, TrimmedWindow)> = None;

        for (start, window) in self.by_date.windows(period).enumerate() {
            let trimmed = trim_window(window, trim);
            let Some(avg) = trimmed.mean else {
                trace!(period, start, "window disqualified by DNF");
                continue;
            };
            if best.as_ref().map_or(true, |(lowest, _, _)| avg < *lowest) {
                best = Some((avg, start, trimmed));
            }
        }

        let label = format!("Best ao{period}");
        let result = match best {
            Some((avg, start, trimmed)) => {
                debug!(period, start, average = avg, "best average");
                let window = &self.by_date[start..start + period];
                CalculatedAverage::from_window(label, window, &trimmed)
            }
            None => {
                debug!(period, "no window qualifies for a best average");
                CalculatedAverage {
                    label,
                    average: None,
                    accounted_solves: vec![],
                    trimmed_indices: vec![],
                    total_penalty: Penalty::Dnf,
                }
            }
        };

        Ok(Some(result))
    }
}
