use crate::compsim;
use crate::error::StatsError;
use crate::format::{
    format_average, format_solve, format_solve_time, share_text, ShareOptions, ShareSubject,
};
use crate::solve::{Penalty, SolveRecord};
use crate::stats::{CalculatedAverage, Stats};
use crate::util::pluralize;

const MISSING: &str = "-";

#[derive(Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ShareKind {
    Current,
    Best,
    Session,
}

fn average_or_missing(avg: Option<CalculatedAverage>) -> String {
    avg.as_ref().map_or_else(|| MISSING.to_string(), format_average)
}

/// Plain-text session overview, one statistic per line.
pub fn summary(
    stats: &Stats<'_>,
    periods: &[usize],
    compsim_target: Option<f64>,
) -> Result<String, StatsError> {
    let mut lines = vec![
        format!("Solves: {}", stats.number_of_solves()),
        format!(
            "Best single: {}",
            stats.min().map_or_else(|| MISSING.to_string(), format_solve)
        ),
        format!(
            "Session mean: {}",
            stats
                .session_mean()
                .map_or_else(|| MISSING.to_string(), |m| format_solve_time(m, Penalty::None))
        ),
    ];

    for &period in periods {
        let current = average_or_missing(stats.current_average_of(period)?);
        let best = average_or_missing(stats.best_moving_average_of(period)?);
        lines.push(format!("ao{period}: current {current}, best {best}"));
    }

    if let Some(target) = compsim_target {
        let sim = compsim::summarize(stats, target);
        lines.push(format!(
            "Comp sim: {} of {} under {}",
            sim.reached,
            pluralize(sim.averages, "average"),
            format_solve_time(target, Penalty::None)
        ));
    }

    Ok(lines.join("\n"))
}

/// Share text for the requested subject, or `None` when there are not yet
/// enough solves for it.
pub fn share(
    stats: &Stats<'_>,
    kind: ShareKind,
    period: usize,
    options: &ShareOptions,
) -> Result<Option<String>, StatsError> {
    let text = match kind {
        ShareKind::Current => stats
            .current_average_of(period)?
            .map(|avg| share_text(&ShareSubject::Average(&avg), options)),
        ShareKind::Best => stats
            .best_moving_average_of(period)?
            .map(|avg| share_text(&ShareSubject::Average(&avg), options)),
        ShareKind::Session => {
            let ordered: Vec<SolveRecord> = stats
                .solves_by_date()
                .iter()
                .map(|&s| s.clone())
                .collect();
            (!ordered.is_empty()).then(|| share_text(&ShareSubject::Solves(&ordered), options))
        }
    };
    Ok(text)
}
