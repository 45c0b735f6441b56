use crate::solve::{Penalty, SolveRecord, PLUS_TWO_SECS};
use crate::stats::CalculatedAverage;

pub const SHARE_HEADER: &str = "Generated by cubestat.";
pub const MISSING_SCRAMBLE: &str = "No scramble recorded.";

/// Formats a duration the way timers display it: `9.87`, `1:02.34`,
/// `1:02:05.50`. A +2 solve shows the penalized time with a trailing `+`.
pub fn format_solve_time(secs: f64, penalty: Penalty) -> String {
    match penalty {
        Penalty::Dnf => "DNF".to_string(),
        Penalty::PlusTwo => format!("{}+", format_secs(secs + PLUS_TWO_SECS)),
        Penalty::None => format_secs(secs),
    }
}

fn format_secs(secs: f64) -> String {
    let centis = (secs.max(0.0) * 100.0).round() as u64;
    let hours = centis / 360_000;
    let mins = (centis / 6_000) % 60;
    let whole_secs = (centis / 100) % 60;
    let frac = centis % 100;

    if hours > 0 {
        format!("{hours}:{mins:02}:{whole_secs:02}.{frac:02}")
    } else if mins > 0 {
        format!("{mins}:{whole_secs:02}.{frac:02}")
    } else {
        format!("{whole_secs}.{frac:02}")
    }
}

pub fn format_solve(solve: &SolveRecord) -> String {
    format_solve_time(solve.time, solve.penalty)
}

/// `DNF` for a void average, otherwise the mean.
pub fn format_average(avg: &CalculatedAverage) -> String {
    match avg.average {
        Some(value) if !avg.is_dnf() => format_secs(value),
        _ => "DNF".to_string(),
    }
}

/// What to put on the clipboard.
#[derive(Debug, Clone, Copy)]
pub enum ShareSubject<'a> {
    Solve {
        solve: &'a SolveRecord,
        /// Cumulative split times of a multiphase solve
        phases: Option<&'a [f64]>,
    },
    Solves(&'a [SolveRecord]),
    Average(&'a CalculatedAverage),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareOptions {
    pub header: bool,
    pub scrambles: bool,
    pub comments: bool,
}

impl Default for ShareOptions {
    fn default() -> Self {
        Self {
            header: true,
            scrambles: true,
            comments: true,
        }
    }
}

fn solve_line(solve: &SolveRecord, time: String, options: &ShareOptions) -> String {
    if options.scrambles {
        let scramble = solve.scramble.as_deref().unwrap_or(MISSING_SCRAMBLE);
        format!("{time}:\t{scramble}")
    } else {
        time
    }
}

/// Builds the share text for a solve, a set of solves or an average.
pub fn share_text(subject: &ShareSubject<'_>, options: &ShareOptions) -> String {
    let mut lines: Vec<String> = Vec::new();
    if options.header {
        lines.push(SHARE_HEADER.to_string());
    }

    match *subject {
        ShareSubject::Solve { solve, phases } => {
            lines.push(solve_line(solve, format_solve(solve), options));

            if let Some(phases) = phases {
                lines.push(String::new());
                lines.push("Multiphase breakdown:".to_string());
                let mut prev = 0.0;
                for (idx, &phase) in phases.iter().enumerate() {
                    lines.push(format!(
                        "{}: +{} ({})",
                        idx + 1,
                        format_secs(phase - prev),
                        format_secs(phase)
                    ));
                    prev = phase;
                }
            }

            if let (true, Some(comment)) = (options.comments, solve.comment.as_deref()) {
                lines.push(String::new());
                lines.push(format!("Comment: {comment}"));
            }
        }
        ShareSubject::Solves(solves) => {
            for solve in solves {
                lines.push(solve_line(solve, format_solve(solve), options));
            }
        }
        ShareSubject::Average(avg) => {
            lines.push(format!("{}: {}", avg.label, format_average(avg)));
            lines.push(String::new());
            lines.push("Time list:".to_string());
            for (idx, solve) in avg.accounted_solves.iter().enumerate() {
                let time = if avg.is_trimmed(idx) {
                    format!("({})", format_solve(solve))
                } else {
                    format_solve(solve)
                };
                lines.push(format!("{}. {}", idx + 1, solve_line(solve, time, options)));
            }
        }
    }

    lines.join("\n")
}
