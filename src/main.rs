use chrono::Local;
use clap::{error::ErrorKind, CommandFactory, Parser};
use cubestat::{
    config::{Config, ConfigStore, FileConfigStore},
    format::ShareOptions,
    history,
    report::{self, ShareKind},
    Penalty, SolveRecord, Stats,
};
use std::{error::Error, path::PathBuf};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const LONG_ABOUT: &str = "Reads a CSV solve history and reports best single, session mean, \
                          current and best averages of N, and comp sim results, or prints \
                          shareable text.";

/// speedcubing solve statistics from your solve history
#[derive(Parser, Debug, Clone)]
#[clap(version, about, long_about = LONG_ABOUT)]
pub struct Cli {
    /// solve history file (csv)
    #[clap(short = 'f', long)]
    file: Option<PathBuf>,

    /// average period to report, may be repeated (default: 5, 12 and 100)
    #[clap(short = 'a', long = "average")]
    averages: Vec<usize>,

    /// print share text for the current average, best average or whole session
    #[clap(long, value_enum)]
    share: Option<ShareKind>,

    /// period of the average used with --share
    #[clap(short = 'n', long, default_value_t = 5)]
    period: usize,

    /// comp sim target average in seconds
    #[clap(short = 't', long)]
    target: Option<f64>,

    /// record a solve with this time in seconds before reporting
    #[clap(long)]
    add: Option<f64>,

    /// penalty for the solve recorded with --add
    #[clap(long, value_enum, default_value_t = Penalty::None)]
    penalty: Penalty,

    /// scramble for the solve recorded with --add
    #[clap(long)]
    scramble: Option<String>,

    /// comment for the solve recorded with --add
    #[clap(long)]
    comment: Option<String>,

    /// leave the header line out of share text
    #[clap(long)]
    no_header: bool,

    /// leave scrambles out of share text
    #[clap(long)]
    no_scrambles: bool,

    /// remember --file, --average and --target as defaults
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Overlay the flags that were given on top of the stored config
    fn apply_to(&self, config: &mut Config) {
        if let Some(file) = &self.file {
            config.history_path = Some(file.clone());
        }
        if !self.averages.is_empty() {
            config.average_periods = self.averages.clone();
        }
        if self.target.is_some() {
            config.compsim_target = self.target;
        }
    }

    fn share_options(&self) -> ShareOptions {
        ShareOptions {
            header: !self.no_header,
            scrambles: !self.no_scrambles,
            comments: true,
        }
    }

    fn new_solve(&self, time: f64) -> SolveRecord {
        SolveRecord {
            time,
            penalty: self.penalty,
            timestamp: Some(Local::now()),
            scramble: self.scramble.clone(),
            comment: self.comment.clone(),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    if let Some(time) = cli.add {
        if !time.is_finite() || time < 0.0 {
            let mut cmd = Cli::command();
            cmd.error(
                ErrorKind::ValueValidation,
                "solve time must be a non-negative number of seconds",
            )
            .exit();
        }
    }

    let store = FileConfigStore::new();
    let mut config = store.load();
    cli.apply_to(&mut config);
    if cli.save_config {
        store.save(&config)?;
        tracing::info!(path = %store.path().display(), "saved config");
    }

    let path = config.resolved_history_path();
    if let Some(time) = cli.add {
        history::append(&path, &cli.new_solve(time))?;
    }

    let solves = history::load(&path)?;
    let stats = Stats::new(&solves);

    let output = match cli.share {
        Some(kind) => report::share(&stats, kind, cli.period, &cli.share_options())?
            .unwrap_or_else(|| format!("Not enough solves to share a {kind}")),
        None => report::summary(&stats, &config.average_periods, config.compsim_target)?,
    };
    println!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["cubestat"]);

        assert_eq!(cli.file, None);
        assert!(cli.averages.is_empty());
        assert_eq!(cli.share, None);
        assert_eq!(cli.period, 5);
        assert_eq!(cli.penalty, Penalty::None);
        assert!(!cli.no_header);
        assert!(!cli.save_config);
    }

    #[test]
    fn test_cli_repeated_averages() {
        let cli = Cli::parse_from(["cubestat", "-a", "5", "--average", "12"]);
        assert_eq!(cli.averages, vec![5, 12]);
    }

    #[test]
    fn test_cli_share_kinds() {
        let cli = Cli::parse_from(["cubestat", "--share", "best", "-n", "12"]);
        assert_eq!(cli.share, Some(ShareKind::Best));
        assert_eq!(cli.period, 12);

        let cli = Cli::parse_from(["cubestat", "--share", "session"]);
        assert_eq!(cli.share, Some(ShareKind::Session));
    }

    #[test]
    fn test_cli_add_with_penalty() {
        let cli = Cli::parse_from([
            "cubestat",
            "--add",
            "9.5",
            "--penalty",
            "plus-two",
            "--scramble",
            "R U",
        ]);
        let solve = cli.new_solve(9.5);
        assert_eq!(solve.penalty, Penalty::PlusTwo);
        assert_eq!(solve.penalized_time(), 11.5);
        assert_eq!(solve.scramble.as_deref(), Some("R U"));
        assert!(solve.timestamp.is_some());
    }

    #[test]
    fn test_apply_to_keeps_config_when_flags_absent() {
        let cli = Cli::parse_from(["cubestat"]);
        let mut config = Config {
            average_periods: vec![3],
            compsim_target: Some(10.0),
            history_path: Some(PathBuf::from("stored.csv")),
        };
        let before = config.clone();
        cli.apply_to(&mut config);
        assert_eq!(config, before);
    }

    #[test]
    fn test_apply_to_overrides() {
        let cli = Cli::parse_from(["cubestat", "-f", "other.csv", "-a", "50", "-t", "12.5"]);
        let mut config = Config::default();
        cli.apply_to(&mut config);
        assert_eq!(config.history_path, Some(PathBuf::from("other.csv")));
        assert_eq!(config.average_periods, vec![50]);
        assert_eq!(config.compsim_target, Some(12.5));
    }

    #[test]
    fn test_share_options_from_flags() {
        let cli = Cli::parse_from(["cubestat", "--no-header"]);
        let options = cli.share_options();
        assert!(!options.header);
        assert!(options.scrambles);
    }
}
