// Library surface shared by the binary and the integration tests.
pub mod app_dirs;
pub mod compsim;
pub mod config;
pub mod error;
pub mod format;
pub mod history;
pub mod report;
pub mod solve;
pub mod stats;
pub mod util;

pub use error::{HistoryError, StatsError};
pub use solve::{Penalty, SolveRecord};
pub use stats::{CalculatedAverage, Stats};
