use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("average period must be greater than 1, got {0}")]
    InvalidPeriod(usize),
}

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("history file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed history record: {0}")]
    Csv(#[from] csv::Error),

    #[error("history record {record} has invalid time {time}, expected non-negative seconds")]
    InvalidRecord { record: usize, time: f64 },
}
