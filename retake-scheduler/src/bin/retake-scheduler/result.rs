use thiserror::Error;

use retake_scheduler::SchedulerError;

pub(crate) type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub(crate) enum CliError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    Scheduler(#[from] SchedulerError),
    #[error("Failed to write the timetable, more details: {0}")]
    Output(#[from] serde_json::Error),
}
