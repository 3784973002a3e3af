use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): every model was processed
/// - `Failure` (1): the command ran, but some inputs were rejected
/// - `Error` (2): the command could not run (bad config, unreadable model, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
