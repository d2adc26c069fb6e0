use std::process::ExitCode;

/// Exit status of a scan, following common conventions for linter tools.
///
/// - `Success` (0): Scan completed (issues are only fatal with `--strict`)
/// - `Failure` (1): `--strict` was given and missing keys were found
/// - `Error` (2): Scan could not run (missing root, bad config, unwritable report)
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
