use std::process::ExitCode;

/// Exit status of the tool.
///
/// - `Success` (0): catalog written; skipped call sites are only warnings
/// - `Error` (2): run aborted (bad keyword config, unreadable or unparsable source, unwritable output)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Catalog written.
    Success,
    /// Run aborted before a valid catalog could be written.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
