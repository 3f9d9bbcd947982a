use std::process::ExitCode;

use transfmt::{Mode, Report};

/// Process exit status of a `transfmt` run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// `check` found files that require formatting.
    Failure,
    /// Configuration or I/O error.
    Error,
}

impl ExitStatus {
    /// A check fails only when it found something and failing is enabled;
    /// formatting never fails once it has run.
    pub fn for_report(report: &Report, fail_on_error: bool) -> Self {
        if report.mode == Mode::Check && fail_on_error && report.requiring_formatting() > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }

    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
