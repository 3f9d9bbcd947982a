use tracing::{info, warn};
use transfmt::{Mode, Report, Severity};

/// Logs every diagnostic at its severity, file by file.
pub fn emit_diagnostics(report: &Report) {
    for diagnostic in report.diagnostics() {
        match diagnostic.severity {
            Severity::Info => info!("{}", diagnostic),
            Severity::Warn => warn!("{}", diagnostic),
        }
    }
}

/// One-line summary printed after a run.
///
/// In apply mode only files that actually changed are counted, not those
/// rewritten because of `--write-if-unchanged`.
pub fn summary(report: &Report) -> String {
    match report.mode {
        Mode::Apply => format!("formatted {} files", report.requiring_formatting()),
        Mode::Check => match report.requiring_formatting() {
            0 => format!("all {} files are properly formatted", report.files.len()),
            n => format!(
                "{} files require proper formatting - run `transfmt format` to fix",
                n
            ),
        },
    }
}
