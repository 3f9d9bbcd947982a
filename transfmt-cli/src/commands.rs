use transfmt::{Mode, normalize_dir};

use crate::{
    config_file::ConfigFile,
    exit_status::ExitStatus,
    options::{CommonOptions, resolve},
    report::{emit_diagnostics, summary},
};

/// Run the format command: rewrite every file that is not normalized.
pub fn run_format_command(options: &CommonOptions, write_if_unchanged: bool) -> ExitStatus {
    run(options, Mode::Apply, write_if_unchanged, false)
}

/// Run the check command: report files that are not normalized, write nothing.
pub fn run_check_command(options: &CommonOptions, no_fail: bool) -> ExitStatus {
    run(options, Mode::Check, false, no_fail)
}

fn run(options: &CommonOptions, mode: Mode, write_if_unchanged: bool, no_fail: bool) -> ExitStatus {
    let file = match options.config.as_deref().map(ConfigFile::load).transpose() {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitStatus::Error;
        }
    };

    let settings = match resolve(options, file.as_ref(), write_if_unchanged, no_fail) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitStatus::Error;
        }
    };

    let report = match normalize_dir(settings.config, mode) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitStatus::Error;
        }
    };

    emit_diagnostics(&report);

    let status = ExitStatus::for_report(&report, settings.fail_on_error);
    if options.json {
        match report.to_json_pretty() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitStatus::Error;
            }
        }
    } else if status == ExitStatus::Failure {
        eprintln!("Error: {}", summary(&report));
    } else {
        println!("{}", summary(&report));
    }
    status
}
