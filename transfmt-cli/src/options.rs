use std::path::PathBuf;

use transfmt::{Config, EolStyle};

use crate::config_file::ConfigFile;

/// Options shared by `format` and `check`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct CommonOptions {
    /// Directory containing the translation files [default: .]
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Directory to write results to [default: the input directory]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Wildcard pattern for file names to process (repeatable)
    #[arg(short, long = "include", value_name = "PATTERN")]
    pub includes: Vec<String>,

    /// Wildcard pattern for file names to skip, wins over --include (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "PATTERN")]
    pub excludes: Vec<String>,

    /// Line ending of written files: unix, win or mac [default: platform]
    #[arg(long, value_name = "STYLE")]
    pub eol_style: Option<String>,

    /// TOML file with default settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the report as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// Fully resolved settings of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config: Config,
    pub fail_on_error: bool,
}

/// Merges command line options over the optional config file.
pub fn resolve(
    options: &CommonOptions,
    file: Option<&ConfigFile>,
    write_if_unchanged: bool,
    no_fail: bool,
) -> Result<Settings, String> {
    let defaults = ConfigFile::default();
    let file = file.unwrap_or(&defaults);

    let dir = options
        .dir
        .clone()
        .or_else(|| file.dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let mut config = Config::new(dir);

    if let Some(output_dir) = options.output_dir.clone().or_else(|| file.output_dir.clone()) {
        config = config.with_output_dir(output_dir);
    }

    let includes = if options.includes.is_empty() {
        &file.includes
    } else {
        &options.includes
    };
    for pattern in includes {
        config = config.with_include(pattern.clone());
    }
    let excludes = if options.excludes.is_empty() {
        &file.excludes
    } else {
        &options.excludes
    };
    for pattern in excludes {
        config = config.with_exclude(pattern.clone());
    }

    config = config.with_write_if_unchanged(
        write_if_unchanged || file.write_if_unchanged.unwrap_or(false),
    );

    if let Some(style) = options.eol_style.as_ref().or(file.eol_style.as_ref()) {
        let eol: EolStyle = style.parse().map_err(|e| format!("{}", e))?;
        config = config.with_eol(eol);
    }

    Ok(Settings {
        config,
        fail_on_error: !no_fail && file.fail_on_error.unwrap_or(true),
    })
}
