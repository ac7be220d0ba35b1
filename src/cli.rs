use {
    clap::{Parser, ValueEnum},
    log::LevelFilter,
    std::path::PathBuf,
};

/// Generates the C++ GL/EGL binding sources from the function table.
#[derive(Parser, Debug)]
pub struct Cli {
    /// Print every header the generator reads, one per line, then exit.
    #[arg(long)]
    pub inputs: bool,
    /// Check that the function tables are sorted by name and skip all code
    /// generation.
    #[arg(long)]
    pub verify_order: bool,
    /// Generate DCHECKs into the logging wrappers asserting no GL errors
    /// (useful for debugging with --enable-gpu-service-logging).
    #[arg(long)]
    pub generate_dchecks: bool,
    /// Generate DCHECKs validating that dynamic bindings were correctly
    /// supplied (useful for debugging).
    #[arg(long)]
    pub validate_bindings: bool,
    /// The log level.
    #[arg(long, value_enum, default_value_t)]
    pub log_level: CliLogLevel,
    /// The directory to write the generated files to. Defaults to the
    /// current directory.
    pub output_dir: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Copy, Clone, Default)]
pub enum CliLogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(level: CliLogLevel) -> Self {
        match level {
            CliLogLevel::Trace => LevelFilter::Trace,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Error => LevelFilter::Error,
        }
    }
}
