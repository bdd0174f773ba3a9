use clap::Args;
use log::LevelFilter;

/// The verbosity flags accepted by every tool, quiet takes precedence over the others.
#[derive(Args, Debug, Default)]
pub struct VerbosityFlag {
    #[arg(short, long, global = true, help = "Only print the results")]
    quiet: bool,

    #[arg(short, long, global = true, help = "Print progress information (default)")]
    verbose: bool,

    #[arg(short, long, global = true, help = "Print a summary of every recursive call")]
    debug: bool,

    #[arg(long, global = true, help = "Print the vertex sets of every recursive call")]
    trace: bool,
}

impl VerbosityFlag {
    /// Returns the log level filter for the given flags.
    pub fn log_level_filter(&self) -> LevelFilter {
        self.verbosity().log_level_filter()
    }

    /// Returns the verbosity selected by the flags.
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.trace {
            Verbosity::Trace
        } else if self.debug {
            Verbosity::Debug
        } else {
            Verbosity::Verbose
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn log_level_filter(&self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Verbose => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}
