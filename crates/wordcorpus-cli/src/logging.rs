use stderrlog::{LogLevelNum, Timestamp};

/// Logging arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence all log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Raise the log level above the command default (-v, -vv, ...).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Prefix log lines with a timestamp.
    #[clap(long)]
    pub ts: bool,
}

impl LogArgs {
    /// The stderr log level: the command default, raised once per `-v`.
    fn log_level(
        &self,
        default: u8,
    ) -> LogLevelNum {
        match default.saturating_add(self.verbose) {
            0 => LogLevelNum::Off,
            1 => LogLevelNum::Error,
            2 => LogLevelNum::Warn,
            3 => LogLevelNum::Info,
            4 => LogLevelNum::Debug,
            _ => LogLevelNum::Trace,
        }
    }

    /// Install the stderr logger.
    ///
    /// ## Arguments
    /// * `default` - the level used without `-v`; `3` is info.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let timestamp = match self.ts {
            true => Timestamp::Second,
            false => Timestamp::Off,
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(self.log_level(default))
            .timestamp(timestamp)
            .init()?;

        Ok(())
    }
}
