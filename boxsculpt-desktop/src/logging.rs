//! Logging to stderr.

use anyhow::Context as _;

/// A [`clap::Args`] struct for options controlling log output to stderr.
#[derive(Clone, Debug, clap::Args)]
#[expect(clippy::module_name_repetitions)]
pub struct LoggingArgs {
    /// Additional logging to stderr.
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Remove timestamps from logs so that they are closer to deterministic.
    ///
    /// This option is intended for internal tests only.
    #[arg(long = "simplify-log-format", hide = true)]
    pub(crate) simplify_log_format: bool,
}

/// Install a [`log`] global logger based on user-provided `options`.
pub fn install(options: &LoggingArgs) -> Result<(), anyhow::Error> {
    use log::LevelFilter::{Debug, Error, Off, Trace};

    let &LoggingArgs {
        verbose,
        simplify_log_format,
    } = options;

    let stderr_logger = *simplelog::WriteLogger::new(
        match verbose {
            false => Debug,
            true => Trace,
        },
        simplelog::ConfigBuilder::new()
            .set_target_level(Off)
            .set_location_level(Off)
            .set_time_level(if simplify_log_format { Off } else { Error })
            .build(),
        std::io::stderr(),
    );
    let max_level = simplelog::SharedLogger::level(&stderr_logger);

    log::set_boxed_logger(Box::new(BoxsculptLogger { stderr_logger }))
        .context("failed to initialize logging")?;
    log::set_max_level(max_level);
    Ok(())
}

/// [`log::Log`] implementation that [`install()`] registers globally.
struct BoxsculptLogger {
    stderr_logger: simplelog::WriteLogger<std::io::Stderr>,
}

impl log::Log for BoxsculptLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        standard_filter(metadata) && self.stderr_logger.enabled(metadata)
    }

    fn log(&self, record: &log::Record<'_>) {
        if standard_filter(record.metadata()) {
            self.stderr_logger.log(record);
        }
    }

    fn flush(&self) {
        self.stderr_logger.flush();
    }
}

/// Filter out debug and trace logging from crates other than our own.
fn standard_filter(metadata: &log::Metadata<'_>) -> bool {
    metadata.target().starts_with("boxsculpt") || metadata.level() <= log::Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_by_target() {
        let ours = log::Metadata::builder()
            .target("boxsculpt::editor")
            .level(log::Level::Trace)
            .build();
        let theirs = log::Metadata::builder()
            .target("serde_json")
            .level(log::Level::Debug)
            .build();
        let their_warning = log::Metadata::builder()
            .target("serde_json")
            .level(log::Level::Warn)
            .build();
        assert!(standard_filter(&ours));
        assert!(!standard_filter(&theirs));
        assert!(standard_filter(&their_warning));
    }
}
