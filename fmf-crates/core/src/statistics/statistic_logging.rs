//! The process-wide configuration of where and how statistics are written.

use std::fmt::Display;
use std::io::stdout;
use std::io::Write;
use std::sync::OnceLock;
use std::sync::RwLock;

use convert_case::Case;
use convert_case::Casing;
use log::debug;

struct StatisticOptions {
    /// Written in front of every statistic.
    statistic_prefix: &'static str,
    /// A closing line written after a block of statistics.
    after_statistics: Option<&'static str>,
    /// The casing into which statistic names are converted.
    statistics_casing: Option<Case>,
    statistics_writer: Box<dyn Write + Send + Sync>,
}

static STATISTIC_OPTIONS: OnceLock<RwLock<StatisticOptions>> = OnceLock::new();

/// Configures the logging of statistics.
///
/// Only the first call has an effect. When no writer is given, statistics are written to stdout.
pub fn configure_statistic_logging(
    prefix: &'static str,
    after: Option<&'static str>,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send + Sync>>,
) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| {
        RwLock::from(StatisticOptions {
            statistic_prefix: prefix,
            after_statistics: after,
            statistics_casing: casing,
            statistics_writer: writer.unwrap_or_else(|| Box::new(stdout())),
        })
    });
}

fn write_line(line: impl FnOnce(&StatisticOptions) -> Option<String>) {
    let Some(statistic_options_lock) = STATISTIC_OPTIONS.get() else {
        return;
    };
    let Ok(mut statistic_options) = statistic_options_lock.write() else {
        return;
    };
    if let Some(line) = line(&statistic_options) {
        if let Err(e) = writeln!(statistic_options.statistics_writer, "{line}") {
            debug!("Could not write statistic: {e}");
        }
    }
}

/// Logs the statistic `name` with `value` in the form `{PREFIX} {NAME}={VALUE}`.
pub fn log_statistic(name: impl Display, value: impl Display) {
    write_line(|options| {
        let name = match options.statistics_casing {
            Some(casing) => name.to_string().to_case(casing),
            None => name.to_string(),
        };
        Some(format!("{} {name}={value}", options.statistic_prefix))
    })
}

/// Logs the closing line of a block of statistics, if one is configured.
pub fn log_statistic_postfix() {
    write_line(|options| options.after_statistics.map(str::to_owned))
}

/// Returns whether statistics are logged, i.e. whether [`configure_statistic_logging`] has been
/// called.
pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}
