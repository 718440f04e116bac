//! Logging of statistics with a prefix and an optional closing line.
//!
//! Statistics are only written after [`configure_statistic_logging`] has been called; they are
//! printed to stdout in the form `{PREFIX} {NAME}={VALUE}`.

use std::fmt::Display;
use std::io::stdout;
use std::io::Write;
use std::sync::OnceLock;

use log::debug;

#[derive(Debug, Clone, Copy)]
struct StatisticOptions {
    /// Printed in front of every statistic.
    statistic_prefix: &'static str,
    /// A closing line which is printed after a block of statistics.
    after_statistics: Option<&'static str>,
}

static STATISTIC_OPTIONS: OnceLock<StatisticOptions> = OnceLock::new();

/// Configures the logging of statistics; only the first call has an effect.
pub fn configure_statistic_logging(prefix: &'static str, after: Option<&'static str>) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| StatisticOptions {
        statistic_prefix: prefix,
        after_statistics: after,
    });
}

/// Logs the statistic `name` with value `value` if statistic logging has been configured.
pub fn log_statistic(name: impl Display, value: impl Display) {
    if let Some(options) = STATISTIC_OPTIONS.get() {
        let mut stdout = stdout().lock();
        if let Err(e) = writeln!(stdout, "{} {name}={value}", options.statistic_prefix) {
            debug!("Could not write statistic: {e}");
        }
    }
}

/// Logs the closing line of a block of statistics, if one was configured.
pub fn log_statistic_postfix() {
    if let Some(after_statistics) = STATISTIC_OPTIONS.get().and_then(|o| o.after_statistics) {
        let mut stdout = stdout().lock();
        if let Err(e) = writeln!(stdout, "{after_statistics}") {
            debug!("Could not write statistic: {e}");
        }
    }
}

/// Returns whether statistics are logged, i.e. whether [`configure_statistic_logging`] has been
/// called.
pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}
