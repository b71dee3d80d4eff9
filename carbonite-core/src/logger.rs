use log::LevelFilter;

use crate::convert::ColumnConverter;
use crate::error::Error;
use crate::type_code::SqlTypeCode;

pub(crate) const TARGET: &str = "carbonite::convert";

// Yes these look silly. `tracing` doesn't currently support dynamic levels
// https://github.com/tokio-rs/tracing/issues/372
#[doc(hidden)]
#[macro_export]
macro_rules! private_tracing_dynamic_enabled {
    (target: $target:expr, $level:expr) => {{
        use ::tracing::Level;

        match $level {
            Level::ERROR => ::tracing::enabled!(target: $target, Level::ERROR),
            Level::WARN => ::tracing::enabled!(target: $target, Level::WARN),
            Level::INFO => ::tracing::enabled!(target: $target, Level::INFO),
            Level::DEBUG => ::tracing::enabled!(target: $target, Level::DEBUG),
            Level::TRACE => ::tracing::enabled!(target: $target, Level::TRACE),
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! private_tracing_dynamic_event {
    (target: $target:expr, $level:expr, $($args:tt)*) => {{
        use ::tracing::Level;

        match $level {
            Level::ERROR => ::tracing::event!(target: $target, Level::ERROR, $($args)*),
            Level::WARN => ::tracing::event!(target: $target, Level::WARN, $($args)*),
            Level::INFO => ::tracing::event!(target: $target, Level::INFO, $($args)*),
            Level::DEBUG => ::tracing::event!(target: $target, Level::DEBUG, $($args)*),
            Level::TRACE => ::tracing::event!(target: $target, Level::TRACE, $($args)*),
        }
    }};
}

#[doc(hidden)]
pub fn private_level_filter_to_levels(
    filter: LevelFilter,
) -> Option<(tracing::Level, log::Level)> {
    let tracing_level = match filter {
        LevelFilter::Error => Some(tracing::Level::ERROR),
        LevelFilter::Warn => Some(tracing::Level::WARN),
        LevelFilter::Info => Some(tracing::Level::INFO),
        LevelFilter::Debug => Some(tracing::Level::DEBUG),
        LevelFilter::Trace => Some(tracing::Level::TRACE),
        LevelFilter::Off => None,
    };

    tracing_level.zip(filter.to_level())
}

/// Levels at which the conversion table reports what it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    /// Level for converter acquisition, one event per column. Defaults to `Trace`.
    pub converter_level: LevelFilter,
    /// Level for failed conversions. Defaults to `Warn`.
    pub failure_level: LevelFilter,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            converter_level: LevelFilter::Trace,
            failure_level: LevelFilter::Warn,
        }
    }
}

impl LogSettings {
    /// Log converter acquisition at the given level.
    pub fn log_converters(&mut self, level: LevelFilter) {
        self.converter_level = level;
    }

    /// Log failed conversions at the given level.
    pub fn log_failures(&mut self, level: LevelFilter) {
        self.failure_level = level;
    }

    pub(crate) fn converter_acquired(
        &self,
        col: usize,
        code: SqlTypeCode,
        converter: ColumnConverter,
    ) {
        if let Some((tracing_level, log_level)) =
            private_level_filter_to_levels(self.converter_level)
        {
            // The enabled level could be set from either tracing world or log world, so check both
            let enabled = log::log_enabled!(target: TARGET, log_level)
                || private_tracing_dynamic_enabled!(target: TARGET, tracing_level);
            if enabled {
                private_tracing_dynamic_event!(
                    target: TARGET,
                    tracing_level,
                    column = col,
                    sql_type = %code,
                    "acquired {converter:?} converter"
                );
            }
        }
    }

    pub(crate) fn conversion_failed(&self, col: usize, error: &Error) {
        if let Some((tracing_level, log_level)) =
            private_level_filter_to_levels(self.failure_level)
        {
            let enabled = log::log_enabled!(target: TARGET, log_level)
                || private_tracing_dynamic_enabled!(target: TARGET, tracing_level);
            if enabled {
                private_tracing_dynamic_event!(
                    target: TARGET,
                    tracing_level,
                    column = col,
                    "conversion failed: {error}"
                );
            }
        }
    }
}
