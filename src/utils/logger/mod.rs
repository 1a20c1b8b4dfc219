//!
//! src/utils/logger/mod.rs
//!
//! Module definition for the logging framework of the link layer.
//!

pub mod format;
pub mod levels;
pub mod sinks;
pub mod traits;

use core::{
	fmt,
	sync::atomic::{AtomicU8, Ordering}
};

use self::{levels::LogLevel, sinks::NET_SINK, traits::logger_sink::LoggerSink};

static THRESHOLD: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

/// Sets the least severe level that still reaches the sink.
pub fn set_level(level: LogLevel) {
	THRESHOLD.store(level as u8, Ordering::Relaxed);
}

/// Returns the current threshold.
pub fn level() -> LogLevel {
	LogLevel::from_u8(THRESHOLD.load(Ordering::Relaxed))
}

/// Returns whether a message at `level` would be recorded.
pub fn enabled(level: LogLevel) -> bool {
	level >= self::level()
}

#[doc(hidden)]
pub fn log_args(level: LogLevel, args: fmt::Arguments<'_>) {
	if !enabled(level) {
		return;
	}
	NET_SINK.log(&alloc::fmt::format(args), level);
}

/// Logs a formatted message to the global sink.
///
/// ```ignore
/// net_log!(LogLevel::Debug, "[ETH] type={:#06x}", ethertype);
/// ```
#[macro_export]
macro_rules! net_log {
	($level:expr, $($arg:tt)*) => {
		$crate::utils::logger::log_args($level, format_args!($($arg)*))
	};
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn threshold_filters_before_the_sink() {
		crate::net_log!(LogLevel::Fatal, "[TEST] marker {}", 1);
		assert!(NET_SINK.drain().iter().any(|l| l == "[Fatal] [TEST] marker 1"));

		set_level(LogLevel::Fatal);
		assert!(!enabled(LogLevel::Warn));
		crate::net_log!(LogLevel::Warn, "[TEST] marker {}", 2);
		assert!(!NET_SINK.drain().iter().any(|l| l.contains("[TEST] marker 2")));
		set_level(LogLevel::Info);
		assert_eq!(level(), LogLevel::Info);
	}
}
