//!
//! logger_sink.rs
//!
//! Trait definition for all types that are a sink.
//!

use crate::utils::logger::levels::LogLevel;

/// Trait representing all functions that a logging sink will need to implement.
pub trait LoggerSink: Send + Sync {
	/// Log a message of a certain level.
	fn log(&self, message: &str, level: LogLevel);
}
