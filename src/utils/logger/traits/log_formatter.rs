//!
//! log_formatter.rs
//!
//! Trait definition for turning a level and message into a log line.
//!

use alloc::string::String;

use crate::utils::logger::levels::LogLevel;

/// Formatting strategy shared by every sink.
pub trait LogFormatter: Send + Sync {
	/// Builds the line a sink records for `message` at `level`.
	fn format(&self, level: LogLevel, message: &str) -> String;
}
