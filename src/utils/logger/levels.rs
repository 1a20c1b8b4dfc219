//!
//! levels.rs
//!
//! Definitions for the different types of Logging Levels for the link layer's logging framework
//!

use core::{fmt, str::FromStr};

use crate::error::ConfigError;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
#[repr(u8)]
/// Enum representing all supported log levels, least severe first.
pub enum LogLevel {
	/// Debug
	Debug = 0,
	/// Information
	Info = 1,
	/// Warnings
	Warn = 2,
	/// Errors
	Error = 3,
	/// Fatal
	Fatal = 4
}

impl LogLevel {
	/// Converts the raw value stored in the global threshold back into a level.
	pub const fn from_u8(raw: u8) -> LogLevel {
		match raw {
			0 => LogLevel::Debug,
			1 => LogLevel::Info,
			2 => LogLevel::Warn,
			3 => LogLevel::Error,
			_ => LogLevel::Fatal
		}
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			LogLevel::Debug => "Debug",
			LogLevel::Info => "Info",
			LogLevel::Warn => "Warn",
			LogLevel::Error => "Error",
			LogLevel::Fatal => "Fatal"
		};
		f.write_str(name)
	}
}

impl FromStr for LogLevel {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"debug" => Ok(LogLevel::Debug),
			"info" => Ok(LogLevel::Info),
			"warn" | "warning" => Ok(LogLevel::Warn),
			"error" => Ok(LogLevel::Error),
			"fatal" => Ok(LogLevel::Fatal),
			_ => Err(ConfigError::InvalidLogLevel(s.into()))
		}
	}
}
