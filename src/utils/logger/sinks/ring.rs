//!
//! ring.rs
//!
//! In-memory ring sink. Keeps the most recent log lines for whoever drains them.
//!

use alloc::{boxed::Box, string::String, vec::Vec};

use crossbeam_queue::ArrayQueue;

use crate::utils::logger::{
	levels::LogLevel,
	traits::{log_formatter::LogFormatter, logger_sink::LoggerSink}
};

/// A bounded sink. When full, the oldest line is dropped to make room.
pub struct RingSink {
	/// The formatting strategy used.
	pub formatter: Box<dyn LogFormatter>,
	lines: ArrayQueue<String>
}

impl RingSink {
	/// Creates a new `RingSink` holding at most `capacity` lines.
	pub fn new(formatter: Box<dyn LogFormatter>, capacity: usize) -> Self {
		Self {
			formatter,
			lines: ArrayQueue::new(capacity)
		}
	}

	/// Removes and returns every buffered line, oldest first.
	pub fn drain(&self) -> Vec<String> {
		let mut out = Vec::with_capacity(self.lines.len());
		while let Some(line) = self.lines.pop() {
			out.push(line);
		}
		out
	}

	pub fn len(&self) -> usize {
		self.lines.len()
	}

	pub fn is_empty(&self) -> bool {
		self.lines.is_empty()
	}
}

impl LoggerSink for RingSink {
	fn log(&self, message: &str, level: LogLevel) {
		let formatted_message = self.formatter.format(level, message);
		self.lines.force_push(formatted_message);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::utils::logger::format::DefaultFormatter;

	#[test]
	fn evicts_oldest_line_when_full() {
		let sink = RingSink::new(Box::new(DefaultFormatter::new(false)), 2);
		sink.log("one", LogLevel::Info);
		sink.log("two", LogLevel::Info);
		sink.log("three", LogLevel::Info);

		assert_eq!(sink.drain(), ["two", "three"]);
		assert!(sink.is_empty());
	}
}
