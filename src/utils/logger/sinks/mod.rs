//!
//! src/utils/logger/sinks/mod.rs
//!
//! All sink definitions for the link layer's logging framework
//!

pub mod ring;

use alloc::boxed::Box;

use lazy_static::lazy_static;

use crate::utils::logger::{format::DefaultFormatter, sinks::ring::RingSink};

/// Lines kept by the global sink before the oldest are evicted.
pub const NET_SINK_CAPACITY: usize = 256;

lazy_static! {
	/// Static reference to the link layer's log sink
	pub static ref NET_SINK: RingSink = RingSink::new(Box::new(DefaultFormatter::new(true)), NET_SINK_CAPACITY);
}
