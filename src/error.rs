//!
//! error.rs
//!
//! Error handling module for the link layer.
//!

use thiserror::Error;

/// Result alias used throughout the network code.
pub type NetResult<T> = Result<T, NetError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Errors raised by the packet buffer when a header region cannot be
/// added or removed. Fatal for the frame in flight, never retried.
pub enum BufferError {
	/// Not enough headroom in front of the data to prepend a header.
	#[error("not enough headroom: need {needed} bytes, have {available}")]
	NoHeadroom { needed: usize, available: usize },
	/// Fewer data bytes than the header being read or consumed.
	#[error("buffer truncated: need {needed} bytes, have {available}")]
	Truncated { needed: usize, available: usize },
	/// Tail would run past the end of the storage.
	#[error("no tailroom: need {needed} bytes, have {available}")]
	NoTailroom { needed: usize, available: usize }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Failures reported by a card driver. Passed to the caller unchanged.
pub enum DeviceError {
	#[error("failed to open card: {0}")]
	OpenFailed(&'static str),
	#[error("failed to send frame: {0}")]
	SendFailed(&'static str)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Errors from parsing the network configuration.
pub enum ConfigError {
	#[error("invalid hardware address `{0}`")]
	InvalidHwAddress(alloc::string::String),
	#[error("invalid vlan tag `{0}`")]
	InvalidVlan(alloc::string::String),
	#[error("invalid log level `{0}`")]
	InvalidLogLevel(alloc::string::String),
	#[error("interface section without a name")]
	MissingInterfaceName
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// A enum representing every error the link layer hands back to its caller.
pub enum NetError {
	#[error(transparent)]
	Buffer(#[from] BufferError),
	#[error(transparent)]
	Device(#[from] DeviceError),
	/// An upper-layer receiver rejected the packet.
	#[error("protocol error: {0}")]
	Protocol(&'static str)
}
