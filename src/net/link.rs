//!
//! link.rs
//!
//! Link-level (hardware) addresses.
//!

use core::{fmt, str::FromStr};

use crate::error::ConfigError;

/// Link protocol an address belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkProtocol {
	Ethernet
}

/// A hardware address tagged with its link protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkAddress {
	pub protocol: LinkProtocol,
	pub mac: [u8; 6]
}

impl LinkAddress {
	/// Broadcast address (ff:ff:ff:ff:ff:ff)
	pub const BROADCAST: LinkAddress = LinkAddress::ethernet([0xff; 6]);

	pub const fn ethernet(mac: [u8; 6]) -> Self {
		Self {
			protocol: LinkProtocol::Ethernet,
			mac
		}
	}

	#[inline]
	pub fn is_broadcast(&self) -> bool {
		self.mac == [0xff; 6]
	}

	/// Least significant bit of the first octet set.
	#[inline]
	pub fn is_multicast(&self) -> bool {
		self.mac[0] & 0x01 != 0
	}
}

impl fmt::Display for LinkAddress {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let m = self.mac;
		write!(
			f,
			"{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
			m[0], m[1], m[2], m[3], m[4], m[5]
		)
	}
}

impl FromStr for LinkAddress {
	type Err = ConfigError;

	/// Accepts `52:54:00:12:34:56` or `52-54-00-12-34-56`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let invalid = || ConfigError::InvalidHwAddress(s.into());
		let sep = if s.contains('-') { '-' } else { ':' };

		let mut mac = [0u8; 6];
		let mut parts = s.split(sep);
		for octet in mac.iter_mut() {
			let part = parts.next().ok_or_else(invalid)?;
			if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
				return Err(invalid());
			}
			*octet = u8::from_str_radix(part, 16).map_err(|_| invalid())?;
		}
		if parts.next().is_some() {
			return Err(invalid());
		}

		Ok(LinkAddress::ethernet(mac))
	}
}
