//!
//! card.rs
//!
//! Network cards and the network-level interfaces bound to them.
//!

use alloc::{boxed::Box, string::String, sync::Arc};
use core::sync::atomic::{AtomicBool, Ordering};

use spin::Mutex;

use crate::{
	config::InterfaceConfig,
	error::DeviceError,
	net::{link::LinkAddress, netbuff::NetBuff},
	net_log,
	utils::logger::levels::LogLevel
};

/// Operations a card driver provides.
pub trait CardDriver: Send {
	/// Brings the hardware up. Drivers without an open step keep the default.
	fn open(&mut self) -> Result<(), DeviceError> {
		Ok(())
	}

	/// Transmits a complete frame (`nb.data()`).
	fn send(&mut self, nb: &NetBuff) -> Result<(), DeviceError>;
}

/// A network card. Opened lazily on first transmit.
pub struct NetCard {
	pub name: String,
	/// Address burnt into the card, used by interfaces that do not override it.
	pub default_address: LinkAddress,
	opened: AtomicBool,
	driver: Mutex<Box<dyn CardDriver>>
}

impl NetCard {
	pub fn new(name: impl Into<String>, default_address: LinkAddress, driver: Box<dyn CardDriver>) -> Self {
		Self {
			name: name.into(),
			default_address,
			opened: AtomicBool::new(false),
			driver: Mutex::new(driver)
		}
	}

	pub fn is_opened(&self) -> bool {
		self.opened.load(Ordering::Acquire)
	}

	/// Opens the card unless that already succeeded once.
	///
	/// The flag is only set after a successful open, so a failed open is
	/// retried by the next caller. Callers serialise access per card.
	pub fn ensure_open(&self) -> Result<(), DeviceError> {
		if self.is_opened() {
			return Ok(());
		}
		if let Err(e) = self.driver.lock().open() {
			net_log!(LogLevel::Warn, "[ETH] {}: open failed: {}", self.name, e);
			return Err(e);
		}
		self.opened.store(true, Ordering::Release);
		net_log!(LogLevel::Info, "[ETH] {}: opened", self.name);
		Ok(())
	}

	/// Hands a frame to the driver. The result is returned verbatim.
	pub fn send(&self, nb: &NetBuff) -> Result<(), DeviceError> {
		self.driver.lock().send(nb)
	}
}

impl core::fmt::Debug for NetCard {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("NetCard")
			.field("name", &self.name)
			.field("default_address", &self.default_address)
			.field("opened", &self.is_opened())
			.finish_non_exhaustive()
	}
}

/// An addressable interface on top of a card.
#[derive(Debug, Clone)]
pub struct NetworkLevelInterface {
	pub name: String,
	pub card: Arc<NetCard>,
	/// Source address written into outbound frames.
	pub hwaddress: LinkAddress,
	/// 802.1Q tag written into outbound frames, 0 for untagged.
	pub vlantag: u16
}

impl NetworkLevelInterface {
	/// Creates an untagged interface using the card's own address.
	pub fn new(name: impl Into<String>, card: Arc<NetCard>) -> Self {
		let hwaddress = card.default_address;
		Self {
			name: name.into(),
			card,
			hwaddress,
			vlantag: 0
		}
	}

	pub fn with_vlan(mut self, vlantag: u16) -> Self {
		self.vlantag = vlantag;
		self
	}

	pub fn with_hwaddress(mut self, hwaddress: LinkAddress) -> Self {
		self.hwaddress = hwaddress;
		self
	}

	/// Builds an interface from its configuration section.
	pub fn from_config(config: &InterfaceConfig, card: Arc<NetCard>) -> Self {
		let inf = Self::new(config.name.clone(), card).with_vlan(config.vlantag);
		match config.hwaddress {
			Some(hwaddress) => inf.with_hwaddress(hwaddress),
			None => inf
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct FlakyOpen {
		failures_left: usize
	}

	impl CardDriver for FlakyOpen {
		fn open(&mut self) -> Result<(), DeviceError> {
			if self.failures_left > 0 {
				self.failures_left -= 1;
				return Err(DeviceError::OpenFailed("link down"));
			}
			Ok(())
		}

		fn send(&mut self, _nb: &NetBuff) -> Result<(), DeviceError> {
			Ok(())
		}
	}

	struct NoOpenHook;

	impl CardDriver for NoOpenHook {
		fn send(&mut self, _nb: &NetBuff) -> Result<(), DeviceError> {
			Err(DeviceError::SendFailed("queue full"))
		}
	}

	const MAC: LinkAddress = LinkAddress::ethernet([0x52, 0x54, 0, 0x12, 0x34, 0x56]);

	#[test]
	fn failed_open_leaves_card_closed() {
		let card = NetCard::new(
			"net0",
			MAC,
			Box::new(FlakyOpen {
				failures_left: 1
			})
		);

		assert_eq!(card.ensure_open(), Err(DeviceError::OpenFailed("link down")));
		assert!(!card.is_opened());
		assert_eq!(card.ensure_open(), Ok(()));
		assert!(card.is_opened());
		assert_eq!(card.ensure_open(), Ok(()));
	}

	#[test]
	fn driver_without_open_hook_opens_and_reports_send_errors() {
		let card = NetCard::new("net0", MAC, Box::new(NoOpenHook));
		assert_eq!(card.ensure_open(), Ok(()));
		assert_eq!(
			card.send(&NetBuff::from_frame(&[0; 14])),
			Err(DeviceError::SendFailed("queue full"))
		);
	}

	#[test]
	fn interface_defaults_to_card_address() {
		let card = Arc::new(NetCard::new("net0", MAC, Box::new(NoOpenHook)));
		let inf = NetworkLevelInterface::new("net0:0", card.clone());
		assert_eq!(inf.hwaddress, MAC);
		assert_eq!(inf.vlantag, 0);

		let config = InterfaceConfig {
			name: "net0:1".into(),
			hwaddress: Some(LinkAddress::ethernet([2, 0, 0, 0, 0, 1])),
			vlantag: 42
		};
		let inf = NetworkLevelInterface::from_config(&config, card);
		assert_eq!(inf.name, "net0:1");
		assert_eq!(inf.hwaddress.mac, [2, 0, 0, 0, 0, 1]);
		assert_eq!(inf.vlantag, 42);
	}
}
