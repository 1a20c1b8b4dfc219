//!
//! config/mod.rs
//!
//! Network configuration loaded from INI text.
//!
//! ```text
//! [log]
//! level = debug
//!
//! [interface net0]
//! hwaddr = 52:54:00:12:34:56
//! vlan = 42
//! ```
//!

pub mod ini_parser;

use alloc::{
	string::{String, ToString},
	vec::Vec
};

use crate::{
	error::ConfigError,
	net::link::LinkAddress,
	utils::logger::{self, levels::LogLevel}
};

use self::ini_parser::parse_ini;

/// Highest 802.1Q VLAN identifier.
pub const VLAN_MAX: u16 = 0x0fff;

const INTERFACE_PREFIX: &str = "interface";

/// Settings for one network-level interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceConfig {
	pub name: String,
	/// Overrides the card address when set.
	pub hwaddress: Option<LinkAddress>,
	/// 0 for untagged.
	pub vlantag: u16
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetConfig {
	pub log_level: LogLevel,
	pub interfaces: Vec<InterfaceConfig>
}

impl Default for NetConfig {
	fn default() -> Self {
		Self {
			log_level: LogLevel::Info,
			interfaces: Vec::new()
		}
	}
}

fn parse_vlan(raw: &str) -> Result<u16, ConfigError> {
	let invalid = || ConfigError::InvalidVlan(raw.to_string());
	let vlantag = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
		Some(hex) => u16::from_str_radix(hex, 16),
		None => raw.parse::<u16>()
	}
	.map_err(|_| invalid())?;

	if vlantag > VLAN_MAX {
		return Err(invalid());
	}
	Ok(vlantag)
}

impl NetConfig {
	pub fn parse(input: &str) -> Result<Self, ConfigError> {
		let ini = parse_ini(input);
		let mut config = NetConfig::default();

		if let Some(level) = ini.section("log").and_then(|s| s.get("level")) {
			config.log_level = level.parse::<LogLevel>()?;
		}

		for section in &ini.sections {
			let Some(rest) = section.name.strip_prefix(INTERFACE_PREFIX) else {
				continue;
			};
			// "interfaces" and friends are not interface sections
			if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
				continue;
			}
			let name = rest.trim();
			if name.is_empty() {
				return Err(ConfigError::MissingInterfaceName);
			}

			let hwaddress = section.get("hwaddr").map(str::parse::<LinkAddress>).transpose()?;
			let vlantag = section.get("vlan").map(parse_vlan).transpose()?.unwrap_or(0);

			config.interfaces.push(InterfaceConfig {
				name: name.to_string(),
				hwaddress,
				vlantag
			});
		}

		Ok(config)
	}

	/// Installs the configured log threshold.
	pub fn apply_logging(&self) {
		logger::set_level(self.log_level);
	}

	pub fn interface(&self, name: &str) -> Option<&InterfaceConfig> {
		self.interfaces.iter().find(|i| i.name == name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reads_interfaces_and_log_level() {
		let config = NetConfig::parse(
			"[log]\nlevel = warn\n\n[interface net0]\nhwaddr = 02:00:00:00:00:01\nvlan = 42\n\n[interface net1]\n"
		)
		.unwrap();

		assert_eq!(config.log_level, LogLevel::Warn);
		assert_eq!(
			config.interface("net0"),
			Some(&InterfaceConfig {
				name: "net0".into(),
				hwaddress: Some(LinkAddress::ethernet([2, 0, 0, 0, 0, 1])),
				vlantag: 42
			})
		);
		let net1 = config.interface("net1").unwrap();
		assert_eq!(net1.hwaddress, None);
		assert_eq!(net1.vlantag, 0);
	}

	#[test]
	fn empty_input_is_default() {
		assert_eq!(NetConfig::parse("").unwrap(), NetConfig::default());
	}

	#[test]
	fn vlan_accepts_hex_and_rejects_out_of_range() {
		assert_eq!(parse_vlan("0x0fff"), Ok(VLAN_MAX));
		assert_eq!(parse_vlan("4096"), Err(ConfigError::InvalidVlan("4096".into())));
		assert_eq!(parse_vlan("tagged"), Err(ConfigError::InvalidVlan("tagged".into())));
	}

	#[test]
	fn rejects_bad_sections() {
		assert_eq!(NetConfig::parse("[interface]\nvlan = 1\n"), Err(ConfigError::MissingInterfaceName));
		assert_eq!(
			NetConfig::parse("[interface net0]\nhwaddr = 52:54\n"),
			Err(ConfigError::InvalidHwAddress("52:54".into()))
		);
		assert_eq!(
			NetConfig::parse("[log]\nlevel = loud\n"),
			Err(ConfigError::InvalidLogLevel("loud".into()))
		);
		// not an interface section
		assert_eq!(NetConfig::parse("[interfaces]\nvlan = x\n").unwrap().interfaces.len(), 0);
	}
}
