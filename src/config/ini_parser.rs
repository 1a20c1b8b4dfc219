//!
//! ini_parser.rs
//!
//! Minimal INI reader for the network configuration.
//!

use alloc::{vec, vec::Vec};

#[derive(Debug)]
pub struct IniSection<'a> {
	pub name: &'a str,
	pub properties: Vec<(&'a str, &'a str)>
}

impl<'a> IniSection<'a> {
	/// Returns the last value given for `key`.
	pub fn get(&self, key: &str) -> Option<&'a str> {
		self.properties
			.iter()
			.rev()
			.find(|(k, _)| k.eq_ignore_ascii_case(key))
			.map(|(_, v)| *v)
	}
}

#[derive(Debug)]
pub struct IniFile<'a> {
	pub sections: Vec<IniSection<'a>>
}

impl<'a> IniFile<'a> {
	/// Returns the first section called `name`.
	pub fn section(&self, name: &str) -> Option<&IniSection<'a>> {
		self.sections.iter().find(|s| s.name == name)
	}
}

/// Strips a trailing `;` comment from a value.
fn strip_comment(value: &str) -> &str {
	match value.find(';') {
		Some(pos) => value[..pos].trim_end(),
		None => value
	}
}

/// Parses an INI formatted string into an IniFile structure.
pub fn parse_ini(input: &'_ str) -> IniFile<'_> {
	let mut sections = Vec::new();

	let mut current_section: Option<IniSection> = None;

	for line in input.lines() {
		let line = line.trim();
		// skip empty or comment lines.
		if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
			continue;
		}
		// check if the line is a section header.
		if line.starts_with('[') && line.ends_with(']') {
			if let Some(sec) = current_section.take() {
				sections.push(sec);
			}
			let section_name = line[1..line.len() - 1].trim();
			current_section = Some(IniSection {
				name: section_name,
				properties: Vec::new()
			});
		} else if let Some(pos) = line.find('=') {
			let key = line[..pos].trim();
			let value = strip_comment(line[pos + 1..].trim());
			// properties before any header land in an unnamed section.
			if let Some(ref mut sec) = current_section {
				sec.properties.push((key, value));
			} else {
				current_section = Some(IniSection {
					name: "",
					properties: vec![(key, value)]
				});
			}
		}
		// lines that don't match any expected pattern are ignored.
	}
	if let Some(sec) = current_section {
		sections.push(sec);
	}
	IniFile {
		sections
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_sections_and_comments() {
		let ini = parse_ini(
			"top = 1\n; comment\n[log]\nlevel = debug ; noisy\n\n[interface net0]\nvlan=4\nVLAN = 5\n"
		);

		assert_eq!(ini.sections.len(), 3);
		assert_eq!(ini.section("").and_then(|s| s.get("top")), Some("1"));
		assert_eq!(ini.section("log").and_then(|s| s.get("level")), Some("debug"));
		assert_eq!(ini.section("interface net0").and_then(|s| s.get("vlan")), Some("5"));
		assert!(ini.section("missing").is_none());
	}
}
