//!
//! ethernet.rs
//!
//! Ethernet framing for the link layer.
//!
//! ```text
//! Untagged: [dst:6][src:6][type:2][payload...]
//! Tagged:   [dst:6][src:6][0x8100:2][vlan:2][type:2][payload...]
//! 802.3:    [dst:6][src:6][len<=1500:2][dsap:1][ssap:1][ctrl:1][payload...]
//! SNAP:     ... dsap=ssap=0xaa, ctrl=0x03, [oui:3][type:2][payload...]
//! ```
//!

use zerocopy::{
	FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned, byteorder::network_endian::U16
};

use crate::{
	error::{BufferError, NetError, NetResult},
	net::{
		card::{NetCard, NetworkLevelInterface},
		link::LinkAddress,
		netbuff::{MAX_LINK_HEADER_SIZE, NetBuff}
	},
	net_log,
	utils::logger::levels::LogLevel
};

/// Ethernet Type IPv4 value
pub const ETHERTYPE_IP: u16 = 0x0800;
/// Ethernet Type ARP value
pub const ETHERTYPE_ARP: u16 = 0x0806;
/// Ethernet Type IPv6 value
pub const ETHERTYPE_IP6: u16 = 0x86DD;
/// 802.1Q tag protocol identifier
pub const ETHERTYPE_VLAN: u16 = 0x8100;

/// Untagged header size.
pub const ETH_HLEN: usize = 14;
/// Size of an 802.1Q tag.
pub const VLAN_TAG_LEN: usize = 4;
pub const LLC_HLEN: usize = 3;
pub const SNAP_HLEN: usize = 5;

/// Type fields up to this value are 802.3 length fields.
pub const ETH_MAX_LENGTH_FIELD: u16 = 1500;
/// SAP used by SNAP, in both DSAP and SSAP.
pub const LLC_SNAP_SAP: u8 = 0xaa;
/// Unnumbered information control byte.
pub const LLC_UI_CONTROL: u8 = 0x03;
/// Low bits of the DSAP used as the type of a plain LLC frame.
pub const LLC_ADDR_MASK: u8 = 0x7f;

#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned)]
/// Ethernet II header.
pub struct EtherHdr {
	pub dst: [u8; 6],
	pub src: [u8; 6],
	pub ethertype: U16
}

#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned)]
/// The 4 bytes an 802.1Q tag inserts after the source address.
pub struct VlanTag {
	pub tpid: U16,
	pub tci: U16
}

#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned)]
/// 802.2 LLC header.
pub struct LlcHdr {
	pub dsap: u8,
	pub ssap: u8,
	pub ctrl: u8
}

#[repr(C)]
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned)]
/// SNAP extension following an LLC header.
pub struct SnapHdr {
	pub oui: [u8; 3],
	pub ethertype: U16
}

// sanity
const _: () = assert!(core::mem::size_of::<EtherHdr>() == ETH_HLEN);
const _: () = assert!(core::mem::size_of::<VlanTag>() == VLAN_TAG_LEN);
const _: () = assert!(core::mem::size_of::<LlcHdr>() == LLC_HLEN);
const _: () = assert!(core::mem::size_of::<SnapHdr>() == SNAP_HLEN);
const _: () = assert!(ETH_HLEN + VLAN_TAG_LEN < MAX_LINK_HEADER_SIZE);

/// Header size for an interface with the given tag (14, or 18 when tagged).
pub const fn header_size(vlantag: u16) -> usize {
	if vlantag != 0 { ETH_HLEN + VLAN_TAG_LEN } else { ETH_HLEN }
}

/// How the payload of a frame is encapsulated, with the final ethertype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encapsulation {
	/// Type field is a real ethertype.
	EthernetII(u16),
	/// 802.3 length field with a plain LLC header. Carries `dsap & 0x7f`.
	Llc(u16),
	/// 802.3 + LLC + SNAP. Carries the ethertype embedded in the SNAP header.
	Snap(u16)
}

impl Encapsulation {
	pub fn ethertype(&self) -> u16 {
		match *self {
			Encapsulation::EthernetII(t) | Encapsulation::Llc(t) | Encapsulation::Snap(t) => t
		}
	}

	/// Bytes of LLC/SNAP header the decoder strips before dispatch.
	pub fn consumed_len(&self) -> usize {
		match self {
			Encapsulation::Snap(_) => LLC_HLEN + SNAP_HLEN,
			_ => 0
		}
	}
}

fn truncated(needed: usize, available: usize) -> BufferError {
	BufferError::Truncated {
		needed,
		available
	}
}

/// Classifies the data following the Ethernet header.
///
/// `payload` starts right after the (possibly tagged) header. Headers are
/// only read after their length has been checked.
pub fn classify(outer_type: u16, payload: &[u8]) -> Result<Encapsulation, BufferError> {
	if outer_type > ETH_MAX_LENGTH_FIELD {
		return Ok(Encapsulation::EthernetII(outer_type));
	}

	let (llc, rest) =
		LlcHdr::ref_from_prefix(payload).map_err(|_| truncated(LLC_HLEN, payload.len()))?;

	if llc.dsap == LLC_SNAP_SAP && llc.ssap == LLC_SNAP_SAP && llc.ctrl == LLC_UI_CONTROL {
		let (snap, _) = SnapHdr::ref_from_prefix(rest)
			.map_err(|_| truncated(LLC_HLEN + SNAP_HLEN, payload.len()))?;
		return Ok(Encapsulation::Snap(snap.ethertype.get()));
	}

	Ok(Encapsulation::Llc((llc.dsap & LLC_ADDR_MASK) as u16))
}

/// Prepends an Ethernet header to `nb` and transmits it on the interface's card.
///
/// Opens the card on first use. The buffer stays with the caller.
pub fn send_ethernet_packet(
	inf: &NetworkLevelInterface,
	nb: &mut NetBuff,
	target: &LinkAddress,
	ethertype: u16
) -> NetResult<()> {
	let etherhdr_size = header_size(inf.vlantag);

	nb.push(etherhdr_size)?;

	let eth = EtherHdr {
		dst: target.mac,
		src: inf.hwaddress.mac,
		ethertype: U16::new(ethertype)
	};
	let available = nb.len();
	eth.write_to_prefix(nb.data_mut())
		.map_err(|_| truncated(ETH_HLEN, available))?;

	inf.card.ensure_open()?;

	if inf.vlantag != 0 {
		let hdr = &mut nb.data_mut()[..etherhdr_size];
		// type moves to the end, the tag takes its old place
		hdr.copy_within(etherhdr_size - 6..etherhdr_size - 4, etherhdr_size - 2);
		let tag = VlanTag {
			tpid: U16::new(ETHERTYPE_VLAN),
			tci: U16::new(inf.vlantag)
		};
		tag.write_to(&mut hdr[etherhdr_size - 6..etherhdr_size - 2])
			.map_err(|_| truncated(etherhdr_size, available))?;
	}

	net_log!(
		LogLevel::Debug,
		"[ETH] {} tx {} -> {} type={:#06x} vlan={}",
		inf.name,
		inf.hwaddress,
		target,
		ethertype,
		inf.vlantag
	);

	inf.card.send(nb)?;
	Ok(())
}

/// Upper layer taking ARP packets.
pub trait ArpReceiver {
	/// The decoder frees `nb` afterwards whatever the outcome.
	fn arp_receive(&mut self, nb: &mut NetBuff, card: &NetCard, vlantag: u16) -> NetResult<()>;
}

/// Upper layer taking IPv4 and IPv6 packets. Owns the buffer from then on.
pub trait IpReceiver {
	fn ip_receive(
		&mut self,
		nb: NetBuff,
		card: &NetCard,
		hwaddress: &LinkAddress,
		src_hwaddress: &LinkAddress,
		vlantag: u16
	) -> NetResult<()>;
}

/// A received frame with its link headers removed.
#[derive(Debug, Clone, Copy)]
pub struct StrippedFrame {
	pub dst: LinkAddress,
	pub src: LinkAddress,
	/// 0 when the frame carried no tag.
	pub vlantag: u16,
	pub encapsulation: Encapsulation
}

/// Removes the Ethernet header (and tag, LLC and SNAP headers where present)
/// from `nb`, leaving the data at the network-layer payload.
pub fn strip_headers(nb: &mut NetBuff) -> Result<StrippedFrame, BufferError> {
	let mut etherhdr_size = ETH_HLEN;
	let mut vlantag = 0;

	if nb.len() < ETH_HLEN {
		return Err(truncated(ETH_HLEN, nb.len()));
	}

	if nb.data()[ETH_HLEN - 2..ETH_HLEN] == ETHERTYPE_VLAN.to_be_bytes() {
		etherhdr_size += VLAN_TAG_LEN;
		if nb.len() < etherhdr_size {
			return Err(truncated(etherhdr_size, nb.len()));
		}
		let data = nb.data_mut();
		let (tag, _) = VlanTag::read_from_prefix(&data[ETH_HLEN - 2..])
			.map_err(|_| truncated(etherhdr_size, data.len()))?;
		vlantag = tag.tci.get();
		// real type back to where an untagged header keeps it
		data.copy_within(etherhdr_size - 2..etherhdr_size, etherhdr_size - 6);
	}

	let (eth, _) =
		EtherHdr::read_from_prefix(nb.data()).map_err(|_| truncated(ETH_HLEN, nb.len()))?;
	nb.pull(etherhdr_size)?;

	let encapsulation = classify(eth.ethertype.get(), nb.data())?;
	nb.pull(encapsulation.consumed_len())?;

	Ok(StrippedFrame {
		dst: LinkAddress::ethernet(eth.dst),
		src: LinkAddress::ethernet(eth.src),
		vlantag,
		encapsulation
	})
}

/// Decodes a frame received on `card` and hands the payload to the matching
/// upper layer. Unknown types are dropped silently.
pub fn recv_ethernet_packet<H>(mut nb: NetBuff, card: &NetCard, handlers: &mut H) -> NetResult<()>
where
	H: ArpReceiver + IpReceiver
{
	let frame = match strip_headers(&mut nb) {
		Ok(frame) => frame,
		Err(e) => {
			net_log!(LogLevel::Warn, "[ETH] {}: dropping frame: {}", card.name, e);
			nb.free();
			return Err(NetError::Buffer(e));
		}
	};

	let ethertype = frame.encapsulation.ethertype();
	net_log!(
		LogLevel::Debug,
		"[ETH] {} rx {} -> {} {:?} vlan={}",
		card.name,
		frame.src,
		frame.dst,
		frame.encapsulation,
		frame.vlantag
	);

	match ethertype {
		ETHERTYPE_ARP => {
			if let Err(e) = handlers.arp_receive(&mut nb, card, frame.vlantag) {
				net_log!(LogLevel::Debug, "[ETH] {}: arp: {}", card.name, e);
			}
			nb.free();
			Ok(())
		}
		ETHERTYPE_IP | ETHERTYPE_IP6 => {
			handlers.ip_receive(nb, card, &frame.dst, &frame.src, frame.vlantag)
		}
		_ => {
			net_log!(LogLevel::Debug, "[ETH] {}: unknown type={:#06x}", card.name, ethertype);
			nb.free();
			Ok(())
		}
	}
}
