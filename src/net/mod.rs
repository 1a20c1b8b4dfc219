//!
//! net/mod.rs
//!
//! Network module declaration.
//!

pub mod card;
pub mod ethernet;
pub mod link;
pub mod netbuff;

// Re-exports
pub use card::{CardDriver, NetCard, NetworkLevelInterface};
pub use ethernet::{ArpReceiver, Encapsulation, IpReceiver, recv_ethernet_packet, send_ethernet_packet};
pub use link::{LinkAddress, LinkProtocol};
pub use netbuff::NetBuff;
