// lib.rs

/*
Ethernet link layer: framing of outbound packets and decoding of received frames.
*/

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod config;
pub mod error;
pub mod net;
pub mod utils;

pub use error::{BufferError, ConfigError, DeviceError, NetError, NetResult};
