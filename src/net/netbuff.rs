//!
//! netbuff.rs
//!
//! Packet buffers with adjustable head and tail.
//!
//! ```text
//! storage: [ headroom | data ........ | tailroom ]
//!                     ^data          ^tail
//! ```
//!
//! `push` grows the data region towards the front (prepending a header),
//! `pull` shrinks it from the front (consuming a header).
//!

use alloc::{vec, vec::Vec};

use crate::error::BufferError;

/// Headroom reserved in front of outbound payloads for link-layer headers.
pub const MAX_LINK_HEADER_SIZE: usize = 64;

/// A contiguous packet buffer.
#[derive(Debug, Clone)]
pub struct NetBuff {
	storage: Vec<u8>,
	data: usize,
	tail: usize
}

impl NetBuff {
	/// Allocates `len` zeroed bytes with an empty data region at the start.
	pub fn alloc(len: usize) -> Self {
		Self {
			storage: vec![0; len],
			data: 0,
			tail: 0
		}
	}

	/// Wraps a received frame. There is no headroom.
	pub fn from_frame(frame: &[u8]) -> Self {
		Self {
			storage: frame.to_vec(),
			data: 0,
			tail: frame.len()
		}
	}

	/// Builds an outbound buffer holding `payload` behind
	/// [`MAX_LINK_HEADER_SIZE`] bytes of headroom.
	pub fn with_payload(payload: &[u8]) -> Self {
		let mut nb = Self::alloc(MAX_LINK_HEADER_SIZE + payload.len());
		nb.data = MAX_LINK_HEADER_SIZE;
		nb.tail = MAX_LINK_HEADER_SIZE + payload.len();
		nb.data_mut().copy_from_slice(payload);
		nb
	}

	/// Moves an empty data region forward by `len`, creating headroom.
	pub fn reserve(&mut self, len: usize) -> Result<(), BufferError> {
		let available = self.storage.len() - self.tail;
		if len > available {
			return Err(BufferError::NoTailroom {
				needed: len,
				available
			});
		}
		self.data += len;
		self.tail += len;
		Ok(())
	}

	/// Extends the tail by `len` bytes and returns the new region.
	pub fn put(&mut self, len: usize) -> Result<&mut [u8], BufferError> {
		let available = self.storage.len() - self.tail;
		if len > available {
			return Err(BufferError::NoTailroom {
				needed: len,
				available
			});
		}
		let start = self.tail;
		self.tail += len;
		Ok(&mut self.storage[start..self.tail])
	}

	/// Grows the data region by `len` bytes at the head.
	pub fn push(&mut self, len: usize) -> Result<(), BufferError> {
		if len > self.data {
			return Err(BufferError::NoHeadroom {
				needed: len,
				available: self.data
			});
		}
		self.data -= len;
		Ok(())
	}

	/// Consumes `len` bytes from the head of the data region.
	pub fn pull(&mut self, len: usize) -> Result<(), BufferError> {
		let available = self.len();
		if len > available {
			return Err(BufferError::Truncated {
				needed: len,
				available
			});
		}
		self.data += len;
		Ok(())
	}

	/// Releases the buffer.
	pub fn free(self) {}

	pub fn data(&self) -> &[u8] {
		&self.storage[self.data..self.tail]
	}

	pub fn data_mut(&mut self) -> &mut [u8] {
		&mut self.storage[self.data..self.tail]
	}

	pub fn len(&self) -> usize {
		self.tail - self.data
	}

	pub fn is_empty(&self) -> bool {
		self.tail == self.data
	}

	pub fn headroom(&self) -> usize {
		self.data
	}
}
