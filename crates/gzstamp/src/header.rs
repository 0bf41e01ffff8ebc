//! Gzip header structure.
//!
//! Only the fixed 10-byte prefix of a gzip member is modelled. The magic is not asserted while
//! decoding: a file that merely looks like it could be gzip is still decoded, and callers use
//! [`GzipHeader::is_gzip`] to decide whether to touch it.

use deku::prelude::*;

use crate::{
	constants::{GZIP_MAGIC, HEADER_LENGTH},
	error::{Error, Result},
};

/// Gzip member header (fixed part).
///
/// [RFC 1952](https://www.rfc-editor.org/rfc/rfc1952#section-2.3.1)
#[derive(Clone, Copy, Debug, Eq, PartialEq, DekuRead, DekuWrite)]
#[deku(endian = "little")]
pub struct GzipHeader {
	/// Magic number. Should match [`GZIP_MAGIC`].
	pub magic: [u8; 2],

	/// Compression method.
	pub method: u8,

	/// Flags.
	pub flags: u8,

	/// Modification time, in seconds since the Unix epoch.
	pub mtime: u32,

	/// Extra flags.
	pub extra_flags: u8,

	/// OS identifier. See [`os`][crate::constants::os].
	pub os: u8,
}

impl GzipHeader {
	/// Decode a header from exactly [`HEADER_LENGTH`] bytes.
	pub fn from_array(bytes: &[u8; HEADER_LENGTH]) -> Result<Self> {
		let (_, header) = Self::from_bytes((&bytes[..], 0)).map_err(Error::Parse)?;
		Ok(header)
	}

	/// Encode back to bytes.
	pub fn to_array(&self) -> Result<[u8; HEADER_LENGTH]> {
		let bytes = self.to_bytes().map_err(Error::Parse)?;
		let mut array = [0; HEADER_LENGTH];
		array.copy_from_slice(&bytes);
		Ok(array)
	}

	/// Whether the magic bytes identify a gzip stream.
	pub fn is_gzip(&self) -> bool {
		self.magic == GZIP_MAGIC
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_fields_little_endian() {
		let header =
			GzipHeader::from_array(&[0x1F, 0x8B, 0x08, 0x00, 0x11, 0x22, 0x33, 0x44, 0x00, 0x05])
				.unwrap();
		assert!(header.is_gzip());
		assert_eq!(header.method, crate::constants::METHOD_DEFLATE);
		assert_eq!(header.flags, 0);
		assert_eq!(header.mtime, 0x4433_2211);
		assert_eq!(header.extra_flags, 0);
		assert_eq!(header.os, 5);
	}

	#[test]
	fn other_magic_is_not_gzip() {
		let header = GzipHeader::from_array(b"hello, wor").unwrap();
		assert!(!header.is_gzip());
	}

	#[test]
	fn encodes_patched_fields_in_place() {
		let mut header =
			GzipHeader::from_array(&[0x1F, 0x8B, 0x08, 0x08, 0, 0, 0, 0, 0x02, 0x03]).unwrap();
		header.mtime = 1;
		header.os = 10;
		assert_eq!(
			header.to_array().unwrap(),
			[0x1F, 0x8B, 0x08, 0x08, 0x01, 0, 0, 0, 0x02, 0x0A]
		);
	}
}
