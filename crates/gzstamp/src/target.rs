//! Desired header values.

use std::fmt;

use crate::header::GzipHeader;

/// The values to normalise headers to.
///
/// Each field is independent: `None` means that field is left alone whatever its value.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Target {
	/// Desired modification time.
	pub mtime: Option<u32>,

	/// Desired OS identifier byte.
	pub os: Option<u8>,
}

impl Target {
	/// Target both fields, either optionally.
	pub fn new(mtime: Option<u32>, os: Option<u8>) -> Self {
		Self { mtime, os }
	}

	/// Target only the modification time.
	pub fn mtime(mtime: u32) -> Self {
		Self::new(Some(mtime), None)
	}

	/// Target only the OS byte.
	pub fn os(os: u8) -> Self {
		Self::new(None, Some(os))
	}

	/// Whether there's nothing to normalise at all.
	pub fn is_empty(&self) -> bool {
		self.mtime.is_none() && self.os.is_none()
	}

	/// Whether the header's modification time needs rewriting.
	pub fn wants_mtime(&self, header: &GzipHeader) -> bool {
		self.mtime.map_or(false, |mtime| header.mtime != mtime)
	}

	/// Whether the header's OS byte needs rewriting.
	pub fn wants_os(&self, header: &GzipHeader) -> bool {
		self.os.map_or(false, |os| header.os != os)
	}
}

impl fmt::Display for Target {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match (self.mtime, self.os) {
			(None, None) => write!(f, "nothing"),
			(Some(mtime), None) => write!(f, "mtime={mtime}"),
			(None, Some(os)) => write!(f, "os={os}"),
			(Some(mtime), Some(os)) => write!(f, "mtime={mtime} os={os}"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn header(mtime: u32, os: u8) -> GzipHeader {
		GzipHeader {
			magic: crate::constants::GZIP_MAGIC,
			method: 8,
			flags: 0,
			mtime,
			extra_flags: 0,
			os,
		}
	}

	#[test]
	fn absent_fields_never_want_changes() {
		let target = Target::default();
		assert!(target.is_empty());
		assert!(!target.wants_mtime(&header(123, 3)));
		assert!(!target.wants_os(&header(123, 3)));
	}

	#[test]
	fn only_differing_fields_are_wanted() {
		let target = Target::new(Some(0), Some(10));
		assert!(target.wants_mtime(&header(123, 10)));
		assert!(!target.wants_os(&header(123, 10)));
		assert!(!target.wants_mtime(&header(0, 3)));
		assert!(target.wants_os(&header(0, 3)));
	}
}
