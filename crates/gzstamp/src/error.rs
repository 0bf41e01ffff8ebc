//! Error types for [`Normalizer`](crate::Normalizer).
//!
//! Files that are too short or aren't gzip are not errors: they are skipped. What's left is
//! I/O, which is passed through untouched so the build system reports the native message.

use deku::DekuError;
use miette::Diagnostic;
use thiserror::Error;

/// Convenience return type.
pub type Result<T> = std::result::Result<T, Error>;

/// Combined return error type.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
	/// I/O error.
	#[error(transparent)]
	Io(#[from] std::io::Error),

	/// Header decoding or encoding error.
	#[error("gzip header: {0}")]
	Parse(DekuError),
}

impl Error {
	/// The underlying I/O error, if that's what this is.
	pub fn as_io(&self) -> Option<&std::io::Error> {
		match self {
			Self::Io(err) => Some(err),
			Self::Parse(_) => None,
		}
	}
}
