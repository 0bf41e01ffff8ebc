//! Header normalisation.
//!
//! Each listed file goes through the same short pass: read up to the first 10 bytes, skip it if
//! that's not a full gzip header, compare against the [`Target`], and if anything differs reopen
//! the file read-write and overwrite just the differing fields. Nothing is cached between files
//! or between runs, so running twice is a no-op the second time.

use std::{
	fmt,
	fs::{File, OpenOptions},
	io::{Read, Seek, SeekFrom, Write},
	path::{Path, PathBuf},
};

use tracing::{debug, info, instrument, trace};

use crate::{
	constants::{HEADER_LENGTH, MTIME_OFFSET, OS_OFFSET},
	error::Result,
	header::GzipHeader,
	resolve::{Resolve, Verbatim},
	target::Target,
};

/// A header field that gets normalised.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Field {
	/// Modification time.
	Mtime,

	/// OS identifier byte.
	Os,
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Mtime => "MTime",
			Self::Os => "OS",
		})
	}
}

/// A field that was (or in a dry run, would be) rewritten.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Change {
	/// The resolved path of the file.
	pub path: PathBuf,

	/// Which field.
	pub field: Field,

	/// Value before.
	pub from: u32,

	/// Value after.
	pub to: u32,
}

impl fmt::Display for Change {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Changing {} in gzip header of '{}'.",
			self.field,
			self.path.display()
		)
	}
}

/// Gzip header normaliser.
///
/// Holds the [`Target`] values and the [`Resolve`] implementation used to turn listed path
/// strings into files. Defaults to [`Verbatim`] resolution.
#[derive(Clone, Debug)]
pub struct Normalizer<R = Verbatim> {
	target: Target,
	resolver: R,
	dry_run: bool,
}

impl Normalizer {
	/// New normaliser with verbatim path resolution.
	pub fn new(target: Target) -> Self {
		Self {
			target,
			resolver: Verbatim,
			dry_run: false,
		}
	}
}

impl<R: Resolve> Normalizer<R> {
	/// Use a different path resolver.
	pub fn with_resolver<S: Resolve>(self, resolver: S) -> Normalizer<S> {
		Normalizer {
			target: self.target,
			resolver,
			dry_run: self.dry_run,
		}
	}

	/// Only report changes, never write.
	pub fn dry_run(mut self, dry_run: bool) -> Self {
		self.dry_run = dry_run;
		self
	}

	/// Normalise every listed file, collecting the changes made.
	///
	/// If an I/O error occurs, files before the failing one stay patched, and the error is
	/// returned as-is. Use [`normalize_each`](Self::normalize_each) to observe those changes.
	pub fn normalize<I, S>(&self, paths: I) -> Result<Vec<Change>>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut changes = Vec::new();
		self.normalize_each(paths, |change| changes.push(change))?;
		Ok(changes)
	}

	/// Normalise every listed file, calling back as soon as each field is changed.
	///
	/// Returns the number of files that were (or would be) modified.
	#[instrument(level = "debug", skip(self, paths, on_change), fields(target = %self.target, dry_run = self.dry_run))]
	pub fn normalize_each<I, S>(&self, paths: I, mut on_change: impl FnMut(Change)) -> Result<usize>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		if self.target.is_empty() {
			debug!("no target values, nothing to do");
			return Ok(0);
		}

		let mut touched = 0;
		for raw in paths {
			let path = self.resolver.resolve(raw.as_ref());
			if self.normalize_file(&path, &mut on_change)? {
				touched += 1;
			}
		}

		Ok(touched)
	}

	/// Normalise one resolved file.
	///
	/// Returns whether anything was (or would be) changed.
	#[instrument(level = "debug", skip(self, on_change))]
	fn normalize_file(&self, path: &Path, on_change: &mut impl FnMut(Change)) -> Result<bool> {
		let Some(header) = inspect(path)? else {
			return Ok(false);
		};

		let update_mtime = self.target.wants_mtime(&header);
		let update_os = self.target.wants_os(&header);
		if !update_mtime && !update_os {
			debug!("header already normalised");
			return Ok(false);
		}

		let mut file = if self.dry_run {
			None
		} else {
			Some(OpenOptions::new().read(true).write(true).open(path)?)
		};

		if let (true, Some(mtime)) = (update_mtime, self.target.mtime) {
			if let Some(file) = file.as_mut() {
				file.seek(SeekFrom::Start(MTIME_OFFSET))?;
				file.write_all(&mtime.to_le_bytes())?;
			}

			let change = Change {
				path: path.to_owned(),
				field: Field::Mtime,
				from: header.mtime,
				to: mtime,
			};
			info!(from = %change.from, to = %change.to, "{change}");
			on_change(change);
		}

		if let (true, Some(os)) = (update_os, self.target.os) {
			if let Some(file) = file.as_mut() {
				file.seek(SeekFrom::Start(OS_OFFSET))?;
				file.write_all(&[os])?;
			}

			let change = Change {
				path: path.to_owned(),
				field: Field::Os,
				from: header.os.into(),
				to: os.into(),
			};
			info!(from = %change.from, to = %change.to, "{change}");
			on_change(change);
		}

		Ok(true)
	}
}

/// Read the gzip header of a file.
///
/// Returns `None` if the file is shorter than a header or doesn't have the gzip magic. Any
/// suffix is accepted: a `.gz` file that isn't gzip is skipped like any other.
#[instrument(level = "trace")]
pub fn inspect(path: &Path) -> Result<Option<GzipHeader>> {
	let mut bytes = [0; HEADER_LENGTH];
	let read = read_up_to(File::open(path)?, &mut bytes)?;
	if read < HEADER_LENGTH {
		debug!(%read, "too short for a gzip header, skipping");
		return Ok(None);
	}

	let header = GzipHeader::from_array(&bytes)?;
	trace!(?header, "read header");
	if !header.is_gzip() {
		debug!(magic = ?header.magic, "not gzip, skipping");
		return Ok(None);
	}

	Ok(Some(header))
}

/// Normalise a list of paths, used as they are.
///
/// Shorthand for a [`Normalizer`] with [`Verbatim`] resolution.
pub fn normalize<I, S>(paths: I, mtime: Option<u32>, os: Option<u8>) -> Result<Vec<Change>>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	Normalizer::new(Target::new(mtime, os)).normalize(paths)
}

/// Fill as much of `buf` as the reader allows, stopping early only at end of file.
fn read_up_to(mut reader: impl Read, buf: &mut [u8]) -> std::io::Result<usize> {
	let mut filled = 0;
	while filled < buf.len() {
		match reader.read(&mut buf[filled..]) {
			Ok(0) => break,
			Ok(n) => filled += n,
			Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
			Err(err) => return Err(err),
		}
	}
	Ok(filled)
}
