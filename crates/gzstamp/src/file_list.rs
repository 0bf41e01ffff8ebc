//! Lists of files to normalise.
//!
//! Build configuration gives embedded files as newline-separated blocks of paths, one block per
//! configuration key. Lines are trimmed, and blank lines are dropped. Nothing is deduplicated.

use std::{iter::FromIterator, slice};

/// Ordered list of path strings.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FileList(Vec<String>);

impl FileList {
	/// Empty list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse a newline-separated block.
	pub fn from_block(block: &str) -> Self {
		let mut list = Self::new();
		list.extend_block(block);
		list
	}

	/// Append the paths of a newline-separated block.
	pub fn extend_block(&mut self, block: &str) {
		self.0.extend(
			block
				.lines()
				.map(str::trim)
				.filter(|line| !line.is_empty())
				.map(ToOwned::to_owned),
		);
	}

	/// Append one path.
	pub fn push(&mut self, path: impl Into<String>) {
		self.0.push(path.into());
	}

	/// Iterate over the paths.
	pub fn iter(&self) -> slice::Iter<'_, String> {
		self.0.iter()
	}

	/// Number of paths.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether there are no paths.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<'a> IntoIterator for &'a FileList {
	type Item = &'a String;
	type IntoIter = slice::Iter<'a, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl IntoIterator for FileList {
	type Item = String;
	type IntoIter = std::vec::IntoIter<String>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<S: Into<String>> FromIterator<S> for FileList {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self(iter.into_iter().map(Into::into).collect())
	}
}

impl<S: Into<String>> Extend<S> for FileList {
	fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
		self.0.extend(iter.into_iter().map(Into::into));
	}
}
