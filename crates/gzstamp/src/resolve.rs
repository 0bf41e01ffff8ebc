//! Path resolution trait and implementations.
//!
//! Build configuration lists files as strings relative to the project, sometimes with a
//! `$PROJECT_DIR` placeholder. The [`Normalizer`](crate::Normalizer) doesn't know about any of
//! that: it hands each string to a [`Resolve`] implementation and opens whatever comes back.
//!
//! This is implemented for closures, so tests and callers with their own conventions can pass
//! `|raw: &str| ...` directly.

use std::path::{Path, PathBuf};

/// Turn a listed path string into a filesystem path.
pub trait Resolve {
	/// Resolve one path string.
	fn resolve(&self, raw: &str) -> PathBuf;
}

impl<F> Resolve for F
where
	F: Fn(&str) -> PathBuf,
{
	fn resolve(&self, raw: &str) -> PathBuf {
		self(raw)
	}
}

/// Use path strings as they are.
#[derive(Clone, Copy, Debug, Default)]
pub struct Verbatim;

impl Resolve for Verbatim {
	fn resolve(&self, raw: &str) -> PathBuf {
		PathBuf::from(raw)
	}
}

/// Resolve path strings against a project root.
///
/// `$PROJECT_DIR` and `${PROJECT_DIR}` are replaced by the root, then any path that is still
/// relative is joined onto the root.
#[derive(Clone, Debug)]
pub struct ProjectDir {
	root: PathBuf,
}

const BRACED: &str = "${PROJECT_DIR}";
const BARE: &str = "$PROJECT_DIR";

impl ProjectDir {
	/// New resolver for this project root.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	/// The project root.
	pub fn root(&self) -> &Path {
		&self.root
	}
}

impl Resolve for ProjectDir {
	fn resolve(&self, raw: &str) -> PathBuf {
		let root = self.root.to_string_lossy();
		let path = PathBuf::from(substitute(&raw.replace(BRACED, &root), &root));
		if path.is_absolute() {
			path
		} else {
			self.root.join(path)
		}
	}
}

/// Replace the bare placeholder, but not where it's the prefix of a longer variable name.
fn substitute(raw: &str, root: &str) -> String {
	let mut out = String::with_capacity(raw.len());
	let mut rest = raw;
	while let Some(at) = rest.find(BARE) {
		let after = &rest[at + BARE.len()..];
		out.push_str(&rest[..at]);
		if after.starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_') {
			out.push_str(BARE);
		} else {
			out.push_str(root);
		}
		rest = after;
	}
	out.push_str(rest);
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbatim_is_identity() {
		assert_eq!(Verbatim.resolve("data/a.gz"), PathBuf::from("data/a.gz"));
	}

	#[test]
	fn project_dir_joins_relative() {
		let resolver = ProjectDir::new("/work/fw");
		assert_eq!(
			resolver.resolve("data/a.gz"),
			PathBuf::from("/work/fw/data/a.gz")
		);
	}

	#[test]
	fn project_dir_substitutes_placeholders() {
		let resolver = ProjectDir::new("/work/fw");
		assert_eq!(
			resolver.resolve("$PROJECT_DIR/data/a.gz"),
			PathBuf::from("/work/fw/data/a.gz")
		);
		assert_eq!(
			resolver.resolve("${PROJECT_DIR}/data/b.gz"),
			PathBuf::from("/work/fw/data/b.gz")
		);
	}

	#[test]
	fn project_dir_leaves_longer_variables_alone() {
		let resolver = ProjectDir::new("/work/fw");
		assert_eq!(
			resolver.resolve("$PROJECT_DIRECTORY/a.gz"),
			PathBuf::from("/work/fw/$PROJECT_DIRECTORY/a.gz")
		);
		assert_eq!(
			resolver.resolve("$PROJECT_DIR_2/a.gz"),
			PathBuf::from("/work/fw/$PROJECT_DIR_2/a.gz")
		);
		assert_eq!(
			resolver.resolve("$PROJECT_DIR/$PROJECT_DIRX/a.gz"),
			PathBuf::from("/work/fw/$PROJECT_DIRX/a.gz")
		);
	}

	#[test]
	fn project_dir_root() {
		assert_eq!(ProjectDir::new("/work/fw").root(), Path::new("/work/fw"));
	}

	#[test]
	fn project_dir_keeps_absolute() {
		let resolver = ProjectDir::new("/work/fw");
		assert_eq!(resolver.resolve("/tmp/c.gz"), PathBuf::from("/tmp/c.gz"));
	}

	#[test]
	fn closures_resolve() {
		let resolver = |raw: &str| PathBuf::from("/assets").join(raw);
		assert_eq!(resolver.resolve("x.gz"), PathBuf::from("/assets/x.gz"));
	}
}
