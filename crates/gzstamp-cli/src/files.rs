use std::{env::current_dir, fs::read_to_string, io::Result};

use gzstamp::{FileList, ProjectDir};
use tracing::debug;

use crate::args::FilesArgs;

/// Gather the listed files and the resolver for them.
pub(crate) fn collect(args: &FilesArgs) -> Result<(FileList, ProjectDir)> {
	let root = match &args.project_dir {
		Some(dir) => dir.to_owned(),
		None => current_dir()?,
	};
	let resolver = ProjectDir::new(root);
	debug!(root = ?resolver.root(), "project root");

	let mut files: FileList = args.paths.iter().map(String::as_str).collect();
	for list in &args.list {
		debug!(?list, "read file list");
		files.extend_block(&read_to_string(list)?);
	}

	debug!(count=%files.len(), "collected files");
	Ok((files, resolver))
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use gzstamp::Resolve;
	use tempfile::TempDir;

	use super::*;

	#[test]
	fn positional_paths_come_before_lists() {
		let dir = TempDir::new().unwrap();
		let embed_files = dir.path().join("embed_files");
		let embed_txtfiles = dir.path().join("embed_txtfiles");
		std::fs::write(&embed_files, "data/a.gz\n\n  data/b.gz  \n").unwrap();
		std::fs::write(&embed_txtfiles, "data/c.txt\n").unwrap();

		let (files, resolver) = collect(&FilesArgs {
			project_dir: Some(dir.path().to_owned()),
			list: vec![embed_files, embed_txtfiles],
			paths: vec!["first.gz".into()],
		})
		.unwrap();

		assert_eq!(
			files.into_iter().collect::<Vec<_>>(),
			["first.gz", "data/a.gz", "data/b.gz", "data/c.txt"]
		);
		assert_eq!(resolver.resolve("data/a.gz"), dir.path().join("data/a.gz"));
	}

	#[test]
	fn missing_list_is_an_error() {
		let err = collect(&FilesArgs {
			project_dir: Some(PathBuf::from(".")),
			list: vec![PathBuf::from("/nonexistent/gzstamp/list")],
			paths: Vec::new(),
		})
		.unwrap_err();
		assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
	}
}
