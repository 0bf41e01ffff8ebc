use std::io::{stdout, Write};

use clap::Parser;
use gzstamp::{Normalizer, Target};
use miette::{Diagnostic, IntoDiagnostic};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
	args::{FilesArgs, TargetArgs},
	files,
};

#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
	#[command(flatten)]
	pub target: TargetArgs,

	#[command(flatten)]
	pub files: FilesArgs,
}

#[derive(Error, Diagnostic, Debug, PartialEq, Eq)]
#[error("{count} file(s) have gzip headers that aren't normalised")]
#[diagnostic(help("run `gzstamp fix` with the same arguments to rewrite them"))]
pub struct NotNormalised {
	pub count: usize,
}

pub(crate) fn check(args: CheckArgs) -> miette::Result<()> {
	check_to(args, &mut stdout().lock())
}

/// Dry-run normalisation, writing each field that differs to `out`.
pub(crate) fn check_to(args: CheckArgs, out: &mut impl Write) -> miette::Result<()> {
	let target = Target::from(&args.target);
	if target.is_empty() {
		warn!("neither --mtime nor --os given, nothing to check");
		return Ok(());
	}

	let (files, resolver) = files::collect(&args.files).into_diagnostic()?;

	info!(files=%files.len(), %target, "check headers");
	let mut output = Ok(());
	let count = Normalizer::new(target)
		.with_resolver(resolver)
		.dry_run(true)
		.normalize_each(&files, |change| {
			if output.is_ok() {
				output = writeln!(
					out,
					"{}: {} is {}, expected {}",
					change.path.display(),
					change.field,
					change.from,
					change.to
				);
			}
		})?;
	output.into_diagnostic()?;

	if count > 0 {
		return Err(NotNormalised { count }.into());
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::TempDir;

	use super::*;
	use crate::fix::{fix_to, FixArgs};

	const HEADER: [u8; 10] = [0x1F, 0x8B, 0x08, 0x00, 0x11, 0x22, 0x33, 0x44, 0x00, 0x05];

	fn files(dir: &TempDir, paths: &[&str]) -> FilesArgs {
		FilesArgs {
			project_dir: Some(dir.path().to_owned()),
			list: Vec::new(),
			paths: paths.iter().map(|path| path.to_string()).collect(),
		}
	}

	fn args(dir: &TempDir, os: Option<u8>, paths: &[&str]) -> CheckArgs {
		CheckArgs {
			target: TargetArgs { mtime: None, os },
			files: files(dir, paths),
		}
	}

	#[test]
	fn unnormalised_file_fails_without_writing() {
		let dir = TempDir::new().unwrap();
		let a = dir.path().join("a.gz");
		fs::write(&a, HEADER).unwrap();

		let mut out = Vec::new();
		let err = check_to(args(&dir, Some(10), &["a.gz", "a.gz"]), &mut out).unwrap_err();

		assert_eq!(
			err.downcast_ref::<NotNormalised>(),
			Some(&NotNormalised { count: 2 })
		);
		assert_eq!(
			String::from_utf8(out).unwrap(),
			format!("{0}: OS is 5, expected 10\n{0}: OS is 5, expected 10\n", a.display())
		);
		assert_eq!(fs::read(&a).unwrap(), HEADER);
	}

	#[test]
	fn passes_after_fix() {
		let dir = TempDir::new().unwrap();
		fs::write(dir.path().join("a.gz"), HEADER).unwrap();

		let err = check_to(args(&dir, Some(10), &["a.gz"]), &mut Vec::new()).unwrap_err();
		assert_eq!(
			err.downcast_ref::<NotNormalised>(),
			Some(&NotNormalised { count: 1 })
		);

		fix_to(
			FixArgs {
				target: TargetArgs {
					mtime: None,
					os: Some(10),
				},
				files: files(&dir, &["a.gz"]),
			},
			&mut Vec::new(),
		)
		.unwrap();

		let mut out = Vec::new();
		check_to(args(&dir, Some(10), &["a.gz"]), &mut out).unwrap();
		assert!(out.is_empty());
	}

	#[test]
	fn empty_target_returns_before_reading_files() {
		let dir = TempDir::new().unwrap();
		let mut out = Vec::new();
		check_to(args(&dir, None, &["missing.gz"]), &mut out).unwrap();
		assert!(out.is_empty());
	}
}
