use std::io::{stdout, Write};

use clap::Parser;
use gzstamp::{Normalizer, Target};
use miette::IntoDiagnostic;
use tracing::{info, warn};

use crate::{
	args::{FilesArgs, TargetArgs},
	files,
};

#[derive(Debug, Clone, Parser)]
pub struct FixArgs {
	#[command(flatten)]
	pub target: TargetArgs,

	#[command(flatten)]
	pub files: FilesArgs,
}

pub(crate) fn fix(args: FixArgs) -> miette::Result<()> {
	fix_to(args, &mut stdout().lock()).map(drop)
}

/// Normalise, writing each change to `out` as it's made.
///
/// Returns the number of files modified.
pub(crate) fn fix_to(args: FixArgs, out: &mut impl Write) -> miette::Result<usize> {
	let target = Target::from(&args.target);
	if target.is_empty() {
		warn!("neither --mtime nor --os given, nothing to do");
		return Ok(0);
	}

	let (files, resolver) = files::collect(&args.files).into_diagnostic()?;

	info!(files=%files.len(), %target, "normalise headers");
	let mut output = Ok(());
	let touched = Normalizer::new(target)
		.with_resolver(resolver)
		.normalize_each(&files, |change| {
			if output.is_ok() {
				output = writeln!(out, "{change}");
			}
		})?;
	output.into_diagnostic()?;

	info!(%touched, "done");
	Ok(touched)
}
