use std::io::{stdout, Write};

use chrono::{DateTime, Utc};
use clap::Parser;
use gzstamp::{
	constants::{os, MTIME_UNAVAILABLE},
	Resolve,
};
use miette::IntoDiagnostic;
use tracing::info;

use crate::{args::FilesArgs, files};

#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
	#[command(flatten)]
	pub files: FilesArgs,
}

pub(crate) fn inspect(args: InspectArgs) -> miette::Result<()> {
	inspect_to(args, &mut stdout().lock())
}

pub(crate) fn inspect_to(args: InspectArgs, out: &mut impl Write) -> miette::Result<()> {
	let (files, resolver) = files::collect(&args.files).into_diagnostic()?;

	info!(files=%files.len(), "inspect headers");
	for raw in &files {
		let path = resolver.resolve(raw);
		let Some(header) = gzstamp::inspect(&path)? else {
			writeln!(out, "{}: short or not gzip, skipped", path.display()).into_diagnostic()?;
			continue;
		};

		let mtime: String = match header.mtime {
			MTIME_UNAVAILABLE => "unset".into(),
			secs => DateTime::<Utc>::from_timestamp(secs.into(), 0)
				.map_or_else(|| "out of range".into(), |date| date.to_rfc3339()),
		};

		writeln!(
			out,
			"{}: mtime={} ({mtime}) os={} ({}) method={} flags=0x{:02X} xfl=0x{:02X}",
			path.display(),
			header.mtime,
			header.os,
			os::name(header.os),
			header.method,
			header.flags,
			header.extra_flags,
		)
		.into_diagnostic()?;
	}

	Ok(())
}
