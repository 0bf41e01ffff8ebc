use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use gzstamp::Target;

use crate::{check::CheckArgs, fix::FixArgs, inspect::InspectArgs};

/// Normalise gzip headers of embedded assets for reproducible builds.
///
/// Gzip headers record when and on what OS a file was compressed. Gzstamp rewrites those fields
/// to fixed values, in place, so gzipped assets come out byte-identical on every build machine.
#[derive(Debug, Clone, Parser)]
#[command(
	name = "gzstamp",
	bin_name = "gzstamp",
	author,
	version,
	after_help = "Want more detail? Try the long '--help' flag!",
	after_long_help = "Didn't expect this much output? Use the short '-h' flag to get short help."
)]
#[cfg_attr(debug_assertions, command(before_help = "⚠ DEBUG BUILD ⚠"))]
pub struct Args {
	/// Set diagnostic log level.
	///
	/// This enables diagnostic logging, which is useful for investigating bugs. Use multiple
	/// times to increase verbosity.
	///
	/// You may want to use with '--log-file' to avoid polluting your terminal.
	///
	/// If $RUST_LOG is set, this flag is ignored.
	#[arg(long, short, action = ArgAction::Count)]
	pub verbose: u8,

	/// Write diagnostic logs to a file.
	///
	/// This writes diagnostic logs to a file, instead of the terminal, in JSON format. If the path
	/// is a directory, a file named 'gzstamp.<timestamp>.log' is created in it.
	#[arg(
		long,
		value_hint = ValueHint::AnyPath,
		value_name = "PATH",
	)]
	pub log_file: Option<PathBuf>,

	#[command(subcommand)]
	pub action: Action,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Action {
	/// Rewrite gzip headers in place.
	Fix(FixArgs),

	/// Report gzip headers that aren't normalised, without changing anything.
	Check(CheckArgs),

	/// Print gzip header fields.
	Inspect(InspectArgs),
}

/// Where the list of files comes from.
#[derive(Debug, Clone, Parser)]
pub struct FilesArgs {
	/// Project root.
	///
	/// Relative paths are resolved against this directory, and '$PROJECT_DIR' in paths is
	/// replaced by it. Defaults to the current directory.
	#[arg(
		long,
		value_hint = ValueHint::DirPath,
		value_name = "DIR",
	)]
	pub project_dir: Option<PathBuf>,

	/// Read more paths from a file.
	///
	/// The file holds one path per line, like the 'board_build.embed_files' block of a build
	/// configuration. Blank lines are ignored. Can be given multiple times; lists are appended
	/// after the positional paths, in order.
	#[arg(
		long,
		value_hint = ValueHint::FilePath,
		value_name = "FILE",
	)]
	pub list: Vec<PathBuf>,

	/// Files to process.
	///
	/// Files don't need a '.gz' suffix: anything listed is checked for a gzip header, and
	/// anything that isn't gzip is left alone.
	#[arg(value_name = "PATH")]
	pub paths: Vec<String>,
}

/// Values to normalise to.
#[derive(Debug, Clone, Parser)]
pub struct TargetArgs {
	/// Set the modification time field to this value.
	///
	/// Seconds since the Unix epoch; 0 means "no timestamp". Left alone if not given.
	#[arg(long, value_name = "SECONDS")]
	pub mtime: Option<u32>,

	/// Set the OS identifier byte to this value.
	///
	/// Any value 0-255. 10 is a common choice for reproducible firmware assets. Left alone if
	/// not given.
	#[arg(long, value_name = "BYTE")]
	pub os: Option<u8>,
}

impl From<&TargetArgs> for Target {
	fn from(args: &TargetArgs) -> Self {
		Target::new(args.mtime, args.os)
	}
}
