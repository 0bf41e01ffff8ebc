//! Gzstamp: reproducible gzip headers for embedded assets.
//!
//! Gzip headers carry a modification time and an OS identifier byte, both of which depend on
//! the machine that produced the file. When gzipped assets are linked into a firmware image,
//! that makes otherwise identical builds differ. This crate rewrites those two fields, in
//! place, to fixed values chosen by the caller.
//!
//! ```no_run
//! use gzstamp::{Normalizer, ProjectDir, Target};
//!
//! let changes = Normalizer::new(Target::os(10))
//! 	.with_resolver(ProjectDir::new("/path/to/project"))
//! 	.normalize(["$PROJECT_DIR/data/index.html.gz"])?;
//! for change in changes {
//! 	println!("{change}");
//! }
//! # Ok::<(), gzstamp::Error>(())
//! ```

#![warn(clippy::unwrap_used, missing_docs)]
#![deny(rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod constants;
pub mod error;
pub mod file_list;
pub mod header;
pub mod normalize;
pub mod resolve;
pub mod target;

#[doc(inline)]
pub use self::{
	error::{Error, Result},
	file_list::FileList,
	header::GzipHeader,
	normalize::{inspect, normalize, Change, Field, Normalizer},
	resolve::{ProjectDir, Resolve, Verbatim},
	target::Target,
};
