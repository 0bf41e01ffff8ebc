//! Gzip header layout.
//!
//! See [RFC 1952 §2.3](https://www.rfc-editor.org/rfc/rfc1952#section-2.3).

/// Magic bytes
pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Length of the fixed part of the header.
///
/// Optional extensions (extra field, name, comment, header CRC) may follow, but are never
/// looked at here.
pub const HEADER_LENGTH: usize = 10;

/// Offset of the little-endian u32 modification time.
pub const MTIME_OFFSET: u64 = 4;

/// Offset of the OS identifier byte.
pub const OS_OFFSET: u64 = 9;

/// Compression method: deflate.
pub const METHOD_DEFLATE: u8 = 8;

/// Modification time meaning "no timestamp available".
pub const MTIME_UNAVAILABLE: u32 = 0;

/// OS identifier codes.
///
/// The normaliser treats the OS byte as opaque; these are only used for display.
#[rustfmt::skip]
pub mod os {
	/// FAT filesystem (MS-DOS, OS/2, NT/Win32)
	pub const FAT: u8 = 0;
	/// Amiga
	pub const AMIGA: u8 = 1;
	/// VMS (or OpenVMS)
	pub const VMS: u8 = 2;
	/// Unix
	pub const UNIX: u8 = 3;
	/// VM/CMS
	pub const VM_CMS: u8 = 4;
	/// Atari TOS
	pub const ATARI_TOS: u8 = 5;
	/// HPFS filesystem (OS/2, NT)
	pub const HPFS: u8 = 6;
	/// Macintosh
	pub const MACINTOSH: u8 = 7;
	/// Z-System
	pub const Z_SYSTEM: u8 = 8;
	/// CP/M
	pub const CP_M: u8 = 9;
	/// TOPS-20
	pub const TOPS_20: u8 = 10;
	/// NTFS filesystem (NT)
	pub const NTFS: u8 = 11;
	/// QDOS
	pub const QDOS: u8 = 12;
	/// Acorn RISCOS
	pub const RISCOS: u8 = 13;
	/// unknown
	pub const UNKNOWN: u8 = 255;

	/// Human-readable name of an OS code.
	pub fn name(code: u8) -> &'static str {
		match code {
			FAT => "FAT",
			AMIGA => "Amiga",
			VMS => "VMS",
			UNIX => "Unix",
			VM_CMS => "VM/CMS",
			ATARI_TOS => "Atari TOS",
			HPFS => "HPFS",
			MACINTOSH => "Macintosh",
			Z_SYSTEM => "Z-System",
			CP_M => "CP/M",
			TOPS_20 => "TOPS-20",
			NTFS => "NTFS",
			QDOS => "QDOS",
			RISCOS => "RISCOS",
			UNKNOWN => "unknown",
			_ => "unassigned",
		}
	}
}
