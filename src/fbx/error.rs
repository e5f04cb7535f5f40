use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, FbxError>;

/// Errors produced while loading, editing, and writing binary FBX scenes.
#[derive(Debug, Error)]
pub enum FbxError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Leading bytes are not the binary FBX magic.
	#[error("invalid header: not a binary FBX file")]
	InvalidHeader,
	/// File is an ASCII FBX document.
	#[error("ASCII FBX is not supported, re-export the scene as binary FBX")]
	AsciiUnsupported,
	/// File predates animation stacks or uses a record layout the loader does not know.
	#[error("unsupported FBX version {version} (expected 7000 or newer)")]
	UnsupportedVersion {
		/// Version number from the file header.
		version: u32,
	},
	/// Record tree could not be decoded.
	#[error("load: {message}")]
	Load {
		/// Decoder error rendered as text.
		message: String,
	},
	/// Record tree could not be encoded.
	#[error("write: {message}")]
	Write {
		/// Encoder error rendered as text.
		message: String,
	},
	/// Object name cannot be stored in the `name\0\x01class` encoding.
	#[error("invalid object name: {name:?}")]
	InvalidObjectName {
		/// Rejected name.
		name: String,
	},
	/// `rename` mode was requested without a replacement name.
	#[error("rename requires a new name")]
	MissingNewName,
	/// Path cannot be handled as text.
	#[error("path is not valid UTF-8: {path}")]
	NonUtf8Path {
		/// Lossy rendering of the path.
		path: String,
	},
}
