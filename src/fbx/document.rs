use std::fs;
use std::io::Cursor;
use std::path::Path;

use fbxcel::low::{FbxHeader, FbxVersion};
use fbxcel::tree::any::AnyTree;
use fbxcel::tree::v7400::Tree;
use fbxcel::writer::v7400::binary::{FbxFooter, Writer};

use crate::fbx::{FbxError, Node, Result};

const ASCII_PREFIX: &[u8] = b"; FBX";

/// A loaded binary FBX scene: its version and top-level nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct FbxDocument {
	/// FBX version encoded as an integer (for example `7400`).
	pub version: u32,
	/// Top-level nodes (`FBXHeaderExtension`, `Objects`, `Connections`, ...).
	pub nodes: Vec<Node>,
}

impl FbxDocument {
	/// Oldest version carrying `AnimationStack` objects.
	pub const MIN_VERSION: u32 = 7000;

	/// Create an empty document of the given version.
	pub fn new(version: u32) -> Self {
		Self { version, nodes: Vec::new() }
	}

	/// Read and decode a binary FBX file.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let raw = fs::read(path)?;
		Self::from_bytes(&raw)
	}

	/// Decode a binary FBX file held in memory.
	pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
		if bytes.starts_with(ASCII_PREFIX) {
			return Err(FbxError::AsciiUnsupported);
		}

		let header = FbxHeader::load(bytes).map_err(|_| FbxError::InvalidHeader)?;
		let version = header.version().raw();
		if version < Self::MIN_VERSION {
			return Err(FbxError::UnsupportedVersion { version });
		}

		let tree = match AnyTree::from_seekable_reader(Cursor::new(bytes)).map_err(|err| FbxError::Load { message: err.to_string() })? {
			AnyTree::V7400(_, tree, _) => tree,
			_ => return Err(FbxError::UnsupportedVersion { version }),
		};

		let nodes = tree.root().children().map(Node::from_handle).collect();
		Ok(Self { version, nodes })
	}

	/// Encode the document as binary FBX.
	pub fn to_bytes(&self) -> Result<Vec<u8>> {
		let mut tree = Tree::default();
		let root = tree.root().node_id();
		for node in &self.nodes {
			node.append_to(&mut tree, root);
		}

		let mut sink = Cursor::new(Vec::new());
		{
			let mut writer = Writer::new(&mut sink, FbxVersion::new(self.version)).map_err(write_error)?;
			writer.write_tree(&tree).map_err(write_error)?;
			writer.finalize_and_flush(&FbxFooter::default()).map_err(write_error)?;
		}
		Ok(sink.into_inner())
	}

	/// Encode and write the document to `path`.
	pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
		let bytes = self.to_bytes()?;
		fs::write(path, bytes)?;
		Ok(())
	}

	/// First top-level node named `name`.
	pub fn node(&self, name: &str) -> Option<&Node> {
		self.nodes.iter().find(|node| node.name == name)
	}

	/// Mutable first top-level node named `name`.
	pub fn node_mut(&mut self, name: &str) -> Option<&mut Node> {
		self.nodes.iter_mut().find(|node| node.name == name)
	}
}

fn write_error(err: impl std::fmt::Display) -> FbxError {
	FbxError::Write { message: err.to_string() }
}
