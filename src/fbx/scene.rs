use crate::fbx::{FbxDocument, FbxError, Node, Result, attr_i64, attr_str};

const NAME_SEPARATOR: &str = "\0\u{1}";

/// Binary FBX object name, stored as `name\0\x01class`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectName<'a> {
	/// User-visible name.
	pub name: &'a str,
	/// Class suffix (`Model`, `AnimStack`, ...); empty when absent.
	pub class: &'a str,
}

impl<'a> ObjectName<'a> {
	/// Split a raw name attribute.
	pub fn parse(raw: &'a str) -> Self {
		match raw.split_once(NAME_SEPARATOR) {
			Some((name, class)) => Self { name, class },
			None => Self { name: raw, class: "" },
		}
	}

	/// Encode the same class with a different name.
	pub fn renamed(&self, name: &str) -> String {
		if self.class.is_empty() {
			return name.to_owned();
		}
		format!("{name}{NAME_SEPARATOR}{}", self.class)
	}
}

/// Reject names that cannot round-trip through the `name\0\x01class` encoding.
pub fn validate_object_name(name: &str) -> Result<()> {
	if name.contains('\0') {
		return Err(FbxError::InvalidObjectName { name: name.to_owned() });
	}
	Ok(())
}

/// Object id: the first attribute of an `Objects` child.
pub fn object_id(node: &Node) -> Option<i64> {
	attr_i64(node.first_attribute()?)
}

/// Object name: the second attribute of an `Objects` child.
pub fn object_name(node: &Node) -> Option<ObjectName<'_>> {
	node.attributes.get(1).and_then(attr_str).map(ObjectName::parse)
}

/// Summary of one entry under `Objects`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneObject {
	/// Object id.
	pub id: i64,
	/// Record name (`Model`, `Geometry`, `AnimationStack`, ...).
	pub kind: String,
	/// User-visible name.
	pub name: String,
	/// Third attribute (`Mesh`, `LimbNode`, `Light`, ...); empty when absent.
	pub subtype: String,
}

impl SceneObject {
	/// Summarize an `Objects` child, skipping records without an integer id.
	pub fn from_node(node: &Node) -> Option<Self> {
		let id = object_id(node)?;
		let name = object_name(node).map(|name| name.name.to_owned()).unwrap_or_default();
		let subtype = node.attributes.get(2).and_then(attr_str).unwrap_or_default().to_owned();
		Some(Self {
			id,
			kind: node.name.clone(),
			name,
			subtype,
		})
	}
}

/// All objects in file order.
pub fn objects(doc: &FbxDocument) -> Vec<SceneObject> {
	let Some(objects) = doc.node("Objects") else {
		return Vec::new();
	};
	objects.children.iter().filter_map(SceneObject::from_node).collect()
}

/// Connection flavour: which ends are objects and which are properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionKind {
	/// `OO`
	ObjectObject,
	/// `OP`
	ObjectProperty,
	/// `PO`
	PropertyObject,
	/// `PP`
	PropertyProperty,
}

impl ConnectionKind {
	fn parse(tag: &str) -> Option<Self> {
		match tag {
			"OO" => Some(Self::ObjectObject),
			"OP" => Some(Self::ObjectProperty),
			"PO" => Some(Self::PropertyObject),
			"PP" => Some(Self::PropertyProperty),
			_ => None,
		}
	}
}

/// One `Connections/C` record: `child` is the source, `parent` the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
	/// Connection flavour.
	pub kind: ConnectionKind,
	/// Source object id.
	pub child: i64,
	/// Destination object id.
	pub parent: i64,
	/// Destination property name for `OP`/`PP` links.
	pub property: Option<String>,
}

impl Connection {
	/// Decode a `C` record; `None` for records not keyed by integer ids.
	pub fn from_node(node: &Node) -> Option<Self> {
		if node.name != "C" {
			return None;
		}
		let kind = ConnectionKind::parse(attr_str(node.first_attribute()?)?)?;
		let child = attr_i64(node.attributes.get(1)?)?;
		let parent = attr_i64(node.attributes.get(2)?)?;
		let property = node.attributes.get(3).and_then(attr_str).map(str::to_owned);
		Some(Self {
			kind,
			child,
			parent,
			property,
		})
	}

	/// Whether either end is `id`.
	pub fn mentions(&self, id: i64) -> bool {
		self.child == id || self.parent == id
	}
}

/// All decodable connections in file order.
pub fn connections(doc: &FbxDocument) -> Vec<Connection> {
	let Some(connections) = doc.node("Connections") else {
		return Vec::new();
	};
	connections.children.iter().filter_map(Connection::from_node).collect()
}
