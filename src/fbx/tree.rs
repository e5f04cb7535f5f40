use std::collections::{HashMap, HashSet};

use crate::fbx::{ConnectionKind, FbxDocument, SceneObject, connections, objects};

/// Object id of the implicit scene root.
pub const ROOT_ID: i64 = 0;

/// What a model carries, resolved from its connected attribute or geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeKind {
	/// Mesh geometry.
	Mesh,
	/// Skeleton joint (`LimbNode`, `Limb`, `Root`).
	Skeleton,
	/// Light source.
	Light,
	/// Camera.
	Camera,
	/// Any other attribute subtype.
	Other(String),
}

impl AttributeKind {
	fn from_object(object: &SceneObject) -> Option<Self> {
		let kind = match (object.kind.as_str(), object.subtype.as_str()) {
			("Geometry", "Mesh") => Self::Mesh,
			("NodeAttribute", "LimbNode" | "Limb" | "Root") => Self::Skeleton,
			("NodeAttribute", "Light") => Self::Light,
			("NodeAttribute", "Camera") => Self::Camera,
			("Geometry" | "NodeAttribute", other) => Self::Other(other.to_owned()),
			_ => return None,
		};
		Some(kind)
	}

	/// Stable lowercase label.
	pub fn label(&self) -> &str {
		match self {
			Self::Mesh => "mesh",
			Self::Skeleton => "skeleton",
			Self::Light => "light",
			Self::Camera => "camera",
			Self::Other(subtype) => subtype.as_str(),
		}
	}
}

/// One model in a depth-first walk of the scene hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
	/// Distance from the scene root; top-level models are `0`.
	pub depth: usize,
	/// Model object id.
	pub id: i64,
	/// Model name.
	pub name: String,
	/// Attached attribute, if any.
	pub attribute: Option<AttributeKind>,
}

/// Walk `Model` objects from the scene root through `OO` connections.
pub fn scene_tree(doc: &FbxDocument) -> Vec<TreeEntry> {
	let by_id: HashMap<i64, SceneObject> = objects(doc).into_iter().map(|object| (object.id, object)).collect();
	let is_model = |id: i64| by_id.get(&id).is_some_and(|object| object.kind == "Model");

	let mut children: HashMap<i64, Vec<i64>> = HashMap::new();
	let mut attributes: HashMap<i64, AttributeKind> = HashMap::new();
	for link in connections(doc) {
		if link.kind != ConnectionKind::ObjectObject {
			continue;
		}
		if is_model(link.child) && (link.parent == ROOT_ID || is_model(link.parent)) {
			children.entry(link.parent).or_default().push(link.child);
		} else if is_model(link.parent)
			&& !attributes.contains_key(&link.parent)
			&& let Some(kind) = by_id.get(&link.child).and_then(AttributeKind::from_object)
		{
			attributes.insert(link.parent, kind);
		}
	}

	let mut out = Vec::new();
	let mut visited = HashSet::new();
	let mut stack: Vec<(i64, usize)> = children.get(&ROOT_ID).map(|ids| ids.iter().rev().map(|id| (*id, 0)).collect()).unwrap_or_default();
	while let Some((id, depth)) = stack.pop() {
		if !visited.insert(id) {
			continue;
		}
		let name = by_id.get(&id).map(|object| object.name.clone()).unwrap_or_default();
		out.push(TreeEntry {
			depth,
			id,
			name,
			attribute: attributes.get(&id).cloned(),
		});
		if let Some(ids) = children.get(&id) {
			stack.extend(ids.iter().rev().map(|child| (*child, depth + 1)));
		}
	}
	out
}
