use std::collections::HashSet;

use crate::fbx::scene::{object_id, object_name, validate_object_name};
use crate::fbx::{AttributeValue, Connection, ConnectionKind, FbxDocument, Node, ObjectName, Result, attr_i64, attr_str, connections, string_attr};

/// Record name of animation stack objects.
pub const ANIM_STACK: &str = "AnimationStack";
/// Record name of animation layer objects.
pub const ANIM_LAYER: &str = "AnimationLayer";
const ACTIVE_STACK_PROPERTY: &str = "ActiveAnimStackName";

/// Summary of one `AnimationStack` object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimStack {
	/// Object id.
	pub id: i64,
	/// Stack name.
	pub name: String,
	/// Number of animation layers connected to the stack.
	pub layer_count: usize,
}

/// List animation stacks in file order.
pub fn anim_stacks(doc: &FbxDocument) -> Vec<AnimStack> {
	let Some(objects) = doc.node("Objects") else {
		return Vec::new();
	};

	let layers: HashSet<i64> = objects.children_named(ANIM_LAYER).filter_map(object_id).collect();
	let links = connections(doc);

	objects
		.children_named(ANIM_STACK)
		.filter_map(|node| {
			let id = object_id(node)?;
			let name = object_name(node).map(|name| name.name.to_owned()).unwrap_or_default();
			let layer_count = links
				.iter()
				.filter(|link| link.kind == ConnectionKind::ObjectObject && link.parent == id && layers.contains(&link.child))
				.count();
			Some(AnimStack { id, name, layer_count })
		})
		.collect()
}

/// One edit applied to the first stack named `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackEdit {
	/// Give the stack a new name.
	Rename {
		/// Name of the stack to edit.
		target: String,
		/// Replacement name.
		new_name: String,
	},
	/// Delete the stack from the scene.
	Remove {
		/// Name of the stack to edit.
		target: String,
	},
}

/// Result of applying a [`StackEdit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
	/// The stack with `id` was renamed.
	Renamed {
		/// Object id of the renamed stack.
		id: i64,
	},
	/// The stack with `id` was removed.
	Removed {
		/// Object id of the removed stack.
		id: i64,
		/// Number of connection records dropped with it.
		connections_dropped: usize,
	},
	/// No stack carried the target name; the document is unchanged.
	NotFound,
}

impl StackEdit {
	/// Name of the stack this edit looks for.
	pub fn target(&self) -> &str {
		match self {
			Self::Rename { target, .. } | Self::Remove { target } => target,
		}
	}

	/// Apply the edit to `doc`.
	pub fn apply(&self, doc: &mut FbxDocument) -> Result<EditOutcome> {
		match self {
			Self::Rename { target, new_name } => rename_anim_stack(doc, target, new_name),
			Self::Remove { target } => remove_anim_stack(doc, target),
		}
	}
}

/// Rename the first stack named `target`, keeping takes and the active-stack setting in step.
fn rename_anim_stack(doc: &mut FbxDocument, target: &str, new_name: &str) -> Result<EditOutcome> {
	validate_object_name(new_name)?;

	let Some(objects) = doc.node_mut("Objects") else {
		return Ok(EditOutcome::NotFound);
	};
	let Some((index, id)) = find_stack(objects, target) else {
		return Ok(EditOutcome::NotFound);
	};

	if let Some(AttributeValue::String(raw)) = objects.children[index].attributes.get_mut(1) {
		let renamed = ObjectName::parse(raw.as_str()).renamed(new_name);
		*raw = renamed;
	}

	rename_take(doc, target, new_name);
	replace_active_stack(doc, target, new_name);
	Ok(EditOutcome::Renamed { id })
}

/// Remove the first stack named `target` along with every connection and take that refers to it.
///
/// Layers owned by the stack stay in the document. The take and the active-stack
/// setting are kept while another stack still carries the same name.
fn remove_anim_stack(doc: &mut FbxDocument, target: &str) -> Result<EditOutcome> {
	let Some(objects) = doc.node_mut("Objects") else {
		return Ok(EditOutcome::NotFound);
	};
	let Some((index, id)) = find_stack(objects, target) else {
		return Ok(EditOutcome::NotFound);
	};
	objects.children.remove(index);

	let connections_dropped = drop_connections(doc, id);
	decrement_definition(doc, ANIM_STACK);

	let remaining = anim_stacks(doc);
	if !remaining.iter().any(|stack| stack.name == target) {
		let fallback = remaining.into_iter().next().map(|stack| stack.name).unwrap_or_default();
		remove_take(doc, target, &fallback);
		replace_active_stack(doc, target, &fallback);
	}

	Ok(EditOutcome::Removed { id, connections_dropped })
}

/// Conventional take file name: spaces become underscores, `.tak` appended.
pub fn take_file_name(name: &str) -> String {
	format!("{}.tak", name.replace(' ', "_"))
}

fn find_stack(objects: &Node, target: &str) -> Option<(usize, i64)> {
	objects.children.iter().enumerate().find_map(|(index, node)| {
		if node.name != ANIM_STACK {
			return None;
		}
		let id = object_id(node)?;
		let name = object_name(node)?;
		(name.name == target).then_some((index, id))
	})
}

fn value_is(node: &Node, value: &str) -> bool {
	node.first_attribute().and_then(attr_str) == Some(value)
}

fn set_value(node: &mut Node, value: &str) {
	match node.attributes.first_mut() {
		Some(slot) => *slot = string_attr(value),
		None => node.attributes.push(string_attr(value)),
	}
}

fn rename_take(doc: &mut FbxDocument, old: &str, new: &str) {
	let Some(takes) = doc.node_mut("Takes") else {
		return;
	};

	if let Some(current) = takes.child_mut("Current")
		&& value_is(current, old)
	{
		set_value(current, new);
	}

	let Some(take) = takes.children.iter_mut().find(|node| node.name == "Take" && value_is(node, old)) else {
		return;
	};
	set_value(take, new);
	if let Some(file_name) = take.child_mut("FileName")
		&& value_is(file_name, &take_file_name(old))
	{
		set_value(file_name, &take_file_name(new));
	}
}

fn remove_take(doc: &mut FbxDocument, name: &str, fallback: &str) {
	let Some(takes) = doc.node_mut("Takes") else {
		return;
	};

	if let Some(index) = takes.children.iter().position(|node| node.name == "Take" && value_is(node, name)) {
		takes.children.remove(index);
	}

	if let Some(current) = takes.child_mut("Current")
		&& value_is(current, name)
	{
		set_value(current, fallback);
	}
}

fn replace_active_stack(doc: &mut FbxDocument, old: &str, new: &str) {
	let Some(documents) = doc.node_mut("Documents") else {
		return;
	};

	for document in documents.children.iter_mut().filter(|node| node.name == "Document") {
		let Some(properties) = document.child_mut("Properties70") else {
			continue;
		};
		for entry in properties.children.iter_mut().filter(|node| node.name == "P") {
			let is_active = entry.first_attribute().and_then(attr_str) == Some(ACTIVE_STACK_PROPERTY);
			if is_active && entry.attributes.get(4).and_then(attr_str) == Some(old) {
				entry.attributes[4] = string_attr(new);
			}
		}
	}
}

fn drop_connections(doc: &mut FbxDocument, id: i64) -> usize {
	let Some(links) = doc.node_mut("Connections") else {
		return 0;
	};

	let before = links.children.len();
	links.children.retain(|node| !Connection::from_node(node).is_some_and(|link| link.mentions(id)));
	before - links.children.len()
}

fn decrement_definition(doc: &mut FbxDocument, kind: &str) {
	let Some(definitions) = doc.node_mut("Definitions") else {
		return;
	};

	let Some(index) = definitions
		.children
		.iter()
		.position(|node| node.name == "ObjectType" && node.first_attribute().and_then(attr_str) == Some(kind))
	else {
		return;
	};

	if decrement_count(definitions.children[index].child_mut("Count")) == Some(0) {
		definitions.children.remove(index);
	}
	decrement_count(definitions.child_mut("Count"));
}

fn decrement_count(node: Option<&mut Node>) -> Option<i64> {
	let slot = node?.attributes.first_mut()?;
	let next = (attr_i64(slot)? - 1).max(0);
	*slot = match *slot {
		AttributeValue::I16(_) => AttributeValue::I16(next as i16),
		AttributeValue::I64(_) => AttributeValue::I64(next),
		_ => AttributeValue::I32(next as i32),
	};
	Some(next)
}
