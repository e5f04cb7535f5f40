use fbxcel::low::v7400::AttributeValue;
use fbxcel::tree::v7400::{NodeHandle, NodeId, Tree};

/// Owned, editable copy of one FBX node: a name, typed attributes, and nested nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
	/// Node name (`Objects`, `AnimationStack`, `C`, ...).
	pub name: String,
	/// Attributes in file order.
	pub attributes: Vec<AttributeValue>,
	/// Nested nodes in file order.
	pub children: Vec<Node>,
}

impl Node {
	/// Create an empty node.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			attributes: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Append an attribute, builder style.
	pub fn with_attribute(mut self, attribute: AttributeValue) -> Self {
		self.attributes.push(attribute);
		self
	}

	/// Append a nested node, builder style.
	pub fn with_child(mut self, child: Node) -> Self {
		self.children.push(child);
		self
	}

	/// First nested node named `name`.
	pub fn child(&self, name: &str) -> Option<&Node> {
		self.children.iter().find(|child| child.name == name)
	}

	/// Mutable first nested node named `name`.
	pub fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
		self.children.iter_mut().find(|child| child.name == name)
	}

	/// All nested nodes named `name`.
	pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
		self.children.iter().filter(move |child| child.name == name)
	}

	/// First attribute, the conventional "value" slot of simple nodes.
	pub fn first_attribute(&self) -> Option<&AttributeValue> {
		self.attributes.first()
	}

	/// Copy a loaded node and its subtree.
	pub(crate) fn from_handle(handle: NodeHandle<'_>) -> Self {
		Self {
			name: handle.name().to_owned(),
			attributes: handle.attributes().to_vec(),
			children: handle.children().map(Self::from_handle).collect(),
		}
	}

	/// Append this node and its subtree under `parent`.
	pub(crate) fn append_to(&self, tree: &mut Tree, parent: NodeId) {
		let id = tree.append_new(parent, &self.name);
		for attribute in &self.attributes {
			tree.append_attribute(id, attribute.clone());
		}
		for child in &self.children {
			child.append_to(tree, id);
		}
	}
}

/// Borrow a string attribute.
pub fn attr_str(value: &AttributeValue) -> Option<&str> {
	match value {
		AttributeValue::String(text) => Some(text.as_str()),
		_ => None,
	}
}

/// Widen any integer attribute to `i64`.
pub fn attr_i64(value: &AttributeValue) -> Option<i64> {
	match value {
		AttributeValue::I16(item) => Some(i64::from(*item)),
		AttributeValue::I32(item) => Some(i64::from(*item)),
		AttributeValue::I64(item) => Some(*item),
		_ => None,
	}
}

/// String attribute from text.
pub fn string_attr(value: impl Into<String>) -> AttributeValue {
	AttributeValue::String(value.into())
}
