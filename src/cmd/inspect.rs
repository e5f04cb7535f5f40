use fbxstack::fbx::{AnimStack, FbxDocument, TreeEntry, anim_stacks, scene_tree};

use crate::cmd::util::emit_json;

/// Print stacks and/or the model hierarchy, as text or one JSON object.
pub fn print(doc: &FbxDocument, list: bool, tree: bool, json: bool) {
	let stacks = list.then(|| anim_stacks(doc));
	let entries = tree.then(|| scene_tree(doc));

	if json {
		let payload = InspectJson {
			version: doc.version,
			stacks: stacks.map(|items| items.iter().map(StackJson::from).collect()),
			tree: entries.map(|items| items.iter().map(TreeEntryJson::from).collect()),
		};
		emit_json(&payload);
		return;
	}

	if let Some(stacks) = stacks {
		println!("stacks:");
		for stack in stacks {
			println!("  {} (id {}, layers {})", stack.name, stack.id, stack.layer_count);
		}
	}

	if let Some(entries) = entries {
		println!("tree:");
		for entry in entries {
			let indent = "  ".repeat(entry.depth + 1);
			match &entry.attribute {
				Some(attribute) => println!("{indent}{} [{}]", entry.name, attribute.label()),
				None => println!("{indent}{}", entry.name),
			}
		}
	}
}

#[derive(serde::Serialize)]
struct InspectJson {
	version: u32,
	#[serde(skip_serializing_if = "Option::is_none")]
	stacks: Option<Vec<StackJson>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	tree: Option<Vec<TreeEntryJson>>,
}

#[derive(serde::Serialize)]
struct StackJson {
	id: i64,
	name: String,
	layers: usize,
}

impl From<&AnimStack> for StackJson {
	fn from(stack: &AnimStack) -> Self {
		Self {
			id: stack.id,
			name: stack.name.clone(),
			layers: stack.layer_count,
		}
	}
}

#[derive(serde::Serialize)]
struct TreeEntryJson {
	depth: usize,
	id: i64,
	name: String,
	attribute: Option<String>,
}

impl From<&TreeEntry> for TreeEntryJson {
	fn from(entry: &TreeEntry) -> Self {
		Self {
			depth: entry.depth,
			id: entry.id,
			name: entry.name.clone(),
			attribute: entry.attribute.as_ref().map(|attribute| attribute.label().to_owned()),
		}
	}
}
