use std::path::PathBuf;

use fbxstack::fbx::{EditOutcome, FbxDocument, FbxError, Result, StackEdit, anim_stacks, derive_output_path};
use log::{debug, info, warn};

use crate::cmd::inspect;

/// Mode token selecting the rename branch; every other token removes.
pub const RENAME_MODE: &str = "rename";
const REMOVE_MODE: &str = "remove";

#[derive(clap::Args)]
pub struct Args {
	/// Binary FBX scene to load.
	pub path: PathBuf,
	/// `rename`, or anything else to remove the stack.
	pub mode: String,
	/// Name of the animation stack to edit.
	pub target: String,
	/// Replacement name for `rename`.
	pub new_name: Option<String>,
	/// Write here instead of `<path minus 4 chars>_out.fbx`.
	#[arg(short, long)]
	pub output: Option<PathBuf>,
	/// Print the animation stacks before editing.
	#[arg(long)]
	pub list: bool,
	/// Print the model hierarchy before editing.
	#[arg(long)]
	pub tree: bool,
	/// Emit `--list`/`--tree` output as JSON.
	#[arg(long)]
	pub json: bool,
}

/// Load the scene, apply one stack edit, and write the result.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		mode,
		target,
		new_name,
		output,
		list,
		tree,
		json,
	} = args;

	let edit = stack_edit(&mode, target, new_name)?;
	let output = match output {
		Some(output) => output,
		None => derive_output_path(&path)?,
	};

	let mut doc = FbxDocument::open(&path)?;
	info!("loaded {} (FBX {}), {} animation stacks", path.display(), doc.version, anim_stacks(&doc).len());

	if list || tree {
		inspect::print(&doc, list, tree, json);
	}

	match edit.apply(&mut doc)? {
		EditOutcome::Renamed { id } => info!("renamed stack {:?} (id {id})", edit.target()),
		EditOutcome::Removed { id, connections_dropped } => {
			info!("removed stack {:?} (id {id}), dropped {connections_dropped} connections", edit.target());
		}
		EditOutcome::NotFound => warn!("no animation stack named {:?}, writing scene unchanged", edit.target()),
	}

	doc.save(&output)?;
	info!("wrote {}", output.display());
	Ok(())
}

/// Map the positional mode token onto an edit.
pub(crate) fn stack_edit(mode: &str, target: String, new_name: Option<String>) -> Result<StackEdit> {
	if mode == RENAME_MODE {
		let new_name = new_name.ok_or(FbxError::MissingNewName)?;
		return Ok(StackEdit::Rename { target, new_name });
	}

	if mode != REMOVE_MODE {
		warn!("mode {mode:?} is not {RENAME_MODE:?}, removing stack {target:?}");
	}
	if let Some(new_name) = new_name {
		debug!("ignoring new name {new_name:?} in remove mode");
	}
	Ok(StackEdit::Remove { target })
}

#[cfg(test)]
mod tests {
	use fbxstack::fbx::{FbxError, StackEdit};

	use super::stack_edit;

	#[test]
	fn rename_requires_new_name() {
		let err = stack_edit("rename", "Walk".to_owned(), None).expect_err("missing name should fail");
		assert!(matches!(err, FbxError::MissingNewName));
	}

	#[test]
	fn any_other_mode_removes() {
		for mode in ["remove", "delete", "Rename", ""] {
			let edit = stack_edit(mode, "Walk".to_owned(), Some("Ignored".to_owned())).expect("mode maps");
			assert_eq!(edit, StackEdit::Remove { target: "Walk".to_owned() });
		}
	}

	#[test]
	fn rename_carries_both_names() {
		let edit = stack_edit("rename", "Walk".to_owned(), Some("Stroll".to_owned())).expect("mode maps");
		assert_eq!(
			edit,
			StackEdit::Rename {
				target: "Walk".to_owned(),
				new_name: "Stroll".to_owned()
			}
		);
	}
}
