mod anim;
mod document;
mod error;
mod node;
mod output;
mod scene;
mod tree;

/// Attribute values as decoded by `fbxcel`.
pub use fbxcel::low::v7400::AttributeValue;

/// Animation stack listing and rename/remove edits.
pub use anim::{ANIM_LAYER, ANIM_STACK, AnimStack, EditOutcome, StackEdit, anim_stacks, take_file_name};
/// Whole-file load and save.
pub use document::FbxDocument;
/// Error and result aliases.
pub use error::{FbxError, Result};
/// Owned node tree edited between load and save.
pub use node::{Node, attr_i64, attr_str, string_attr};
/// Output naming.
pub use output::{OUTPUT_SUFFIX, derive_output_path};
/// Object and connection views over the node tree.
pub use scene::{Connection, ConnectionKind, ObjectName, SceneObject, connections, object_id, object_name, objects, validate_object_name};
/// Model hierarchy walk.
pub use tree::{AttributeKind, ROOT_ID, TreeEntry, scene_tree};
