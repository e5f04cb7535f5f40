//! Public library API for editing animation stacks in binary FBX files.

/// Binary FBX load and save, scene views, and animation stack edits.
pub mod fbx;
