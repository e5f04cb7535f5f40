use std::path::{Path, PathBuf};

use crate::fbx::{FbxError, Result};

/// Suffix replacing the last four characters of the input path.
pub const OUTPUT_SUFFIX: &str = "_out.fbx";

/// Output path for `input`: its last four characters dropped, `_out.fbx` appended.
///
/// The extension is not inspected, so `scene.obj` also maps to `scene_out.fbx`.
pub fn derive_output_path(input: &Path) -> Result<PathBuf> {
	let text = input.to_str().ok_or_else(|| FbxError::NonUtf8Path {
		path: input.to_string_lossy().into_owned(),
	})?;

	let keep = text.chars().count().saturating_sub(4);
	let stem: String = text.chars().take(keep).collect();
	Ok(PathBuf::from(format!("{stem}{OUTPUT_SUFFIX}")))
}

#[cfg(test)]
mod tests {
	use std::path::{Path, PathBuf};

	use crate::fbx::derive_output_path;

	fn derive(input: &str) -> PathBuf {
		derive_output_path(Path::new(input)).expect("path derives")
	}

	#[test]
	fn replaces_extension() {
		assert_eq!(derive("scene.fbx"), PathBuf::from("scene_out.fbx"));
		assert_eq!(derive("assets/hero.obj"), PathBuf::from("assets/hero_out.fbx"));
	}

	#[test]
	fn strips_four_characters_regardless_of_extension() {
		assert_eq!(derive("scene.fbx2"), PathBuf::from("scene._out.fbx"));
		assert_eq!(derive("ñandú.fbx"), PathBuf::from("ñandú_out.fbx"));
	}

	#[test]
	fn short_path_collapses_to_suffix() {
		assert_eq!(derive("abc"), PathBuf::from("_out.fbx"));
	}

	#[cfg(unix)]
	#[test]
	fn non_utf8_path_is_rejected() {
		use std::ffi::OsStr;
		use std::os::unix::ffi::OsStrExt;

		let err = derive_output_path(Path::new(OsStr::from_bytes(b"bad\xff.fbx"))).expect_err("non-utf8 should fail");
		assert!(matches!(err, crate::fbx::FbxError::NonUtf8Path { .. }));
	}
}
