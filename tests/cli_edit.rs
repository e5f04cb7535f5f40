#![allow(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use fbxstack::fbx::{FbxDocument, anim_stacks};
use fbxstack_testkit::{SAMPLE_STACKS, encode_fbx, record, sample_scene, write_fixture};
use serde_json::Value;

fn run_fbxstack(dir: &Path, args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_fbxstack"))
		.current_dir(dir)
		.env("RUST_LOG", "info")
		.args(args)
		.output()
		.expect("fbxstack command executes")
}

fn assert_success(output: &Output) {
	assert!(
		output.status.success(),
		"fbxstack failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
}

fn scene_fixture(dir: &Path) -> PathBuf {
	write_fixture(dir, "scene.fbx", &sample_scene(7400))
}

fn stack_names(path: &Path) -> Vec<String> {
	let doc = FbxDocument::open(path).expect("output opens");
	anim_stacks(&doc).into_iter().map(|stack| stack.name).collect()
}

#[test]
fn no_arguments_prints_usage_without_io() {
	let dir = tempfile::tempdir().expect("tempdir");
	let output = run_fbxstack(dir.path(), &[]);

	assert_success(&output);
	assert!(String::from_utf8_lossy(&output.stdout).starts_with("usage: fbxstack"));
	assert_eq!(fs::read_dir(dir.path()).expect("tempdir lists").count(), 0);
}

#[test]
fn rename_writes_renamed_stack_next_to_input() {
	let dir = tempfile::tempdir().expect("tempdir");
	let input = scene_fixture(dir.path());
	let output = run_fbxstack(dir.path(), &[input.to_str().expect("utf8 path"), "rename", "Walk", "Stroll"]);

	assert_success(&output);
	assert_eq!(stack_names(&dir.path().join("scene_out.fbx")), ["Stroll", "Run Fast"]);
	assert_eq!(stack_names(&input), SAMPLE_STACKS, "input is left untouched");
}

#[test]
fn remove_drops_one_stack() {
	let dir = tempfile::tempdir().expect("tempdir");
	scene_fixture(dir.path());
	let output = run_fbxstack(dir.path(), &["scene.fbx", "remove", "Run Fast"]);

	assert_success(&output);
	assert_eq!(stack_names(&dir.path().join("scene_out.fbx")), ["Walk"]);
}

#[test]
fn unknown_mode_falls_back_to_remove() {
	let dir = tempfile::tempdir().expect("tempdir");
	scene_fixture(dir.path());
	let output = run_fbxstack(dir.path(), &["scene.fbx", "delete", "Walk"]);

	assert_success(&output);
	assert_eq!(stack_names(&dir.path().join("scene_out.fbx")), ["Run Fast"]);
	assert!(String::from_utf8_lossy(&output.stderr).contains("removing stack"));
}

#[test]
fn unmatched_target_writes_equivalent_scene() {
	let dir = tempfile::tempdir().expect("tempdir");
	let input = scene_fixture(dir.path());
	let output = run_fbxstack(dir.path(), &["scene.fbx", "rename", "Jump", "Hop"]);

	assert_success(&output);
	let written = FbxDocument::open(dir.path().join("scene_out.fbx")).expect("output opens");
	assert_eq!(written, FbxDocument::open(&input).expect("input opens"));
	assert_eq!(anim_stacks(&written).len(), SAMPLE_STACKS.len());
	assert!(String::from_utf8_lossy(&output.stderr).contains("no animation stack named"));
}

#[test]
fn rename_without_new_name_fails_before_writing() {
	let dir = tempfile::tempdir().expect("tempdir");
	scene_fixture(dir.path());
	let output = run_fbxstack(dir.path(), &["scene.fbx", "rename", "Walk"]);

	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).contains("error: rename requires a new name"));
	assert!(!dir.path().join("scene_out.fbx").exists());
}

#[test]
fn missing_input_reports_io_error() {
	let dir = tempfile::tempdir().expect("tempdir");
	let output = run_fbxstack(dir.path(), &["absent.fbx", "remove", "Walk"]);

	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).contains("error: io:"));
}

#[test]
fn ascii_input_is_rejected() {
	let dir = tempfile::tempdir().expect("tempdir");
	write_fixture(dir.path(), "ascii.fbx", b"; FBX 7.4.0 project file\n");
	let output = run_fbxstack(dir.path(), &["ascii.fbx", "remove", "Walk"]);

	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).contains("ASCII FBX is not supported"));
}

#[test]
fn pre_7000_input_is_rejected_without_output() {
	let dir = tempfile::tempdir().expect("tempdir");
	let bytes = encode_fbx(6100, &[record("Takes", vec![]).child(record("Take", vec!["Take 001".into()]))]);
	write_fixture(dir.path(), "legacy.fbx", &bytes);
	let output = run_fbxstack(dir.path(), &["legacy.fbx", "remove", "Take 001"]);

	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).contains("unsupported FBX version 6100"));
	assert!(!dir.path().join("legacy_out.fbx").exists());
}

#[test]
fn output_flag_and_json_inspection() {
	let dir = tempfile::tempdir().expect("tempdir");
	write_fixture(dir.path(), "scene.fbx", &sample_scene(7500));
	let output = run_fbxstack(dir.path(), &["scene.fbx", "remove", "Walk", "--output", "edited.fbx", "--list", "--tree", "--json"]);

	assert_success(&output);
	let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be valid json");
	assert_eq!(json["version"], 7500);
	assert_eq!(json["stacks"].as_array().map(Vec::len), Some(2), "listing happens before the edit");
	assert_eq!(json["stacks"][0]["name"], "Walk");
	assert_eq!(json["tree"][3]["name"], "Spine");
	assert_eq!(json["tree"][3]["depth"], 1);
	assert_eq!(json["tree"][0]["attribute"], "mesh");

	assert_eq!(stack_names(&dir.path().join("edited.fbx")), ["Run Fast"]);
	assert!(!dir.path().join("scene_out.fbx").exists());
}

#[test]
fn text_tree_shows_attribute_tags() {
	let dir = tempfile::tempdir().expect("tempdir");
	scene_fixture(dir.path());
	let output = run_fbxstack(dir.path(), &["scene.fbx", "remove", "Nothing", "--tree"]);

	assert_success(&output);
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("  Cube [mesh]"));
	assert!(stdout.contains("    Spine [skeleton]"));
}
