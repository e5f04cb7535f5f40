//! Shared test helpers: a byte-level binary FBX builder independent of the
//! main crate's codec, plus a small sample scene.

use std::fs;
use std::path::{Path, PathBuf};

/// Stack names in the sample scene, in file order.
pub const SAMPLE_STACKS: [&str; 2] = ["Walk", "Run Fast"];
/// Object id of the `Walk` stack.
pub const WALK_STACK_ID: i64 = 100;
/// Object id of the `Run Fast` stack.
pub const RUN_STACK_ID: i64 = 200;

const MAGIC: &[u8; 21] = b"Kaydara FBX Binary  \0";
const FOOTER_ID: [u8; 16] = [0xFA, 0xBC, 0xAB, 0x09, 0xD0, 0xC8, 0xD4, 0x66, 0xB1, 0x76, 0xFB, 0x83, 0x1C, 0xF7, 0x26, 0x7E];
const FOOTER_MAGIC: [u8; 16] = [0xF8, 0x5A, 0x8C, 0x6A, 0xDE, 0xF5, 0xD9, 0x7E, 0xEC, 0xE9, 0x0C, 0xE3, 0x75, 0x8F, 0x29, 0x0B];
const TAKE_STOP: i64 = 46_186_158_000;

/// Property value accepted by [`Record`].
#[derive(Debug, Clone)]
pub enum Value {
	/// `C`
	Bool(bool),
	/// `I`
	I32(i32),
	/// `L`
	I64(i64),
	/// `D`
	F64(f64),
	/// `S`
	Str(String),
	/// `R`
	Raw(Vec<u8>),
	/// `d`, stored uncompressed.
	F64Array(Vec<f64>),
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::Str(value.to_owned())
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::I64(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Self::I32(value)
	}
}

/// One record to encode.
#[derive(Debug, Clone)]
pub struct Record {
	/// Record name.
	pub name: String,
	/// Properties.
	pub values: Vec<Value>,
	/// Nested records.
	pub children: Vec<Record>,
}

/// Start a record with the given properties.
pub fn record(name: &str, values: Vec<Value>) -> Record {
	Record {
		name: name.to_owned(),
		values,
		children: Vec::new(),
	}
}

impl Record {
	/// Append a nested record.
	pub fn child(mut self, child: Record) -> Self {
		self.children.push(child);
		self
	}
}

/// Binary FBX object name: `name\0\x01class`.
pub fn object_name(name: &str, class: &str) -> String {
	format!("{name}\0\u{1}{class}")
}

/// Encode top-level records as a complete binary FBX file.
pub fn encode_fbx(version: u32, records: &[Record]) -> Vec<u8> {
	let wide = version >= 7500;
	let mut out = Vec::new();
	out.extend_from_slice(MAGIC);
	out.extend_from_slice(&[0x1A, 0x00]);
	out.extend_from_slice(&version.to_le_bytes());

	for item in records {
		encode_record(&mut out, item, wide);
	}
	out.resize(out.len() + null_len(wide), 0);

	out.extend_from_slice(&FOOTER_ID);
	out.extend_from_slice(&[0_u8; 4]);
	let pad = 16 - out.len() % 16;
	out.resize(out.len() + pad, 0);
	out.extend_from_slice(&version.to_le_bytes());
	out.resize(out.len() + 120, 0);
	out.extend_from_slice(&FOOTER_MAGIC);
	out
}

fn null_len(wide: bool) -> usize {
	if wide { 25 } else { 13 }
}

fn push_word(out: &mut Vec<u8>, value: usize, wide: bool) {
	if wide {
		out.extend_from_slice(&(value as u64).to_le_bytes());
	} else {
		out.extend_from_slice(&(value as u32).to_le_bytes());
	}
}

fn encode_record(out: &mut Vec<u8>, item: &Record, wide: bool) {
	let mut props = Vec::new();
	for value in &item.values {
		encode_value(&mut props, value);
	}

	let mut nested = Vec::new();
	let start = out.len();
	let head_len = if wide { 25 } else { 13 };
	let body_start = start + head_len + item.name.len() + props.len();
	// Nested offsets are absolute, so children are encoded in place.
	let mut scratch = vec![0_u8; body_start];
	for child in &item.children {
		encode_record(&mut scratch, child, wide);
	}
	if !item.children.is_empty() {
		scratch.resize(scratch.len() + null_len(wide), 0);
	}
	nested.extend_from_slice(&scratch[body_start..]);

	push_word(out, body_start + nested.len(), wide);
	push_word(out, item.values.len(), wide);
	push_word(out, props.len(), wide);
	out.push(item.name.len() as u8);
	out.extend_from_slice(item.name.as_bytes());
	out.extend_from_slice(&props);
	out.extend_from_slice(&nested);
}

fn encode_value(out: &mut Vec<u8>, value: &Value) {
	match value {
		Value::Bool(item) => {
			out.push(b'C');
			out.push(u8::from(*item));
		}
		Value::I32(item) => {
			out.push(b'I');
			out.extend_from_slice(&item.to_le_bytes());
		}
		Value::I64(item) => {
			out.push(b'L');
			out.extend_from_slice(&item.to_le_bytes());
		}
		Value::F64(item) => {
			out.push(b'D');
			out.extend_from_slice(&item.to_le_bytes());
		}
		Value::Str(item) => {
			out.push(b'S');
			out.extend_from_slice(&(item.len() as u32).to_le_bytes());
			out.extend_from_slice(item.as_bytes());
		}
		Value::Raw(item) => {
			out.push(b'R');
			out.extend_from_slice(&(item.len() as u32).to_le_bytes());
			out.extend_from_slice(item);
		}
		Value::F64Array(items) => {
			out.push(b'd');
			out.extend_from_slice(&(items.len() as u32).to_le_bytes());
			out.extend_from_slice(&0_u32.to_le_bytes());
			out.extend_from_slice(&((items.len() * 8) as u32).to_le_bytes());
			for item in items {
				out.extend_from_slice(&item.to_le_bytes());
			}
		}
	}
}

fn connection(child: i64, parent: i64) -> Record {
	record("C", vec!["OO".into(), child.into(), parent.into()])
}

fn object(class: &str, id: i64, name: &str, name_class: &str, subtype: &str) -> Record {
	record(class, vec![id.into(), Value::Str(object_name(name, name_class)), subtype.into()])
}

fn object_type(name: &str, count: i32) -> Record {
	record("ObjectType", vec![name.into()]).child(record("Count", vec![count.into()]))
}

fn take(name: &str) -> Record {
	record("Take", vec![name.into()])
		.child(record("FileName", vec![format!("{}.tak", name.replace(' ', "_")).as_str().into()]))
		.child(record("LocalTime", vec![0_i64.into(), TAKE_STOP.into()]))
		.child(record("ReferenceTime", vec![0_i64.into(), TAKE_STOP.into()]))
}

/// Records of the sample scene.
///
/// Hierarchy: `Cube` (mesh), `Lamp` (light), `Hips` (skeleton) with child
/// `Spine` (skeleton). Stacks `Walk` (id 100) and `Run Fast` (id 200), each
/// with one layer.
pub fn sample_records(version: u32) -> Vec<Record> {
	vec![
		record("FBXHeaderExtension", vec![])
			.child(record("FBXHeaderVersion", vec![1003_i32.into()]))
			.child(record("FBXVersion", vec![(version as i32).into()])),
		record("FileId", vec![Value::Raw(vec![0x28, 0xB3, 0x2A, 0xEB, 0xB6, 0x24, 0xCC, 0xC2, 0xBF, 0xC8, 0xB0, 0x2A, 0xA9, 0x2B, 0xFC, 0xF1])]),
		record("Documents", vec![]).child(record("Count", vec![1_i32.into()])).child(
			record("Document", vec![1000_i64.into(), "Scene".into(), "Scene".into()])
				.child(
					record("Properties70", vec![])
						.child(record("P", vec!["SourceObject".into(), "object".into(), "".into(), "".into()]))
						.child(record("P", vec!["ActiveAnimStackName".into(), "KString".into(), "".into(), "".into(), "Walk".into()])),
				)
				.child(record("RootNode", vec![0_i64.into()])),
		),
		record("Definitions", vec![])
			.child(record("Version", vec![100_i32.into()]))
			.child(record("Count", vec![12_i32.into()]))
			.child(object_type("Model", 4))
			.child(object_type("Geometry", 1))
			.child(object_type("NodeAttribute", 3))
			.child(object_type("AnimationStack", 2))
			.child(object_type("AnimationLayer", 2)),
		record("Objects", vec![])
			.child(object("Geometry", 10, "Cube", "Geometry", "Mesh").child(record("Vertices", vec![Value::F64Array(vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0])])))
			.child(object("Model", 11, "Cube", "Model", "Mesh").child(record("Version", vec![232_i32.into()])).child(record("Shading", vec![Value::Bool(true)])))
			.child(object("NodeAttribute", 20, "Lamp", "NodeAttribute", "Light"))
			.child(object("Model", 21, "Lamp", "Model", "Light"))
			.child(object("NodeAttribute", 30, "Hips", "NodeAttribute", "LimbNode"))
			.child(object("Model", 31, "Hips", "Model", "LimbNode"))
			.child(object("NodeAttribute", 33, "Spine", "NodeAttribute", "LimbNode"))
			.child(object("Model", 32, "Spine", "Model", "LimbNode"))
			.child(
				object("AnimationStack", WALK_STACK_ID, "Walk", "AnimStack", "").child(
					record("Properties70", vec![]).child(record("P", vec!["LocalStop".into(), "KTime".into(), "Time".into(), "".into(), TAKE_STOP.into()])),
				),
			)
			.child(object("AnimationLayer", 101, "BaseLayer", "AnimLayer", ""))
			.child(object("AnimationStack", RUN_STACK_ID, "Run Fast", "AnimStack", ""))
			.child(object("AnimationLayer", 201, "BaseLayer", "AnimLayer", "").child(record("Weight", vec![Value::F64(100.0)]))),
		record("Connections", vec![])
			.child(connection(11, 0))
			.child(connection(10, 11))
			.child(connection(21, 0))
			.child(connection(20, 21))
			.child(connection(31, 0))
			.child(connection(30, 31))
			.child(connection(32, 31))
			.child(connection(33, 32))
			.child(connection(101, WALK_STACK_ID))
			.child(connection(201, RUN_STACK_ID)),
		record("Takes", vec![])
			.child(record("Current", vec!["Walk".into()]))
			.child(take("Walk"))
			.child(take("Run Fast")),
	]
}

/// Complete sample scene file bytes.
pub fn sample_scene(version: u32) -> Vec<u8> {
	encode_fbx(version, &sample_records(version))
}

/// Write `bytes` to `dir/name` and return the path.
pub fn write_fixture(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
	let path = dir.join(name);
	fs::write(&path, bytes).expect("fixture writes");
	path
}
