#![allow(missing_docs)]

use clap::Parser;

mod cmd;

const USAGE: &str = "usage: fbxstack <scene-path> <rename|remove> <target-stack-name> [<new-name>]";

#[derive(Parser)]
#[command(name = "fbxstack", about = "Rename or remove an animation stack in a binary FBX file")]
struct Cli {
	#[command(flatten)]
	edit: cmd::edit::Args,
}

fn main() {
	if std::env::args_os().len() <= 1 {
		println!("{USAGE}");
		return;
	}

	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> fbxstack::fbx::Result<()> {
	let cli = Cli::parse();
	cmd::edit::run(cli.edit)
}
