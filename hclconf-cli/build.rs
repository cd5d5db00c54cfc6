//! Build script for hclconf-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("hclconf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Load and validate HCL service configuration")
        .long_about(
            "Command-line tool for loading environment-labeled HCL service configuration \
             from a file or a directory of files",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("selector")
                .long("selector")
                .short('s')
                .help("Deployment label selecting which broker blocks are kept")
                .value_name("LABEL")
                .global(true)
                .env("HCLCONF_SELECTOR")
                .default_value("master"),
        )
        .arg(
            Arg::new("extension")
                .long("extension")
                .help("Extension of configuration files in a directory")
                .value_name("EXT")
                .global(true)
                .env("HCLCONF_EXTENSION"),
        )
        .arg(
            Arg::new("max-brokers")
                .long("max-brokers")
                .help("Maximum number of broker blocks per file")
                .value_name("COUNT")
                .global(true)
                .env("HCLCONF_MAX_BROKERS"),
        )
        .subcommands(vec![
            Command::new("show")
                .about("Load a configuration path and print the resolved config")
                .long_about("Load a file or directory and print the resolved configuration"),
            Command::new("validate")
                .about("Check that a configuration path loads cleanly")
                .long_about("Load a file or directory and report whether it is valid"),
            Command::new("files")
                .about("List the files a directory load would process")
                .long_about("Print configuration files in load order; the last one wins"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("hclconf.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
