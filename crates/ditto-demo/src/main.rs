use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};
use ditto_demo::{DemoConfig, DemoOptions};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    let cli = Command::new("ditto-demo")
        .version(ditto_core::VERSION)
        .about("Walk through an immutable Ditto envelope")
        .arg(
            Arg::new("content")
                .long("content")
                .value_name("JSON")
                .help("Content to use instead of the demo content"),
        )
        .arg(
            Arg::new("path")
                .long("path")
                .action(ArgAction::Append)
                .help("Path to look up (repeatable)"),
        )
        .arg(
            Arg::new("fallback")
                .long("fallback")
                .help("Printed for paths that do not exist"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        );

    let matches = cli.get_matches();

    let filter = if matches.get_flag("verbose") { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let config = DemoConfig::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    let options = DemoOptions {
        content: matches.get_one::<String>("content").cloned(),
        paths: matches
            .get_many::<String>("path")
            .map(|paths| paths.cloned().collect())
            .unwrap_or_default(),
        fallback: matches.get_one::<String>("fallback").cloned(),
    };

    for line in ditto_demo::run(&options, &config)? {
        println!("{line}");
    }
    Ok(())
}
