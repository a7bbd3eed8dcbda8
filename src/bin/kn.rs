//! Command-line interface for kn
//!
//! Usage:
//!   kn parse -f `<file>` [--format `<format>`] [-o `<output>`] [--stdout] [--config `<path>`]
//!   kn formats
//!
//! `parse` writes the converted note file next to the input (`notes.txt` becomes
//! `notes.yaml`) unless `--output` or `--stdout` is given.
//!
//! Configuration is layered: built-in defaults, then `kn.toml` in the working
//! directory if it exists, then the file given with `--config`.

use clap::{Arg, ArgAction, ArgMatches, Command};
use kn::kn::config::{KnConfig, Loader};
use kn::kn::pipeline::{NoteLoader, NotePipeline};
use std::error::Error;
use std::path::PathBuf;

fn main() {
    let matches = Command::new("kn")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A simple utility to parse, keep and read notes")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log output (-v info, -vv debug)")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults")
                .global(true),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse note raw file into yaml")
                .arg(
                    Arg::new("file")
                        .long("file")
                        .short('f')
                        .help("Path to the note file")
                        .required(true),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help("Output format (yaml, json); defaults to output.format from config"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write to this path instead of next to the input")
                        .conflicts_with("stdout"),
                )
                .arg(
                    Arg::new("stdout")
                        .long("stdout")
                        .help("Print the converted document instead of writing a file")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("formats").about("List available output formats"))
        .get_matches();

    init_logging(matches.get_count("verbose"));

    let result = match matches.subcommand() {
        Some(("parse", parse_matches)) => handle_parse_command(&matches, parse_matches),
        Some(("formats", _)) => {
            handle_formats_command();
            Ok(())
        }
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("KN_LOG")
        .format_timestamp(None)
        .init();
}

/// Project config picked up from the working directory when present
const LOCAL_CONFIG: &str = "kn.toml";

fn load_config(matches: &ArgMatches) -> Result<KnConfig, Box<dyn Error>> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    Ok(loader.build()?)
}

/// Handle the parse command
fn handle_parse_command(
    matches: &ArgMatches,
    parse_matches: &ArgMatches,
) -> Result<(), Box<dyn Error>> {
    let config = load_config(matches)?;
    let path = parse_matches
        .get_one::<String>("file")
        .ok_or("missing --file")?;
    let format = parse_matches
        .get_one::<String>("format")
        .cloned()
        .unwrap_or_else(|| config.output.format.clone());

    let loader = NoteLoader::with_pipeline(NotePipeline::from_config(&config));

    if parse_matches.get_flag("stdout") {
        print!("{}", loader.load_and_convert(path, &format)?);
        return Ok(());
    }

    let written = match parse_matches.get_one::<String>("output") {
        Some(output) => {
            loader.convert_file_to(path, &format, output)?;
            PathBuf::from(output)
        }
        None => loader.convert_file(path, &format)?,
    };
    log::info!("converted {} -> {}", path, written.display());
    Ok(())
}

/// Handle the formats command
fn handle_formats_command() {
    let pipeline = NotePipeline::new();
    println!("Available output formats:\n");

    for name in pipeline.formats().list_formats() {
        if let Some(formatter) = pipeline.formats().get(&name) {
            println!("  {}", name);
            println!("    {}", formatter.description());
            println!();
        }
    }
}
