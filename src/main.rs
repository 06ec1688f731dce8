use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, Command};
use serde::Deserialize;
use std::fs;
use std::io::Read;

use odump::{dump, DumpOptions, DumpStyle};

/// Options file mirroring the library's `DumpOptions`; explicit flags win
/// over values loaded from it.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OptionsFile {
    style: Option<String>,
    indent_size: Option<usize>,
    max_level: Option<usize>,
    exclude_properties: Vec<String>,
    ignore_default_values: Option<bool>,
}

fn parse_style(name: &str) -> Result<DumpStyle> {
    match name {
        "console" => Ok(DumpStyle::Console),
        "source" => Ok(DumpStyle::Source),
        "html" => Ok(DumpStyle::Html),
        other => bail!("unknown dump style: {}", other),
    }
}

fn apply_options_file(options: &mut DumpOptions, file: OptionsFile) -> Result<()> {
    if let Some(style) = file.style {
        options.style = parse_style(&style)?;
    }
    if let Some(indent_size) = file.indent_size {
        options.indent_size = indent_size;
    }
    if let Some(max_level) = file.max_level {
        options.max_level = max_level;
    }
    for name in file.exclude_properties {
        options.exclude_properties.insert(name);
    }
    if let Some(ignore) = file.ignore_default_values {
        options.ignore_default_values = ignore;
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let matches = Command::new("odump")
        .about("Dump a JSON document as console text, source code or HTML")
        .arg(
            Arg::new("input")
                .help("Input JSON file, or - for stdin")
                .index(1),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .value_parser(["console", "source", "html"])
                .help("Output style"),
        )
        .arg(
            Arg::new("max-level")
                .long("max-level")
                .value_parser(clap::value_parser!(usize))
                .help("Recursion ceiling on nesting depth"),
        )
        .arg(
            Arg::new("indent-size")
                .long("indent-size")
                .value_parser(clap::value_parser!(usize))
                .help("Characters per indent level"),
        )
        .arg(
            Arg::new("exclude")
                .long("exclude")
                .action(ArgAction::Append)
                .help("Member name to skip (repeatable)"),
        )
        .arg(
            Arg::new("ignore-default-values")
                .long("ignore-default-values")
                .action(ArgAction::SetTrue)
                .help("Skip members holding their type's zero value"),
        )
        .arg(
            Arg::new("options")
                .long("options")
                .help("JSON options file"),
        )
        .get_matches();

    // Read and parse the input document
    let json_content = match matches.get_one::<String>("input") {
        Some(path) if path != "-" => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?
        }
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };
    let value: serde_json::Value =
        serde_json::from_str(&json_content).context("input is not valid JSON")?;

    // Options file first, then explicit flags on top
    let mut options = DumpOptions::default();
    if let Some(path) = matches.get_one::<String>("options") {
        let content =
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
        let file: OptionsFile =
            serde_json::from_str(&content).context("options file is not valid JSON")?;
        apply_options_file(&mut options, file)?;
    }
    if let Some(style) = matches.get_one::<String>("style") {
        options.style = parse_style(style)?;
    }
    if let Some(max_level) = matches.get_one::<usize>("max-level") {
        options.max_level = *max_level;
    }
    if let Some(indent_size) = matches.get_one::<usize>("indent-size") {
        options.indent_size = *indent_size;
    }
    for name in matches.get_many::<String>("exclude").into_iter().flatten() {
        options.exclude_properties.insert(name.clone());
    }
    if matches.get_flag("ignore-default-values") {
        options.ignore_default_values = true;
    }

    let output = dump(&value, &options)?;
    println!("{}", output);

    Ok(())
}
