// Command-line interface for MessageML forms
//
// The mml program validates MessageML markup and renders it to the formats clients consume.
// All document handling lives in messageml-forms; this binary only deals with files,
// configuration and exit codes.
//
// Usage:
//  mml <input> [--to <format>] [--from <format>] [-o <file>]   - Convert (default command)
//  mml convert <input> [--to <format>] [--from <format>] [-o <file>]
//  mml validate <input> [--from <format>]                     - Check markup, print nothing on success
//  mml inspect <input> [--json]                               - Show the validated element tree
//  mml --list-formats                                         - List available formats
//
// Configuration:
//
// The embedded defaults are layered with ./messageml.toml (if present), then with the file given
// by --config, then with --set <key>=<value> overrides, e.g. `--set containment.button=direct`.
//
// Logging goes to stderr and is controlled by the MML_LOG environment variable (default "warn").

mod inspect;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use messageml_config::{Loader, MessageMlConfig};
use messageml_forms::{BuildOptions, Document, FormatRegistry};
use std::fs;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MML_LOG";
const LOCAL_CONFIG: &str = "messageml.toml";
const SUBCOMMANDS: &[&str] = &["convert", "validate", "inspect", "help"];

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn from_arg() -> Arg {
    Arg::new("from")
        .long("from")
        .help("Source format (auto-detected from file extension if not specified)")
        .value_hint(ValueHint::Other)
}

fn build_cli() -> Command {
    Command::new("mml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Validate and render MessageML forms")
        .long_about(
            "mml is a command-line tool for working with MessageML form markup.\n\n\
            Commands:\n  \
            - convert:  Render markup as PresentationML, Markdown or a debug tree\n  \
            - validate: Check markup and report the first defect\n  \
            - inspect:  Show the validated element tree\n\n\
            Examples:\n  \
            mml form.mml                          # Render canonical PresentationML\n  \
            mml form.mml --to markdown            # Render the Markdown summary\n  \
            mml validate form.mml                 # Exit status 1 on invalid markup\n  \
            mml inspect form.pml --json           # Element tree as JSON",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a messageml.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .value_name("KEY=VALUE")
                .help("Override a configuration key, e.g. containment.button=direct")
                .action(ArgAction::Append)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between formats (default command)")
                .long_about(
                    "Parse and validate the input, then render it in the target format.\n\n\
                    Formats:\n  \
                    - messageml:      author markup (.mml, .messageml, .xml), input only\n  \
                    - presentationml: canonical presentation markup (.pml, .html)\n  \
                    - markdown:       plain-text summary (.md), output only\n  \
                    - treeviz:        element tree for debugging (.tree), output only\n\n\
                    The source format is detected from the input extension. The target is\n\
                    --to, else detected from the -o extension, else convert.default_target.",
                )
                .arg(input_arg())
                .arg(from_arg())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("validate")
                .about("Validate markup without rendering it")
                .arg(input_arg())
                .arg(from_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the validated element tree")
                .arg(input_arg())
                .arg(from_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the tree as JSON instead of a tree view")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    init_logging();

    // If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            if args.len() > 1
                && !args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&args[1].as_str())
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(&matches);
    let options = config.build_options();
    debug!(?options, "configuration loaded");

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = required(sub_matches, "input");
            let from = resolve_from(sub_matches, input);
            let output = sub_matches.get_one::<String>("output").map(String::as_str);
            let to = resolve_to(sub_matches, output, &config);
            handle_convert_command(input, &from, &to, output, &options);
        }
        Some(("validate", sub_matches)) => {
            let input = required(sub_matches, "input");
            let from = resolve_from(sub_matches, input);
            load_document(input, &from, &options);
            info!(input, "valid");
        }
        Some(("inspect", sub_matches)) => {
            let input = required(sub_matches, "input");
            let from = resolve_from(sub_matches, input);
            let doc = load_document(input, &from, &options);
            let output = if sub_matches.get_flag("json") {
                inspect::to_json(&doc, config.inspect.pretty_json)
            } else {
                Ok(inspect::to_tree(&doc))
            };
            match output {
                Ok(text) => print!("{text}"),
                Err(err) => fail(&format!("Serialization error: {err}")),
            }
        }
        _ => fail("Unknown subcommand. Use --help for usage information."),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    match matches.get_one::<String>(name) {
        Some(value) => value,
        None => fail(&format!("Missing argument '{name}'")),
    }
}

/// `--from`, else detected from the input extension.
fn resolve_from(matches: &ArgMatches, input: &str) -> String {
    if let Some(from) = matches.get_one::<String>("from") {
        return from.to_string();
    }
    let registry = FormatRegistry::default();
    match registry.detect_format_from_filename(input) {
        Some(detected) => detected,
        None => fail(&format!(
            "Error: Could not detect format from filename '{input}'\nPlease specify --from explicitly"
        )),
    }
}

/// `--to`, else detected from the output extension, else the configured default.
fn resolve_to(matches: &ArgMatches, output: Option<&str>, config: &MessageMlConfig) -> String {
    if let Some(to) = matches.get_one::<String>("to") {
        return to.to_string();
    }
    let registry = FormatRegistry::default();
    output
        .and_then(|path| registry.detect_format_from_filename(path))
        .unwrap_or_else(|| config.convert.default_target.clone())
}

fn load_document(input: &str, from: &str, options: &BuildOptions) -> Document {
    let registry = FormatRegistry::default();
    if let Err(e) = registry.get(from) {
        fail(&format!("Error: {e}"));
    }

    let source = fs::read_to_string(input)
        .unwrap_or_else(|e| fail(&format!("Error reading file '{input}': {e}")));

    registry
        .parse_with_options(&source, from, options)
        .unwrap_or_else(|e| fail(&format!("Error: {e}")))
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    options: &BuildOptions,
) {
    let registry = FormatRegistry::default();
    if let Err(e) = registry.get(to) {
        fail(&format!("Error: {e}"));
    }

    let doc = load_document(input, from, options);
    debug!(input, from, to, elements = doc.len(), "converting");

    let text = registry
        .serialize(&doc, to)
        .unwrap_or_else(|e| fail(&format!("Serialization error: {e}")));

    match output {
        Some(path) => fs::write(path, text)
            .unwrap_or_else(|e| fail(&format!("Error writing file '{path}': {e}"))),
        None => print!("{text}"),
    }
}

/// Handle the --list-formats flag
fn handle_list_formats_command() {
    println!("Available formats:\n");
    let registry = FormatRegistry::default();
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            let mut directions = Vec::new();
            if format.supports_parsing() {
                directions.push("parse");
            }
            if format.supports_serialization() {
                directions.push("serialize");
            }
            println!(
                "  {name:<16}{:<18}{}",
                directions.join("+"),
                format.description()
            );
        }
    }
}

fn load_cli_config(matches: &ArgMatches) -> MessageMlConfig {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    for assignment in matches.get_many::<String>("set").into_iter().flatten() {
        let Some((key, value)) = assignment.split_once('=') else {
            fail(&format!("Invalid --set '{assignment}': expected KEY=VALUE"));
        };
        loader = loader
            .set_override(key.trim(), value.trim())
            .unwrap_or_else(|err| fail(&format!("Invalid --set '{assignment}': {err}")));
    }

    loader
        .build()
        .unwrap_or_else(|err| fail(&format!("Failed to load configuration: {err}")))
}
