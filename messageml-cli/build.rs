use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the default format registry in messageml-forms.
// Build scripts can't depend on the crates they are building for.
const AVAILABLE_FORMATS: &[&str] = &["markdown", "messageml", "presentationml", "treeviz"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let input = || {
        Arg::new("input")
            .help("Input file path")
            .required(true)
            .index(1)
            .value_hint(ValueHint::FilePath)
    };
    let from = || {
        Arg::new("from")
            .long("from")
            .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
    };

    let mut cmd = Command::new("mml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Validate and render MessageML forms")
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .action(ArgAction::Append)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .arg(input())
                .arg(from())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(Command::new("validate").arg(input()).arg(from()))
        .subcommand(
            Command::new("inspect")
                .arg(input())
                .arg(from())
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        );

    generate_to(Bash, &mut cmd, "mml", &outdir)?;
    generate_to(Zsh, &mut cmd, "mml", &outdir)?;
    generate_to(Fish, &mut cmd, "mml", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
