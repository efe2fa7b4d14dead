//! fhir-sdk CLI
//!
//! Decodes FHIR JSON documents into the typed models, prints them back and
//! checks that decode/encode round trips are lossless.

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fhir_sdk_models::format::{encode_value, AnyResource, FhirParser, FhirVersion, ParserConfig};
use fhir_sdk_models::{r4::R4, stu3::Stu3};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error, info};

#[derive(Parser, Debug)]
#[command(name = "fhir-sdk")]
#[command(about = "Decode and round-trip FHIR STU3/R4 JSON documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// FHIR release the documents are written in
    #[arg(short = 'f', long, global = true, value_enum, default_value = "r4")]
    fhir_version: Release,

    /// Ignore unknown fields and resolve conflicting choice keys instead of failing
    #[arg(long, global = true, env = "FHIR_SDK_LENIENT")]
    lenient: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true, env = "FHIR_SDK_LOG_JSON")]
    log_json: bool,

    /// Log decode and encode steps
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a document and print a short summary of it
    Decode {
        file: PathBuf,
    },

    /// Decode a document and print it re-encoded
    Roundtrip {
        file: PathBuf,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// Decode, re-encode and compare every document
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Release {
    R4,
    Stu3,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.log_json, cli.verbose);

    let config = if cli.lenient {
        ParserConfig::lenient()
    } else {
        ParserConfig::default()
    };

    let outcome = match cli.fhir_version {
        Release::R4 => run::<R4>(&cli.command, config),
        Release::Stu3 => run::<Stu3>(&cli.command, config),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Runs `command` against release `V`. `Ok(false)` means some document
/// did not survive a round trip.
fn run<V: FhirVersion>(command: &Command, config: ParserConfig) -> Result<bool> {
    match command {
        Command::Decode { file } => {
            let parser = FhirParser::<V>::with_config(config);
            let (_, resource) = decode(&parser, file)?;
            println!("{}", summary(&resource));
            Ok(true)
        }
        Command::Roundtrip { file, pretty } => {
            let parser = FhirParser::<V>::with_config(config.with_pretty(*pretty));
            let (_, resource) = decode(&parser, file)?;
            let json = parser
                .encode_resource(&resource)
                .with_context(|| format!("Failed to encode {}", file.display()))?;
            println!("{json}");
            Ok(true)
        }
        Command::Check { files } => {
            let parser = FhirParser::<V>::with_config(config);
            let mut failed = 0usize;
            for file in files {
                match check(&parser, file) {
                    Ok(()) => println!("ok    {}", file.display()),
                    Err(e) => {
                        failed += 1;
                        println!("FAIL  {}: {e:#}", file.display());
                    }
                }
            }
            info!(
                fhir_version = V::NAME,
                checked = files.len(),
                failed,
                "round trip check finished"
            );
            println!(
                "{} checked, {} passed, {} failed",
                files.len(),
                files.len() - failed,
                failed
            );
            Ok(failed == 0)
        }
    }
}

fn decode<V: FhirVersion>(parser: &FhirParser<V>, file: &Path) -> Result<(Value, V::Resource)> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let source: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;

    debug!(file = %file.display(), fhir_version = V::RELEASE, "decoding document");
    let resource = parser
        .parse_resource_value(&source)
        .with_context(|| format!("Failed to decode {}", file.display()))?;
    Ok((source, resource))
}

fn check<V: FhirVersion>(parser: &FhirParser<V>, file: &Path) -> Result<()> {
    let (source, resource) = decode(parser, file)?;
    let encoded = parser.encode_resource(&resource)?;
    let reparsed: Value = serde_json::from_str(&encoded)?;

    if reparsed != source {
        anyhow::bail!("re-encoded {} differs from the input", resource.resource_type());
    }
    Ok(())
}

/// One line naming the decoded resource: type, id and the number of
/// top-level properties it encodes to.
fn summary<R: AnyResource>(resource: &R) -> String {
    let id = resource.id().unwrap_or("-");
    let fields = encode_value(resource).as_object().map_or(0, |object| object.len());
    format!("{} id={} fields={}", resource.resource_type(), id, fields)
}
