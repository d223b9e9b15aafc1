// crates/catbuffer-inspect/src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use catbuffer_inspect::input::{read_payload, Source};
use catbuffer_inspect::{inspect, list_kinds, Config, Family, OutputMode, Registries};

#[derive(Parser)]
#[clap(name = "catbuffer-inspect")]
#[clap(about = "Decode and verify ledger binary entities")]
struct Cli {
    /// TOML configuration file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `catbuffer_core=trace`
    #[clap(long)]
    log_level: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode one entity and print it
    Decode {
        #[clap(value_enum)]
        family: Family,

        /// Payload as hex text
        #[clap(long, conflicts_with = "file")]
        hex: Option<String>,

        /// Binary payload file; stdin is read when neither input is given
        #[clap(short, long)]
        file: Option<PathBuf>,

        #[clap(short, long, value_enum)]
        output: Option<OutputMode>,

        /// Skip the re-encode comparison
        #[clap(long)]
        no_verify: bool,

        /// Override the input size bound
        #[clap(long)]
        max_input_bytes: Option<usize>,
    },
    /// List the registered discriminators of a family
    Kinds {
        #[clap(value_enum)]
        family: Family,
    },
}

fn init_logging(cli_level: Option<&str>, config: &Config) {
    let filter = match cli_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    init_logging(cli.log_level.as_deref(), &config);
    let registries = Registries::new();

    match cli.command {
        Command::Decode {
            family,
            hex,
            file,
            output,
            no_verify,
            max_input_bytes,
        } => {
            if let Some(max) = max_input_bytes {
                config.max_input_bytes = max;
            }
            if let Some(output) = output {
                config.output = output;
            }
            if no_verify {
                config.verify_roundtrip = false;
            }
            config.validate()?;

            let source = match (hex, file) {
                (Some(text), _) => Source::Hex(text),
                (None, Some(path)) => Source::File(path),
                (None, None) => Source::Stdin,
            };
            let payload = read_payload(&source, config.max_input_bytes)?;
            println!("{}", inspect(family, &payload, &config, &registries)?);
        }
        Command::Kinds { family } => {
            for kind in list_kinds(family, &registries)? {
                println!("{kind}");
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
