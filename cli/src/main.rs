#![deny(missing_docs)]

//! # casegen CLI
//!
//! Command Line Interface deriving test cases from OpenAPI documents.
//!
//! Supported Commands:
//! - `generate`: OpenAPI document -> text/YAML/JSON test-case report.
//!
//! Logging goes to stderr and is controlled through `RUST_LOG` (default `warn`).

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::CliResult;

mod error;
mod generate;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI test-case generator")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generates test cases for every operation of an OpenAPI document.
    Generate(generate::GenerateArgs),
}

fn main() -> CliResult<()> {
    // stdout carries the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate(args) => generate::execute(args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_arguments() {
        let cli = Cli::try_parse_from([
            "casegen", "generate", "api.yaml", "-o", "out.yaml", "--format", "yaml", "--curl",
        ])
        .unwrap();
        let Commands::Generate(args) = cli.command;
        assert_eq!(args.spec.to_str(), Some("api.yaml"));
        assert_eq!(args.out.as_deref().and_then(|p| p.to_str()), Some("out.yaml"));
        assert_eq!(args.format, generate::OutputFormat::Yaml);
        assert!(args.curl);
        assert_eq!(args.base_url, None);
    }

    #[test]
    fn test_curl_flag_accepts_numeric_env_value() {
        std::env::set_var("CASEGEN_CURL", "1");
        let cli = Cli::try_parse_from(["casegen", "generate", "api.yaml"]);
        std::env::remove_var("CASEGEN_CURL");

        let Commands::Generate(args) = cli.unwrap().command;
        assert!(args.curl);
    }
}
