#![deny(missing_docs)]

//! # Generate Command
//!
//! Reads an OpenAPI document and writes its test cases.

use std::fs;
use std::path::PathBuf;

use casegen_core::{build_test_cases, load_document, render_json, render_text, render_yaml};
use casegen_core::{server_urls, CaseOptions};

use crate::error::{CliError, CliResult};

/// Output encodings of the report.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable blocks.
    #[default]
    Text,
    /// `environment` + `test_cases` as YAML.
    Yaml,
    /// Same structure as YAML, pretty-printed JSON.
    Json,
}

/// Arguments for the `generate` command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the OpenAPI document (YAML or JSON).
    #[clap(env = "CASEGEN_SPEC")]
    pub spec: PathBuf,

    /// Output file; the report goes to stdout when omitted.
    #[clap(short, long, env = "CASEGEN_OUT")]
    pub out: Option<PathBuf>,

    /// Report format.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text, env = "CASEGEN_FORMAT")]
    pub format: OutputFormat,

    /// Attach a curl command to every step.
    #[clap(long, env = "CASEGEN_CURL", value_parser = clap::builder::FalseyValueParser::new())]
    pub curl: bool,

    /// Base URL for curl commands (defaults to the first `servers` entry).
    #[clap(long, env = "CASEGEN_BASE_URL")]
    pub base_url: Option<String>,
}

/// Executes the generation.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &GenerateArgs) -> CliResult<()> {
    if !args.spec.exists() {
        return Err(CliError::General(format!(
            "OpenAPI file not found: {:?}",
            args.spec
        )));
    }

    // 1. Read Document
    let text = fs::read_to_string(&args.spec)?;
    let document = load_document(&text)?;

    // 2. Build Cases
    let options = CaseOptions {
        curl: args.curl,
        base_url: args.base_url.clone(),
    };
    let cases = build_test_cases(&document, &options);
    let servers = server_urls(&document);

    // 3. Render
    let report = match args.format {
        OutputFormat::Text => render_text(&cases),
        OutputFormat::Yaml => render_yaml(&cases, &servers)?,
        OutputFormat::Json => render_json(&cases, &servers)?,
    };

    // 4. Write
    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, report)?;
            tracing::info!(cases = cases.len(), path = %path.display(), "wrote test cases");
        }
        None => {
            print!("{report}");
            tracing::info!(cases = cases.len(), "printed test cases");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const YAML: &str = r#"
openapi: 3.1.0
info: {title: T, version: 1.0}
servers: [{url: "https://svc.test"}]
paths:
  /health:
    get:
      responses:
        '200': { description: OK }
"#;

    fn args(spec: PathBuf, out: Option<PathBuf>, format: OutputFormat) -> GenerateArgs {
        GenerateArgs {
            spec,
            out,
            format,
            curl: false,
            base_url: None,
        }
    }

    #[test]
    fn test_execute_writes_text_report() {
        let dir = tempdir().unwrap();
        let spec = dir.path().join("openapi.yaml");
        let out = dir.path().join("reports/nested/cases.txt");
        fs::write(&spec, YAML).unwrap();

        execute(&args(spec, Some(out.clone()), OutputFormat::Text)).unwrap();

        let contents = fs::read_to_string(out).unwrap();
        assert!(contents.contains("TEST CASE: Check GET for path /health"));
        assert!(contents.contains("Status: 200"));
    }

    #[test]
    fn test_execute_writes_yaml_report_with_curl() {
        let dir = tempdir().unwrap();
        let spec = dir.path().join("openapi.yaml");
        let out = dir.path().join("cases.yaml");
        fs::write(&spec, YAML).unwrap();

        let mut args = args(spec, Some(out.clone()), OutputFormat::Yaml);
        args.curl = true;
        args.base_url = Some("http://localhost:9000".to_string());
        execute(&args).unwrap();

        let contents = fs::read_to_string(out).unwrap();
        assert!(contents.starts_with("environment:"));
        assert!(contents.contains("https://svc.test"));
        assert!(contents.contains("curl -X GET"));
        assert!(contents.contains("http://localhost:9000/health"));
    }

    #[test]
    fn test_execute_missing_openapi() {
        let dir = tempdir().unwrap();
        let spec = dir.path().join("missing.yaml");

        let err = execute(&args(spec, None, OutputFormat::Text)).unwrap_err();
        assert!(format!("{}", err).contains("OpenAPI file not found"));
    }

    #[test]
    fn test_execute_rejects_non_mapping_document() {
        let dir = tempdir().unwrap();
        let spec = dir.path().join("list.yaml");
        fs::write(&spec, "- just\n- a list\n").unwrap();

        let err = execute(&args(spec, None, OutputFormat::Json)).unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
    }
}
