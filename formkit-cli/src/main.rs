use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use formkit::{
    ControlOptions, Controller, DocumentFormat, OutputOptions, build_controllers, emit_reports,
    load_descriptors,
};

#[derive(Debug, Parser)]
#[command(
    name = "formkit",
    version,
    about = "Validate form control descriptors and print their derived state"
)]
struct Cli {
    /// Control descriptors: file path, inline payload, or "-" for stdin
    #[arg(short = 'c', long = "control", value_name = "SPEC")]
    control: String,

    /// Descriptor format (json, yaml, toml); inferred from the file extension when omitted
    #[arg(long = "format", value_name = "FORMAT")]
    format: Option<String>,

    /// Override a control value before validation, e.g. `--set email=a@b.com`
    #[arg(short = 's', long = "set", value_name = "ID=VALUE", action = ArgAction::Append)]
    overrides: Vec<String>,

    /// Emit compact output rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Exit with an error when any control is invalid
    #[arg(long = "strict")]
    strict: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let format = resolve_format(&cli)?;
    let contents = read_spec(&cli.control)?;
    let descriptors = load_descriptors(&contents, format).map_err(|err| eyre!("{err:#}"))?;
    debug!(count = descriptors.len(), %format, "descriptors loaded");

    let mut controllers = build_controllers(&descriptors, Arc::new(ControlOptions::default()));
    for raw in &cli.overrides {
        apply_override(&mut controllers, raw)?;
    }

    let reports: Vec<_> = controllers.iter().map(Controller::report).collect();
    let options = OutputOptions::new(format).with_pretty(!cli.no_pretty);
    let mut stdout = io::stdout().lock();
    emit_reports(&reports, &options, &mut stdout).map_err(|err| eyre!("{err:#}"))?;

    let invalid = reports.iter().filter(|report| !report.is_valid).count();
    if cli.strict && invalid > 0 {
        return Err(eyre!("{invalid} control(s) failed validation"));
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn resolve_format(cli: &Cli) -> Result<DocumentFormat> {
    if let Some(name) = cli.format.as_deref() {
        return DocumentFormat::from_name(name)
            .ok_or_else(|| eyre!("unsupported format '{name}'; enable the matching feature"));
    }
    if cli.control != "-"
        && let Some(format) = DocumentFormat::from_path(Path::new(&cli.control))
    {
        return Ok(format);
    }
    Ok(DocumentFormat::default())
}

fn read_spec(spec: &str) -> Result<String> {
    if spec == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err("failed to read descriptors from stdin")?;
        return Ok(buffer);
    }
    let path = Path::new(spec);
    if path.is_file() {
        return fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()));
    }
    // Anything that is not a file is treated as an inline payload.
    Ok(spec.to_string())
}

fn apply_override(controllers: &mut [Controller], raw: &str) -> Result<()> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| eyre!("override '{raw}' must look like ID=VALUE"))?;
    let controller = controllers
        .iter_mut()
        .find(|controller| controller.id().is_some_and(|known| known.matches(id)))
        .ok_or_else(|| eyre!("no control with id '{id}'"))?;
    controller.apply_override(value)?;
    controller.validate();
    Ok(())
}
