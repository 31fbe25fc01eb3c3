#![deny(warnings, clippy::all)]

use clap::Parser;
use ixia_oc::config::ConfigLoadError;
use ixia_oc::{prelude::*, tracing::try_init_tracing_subscriber};
use std::collections::{HashMap, HashSet};
use std::error::Error as _;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

/// Translate Ixia statistics views to an OpenConfig style telemetry tree
#[derive(Parser, Debug, Clone)]
#[clap(version)]
pub struct Opts {
    #[clap(flatten)]
    pub translate_opts: TranslateOpts,

    /// Write the telemetry tree to this file instead of stdout
    #[clap(long, short = 'o', name = "output")]
    pub output: Option<PathBuf>,

    /// Path to a JSON file mapping view names to arrays of rows
    #[clap(name = "input")]
    pub input: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("An input file containing statistics views is required.")]
    MissingInput,

    #[error("Failed to read input file '{0}'")]
    ReadInput(String, #[source] io::Error),

    #[error("Failed to parse statistics views from '{0}'")]
    ParseInput(String, #[source] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigLoadError),

    #[error("Failed to render the telemetry tree")]
    Render(#[source] serde_json::Error),

    #[error("Failed to write output")]
    WriteOutput(#[source] io::Error),

    #[error("Failed to initialize logging: {0}")]
    Tracing(String),
}

impl Error {
    fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Error::MissingInput | Error::ReadInput(..) | Error::ParseInput(..) => exitcode::NOINPUT,
            Error::Config(_) => exitcode::CONFIG,
            Error::WriteOutput(_) => exitcode::IOERR,
            Error::Render(_) | Error::Tracing(_) => exitcode::SOFTWARE,
        }
    }
}

fn main() {
    match do_main() {
        Ok(()) => (),
        Err(e) => {
            eprintln!("{e}");
            let mut cause = e.source();
            while let Some(err) = cause {
                eprintln!("Caused by: {err}");
                cause = err.source();
            }
            std::process::exit(e.exit_code());
        }
    }
}

fn do_main() -> Result<(), Error> {
    let opts = Opts::parse();

    try_init_tracing_subscriber().map_err(|e| Error::Tracing(e.to_string()))?;

    let cfg = TranslateConfig::load_merge_with_opts(opts.translate_opts)?;
    set_debug_log(cfg.debug);

    let input = opts.input.ok_or(Error::MissingInput)?;
    let input_name = input.display().to_string();
    let content =
        fs::read_to_string(&input).map_err(|e| Error::ReadInput(input_name.clone(), e))?;
    let views: HashMap<View, Table> =
        serde_json::from_str(&content).map_err(|e| Error::ParseInput(input_name.clone(), e))?;
    debug!("Read {} statistics views from '{}'", views.len(), input_name);

    let ingress_tracked_flows: HashSet<String> =
        cfg.ingress_tracked_flows.iter().cloned().collect();
    let device = translate(&views, &ingress_tracked_flows);
    if device.is_empty() {
        warn!("No statistics were translated from '{}'", input_name);
    }

    let mut rendered = serde_json::to_string_pretty(&device).map_err(Error::Render)?;
    rendered.push('\n');
    match &opts.output {
        Some(path) => fs::write(path, rendered).map_err(Error::WriteOutput)?,
        None => io::stdout()
            .lock()
            .write_all(rendered.as_bytes())
            .map_err(Error::WriteOutput)?,
    }
    Ok(())
}
