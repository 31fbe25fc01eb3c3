use clap::Parser;
use std::path::PathBuf;

/// Options shared by anything that drives a translation.
#[derive(Parser, Debug, Clone, Default)]
pub struct TranslateOpts {
    /// Use configuration from file
    #[clap(
        long = "config",
        name = "config file",
        help_heading = "TRANSLATION CONFIGURATION"
    )]
    pub config_file: Option<PathBuf>,

    /// Name of a traffic item that has ingress tracking enabled.
    /// May be given multiple times, and is combined with the configuration file.
    #[clap(
        long = "ingress-tracked-flow",
        name = "traffic item",
        help_heading = "TRANSLATION CONFIGURATION"
    )]
    pub ingress_tracked_flow: Vec<String>,

    /// Log every translated device as JSON
    #[clap(long, help_heading = "TRANSLATION CONFIGURATION")]
    pub debug: bool,
}
