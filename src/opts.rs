//! CLI options.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod parsers;

#[derive(Parser)]
#[command(version, about, rename_all = "kebab-case")]
pub struct Opts {
    /// Increases log verbosity
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand)]
pub enum Subcommand {
    Train(TrainOpts),
    Web(WebOpts),
}

/// Trains the expense model and pickles it to disk
#[derive(Args)]
pub struct TrainOpts {
    /// GBK-encoded insurance dataset
    #[arg(short, long, env = "MEDIFEE_DATASET", default_value = "insurance-chinese.csv")]
    pub dataset: PathBuf,

    /// Output path for the pickled model
    #[arg(short, long, env = "MEDIFEE_MODEL", default_value = "rfr-model.pkl")]
    pub model: PathBuf,

    /// Training set fraction
    #[arg(long, default_value = "0.8", value_parser = parsers::train_fraction)]
    pub train_fraction: f64,

    /// Number of trees in the forest
    #[arg(long, default_value = "100", value_parser = parsers::non_zero_usize)]
    pub n_trees: usize,

    /// Maximum tree depth
    #[arg(long, default_value = "16", value_parser = parsers::non_zero_usize)]
    pub max_depth: usize,

    /// Minimum number of samples in a leaf
    #[arg(long, default_value = "2", value_parser = parsers::non_zero_usize)]
    pub min_samples_leaf: usize,

    /// Random seed for the split and the bootstrap
    #[arg(long, default_value = "42")]
    pub seed: u64,
}

/// Runs the web application
#[derive(Args)]
pub struct WebOpts {
    /// Pickled model produced by the `train` subcommand
    #[arg(short, long, env = "MEDIFEE_MODEL", default_value = "rfr-model.pkl")]
    pub model: PathBuf,

    /// Web application bind host
    #[arg(long, default_value = "::")]
    pub host: String,

    /// Web application bind port
    #[arg(short, long, default_value = "8081")]
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_opts_ok() {
        use clap::CommandFactory;

        Opts::command().debug_assert();
    }
}
