use clap::Parser;

use crate::opts::{Opts, Subcommand};
use crate::prelude::*;

mod dataset;
mod model;
mod opts;
mod prelude;
mod tracing;
mod trainer;
mod web;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    crate::tracing::init(opts.verbosity)?;
    match opts.subcommand {
        Subcommand::Train(opts) => trainer::run(&opts),
        Subcommand::Web(opts) => web::run(opts).await,
    }
}
