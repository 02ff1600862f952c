use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::prelude::*;

/// Initialises tracing.
pub fn init(verbosity: u8) -> Result {
    let default_directives = match verbosity {
        0 => "medifee_dashboard=info",
        1 => "medifee_dashboard=debug",
        _ => "medifee_dashboard=trace",
    };
    let format_filter = EnvFilter::try_from_env("MEDIFEE_DASHBOARD_LOG")
        .or_else(|_| EnvFilter::try_new(default_directives))?;
    let format_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_filter(format_filter);

    tracing_subscriber::Registry::default().with(format_layer).init();

    Ok(())
}
