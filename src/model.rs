//! Medical expense regression model.

pub use self::features::{Person, FEATURE_NAMES};
pub use self::forest::{ForestParams, RandomForestRegressor};
pub use self::metrics::RSquared;

pub mod features;
pub mod forest;
pub mod metrics;
mod persistence;
mod tree;
