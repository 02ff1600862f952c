use std::str::FromStr;

use crate::prelude::*;

pub fn train_fraction(value: &str) -> Result<f64> {
    match f64::from_str(value)? {
        value if value > 0.0 && value < 1.0 => Ok(value),
        value => Err(anyhow!("{} is an invalid train fraction", value)),
    }
}

pub fn non_zero_usize(value: &str) -> Result<usize> {
    match usize::from_str(value)? {
        value if value >= 1 => Ok(value),
        _ => Err(anyhow!("expected a positive number")),
    }
}
