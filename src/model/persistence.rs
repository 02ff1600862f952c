//! Pickles the fitted estimator to disk and back.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::model::RandomForestRegressor;
use crate::prelude::*;

impl RandomForestRegressor {
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn dump(&self, path: impl AsRef<Path>) -> Result {
        let file = File::create(path.as_ref())
            .with_context(|| format!("failed to create `{}`", path.as_ref().display()))?;
        let mut writer = BufWriter::new(file);
        serde_pickle::to_writer(&mut writer, self, serde_pickle::SerOptions::new())
            .context("failed to pickle the model")?;
        Ok(())
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("failed to open `{}`", path.as_ref().display()))?;
        serde_pickle::from_reader(BufReader::new(file), serde_pickle::DeOptions::new())
            .context("failed to unpickle the model")
    }
}

#[cfg(test)]
mod tests {
    use crate::model::forest::tests::fit_test_forest;

    use super::*;

    #[test]
    fn dump_load_round_trip_ok() -> Result {
        let forest = fit_test_forest();
        let file = tempfile::NamedTempFile::new()?;
        forest.dump(file.path())?;

        let loaded = RandomForestRegressor::load(file.path())?;
        assert_eq!(loaded.feature_names, forest.feature_names);
        assert_eq!(loaded.trained_at, forest.trained_at);
        assert_eq!(loaded.predict(&[20.0, 0.0])?, forest.predict(&[20.0, 0.0])?);
        Ok(())
    }

    #[test]
    fn load_fails_on_a_missing_file() {
        assert!(RandomForestRegressor::load("no-such-model.pkl").is_err());
    }
}
