//! Bootstrap-aggregated forest of regression trees.

use anyhow::ensure;
use chrono::Utc;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::model::features::Person;
use crate::model::tree::{GrowthParams, RegressionTree};
use crate::prelude::*;

/// Forest hyper-parameters.
pub struct ForestParams {
    pub n_trees: usize,
    pub max_depth: usize,
    pub min_samples_leaf: usize,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: 16,
            min_samples_leaf: 2,
        }
    }
}

/// Fitted random forest regressor together with its feature schema.
#[derive(Serialize, Deserialize)]
pub struct RandomForestRegressor {
    /// Training-time feature columns. Inference re-builds its vectors from
    /// these names, which keeps both schemas in sync.
    pub feature_names: Vec<String>,

    pub trained_at: DateTime,

    trees: Vec<RegressionTree>,
}

impl RandomForestRegressor {
    #[instrument(skip_all, fields(n_samples = features.len(), n_trees = params.n_trees, seed = seed))]
    pub fn fit<S: AsRef<str>>(
        feature_names: &[S],
        features: &[Vec<f64>],
        targets: &[f64],
        params: &ForestParams,
        seed: u64,
    ) -> Result<Self> {
        ensure!(params.n_trees >= 1, "the forest needs at least one tree");
        ensure!(!features.is_empty(), "the training set is empty");
        ensure!(
            features.len() == targets.len(),
            "{} feature vectors against {} targets",
            features.len(),
            targets.len(),
        );
        for vector in features {
            ensure!(
                vector.len() == feature_names.len(),
                "feature vector width {} does not match the schema width {}",
                vector.len(),
                feature_names.len(),
            );
        }

        let growth_params = GrowthParams {
            max_depth: params.max_depth,
            min_samples_leaf: params.min_samples_leaf,
            n_split_features: n_split_features(feature_names.len()),
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let trees = (0..params.n_trees)
            .map(|_| {
                let sample = bootstrap_sample(features.len(), &mut rng);
                RegressionTree::fit(features, targets, sample, &growth_params, &mut rng)
            })
            .collect_vec();

        debug!(n_trees = trees.len(), "fitted");
        Ok(Self {
            feature_names: feature_names.iter().map(|name| name.as_ref().to_string()).collect(),
            trained_at: Utc::now(),
            trees,
        })
    }

    /// Predicts the expense for an already encoded feature vector.
    pub fn predict(&self, features: &[f64]) -> Result<f64> {
        ensure!(
            features.len() == self.feature_names.len(),
            "feature vector width {} does not match the schema width {}",
            features.len(),
            self.feature_names.len(),
        );
        let sum: f64 = self.trees.iter().map(|tree| tree.predict(features)).sum();
        Ok(sum / self.trees.len() as f64)
    }

    pub fn predict_person(&self, person: &Person) -> Result<f64> {
        self.predict(&person.encode(&self.feature_names)?)
    }
}

/// `sqrt` of the column count, the usual regression forest default.
fn n_split_features(n_features: usize) -> usize {
    ((n_features as f64).sqrt().round() as usize).max(1)
}

fn bootstrap_sample(n_samples: usize, rng: &mut StdRng) -> Vec<usize> {
    (0..n_samples).map(|_| rng.gen_range(0..n_samples)).collect()
}
