//! The one-shot training pipeline: load → encode → split → fit → pickle.

use crate::dataset::{Dataset, InsuranceRecord};
use crate::model::{ForestParams, Person, RSquared, RandomForestRegressor, FEATURE_NAMES};
use crate::opts::TrainOpts;
use crate::prelude::*;

pub fn run(opts: &TrainOpts) -> Result {
    let start_instant = Instant::now();

    let dataset = Dataset::load(&opts.dataset)?;
    let (train, test) = dataset.split(opts.train_fraction, opts.seed)?;
    info!(n_train = train.len(), n_test = test.len(), "split the dataset");

    let (features, targets) = encode(&train)?;
    let params = ForestParams {
        n_trees: opts.n_trees,
        max_depth: opts.max_depth,
        min_samples_leaf: opts.min_samples_leaf,
    };
    let model = RandomForestRegressor::fit(&FEATURE_NAMES, &features, &targets, &params, opts.seed)?;

    let mut r_squared = RSquared::default();
    for record in &test {
        let prediction = model.predict_person(&Person::from(record))?;
        r_squared.push_sample(prediction, record.expenses);
    }
    info!(r_squared = r_squared.finalise(), "evaluated on the held-out partition");

    model.dump(&opts.model)?;
    info!(path = %opts.model.display(), elapsed = ?start_instant.elapsed(), "saved the model");
    Ok(())
}

pub(crate) fn encode(records: &[InsuranceRecord]) -> Result<(Vec<Vec<f64>>, Vec<f64>)> {
    let mut features = Vec::with_capacity(records.len());
    let mut targets = Vec::with_capacity(records.len());
    for record in records {
        features.push(Person::from(record).encode(&FEATURE_NAMES)?);
        targets.push(record.expenses);
    }
    Ok((features, targets))
}
