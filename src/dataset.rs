//! Insurance dataset: GBK-encoded CSV loading and the train/test split.

use std::fs;
use std::path::Path;

use anyhow::{bail, ensure};
use encoding_rs::GBK;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub use self::record::{InsuranceRecord, Region, Sex, Smoker};
use crate::prelude::*;

mod record;

pub struct Dataset {
    pub records: Vec<InsuranceRecord>,
}

impl Dataset {
    /// Reads and decodes the dataset file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read(path.as_ref())
            .with_context(|| format!("failed to read `{}`", path.as_ref().display()))?;
        Self::from_gbk(&raw)
            .with_context(|| format!("failed to parse `{}`", path.as_ref().display()))
    }

    pub fn from_gbk(raw: &[u8]) -> Result<Self> {
        let (decoded, _, had_errors) = GBK.decode(raw);
        if had_errors {
            bail!("the dataset is not valid GBK");
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(decoded.as_bytes());
        let records = reader
            .deserialize()
            .collect::<StdResult<Vec<InsuranceRecord>, csv::Error>>()?;
        ensure!(!records.is_empty(), "the dataset contains no records");

        info!(n_records = records.len(), "loaded");
        Ok(Self { records })
    }

    /// Shuffles the records and splits them into train and test partitions.
    ///
    /// Both partitions are guaranteed to be non-empty.
    pub fn split(
        mut self,
        train_fraction: f64,
        seed: u64,
    ) -> Result<(Vec<InsuranceRecord>, Vec<InsuranceRecord>)> {
        ensure!(
            train_fraction > 0.0 && train_fraction < 1.0,
            "{} is an invalid train fraction",
            train_fraction,
        );

        self.records.shuffle(&mut StdRng::seed_from_u64(seed));
        let n_train = (self.records.len() as f64 * train_fraction).round() as usize;
        ensure!(
            n_train >= 1 && n_train < self.records.len(),
            "cannot split {} records with the train fraction {}",
            self.records.len(),
            train_fraction,
        );

        let mut train = self.records;
        let test = train.split_off(n_train);
        Ok((train, test))
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    pub const FIXTURE: &[u8] = include_bytes!("../tests/fixtures/insurance-chinese.csv");

    #[test]
    fn from_gbk_ok() -> Result {
        let dataset = Dataset::from_gbk(FIXTURE)?;
        assert_eq!(dataset.records.len(), 40);

        let first = &dataset.records[0];
        assert_eq!(first.age, 19);
        assert_eq!(first.sex, Sex::Female);
        assert!((first.bmi - 27.9).abs() < f64::EPSILON);
        assert_eq!(first.children, 0);
        assert_eq!(first.smoker, Smoker::Yes);
        assert_eq!(first.region, Region::SouthWest);
        assert!((first.expenses - 16884.92).abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn from_gbk_rejects_invalid_encoding() {
        // 0x81 starts a GBK double-byte sequence, 0x20 cannot complete it.
        assert!(Dataset::from_gbk(&[0x81, 0x20, 0x81, 0x20]).is_err());
    }

    #[test]
    fn split_ok() -> Result {
        let dataset = Dataset::from_gbk(FIXTURE)?;
        let (train, test) = dataset.split(0.8, 42)?;
        assert_eq!(train.len(), 32);
        assert_eq!(test.len(), 8);
        Ok(())
    }

    #[test]
    fn split_is_deterministic() -> Result {
        let (train_1, _) = Dataset::from_gbk(FIXTURE)?.split(0.8, 42)?;
        let (train_2, _) = Dataset::from_gbk(FIXTURE)?.split(0.8, 42)?;
        assert_eq!(train_1, train_2);
        Ok(())
    }

    #[test]
    fn split_rejects_degenerate_fractions() {
        assert!(Dataset::from_gbk(FIXTURE).unwrap().split(0.0, 42).is_err());
        assert!(Dataset::from_gbk(FIXTURE).unwrap().split(1.0, 42).is_err());
    }
}
