//! One-hot feature encoding.

use serde::{Deserialize, Serialize};

use crate::dataset::{InsuranceRecord, Region, Sex, Smoker};
use crate::prelude::*;

/// Training-time feature columns, in canonical order: the numeric attributes
/// first, then the indicator columns of each categorical attribute.
pub const FEATURE_NAMES: [&str; 11] = [
    "年龄",
    "BMI",
    "子女数量",
    "性别_女性",
    "性别_男性",
    "是否吸烟_否",
    "是否吸烟_是",
    "区域_东北部",
    "区域_东南部",
    "区域_西北部",
    "区域_西南部",
];

/// Person attributes collected by the prediction form.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Person {
    pub age: u32,
    pub sex: Sex,
    pub bmi: f64,
    pub children: u32,
    pub smoker: Smoker,
    pub region: Region,
}

impl Person {
    /// Builds the feature vector in the given column order.
    ///
    /// Inference must pass the column names recorded by the fitted model, so
    /// that the vector always matches the training-time schema.
    pub fn encode<S: AsRef<str>>(&self, feature_names: &[S]) -> Result<Vec<f64>> {
        feature_names.iter().map(|name| self.feature(name.as_ref())).collect()
    }

    fn feature(&self, name: &str) -> Result<f64> {
        let value = match name {
            "年龄" => self.age as f64,
            "BMI" => self.bmi,
            "子女数量" => self.children as f64,
            "性别_女性" => indicator(self.sex == Sex::Female),
            "性别_男性" => indicator(self.sex == Sex::Male),
            "是否吸烟_否" => indicator(self.smoker == Smoker::No),
            "是否吸烟_是" => indicator(self.smoker == Smoker::Yes),
            "区域_东北部" => indicator(self.region == Region::NorthEast),
            "区域_东南部" => indicator(self.region == Region::SouthEast),
            "区域_西北部" => indicator(self.region == Region::NorthWest),
            "区域_西南部" => indicator(self.region == Region::SouthWest),
            _ => return Err(anyhow!("unknown feature column `{}`", name)),
        };
        Ok(value)
    }
}

impl From<&InsuranceRecord> for Person {
    fn from(record: &InsuranceRecord) -> Self {
        Self {
            age: record.age,
            sex: record.sex,
            bmi: record.bmi,
            children: record.children,
            smoker: record.smoker,
            region: record.region,
        }
    }
}

const fn indicator(condition: bool) -> f64 {
    if condition {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_ok() -> Result {
        let person = Person {
            age: 30,
            sex: Sex::Female,
            bmi: 22.5,
            children: 1,
            smoker: Smoker::No,
            region: Region::SouthEast,
        };
        let features = person.encode(&FEATURE_NAMES)?;
        assert_eq!(
            features,
            [30.0, 22.5, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        );
        Ok(())
    }

    #[test]
    fn exactly_one_indicator_per_attribute() -> Result {
        let person = Person {
            age: 52,
            sex: Sex::Male,
            bmi: 30.2,
            children: 3,
            smoker: Smoker::Yes,
            region: Region::NorthWest,
        };
        let features = person.encode(&FEATURE_NAMES)?;
        assert_eq!(features[3] + features[4], 1.0);
        assert_eq!(features[5] + features[6], 1.0);
        assert_eq!(features[7] + features[8] + features[9] + features[10], 1.0);
        Ok(())
    }

    #[test]
    fn encode_rejects_unknown_column() {
        let person = Person {
            age: 30,
            sex: Sex::Female,
            bmi: 22.5,
            children: 1,
            smoker: Smoker::No,
            region: Region::SouthEast,
        };
        assert!(person.encode(&["吸烟"]).is_err());
    }
}
