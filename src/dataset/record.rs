use serde::{Deserialize, Serialize};

/// Single row of the insurance dataset.
///
/// The CSV carries Chinese column headers, hence the field renames.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InsuranceRecord {
    #[serde(rename = "年龄")]
    pub age: u32,

    #[serde(rename = "性别")]
    pub sex: Sex,

    #[serde(rename = "BMI")]
    pub bmi: f64,

    #[serde(rename = "子女数量")]
    pub children: u32,

    #[serde(rename = "是否吸烟")]
    pub smoker: Smoker,

    #[serde(rename = "区域")]
    pub region: Region,

    /// Target variable.
    #[serde(rename = "医疗费用")]
    pub expenses: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    #[serde(rename = "男性")]
    Male,

    #[serde(rename = "女性")]
    Female,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Smoker {
    #[serde(rename = "是")]
    Yes,

    #[serde(rename = "否")]
    No,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    #[serde(rename = "东南部")]
    SouthEast,

    #[serde(rename = "西南部")]
    SouthWest,

    #[serde(rename = "东北部")]
    NorthEast,

    #[serde(rename = "西北部")]
    NorthWest,
}
