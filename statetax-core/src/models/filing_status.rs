use std::fmt;

use serde::{Deserialize, Serialize};

/// Filing status categories as they appear in jurisdiction tax documents.
///
/// Serde names match the keys used in the serialized schema (`"single"`,
/// `"married"`, ...). A jurisdiction is not required to publish a schedule
/// for every status; a lookup miss surfaces as
/// [`TaxError::UnsupportedFilingStatus`](crate::TaxError::UnsupportedFilingStatus).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FilingStatus {
    #[serde(rename = "single")]
    Single,
    #[serde(rename = "married", alias = "marriedFilingJointly")]
    MarriedFilingJointly,
    #[serde(rename = "marriedFilingSeparately")]
    MarriedFilingSeparately,
    #[serde(rename = "headOfHousehold")]
    HeadOfHousehold,
    #[serde(rename = "qualifyingSurvivingSpouse")]
    QualifyingSurvivingSpouse,
}

impl FilingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::MarriedFilingJointly => "married",
            Self::MarriedFilingSeparately => "marriedFilingSeparately",
            Self::HeadOfHousehold => "headOfHousehold",
            Self::QualifyingSurvivingSpouse => "qualifyingSurvivingSpouse",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "single" => Some(Self::Single),
            "married" | "marriedFilingJointly" => Some(Self::MarriedFilingJointly),
            "marriedFilingSeparately" => Some(Self::MarriedFilingSeparately),
            "headOfHousehold" => Some(Self::HeadOfHousehold),
            "qualifyingSurvivingSpouse" => Some(Self::QualifyingSurvivingSpouse),
            _ => None,
        }
    }
}

impl fmt::Display for FilingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
