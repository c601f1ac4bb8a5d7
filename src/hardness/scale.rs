use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::HardnessError;

/// 경도 척도. 환산표의 열 순서와 같다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HardnessScale {
    /// 브리넬 (HB)
    #[serde(rename = "HB")]
    Brinell,
    /// 로크웰 A (HRA)
    #[serde(rename = "HRA")]
    RockwellA,
    /// 로크웰 C (HRC)
    #[serde(rename = "HRC")]
    RockwellC,
    /// 로크웰 B (HRB)
    #[serde(rename = "HRB")]
    RockwellB,
    /// 비커스 (HV)
    #[serde(rename = "HV")]
    Vickers,
    /// 쇼어 D (HSD)
    #[serde(rename = "HSD")]
    ShoreD,
}

impl HardnessScale {
    pub const ALL: [HardnessScale; 6] = [
        HardnessScale::Brinell,
        HardnessScale::RockwellA,
        HardnessScale::RockwellC,
        HardnessScale::RockwellB,
        HardnessScale::Vickers,
        HardnessScale::ShoreD,
    ];

    /// 표기 기호 (`HB`, `HRC` ...).
    pub fn symbol(self) -> &'static str {
        match self {
            HardnessScale::Brinell => "HB",
            HardnessScale::RockwellA => "HRA",
            HardnessScale::RockwellC => "HRC",
            HardnessScale::RockwellB => "HRB",
            HardnessScale::Vickers => "HV",
            HardnessScale::ShoreD => "HSD",
        }
    }

    /// `ALL` 내 위치.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for HardnessScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for HardnessScale {
    type Err = HardnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "HB" => Ok(HardnessScale::Brinell),
            "HRA" => Ok(HardnessScale::RockwellA),
            "HRC" => Ok(HardnessScale::RockwellC),
            "HRB" => Ok(HardnessScale::RockwellB),
            "HV" => Ok(HardnessScale::Vickers),
            "HSD" => Ok(HardnessScale::ShoreD),
            _ => Err(HardnessError::UnknownScale(s.to_string())),
        }
    }
}
