use serde::Serialize;

use super::{multiplier, UnitError};

/// 단위가 붙은 물리량. `si_value`는 `value * multiplier` 로 계산된 SI 기준 값이다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quantity {
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub multiplier: f64,
    pub si_value: f64,
    pub description: String,
}

impl Quantity {
    pub fn new(
        name: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, UnitError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UnitError::EmptyName);
        }
        let unit = unit.into();
        let multiplier = multiplier(&unit)?;
        Ok(Self {
            name,
            value,
            unit,
            multiplier,
            si_value: value * multiplier,
            description: description.into(),
        })
    }

    /// SI 기준 값.
    pub fn get(&self) -> f64 {
        self.si_value
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{} = {}", self.name, self.value)
        } else {
            write!(f, "{} = {} {}", self.name, self.value, self.unit)
        }
    }
}
