//! 단위 처리: 온도 척도, SI 접두어, 단위 문자열 배율, 단위가 붙은 물리량.

pub mod multiplier;
pub mod prefix;
pub mod quantity;
pub mod temperature;

pub use multiplier::{extract_power, multiplier, split_by_operators};
pub use prefix::{find_prefix, Prefix, PREFIXES};
pub use quantity::Quantity;
pub use temperature::{from_kelvin, to_kelvin, TemperatureUnit, ZERO_CELSIUS_K};

use thiserror::Error;

/// 단위 해석 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    #[error("잘못된 지수: {0}")]
    InvalidExponent(String),
    #[error("물리량 이름이 비어 있음")]
    EmptyName,
}
