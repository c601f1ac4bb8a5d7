//! 재료 파라미터 어휘: 키, 설명, SI 단위, 하한.
//!
//! 목록에 없는 키도 자유롭게 쓸 수 있다. 알려진 키의 상수값만 하한 검사를 받는다.

use std::fmt;

use serde::Serialize;

/// 값의 하한 조건.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Bound {
    /// 0 초과
    Positive,
    /// 0 이상
    NonNegative,
}

impl Bound {
    pub fn check(self, value: f64) -> bool {
        match self {
            Bound::Positive => value > 0.0,
            Bound::NonNegative => value >= 0.0,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Positive => f.write_str("> 0"),
            Bound::NonNegative => f.write_str(">= 0"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ParameterInfo {
    pub key: &'static str,
    pub description: &'static str,
    pub unit: &'static str,
    pub bound: Bound,
}

/// 크리프 파단강도 키의 접두어. `sigma_1000` = 1000 시간 파단강도.
pub const CREEP_PREFIX: &str = "sigma_";

/// `sigma_<시간>` 형태 키 전체를 대표하는 항목.
pub const CREEP: ParameterInfo = info("sigma_<h>", "크리프 파단강도 (h 시간)", "Pa", Bound::Positive);

const PARAMETERS: &[ParameterInfo] = &[
    info("density", "밀도", "kg/m3", Bound::Positive),
    info("alpha", "선팽창계수", "1/K", Bound::NonNegative),
    info("E", "종탄성계수 (영률)", "Pa", Bound::Positive),
    info("G", "횡탄성계수", "Pa", Bound::Positive),
    info("mu", "푸아송비", "", Bound::Positive),
    info("sigma_t", "항복강도", "Pa", Bound::Positive),
    info("sigma_s", "인장강도", "Pa", Bound::Positive),
    info("l", "열전도도", "W/m/K", Bound::Positive),
    info("C", "열용량", "J/K", Bound::Positive),
    info("c", "비열", "J/kg/K", Bound::Positive),
    info("KCU", "충격인성", "J/m2", Bound::Positive),
    info("HB", "브리넬 경도", "", Bound::Positive),
    info("HRC", "로크웰 C 경도", "", Bound::Positive),
    info("HV", "비커스 경도", "", Bound::Positive),
];

pub fn all() -> &'static [ParameterInfo] {
    PARAMETERS
}

/// 키에 해당하는 항목. `sigma_<시간>` 키는 [`CREEP`]을 반환한다.
pub fn describe(key: &str) -> Option<&'static ParameterInfo> {
    PARAMETERS
        .iter()
        .find(|p| p.key == key)
        .or_else(|| creep_hours(key).map(|_| &CREEP))
}

/// `sigma_<시간>` 키의 시간 [h].
pub fn creep_hours(key: &str) -> Option<f64> {
    let hours: f64 = key.strip_prefix(CREEP_PREFIX)?.parse().ok()?;
    (hours.is_finite() && hours > 0.0).then_some(hours)
}

const fn info(
    key: &'static str,
    description: &'static str,
    unit: &'static str,
    bound: Bound,
) -> ParameterInfo {
    ParameterInfo {
        key,
        description,
        unit,
        bound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creep_keys_resolve_to_creep_entry() {
        assert_eq!(creep_hours("sigma_1000"), Some(1000.0));
        assert_eq!(creep_hours("sigma_t"), None);
        assert_eq!(describe("sigma_100000").map(|p| p.key), Some("sigma_<h>"));
        assert_eq!(describe("sigma_t").map(|p| p.description), Some("항복강도"));
        assert!(describe("color").is_none());
    }
}
