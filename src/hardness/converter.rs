use std::collections::HashMap;

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

use super::table::{HardnessRecord, REFERENCE_TABLE};
use super::{HardnessError, HardnessScale};
use crate::interp::{Aggregation, Interpolant, OutOfRange};

lazy_static! {
    static ref STANDARD: Result<HardnessConverter, HardnessError> =
        HardnessConverter::new(REFERENCE_TABLE, ConverterOptions::default());
    static ref CUBIC: Result<HardnessConverter, HardnessError> =
        HardnessConverter::new(REFERENCE_TABLE, ConverterOptions::cubic());
}

/// 환산기 생성 옵션.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterOptions {
    /// 보간 차수 (0..=3)
    pub order: u8,
    /// 중복 값 처리 방식
    pub aggregation: Aggregation,
    /// 범위 밖 처리. 기본은 NaN (외삽하지 않음)
    pub out_of_range: OutOfRange,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            order: 1,
            aggregation: Aggregation::Mean,
            out_of_range: OutOfRange::Nan,
        }
    }
}

impl ConverterOptions {
    /// 3차 스플라인 + 평균. 재료 경도 조회용.
    pub fn cubic() -> Self {
        Self {
            order: 3,
            ..Self::default()
        }
    }
}

/// 여섯 척도 전체의 환산 결과. 정의되지 않은 척도는 NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HardnessValues {
    #[serde(rename = "HB")]
    pub hb: f64,
    #[serde(rename = "HRA")]
    pub hra: f64,
    #[serde(rename = "HRC")]
    pub hrc: f64,
    #[serde(rename = "HRB")]
    pub hrb: f64,
    #[serde(rename = "HV")]
    pub hv: f64,
    #[serde(rename = "HSD")]
    pub hsd: f64,
}

impl HardnessValues {
    fn undefined() -> Self {
        Self {
            hb: f64::NAN,
            hra: f64::NAN,
            hrc: f64::NAN,
            hrb: f64::NAN,
            hv: f64::NAN,
            hsd: f64::NAN,
        }
    }

    pub fn get(&self, scale: HardnessScale) -> f64 {
        match scale {
            HardnessScale::Brinell => self.hb,
            HardnessScale::RockwellA => self.hra,
            HardnessScale::RockwellC => self.hrc,
            HardnessScale::RockwellB => self.hrb,
            HardnessScale::Vickers => self.hv,
            HardnessScale::ShoreD => self.hsd,
        }
    }

    fn set(&mut self, scale: HardnessScale, value: f64) {
        let slot = match scale {
            HardnessScale::Brinell => &mut self.hb,
            HardnessScale::RockwellA => &mut self.hra,
            HardnessScale::RockwellC => &mut self.hrc,
            HardnessScale::RockwellB => &mut self.hrb,
            HardnessScale::Vickers => &mut self.hv,
            HardnessScale::ShoreD => &mut self.hsd,
        };
        *slot = value;
    }

    /// (척도, 값) 순회. 순서는 `HardnessScale::ALL`.
    pub fn iter(&self) -> impl Iterator<Item = (HardnessScale, f64)> + '_ {
        HardnessScale::ALL.iter().map(move |&s| (s, self.get(s)))
    }
}

/// 척도 쌍마다 독립적으로 만든 보간기 30개로 경도를 환산한다.
#[derive(Debug, Clone)]
pub struct HardnessConverter {
    interpolants: HashMap<(HardnessScale, HardnessScale), Interpolant>,
    domains: [Option<(f64, f64)>; 6],
    options: ConverterOptions,
}

impl HardnessConverter {
    /// 기준표로부터 모든 순서쌍 (A, B), A != B 의 보간기를 만든다.
    /// 각 쌍은 A, B 모두 정의된 행만 사용한다.
    pub fn new(records: &[HardnessRecord], options: ConverterOptions) -> Result<Self, HardnessError> {
        let mut interpolants = HashMap::with_capacity(30);
        for from in HardnessScale::ALL {
            for to in HardnessScale::ALL {
                if from == to {
                    continue;
                }
                let pairs = records
                    .iter()
                    .filter_map(|r| Some((r.get(from)?, r.get(to)?)));
                let interpolant = Interpolant::from_samples(
                    pairs,
                    options.aggregation,
                    options.order,
                    options.out_of_range,
                )?;
                debug!(
                    "경도 보간기 {from}->{to}: {}점, 범위 {:?}",
                    interpolant.len(),
                    interpolant.domain()
                );
                interpolants.insert((from, to), interpolant);
            }
        }

        let mut domains = [None; 6];
        for scale in HardnessScale::ALL {
            domains[scale.index()] = records
                .iter()
                .filter_map(|r| r.get(scale))
                .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                    None => Some((v, v)),
                    Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                });
        }

        Ok(Self {
            interpolants,
            domains,
            options,
        })
    }

    /// 기준표 + 선형 보간 + 평균 환산기. 최초 호출 시 한 번만 생성된다.
    pub fn standard() -> Result<&'static HardnessConverter, HardnessError> {
        (*STANDARD).as_ref().map_err(Clone::clone)
    }

    /// 기준표 + 3차 스플라인 + 평균 환산기.
    pub fn cubic() -> Result<&'static HardnessConverter, HardnessError> {
        (*CUBIC).as_ref().map_err(Clone::clone)
    }

    pub fn options(&self) -> ConverterOptions {
        self.options
    }

    /// (from, to) 쌍의 보간기. from == to 이면 `None`.
    pub fn interpolant(&self, from: HardnessScale, to: HardnessScale) -> Option<&Interpolant> {
        self.interpolants.get(&(from, to))
    }

    /// 기준표에서 해당 척도가 정의된 값의 범위.
    pub fn scale_domain(&self, scale: HardnessScale) -> Option<(f64, f64)> {
        self.domains[scale.index()]
    }

    /// 한 척도의 값을 여섯 척도 전체로 환산한다.
    /// 입력 척도는 입력값 그대로, 나머지는 보간값 또는 범위 밖이면 NaN.
    pub fn convert(&self, scale: HardnessScale, value: f64) -> HardnessValues {
        let mut values = self.convert_others(scale, value);
        values.set(scale, value);
        values
    }

    /// `convert`와 같지만 입력 척도도 자기 정의역을 거친다 (범위 밖이면 NaN).
    pub fn convert_echoed(&self, scale: HardnessScale, value: f64) -> HardnessValues {
        let mut values = self.convert_others(scale, value);
        let echoed = match self.scale_domain(scale) {
            Some((lo, hi)) if value >= lo && value <= hi => value,
            _ => f64::NAN,
        };
        values.set(scale, echoed);
        values
    }

    fn convert_others(&self, scale: HardnessScale, value: f64) -> HardnessValues {
        let mut values = HardnessValues::undefined();
        for target in HardnessScale::ALL {
            if target == scale {
                continue;
            }
            let converted = self
                .interpolant(scale, target)
                .map_or(f64::NAN, |f| f.evaluate(value));
            values.set(target, converted);
        }
        values
    }

    /// 척도 이름 → 값 목록이 정확히 한 항목이고, 이름이 유효하며 값이 유한한 숫자인지 검사한다.
    pub fn validate<I, K>(entries: I) -> Result<(HardnessScale, f64), HardnessError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let entries: Vec<(K, f64)> = entries.into_iter().collect();
        if entries.len() != 1 {
            return Err(HardnessError::WrongCardinality(entries.len()));
        }
        let (name, value) = &entries[0];
        let scale: HardnessScale = name.as_ref().parse()?;
        if !value.is_finite() {
            return Err(HardnessError::NotNumeric {
                scale: scale.to_string(),
                value: value.to_string(),
            });
        }
        Ok((scale, *value))
    }

    /// 검증 후 환산.
    pub fn convert_entries<I, K>(&self, entries: I) -> Result<HardnessValues, HardnessError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let (scale, value) = Self::validate(entries)?;
        Ok(self.convert(scale, value))
    }

    /// 문자열 입력(CLI 등)을 척도와 값으로 해석한다.
    pub fn parse_reading(scale: &str, value: &str) -> Result<(HardnessScale, f64), HardnessError> {
        let parsed: f64 = value.trim().parse().map_err(|_| HardnessError::NotNumeric {
            scale: scale.to_string(),
            value: value.to_string(),
        })?;
        Self::validate([(scale, parsed)])
    }
}
