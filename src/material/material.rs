use std::any::Any;
use std::cell::Cell;
use std::collections::BTreeMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Once};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::{properties, MaterialError};
use crate::hardness::{HardnessConverter, HardnessError, HardnessScale, HardnessValues};
use crate::interp::{Interpolant, OutOfRange, MAX_ORDER};
use crate::substance::{AttributeValue, Composition, Parameter, Substance, ValidationError};
use crate::units::ZERO_CELSIUS_K;

/// 표 형태 파라미터의 최소 행 수.
pub const MIN_TABLE_ROWS: usize = 4;

/// 온도 [K] → 값 함수.
pub type TemperatureFn = dyn Fn(f64) -> f64 + Send + Sync;

/// 표 곡선의 기본 차수와 범위 정책, 함수 파라미터 시험 온도.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialOptions {
    pub order: u8,
    pub out_of_range: OutOfRange,
    /// 함수 파라미터를 받기 전에 한 번 호출해 보는 온도 [K]
    pub smoke_temperature: f64,
}

impl Default for MaterialOptions {
    fn default() -> Self {
        Self {
            order: 1,
            out_of_range: OutOfRange::Nan,
            smoke_temperature: ZERO_CELSIUS_K,
        }
    }
}

/// 파라미터 입력 형태.
#[derive(Clone)]
pub enum ParameterSource {
    /// 모든 온도에서 같은 값
    Scalar(f64),
    /// (온도 [K], 값) 행. 재료 기본 차수로 보간한다.
    Table(Vec<[f64; 2]>),
    /// 차수와 범위 정책이 이미 정해진 곡선
    Curve(Interpolant),
    /// 임의의 온도 함수
    Function(Arc<TemperatureFn>),
}

impl ParameterSource {
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        ParameterSource::Function(Arc::new(f))
    }
}

impl From<f64> for ParameterSource {
    fn from(value: f64) -> Self {
        ParameterSource::Scalar(value)
    }
}

impl From<Vec<[f64; 2]>> for ParameterSource {
    fn from(rows: Vec<[f64; 2]>) -> Self {
        ParameterSource::Table(rows)
    }
}

impl From<Interpolant> for ParameterSource {
    fn from(curve: Interpolant) -> Self {
        ParameterSource::Curve(curve)
    }
}

impl fmt::Debug for ParameterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterSource::Scalar(v) => f.debug_tuple("Scalar").field(v).finish(),
            ParameterSource::Table(rows) => f.debug_tuple("Table").field(&rows.len()).finish(),
            ParameterSource::Curve(c) => f.debug_tuple("Curve").field(&c.order()).finish(),
            ParameterSource::Function(_) => f.write_str("Function(..)"),
        }
    }
}

#[derive(Debug)]
pub struct MaterialBuilder {
    name: String,
    options: MaterialOptions,
    parameters: Vec<(String, ParameterSource)>,
    composition: Option<Composition>,
    reference: String,
}

impl MaterialBuilder {
    pub fn order(mut self, order: u8) -> Self {
        self.options.order = order;
        self
    }

    pub fn out_of_range(mut self, out_of_range: OutOfRange) -> Self {
        self.options.out_of_range = out_of_range;
        self
    }

    pub fn options(mut self, options: MaterialOptions) -> Self {
        self.options = options;
        self
    }

    /// 같은 키를 다시 주면 나중 값이 남는다.
    pub fn parameter(mut self, key: impl Into<String>, source: impl Into<ParameterSource>) -> Self {
        self.parameters.push((key.into(), source.into()));
        self
    }

    pub fn composition(mut self, composition: Composition) -> Self {
        self.composition = Some(composition);
        self
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    /// 파라미터별로 곡선을 만든다.
    /// 시험 호출에서 패닉하는 함수 파라미터는 경고 후 건너뛰고, 그 밖의 잘못된 입력은 오류다.
    pub fn build(self) -> Result<Material, MaterialError> {
        if self.name.trim().is_empty() {
            return Err(MaterialError::EmptyName);
        }
        if self.options.order > MAX_ORDER {
            return Err(MaterialError::UnsupportedOrder(self.options.order));
        }

        let mut parameters = BTreeMap::new();
        for (key, source) in self.parameters {
            if key.trim().is_empty() {
                return Err(MaterialError::EmptyParameterName);
            }
            match ingest(&key, source, &self.options)? {
                Ingested::Accepted(parameter) => {
                    parameters.insert(key, parameter);
                }
                Ingested::Skipped(reason) => warn!(
                    "{}: 파라미터 {key} 는 {} K 에서 평가할 수 없어 제외됨 ({reason})",
                    self.name, self.options.smoke_temperature
                ),
            }
        }
        debug!("재료 {} 생성: 파라미터 {}개", self.name, parameters.len());

        Ok(Material {
            name: self.name,
            parameters,
            composition: self.composition,
            reference: self.reference,
        })
    }
}

enum Ingested {
    Accepted(Parameter),
    /// 시험 호출에서 패닉한 함수. 패닉 메시지를 담는다.
    Skipped(String),
}

/// 입력 하나를 파라미터로 바꾼다.
/// 알려진 키는 상수, 표, 곡선 값 모두 하한 검사를 받는다. 함수는 검사하지 않는다.
fn ingest(
    key: &str,
    source: ParameterSource,
    options: &MaterialOptions,
) -> Result<Ingested, MaterialError> {
    match source {
        ParameterSource::Scalar(value) => {
            if !value.is_finite() {
                return Err(MaterialError::NonFinite {
                    key: key.to_string(),
                    value,
                });
            }
            check_bounds(key, &[value])?;
            Ok(Ingested::Accepted(Parameter::Constant(value)))
        }
        ParameterSource::Table(rows) => {
            if rows.len() < MIN_TABLE_ROWS {
                return Err(MaterialError::TableTooShort {
                    key: key.to_string(),
                    rows: rows.len(),
                });
            }
            let (temperatures, values): (Vec<f64>, Vec<f64>) =
                rows.iter().map(|row| (row[0], row[1])).unzip();
            let curve = Interpolant::new(temperatures, values, options.order, options.out_of_range)
                .map_err(|source| MaterialError::Curve {
                    key: key.to_string(),
                    source,
                })?;
            check_bounds(key, curve.ys())?;
            Ok(Ingested::Accepted(Parameter::curve(curve)))
        }
        ParameterSource::Curve(curve) => {
            check_bounds(key, curve.ys())?;
            Ok(Ingested::Accepted(Parameter::curve(curve)))
        }
        ParameterSource::Function(f) => match smoke_test(&f, options.smoke_temperature) {
            Ok(_) => Ok(Ingested::Accepted(Parameter::of_temperature(move |t| f(t)))),
            Err(reason) => Ok(Ingested::Skipped(reason)),
        },
    }
}

/// 알려진 키의 값이 하한을 만족하는지 검사한다. 첫 위반 값을 보고한다.
fn check_bounds(key: &str, values: &[f64]) -> Result<(), MaterialError> {
    let Some(info) = properties::describe(key) else {
        return Ok(());
    };
    match values.iter().find(|&&v| !info.bound.check(v)) {
        Some(&value) => Err(MaterialError::OutOfBounds {
            key: key.to_string(),
            value,
            bound: info.bound,
        }),
        None => Ok(()),
    }
}

thread_local! {
    static IN_SMOKE_TEST: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// 함수를 한 번 호출해 본다. 패닉하면 메시지를 `Err`로 돌려준다.
///
/// 시험 호출 중의 패닉은 기본 패닉 훅으로 출력하지 않는다. 다른 스레드나 시험 밖의
/// 패닉은 기존 훅이 그대로 처리한다.
fn smoke_test(f: &Arc<TemperatureFn>, temperature: f64) -> Result<f64, String> {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !IN_SMOKE_TEST.with(Cell::get) {
                previous(info);
            }
        }));
    });

    let trial = Arc::clone(f);
    IN_SMOKE_TEST.with(|flag| flag.set(true));
    let result = panic::catch_unwind(AssertUnwindSafe(move || trial(temperature)));
    IN_SMOKE_TEST.with(|flag| flag.set(false));
    result.map_err(|payload| panic_message(payload.as_ref()))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "알 수 없는 패닉".to_string()
    }
}

/// 특정 합금의 온도별 물성 곡선 모음.
#[derive(Debug, Clone)]
pub struct Material {
    name: String,
    parameters: BTreeMap<String, Parameter>,
    composition: Option<Composition>,
    reference: String,
}

impl Material {
    pub fn builder(name: impl Into<String>) -> MaterialBuilder {
        MaterialBuilder {
            name: name.into(),
            options: MaterialOptions::default(),
            parameters: Vec::new(),
            composition: None,
            reference: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &BTreeMap<String, Parameter> {
        &self.parameters
    }

    pub fn parameter(&self, key: &str) -> Option<&Parameter> {
        self.parameters.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.parameters.keys().map(String::as_str)
    }

    pub fn composition(&self) -> Option<&Composition> {
        self.composition.as_ref()
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// 온도 [K]에서의 값. 없는 파라미터는 NaN.
    pub fn evaluate(&self, key: &str, temperature: f64) -> f64 {
        self.parameters
            .get(key)
            .map_or(f64::NAN, |p| p.at(temperature))
    }

    /// 여러 온도에서 평가한 (온도, 값) 목록. NaN 인 점은 뺀다.
    pub fn sample(&self, key: &str, temperatures: &[f64]) -> Vec<(f64, f64)> {
        temperatures
            .iter()
            .map(|&t| (t, self.evaluate(key, t)))
            .filter(|(_, v)| !v.is_nan())
            .collect()
    }

    /// 같은 이름·조성·파라미터를 가진 [`Substance`].
    pub fn to_substance(&self) -> Result<Substance, ValidationError> {
        let mut substance = Substance::new(self.name.clone())?;
        if let Some(composition) = &self.composition {
            substance.set_attribute("composition", AttributeValue::Composition(composition.clone()))?;
        }
        substance.set_attribute("parameters", AttributeValue::Parameters(self.parameters.clone()))?;
        Ok(substance)
    }

    /// 한 척도의 경도를 3차 보간 환산표로 여섯 척도 전체로 환산한다.
    /// 입력 척도도 자기 정의역을 거치므로 범위 밖이면 NaN 이 된다.
    pub fn hardness(scale: HardnessScale, value: f64) -> Result<HardnessValues, MaterialError> {
        if !value.is_finite() {
            return Err(HardnessError::NotNumeric {
                scale: scale.to_string(),
                value: value.to_string(),
            }
            .into());
        }
        if value < 0.0 {
            return Err(HardnessError::Negative(value).into());
        }
        Ok(HardnessConverter::cubic()?.convert_echoed(scale, value))
    }

    /// 척도 이름 → 값 한 쌍으로 받는 [`Material::hardness`].
    pub fn hardness_entries<I, K>(entries: I) -> Result<HardnessValues, MaterialError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let (scale, value) = HardnessConverter::validate(entries)?;
        Self::hardness(scale, value)
    }

    /// [`crate::substance::young_modulus`] 참고.
    pub fn young_modulus(
        mu: f64,
        elastic_modulus: Option<f64>,
        shear_modulus: Option<f64>,
    ) -> Result<f64, MaterialError> {
        Ok(crate::substance::young_modulus(mu, elastic_modulus, shear_modulus)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_test_reports_panic_message() {
        let f: Arc<TemperatureFn> = Arc::new(|t| {
            if t < 300.0 {
                panic!("no data below 300 K");
            }
            t
        });
        assert_eq!(smoke_test(&f, 273.15), Err("no data below 300 K".to_string()));
        assert!(!IN_SMOKE_TEST.with(Cell::get));
        assert_eq!(smoke_test(&f, 400.0), Ok(400.0));
    }

    #[test]
    fn formatted_panic_message_is_kept() {
        let f: Arc<TemperatureFn> = Arc::new(|t| panic!("T = {t}"));
        assert_eq!(smoke_test(&f, 1.5), Err("T = 1.5".to_string()));
    }
}
