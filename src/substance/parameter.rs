use std::fmt;
use std::sync::Arc;

use crate::interp::Interpolant;

/// 상태 함수의 시그니처. 입력은 항상 [`State`] 하나다.
pub type StateFn = dyn Fn(&State) -> f64 + Send + Sync;

/// 파라미터 평가에 넘기는 상태 변수 (온도 [K], 압력 [Pa]).
///
/// 지정하지 않은 값은 NaN 으로 전달된다. [`State::with`]로 넘긴 이름 중
/// 온도/압력이 아닌 것은 조용히 버린다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    temperature: f64,
    pressure: f64,
}

impl Default for State {
    fn default() -> Self {
        Self {
            temperature: f64::NAN,
            pressure: f64::NAN,
        }
    }
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at_temperature(temperature: f64) -> Self {
        Self::default().with_temperature(temperature)
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = pressure;
        self
    }

    /// 이름으로 상태 변수를 지정한다. `T`/`t`/`temperature`, `P`/`p`/`pressure` 외에는 무시한다.
    pub fn with(self, name: &str, value: f64) -> Self {
        match name {
            "T" | "t" | "temperature" => self.with_temperature(value),
            "P" | "p" | "pressure" => self.with_pressure(value),
            _ => self,
        }
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn pressure(&self) -> f64 {
        self.pressure
    }
}

/// 상수, 보간 곡선, 또는 상태 함수로 표현되는 물성 파라미터.
///
/// 복제 시 곡선과 함수는 참조를 공유한다. 둘 다 내부 상태가 없는 순수 함수로 취급한다.
#[derive(Clone)]
pub enum Parameter {
    Constant(f64),
    Curve(Arc<Interpolant>),
    Function(Arc<StateFn>),
}

impl Parameter {
    /// 어떤 인자로 호출해도 NaN 을 반환하는 파라미터.
    pub fn undefined() -> Self {
        Parameter::Constant(f64::NAN)
    }

    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&State) -> f64 + Send + Sync + 'static,
    {
        Parameter::Function(Arc::new(f))
    }

    /// 온도만 받는 함수를 감싼다.
    pub fn of_temperature<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Parameter::Function(Arc::new(move |state: &State| f(state.temperature())))
    }

    /// 온도를 독립변수로 하는 보간 곡선.
    pub fn curve(interpolant: Interpolant) -> Self {
        Parameter::Curve(Arc::new(interpolant))
    }

    pub fn evaluate(&self, state: &State) -> f64 {
        match self {
            Parameter::Constant(value) => *value,
            Parameter::Curve(curve) => curve.evaluate(state.temperature()),
            Parameter::Function(f) => f(state),
        }
    }

    /// 온도 [K]에서의 값.
    pub fn at(&self, temperature: f64) -> f64 {
        self.evaluate(&State::at_temperature(temperature))
    }

    /// 상태 변수 없이 평가한 값. 상수 파라미터 조회용.
    pub fn value(&self) -> f64 {
        self.evaluate(&State::default())
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Parameter::Constant(_))
    }
}

impl From<f64> for Parameter {
    fn from(value: f64) -> Self {
        Parameter::Constant(value)
    }
}

impl From<i32> for Parameter {
    fn from(value: i32) -> Self {
        Parameter::Constant(f64::from(value))
    }
}

impl From<Interpolant> for Parameter {
    fn from(interpolant: Interpolant) -> Self {
        Parameter::curve(interpolant)
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Parameter::Curve(curve) => f
                .debug_struct("Curve")
                .field("order", &curve.order())
                .field("domain", &curve.domain())
                .finish(),
            Parameter::Function(_) => f.write_str("Function(..)"),
        }
    }
}
