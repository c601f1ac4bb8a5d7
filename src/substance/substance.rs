use std::collections::BTreeMap;
use std::ops::Add;

use super::{Composition, Parameter, State, ValidationError};

/// 질량 파라미터 키. 혼합 시 가중치로 쓰인다.
pub const MASS_KEY: &str = "mass";
/// 산화제 원소 (산소).
pub const OXIDIZER: &str = "O";

/// [`Substance::set_attribute`]에 넘기는 값.
#[derive(Debug, Clone)]
pub enum AttributeValue {
    Name(String),
    Composition(Composition),
    Parameters(BTreeMap<String, Parameter>),
}

/// 화학 물질.
///
/// 속성은 `name`, `composition`, `parameters` 세 가지로 고정되어 있다.
/// 이름은 생성 후 바꾸거나 지울 수 없다.
#[derive(Debug, Clone)]
pub struct Substance {
    name: String,
    composition: Composition,
    parameters: BTreeMap<String, Parameter>,
}

impl Substance {
    /// 조성과 파라미터가 비어 있는 물질을 만든다.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            name,
            composition: Composition::new(),
            parameters: BTreeMap::new(),
        })
    }

    /// 원소별 상대 함량으로 조성을 지정한다 (정규화됨).
    pub fn with_composition<I, K>(mut self, weights: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        self.composition = Composition::from_weights(weights)?;
        Ok(self)
    }

    pub fn with_parameter(
        mut self,
        key: impl Into<String>,
        value: impl Into<Parameter>,
    ) -> Result<Self, ValidationError> {
        self.set_parameter(key, value)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    pub fn composition_mut(&mut self) -> &mut Composition {
        &mut self.composition
    }

    pub fn parameters(&self) -> &BTreeMap<String, Parameter> {
        &self.parameters
    }

    pub fn get(&self, key: &str) -> Option<&Parameter> {
        self.parameters.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.parameters.contains_key(key)
    }

    /// 파라미터 조회. 없는 키는 항상 NaN 을 내는 파라미터를 반환한다.
    pub fn parameter(&self, key: &str) -> Parameter {
        self.parameters
            .get(key)
            .cloned()
            .unwrap_or_else(Parameter::undefined)
    }

    pub fn evaluate(&self, key: &str, state: &State) -> f64 {
        self.parameters
            .get(key)
            .map_or(f64::NAN, |p| p.evaluate(state))
    }

    /// 파라미터를 추가하거나 교체한다. 검증 실패 시 기존 상태는 그대로다.
    pub fn set_parameter(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Parameter>,
    ) -> Result<(), ValidationError> {
        let (key, value) = validate_parameter(key.into(), value.into())?;
        self.parameters.insert(key, value);
        Ok(())
    }

    /// 파라미터를 제거한다. 없는 키나 `name`은 오류.
    pub fn remove_parameter(&mut self, key: &str) -> Result<Parameter, ValidationError> {
        if key == "name" {
            return Err(ValidationError::NameDeletion);
        }
        self.parameters
            .remove(key)
            .ok_or_else(|| ValidationError::UnknownParameter(key.to_string()))
    }

    /// 이름으로 속성을 설정한다. 고정된 세 속성 외에는 거부한다.
    pub fn set_attribute(&mut self, attribute: &str, value: AttributeValue) -> Result<(), ValidationError> {
        match (attribute, value) {
            ("name", _) => Err(ValidationError::NameImmutable),
            ("composition", AttributeValue::Composition(composition)) => {
                self.composition = composition;
                Ok(())
            }
            ("parameters", AttributeValue::Parameters(parameters)) => {
                let validated = parameters
                    .into_iter()
                    .map(|(k, v)| validate_parameter(k, v))
                    .collect::<Result<BTreeMap<_, _>, _>>()?;
                self.parameters = validated;
                Ok(())
            }
            ("composition" | "parameters", _) => {
                Err(ValidationError::AttributeType(attribute.to_string()))
            }
            (other, _) => Err(ValidationError::UnknownAttribute(other.to_string())),
        }
    }

    /// 이름으로 속성을 삭제한다. 고정 속성은 삭제할 수 없다.
    pub fn delete_attribute(&mut self, attribute: &str) -> Result<(), ValidationError> {
        match attribute {
            "name" => Err(ValidationError::NameDeletion),
            "composition" | "parameters" => {
                Err(ValidationError::AttributeDeletion(attribute.to_string()))
            }
            other => Err(ValidationError::UnknownAttribute(other.to_string())),
        }
    }

    /// `mass` 파라미터 값. 유한한 양수일 때만 `Some`.
    pub fn mass(&self) -> Option<f64> {
        self.parameters
            .get(MASS_KEY)
            .map(Parameter::value)
            .filter(|m| m.is_finite() && *m > 0.0)
    }

    /// 두 물질을 질량 가중으로 혼합한 새 물질. 입력은 변경하지 않는다.
    /// 결과는 이름 `A+B`, 질량 `m_a + m_b` 파라미터만 가진다. 조성은 다시 정규화하지 않는다.
    pub fn mix(&self, other: &Substance) -> Result<Substance, ValidationError> {
        let mass = self.mass().ok_or_else(|| ValidationError::MissingMass {
            substance: self.name.clone(),
        })?;
        let other_mass = other.mass().ok_or_else(|| ValidationError::MissingMass {
            substance: other.name.clone(),
        })?;

        let mut parameters = BTreeMap::new();
        parameters.insert(MASS_KEY.to_string(), Parameter::Constant(mass + other_mass));
        Ok(Substance {
            name: format!("{}+{}", self.name, other.name),
            composition: self.composition.mix(mass, &other.composition, other_mass),
            parameters,
        })
    }

    /// 산화제 과잉 계수: 산소 함량 / 전체 함량. 조성이 비어 있으면 NaN.
    pub fn excess_oxidizing(&self) -> f64 {
        let total = self.composition.total();
        if total == 0.0 {
            return f64::NAN;
        }
        self.composition.fraction(OXIDIZER) / total
    }

    /// [`young_modulus`] 참고.
    pub fn young_modulus(
        mu: f64,
        elastic_modulus: Option<f64>,
        shear_modulus: Option<f64>,
    ) -> Result<f64, ValidationError> {
        young_modulus(mu, elastic_modulus, shear_modulus)
    }
}

impl Add for &Substance {
    type Output = Result<Substance, ValidationError>;

    fn add(self, other: Self) -> Self::Output {
        self.mix(other)
    }
}

/// 종탄성계수 E와 횡탄성계수 G의 상호 환산.
///
/// - E 지정: G = E / (2(μ+1))
/// - G 지정: E = 2G(μ+1)
pub fn young_modulus(
    mu: f64,
    elastic_modulus: Option<f64>,
    shear_modulus: Option<f64>,
) -> Result<f64, ValidationError> {
    if !mu.is_finite() || mu <= 0.0 {
        return Err(ValidationError::InvalidPoisson(mu));
    }
    let check = |m: f64| {
        if m.is_finite() && m > 0.0 {
            Ok(m)
        } else {
            Err(ValidationError::InvalidModulus(m))
        }
    };
    match (elastic_modulus, shear_modulus) {
        (Some(e), None) => Ok(check(e)? / (2.0 * (mu + 1.0))),
        (None, Some(g)) => Ok(2.0 * check(g)? * (mu + 1.0)),
        _ => Err(ValidationError::ModulusChoice),
    }
}

fn validate_parameter(key: String, value: Parameter) -> Result<(String, Parameter), ValidationError> {
    if key.trim().is_empty() {
        return Err(ValidationError::EmptyParameterName);
    }
    if let Parameter::Constant(v) = value {
        if !v.is_finite() {
            return Err(ValidationError::NonFiniteParameter { name: key, value: v });
        }
    }
    Ok((key, value))
}
