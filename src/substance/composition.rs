use std::collections::BTreeMap;

use serde::Serialize;

use super::ValidationError;

/// 원소 기호 → 질량분율.
///
/// 생성/변경 시 합이 1이 되도록 정규화한다. 비어 있거나 함량 합이 0이면 그대로 둔다.
/// [`Composition::mix`] 결과는 예외로, 질량 가중 공식 그대로 둔다.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Composition {
    fractions: BTreeMap<String, f64>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    /// 원소별 상대 함량으로 조성을 만든다. 같은 원소가 반복되면 함량을 더한다.
    pub fn from_weights<I, K>(weights: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let mut fractions = BTreeMap::new();
        for (element, weight) in weights {
            let element = validate_entry(element.into(), weight)?;
            *fractions.entry(element).or_insert(0.0) += weight;
        }
        let mut composition = Self { fractions };
        composition.normalize();
        Ok(composition)
    }

    fn normalize(&mut self) {
        let total = self.total();
        if total > 0.0 {
            for fraction in self.fractions.values_mut() {
                *fraction /= total;
            }
        }
    }

    /// 원소를 추가한다. `weight`는 현재 조성(합 1) 기준 상대 함량이며 추가 후 다시 정규화한다.
    pub fn insert(&mut self, element: impl Into<String>, weight: f64) -> Result<(), ValidationError> {
        let element = validate_entry(element.into(), weight)?;
        *self.fractions.entry(element).or_insert(0.0) += weight;
        self.normalize();
        Ok(())
    }

    /// 원소를 제거하고 나머지를 다시 정규화한다.
    pub fn remove(&mut self, element: &str) -> Option<f64> {
        let removed = self.fractions.remove(element);
        if removed.is_some() {
            self.normalize();
        }
        removed
    }

    pub fn get(&self, element: &str) -> Option<f64> {
        self.fractions.get(element).copied()
    }

    /// 원소의 분율. 없는 원소는 0.
    pub fn fraction(&self, element: &str) -> f64 {
        self.get(element).unwrap_or(0.0)
    }

    /// 분율 합계. 비어 있으면 0.
    pub fn total(&self) -> f64 {
        self.fractions.values().sum()
    }

    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.fractions.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// 질량 가중 혼합: (x_a·m_a + x_b·m_b) / (m_a + m_b).
    /// 다시 정규화하지 않으므로 조성이 빈 쪽의 질량은 결과에서 분율 합 부족분으로 남는다.
    /// 질량 검증은 호출자 책임이다.
    pub fn mix(&self, mass: f64, other: &Composition, other_mass: f64) -> Composition {
        let total_mass = mass + other_mass;
        let mut fractions: BTreeMap<String, f64> = BTreeMap::new();
        for (element, fraction) in self.iter() {
            *fractions.entry(element.to_string()).or_insert(0.0) += fraction * mass;
        }
        for (element, fraction) in other.iter() {
            *fractions.entry(element.to_string()).or_insert(0.0) += fraction * other_mass;
        }
        for fraction in fractions.values_mut() {
            *fraction /= total_mass;
        }
        Composition { fractions }
    }
}

fn validate_entry(element: String, weight: f64) -> Result<String, ValidationError> {
    let element = element.trim().to_string();
    if element.is_empty() {
        return Err(ValidationError::EmptyElement);
    }
    if !weight.is_finite() || weight < 0.0 {
        return Err(ValidationError::InvalidWeight { element, weight });
    }
    Ok(element)
}
