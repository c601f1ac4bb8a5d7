//! 화학 물질: 이름, 조성(원소 → 질량분율), 상태 함수 형태의 물성 파라미터.

pub mod composition;
pub mod parameter;
pub mod substance;

pub use composition::Composition;
pub use parameter::{Parameter, State, StateFn};
pub use substance::{young_modulus, AttributeValue, Substance, MASS_KEY, OXIDIZER};

use thiserror::Error;

/// 물질/조성/파라미터 입력 검증 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("이름이 비어 있음")]
    EmptyName,
    #[error("원소 기호가 비어 있음")]
    EmptyElement,
    #[error("원소 {element}의 함량이 잘못됨: {weight} (0 이상의 유한한 값이어야 함)")]
    InvalidWeight { element: String, weight: f64 },
    #[error("파라미터 이름이 비어 있음")]
    EmptyParameterName,
    #[error("파라미터 {name}의 값이 유한하지 않음: {value}")]
    NonFiniteParameter { name: String, value: f64 },
    #[error("존재하지 않는 파라미터: {0}")]
    UnknownParameter(String),
    #[error("허용되지 않는 속성: {0} (name, composition, parameters 만 가능)")]
    UnknownAttribute(String),
    #[error("속성 {0}에 맞지 않는 값 형식")]
    AttributeType(String),
    #[error("이름은 변경할 수 없음")]
    NameImmutable,
    #[error("이름은 삭제할 수 없음")]
    NameDeletion,
    #[error("속성 {0}은 삭제할 수 없음")]
    AttributeDeletion(String),
    #[error("{substance}에 양의 질량(mass) 파라미터가 없음")]
    MissingMass { substance: String },
    #[error("푸아송비는 0보다 커야 함: {0}")]
    InvalidPoisson(f64),
    #[error("탄성계수는 0보다 커야 함: {0}")]
    InvalidModulus(f64),
    #[error("종탄성계수(E)와 횡탄성계수(G) 중 정확히 하나를 지정해야 함")]
    ModulusChoice,
}
