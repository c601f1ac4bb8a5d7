//! 온도에 따라 변하는 합금 물성 (강도, 충격인성, 크리프 파단강도, 탄성계수 등).

pub mod catalog;
pub mod data;
pub mod material;
pub mod properties;

pub use catalog::MaterialCatalog;
pub use material::{
    Material, MaterialBuilder, MaterialOptions, ParameterSource, TemperatureFn, MIN_TABLE_ROWS,
};
pub use properties::{Bound, ParameterInfo};

use thiserror::Error;

use crate::hardness::HardnessError;
use crate::interp::InterpolationError;
use crate::substance::ValidationError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MaterialError {
    #[error("재료 이름이 비어 있음")]
    EmptyName,
    #[error("파라미터 이름이 비어 있음")]
    EmptyParameterName,
    #[error("지원하지 않는 보간 차수: {0} (0..=3)")]
    UnsupportedOrder(u8),
    #[error("{key}: 유한하지 않은 값 {value}")]
    NonFinite { key: String, value: f64 },
    #[error("{key}: 표는 최소 {min}행이어야 함 (입력 {rows}행)", min = MIN_TABLE_ROWS)]
    TableTooShort { key: String, rows: usize },
    #[error("{key} = {value} 는 범위 밖 ({key} {bound} 이어야 함)")]
    OutOfBounds { key: String, value: f64, bound: Bound },
    #[error("{key}: 곡선 생성 실패: {source}")]
    Curve {
        key: String,
        #[source]
        source: InterpolationError,
    },
    #[error("이미 등록된 재료: {0}")]
    Duplicate(String),
    #[error(transparent)]
    Hardness(#[from] HardnessError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
