//! 경도 척도 간 환산 (HB / HRA / HRC / HRB / HV / HSD).

pub mod converter;
pub mod scale;
pub mod table;

pub use converter::{ConverterOptions, HardnessConverter, HardnessValues};
pub use scale::HardnessScale;
pub use table::{reference_table, HardnessRecord, REFERENCE_TABLE, TABLE_REFERENCE};

use thiserror::Error;

use crate::interp::InterpolationError;

/// 경도 입력 검증 및 환산기 생성 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HardnessError {
    /// 알 수 없는 척도 이름
    #[error("알 수 없는 경도 척도: {0} (HB, HRA, HRC, HRB, HV, HSD 중 하나)")]
    UnknownScale(String),
    /// 척도가 정확히 하나가 아님
    #[error("경도 척도는 정확히 1개여야 함 (입력 {0}개)")]
    WrongCardinality(usize),
    /// 숫자가 아닌 값
    #[error("{scale} 값이 숫자가 아님: {value}")]
    NotNumeric { scale: String, value: String },
    /// 음수 경도
    #[error("경도는 0 이상이어야 함: {0}")]
    Negative(f64),
    /// 보간기 생성 실패
    #[error("보간기 생성 실패: {0}")]
    Interpolation(#[from] InterpolationError),
}
