//! 금속 재료 참고 데이터: 경도 척도 환산, 물질 조성·혼합, 온도별 재료 물성.
//! 계산 로직은 라이브러리에 두고 CLI 는 얇은 래퍼로 유지한다.

pub mod app;
pub mod config;
pub mod hardness;
pub mod interp;
pub mod material;
pub mod substance;
pub mod ui_cli;
pub mod units;
