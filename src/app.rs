use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::config::{self, Config};
use crate::hardness::{HardnessConverter, HardnessError, REFERENCE_TABLE};
use crate::material::{Material, MaterialCatalog, MaterialError};
use crate::substance::ValidationError;
use crate::ui_cli;
use crate::units::{self, Quantity, UnitError};

/// 경도 환산과 내열합금 물성 조회 CLI.
#[derive(Parser, Debug)]
#[command(name = "material_reference_toolbox", version, about = "경도 환산 및 재료 물성 조회")]
pub struct Cli {
    /// 설정 파일 경로 (없으면 기본값으로 생성)
    #[arg(short, long, default_value = config::DEFAULT_PATH)]
    pub config: PathBuf,

    /// 결과를 JSON 으로 출력
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 한 척도의 경도를 여섯 척도로 환산 (HB, HRA, HRC, HRB, HV, HSD)
    Hardness {
        scale: String,
        value: String,
        /// 3차 스플라인 환산표 사용 (입력 척도도 정의역 검사)
        #[arg(long)]
        cubic: bool,
    },
    /// 등록된 재료 목록
    Materials,
    /// 재료의 온도별 물성
    Material {
        name: String,
        /// 조회 온도 (설정의 표시 단위). 생략하면 20..1000 °C
        #[arg(short, long, allow_negative_numbers = true)]
        temperature: Vec<f64>,
        /// 특정 파라미터만 출력
        #[arg(short, long)]
        parameter: Option<String>,
    },
    /// 재료 파라미터 어휘
    Parameters,
    /// 종탄성계수 E 와 횡탄성계수 G 환산
    Young {
        /// 푸아송비
        #[arg(long)]
        mu: f64,
        /// 종탄성계수 E [Pa]
        #[arg(short = 'e', long)]
        elastic: Option<f64>,
        /// 횡탄성계수 G [Pa]
        #[arg(short = 'g', long)]
        shear: Option<f64>,
    },
    /// 단위 문자열의 SI 배율
    Unit {
        unit: String,
        #[arg(default_value_t = 1.0, allow_negative_numbers = true)]
        value: f64,
    },
}

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("설정 오류: {0}")]
    Config(#[from] config::ConfigError),
    #[error("경도 환산 오류: {0}")]
    Hardness(#[from] HardnessError),
    #[error("재료 오류: {0}")]
    Material(#[from] MaterialError),
    #[error("입력 검증 오류: {0}")]
    Validation(#[from] ValidationError),
    #[error("단위 오류: {0}")]
    Unit(#[from] UnitError),
    #[error("JSON 출력 오류: {0}")]
    Json(#[from] serde_json::Error),
    #[error("등록되지 않은 재료: {0}")]
    UnknownMaterial(String),
}

/// 조회 온도를 생략했을 때 쓰는 °C 격자.
const DEFAULT_GRID_C: [f64; 11] = [
    20.0, 100.0, 200.0, 300.0, 400.0, 500.0, 600.0, 700.0, 800.0, 900.0, 1000.0,
];

/// 하위 명령 하나를 실행한다.
pub fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let precision = config.display.precision;
    match &cli.command {
        Command::Hardness { scale, value, cubic } => {
            let (scale, value) = HardnessConverter::parse_reading(scale, value)?;
            let values = if *cubic {
                Material::hardness(scale, value)?
            } else if config.hardness == HardnessConverter::standard()?.options() {
                HardnessConverter::standard()?.convert(scale, value)
            } else {
                HardnessConverter::new(REFERENCE_TABLE, config.hardness)?.convert(scale, value)
            };
            ui_cli::print_hardness(&values, precision, cli.json)?;
        }
        Command::Materials => {
            let catalog = MaterialCatalog::standard_with(config.material)?;
            ui_cli::print_materials(&catalog, cli.json)?;
        }
        Command::Material {
            name,
            temperature,
            parameter,
        } => {
            let catalog = MaterialCatalog::standard_with(config.material)?;
            let material = catalog
                .get(name)
                .ok_or_else(|| AppError::UnknownMaterial(name.clone()))?;
            let unit = config.display.temperature_unit;
            let temperatures: Vec<f64> = if temperature.is_empty() {
                DEFAULT_GRID_C
                    .iter()
                    .map(|&c| units::from_kelvin(c + units::ZERO_CELSIUS_K, unit))
                    .collect()
            } else {
                temperature.clone()
            };
            ui_cli::print_material(
                material,
                &temperatures,
                unit,
                parameter.as_deref(),
                precision,
                cli.json,
            )?;
        }
        Command::Parameters => ui_cli::print_parameters(cli.json)?,
        Command::Young { mu, elastic, shear } => {
            let result = Material::young_modulus(*mu, *elastic, *shear)?;
            // E 를 주면 G, G 를 주면 E
            let symbol = if elastic.is_some() { "G" } else { "E" };
            let quantity = Quantity::new(symbol, result, "Pa", "탄성계수")?;
            ui_cli::print_quantity(&quantity, cli.json)?;
        }
        Command::Unit { unit, value } => {
            let quantity = Quantity::new("value", *value, unit.as_str(), "")?;
            ui_cli::print_quantity(&quantity, cli.json)?;
        }
    }
    Ok(())
}
