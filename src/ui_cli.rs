//! CLI 출력. 표 형태 텍스트 또는 JSON.

use serde::Serialize;

use crate::app::AppError;
use crate::hardness::HardnessValues;
use crate::material::{properties, Material, MaterialCatalog};
use crate::units::{self, Quantity, TemperatureUnit};

/// 경도 환산 결과를 출력한다. 정의되지 않은 척도는 `-`.
pub fn print_hardness(values: &HardnessValues, precision: usize, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(values)?);
        return Ok(());
    }
    for (scale, value) in values.iter() {
        println!("{:>4}: {}", scale.symbol(), format_value(value, precision));
    }
    Ok(())
}

#[derive(Serialize)]
struct MaterialSummary<'a> {
    name: &'a str,
    parameters: Vec<&'a str>,
    reference: &'a str,
}

pub fn print_materials(catalog: &MaterialCatalog, json: bool) -> Result<(), AppError> {
    let summaries: Vec<MaterialSummary> = catalog
        .iter()
        .map(|m| MaterialSummary {
            name: m.name(),
            parameters: m.keys().collect(),
            reference: m.reference(),
        })
        .collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }
    println!("\n=== 재료 목록 ({}종) ===", summaries.len());
    for s in &summaries {
        println!("{:<16} {}", s.name, s.parameters.join(", "));
    }
    Ok(())
}

#[derive(Serialize)]
struct ParameterRow<'a> {
    key: &'a str,
    description: &'a str,
    unit: &'a str,
    values: Vec<f64>,
}

#[derive(Serialize)]
struct MaterialReport<'a> {
    name: &'a str,
    reference: &'a str,
    temperature_unit: &'static str,
    temperatures: &'a [f64],
    parameters: Vec<ParameterRow<'a>>,
}

/// 재료 파라미터를 온도별로 출력한다. 온도는 `unit` 단위 입력값.
pub fn print_material(
    material: &Material,
    temperatures: &[f64],
    unit: TemperatureUnit,
    only: Option<&str>,
    precision: usize,
    json: bool,
) -> Result<(), AppError> {
    let kelvin: Vec<f64> = temperatures
        .iter()
        .map(|&t| units::to_kelvin(t, unit))
        .collect();
    let rows: Vec<ParameterRow> = material
        .keys()
        .filter(|key| only.map_or(true, |o| o == *key))
        .map(|key| {
            let info = properties::describe(key);
            ParameterRow {
                key,
                description: info.map_or("", |i| i.description),
                unit: info.map_or("", |i| i.unit),
                values: kelvin.iter().map(|&t| material.evaluate(key, t)).collect(),
            }
        })
        .collect();

    if json {
        let report = MaterialReport {
            name: material.name(),
            reference: material.reference(),
            temperature_unit: unit.symbol(),
            temperatures,
            parameters: rows,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n=== {} ===", material.name());
    if !material.reference().is_empty() {
        println!("출처: {}", material.reference());
    }
    print!("{:<14}", format!("T [{}]", unit.symbol()));
    for t in temperatures {
        print!("{:>10}", format_value(*t, 0));
    }
    println!();
    for row in &rows {
        print!("{:<14}", row.key);
        for v in &row.values {
            print!("{:>10}", format_si(*v, row.key, row.unit, precision));
        }
        if row.description.is_empty() {
            println!();
        } else {
            println!("  {} [{}]", row.description, display_unit(row.key, row.unit));
        }
    }
    Ok(())
}

pub fn print_parameters(json: bool) -> Result<(), AppError> {
    let mut entries: Vec<_> = properties::all().to_vec();
    entries.push(properties::CREEP);
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    println!("\n=== 재료 파라미터 ===");
    for p in &entries {
        println!(
            "{:<10} {:<20} [{}] {}",
            p.key,
            p.description,
            p.unit,
            p.bound
        );
    }
    println!("목록에 없는 키도 사용할 수 있다 (하한 검사 없음).");
    Ok(())
}

pub fn print_quantity(quantity: &Quantity, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(quantity)?);
        return Ok(());
    }
    println!("{quantity}");
    println!("배율: {:e}", quantity.multiplier);
    println!("SI 값: {:e}", quantity.si_value);
    Ok(())
}

fn format_value(value: f64, precision: usize) -> String {
    if value.is_nan() {
        "-".to_string()
    } else {
        format!("{value:.precision$}")
    }
}

/// 탄성계수는 GPa, 응력·충격인성은 MPa·MJ/m2 로 줄여 보여준다.
fn format_si(value: f64, key: &str, unit: &str, precision: usize) -> String {
    match (key, unit) {
        ("E" | "G", _) => format_value(value / 1e9, precision + 1),
        (_, "Pa" | "J/m2") => format_value(value / 1e6, precision),
        (_, "1/K") => format_value(value * 1e6, precision + 1),
        _ => format_value(value, precision),
    }
}

fn display_unit<'a>(key: &str, unit: &'a str) -> &'a str {
    match (key, unit) {
        ("E" | "G", _) => "GPa",
        (_, "Pa") => "MPa",
        (_, "J/m2") => "MJ/m2",
        (_, "1/K") => "1e-6/K",
        (_, other) => other,
    }
}
