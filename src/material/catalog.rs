use log::debug;

use super::data::{self, CurveShape, MaterialData};
use super::{Material, MaterialError, MaterialOptions, ParameterSource};
use crate::interp::Interpolant;
use crate::units::ZERO_CELSIUS_K;

/// 이름으로 찾는 재료 목록. 등록 순서를 유지한다.
#[derive(Debug, Clone, Default)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
}

impl MaterialCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 문헌 데이터로 채운 목록.
    pub fn standard() -> Result<Self, MaterialError> {
        Self::standard_with(MaterialOptions::default())
    }

    /// `options`는 표 형태 데이터의 차수와 범위 정책에 쓰인다.
    pub fn standard_with(options: MaterialOptions) -> Result<Self, MaterialError> {
        let mut catalog = Self::new();
        for entry in data::materials() {
            catalog.insert(material_from_data(entry, options)?)?;
        }
        debug!("재료 목록 {}종 등록", catalog.len());
        Ok(catalog)
    }

    /// 같은 이름(대소문자 무시)이 이미 있으면 거부한다.
    pub fn insert(&mut self, material: Material) -> Result<(), MaterialError> {
        if self.get(material.name()).is_some() {
            return Err(MaterialError::Duplicate(material.name().to_string()));
        }
        self.materials.push(material);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Material> {
        let name = name.trim();
        self.materials
            .iter()
            .find(|m| m.name() == name || m.name().to_lowercase() == name.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.materials.iter().map(Material::name).collect()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

/// °C·문헌 단위 데이터를 K·SI 재료로 바꾼다.
fn material_from_data(entry: &MaterialData, options: MaterialOptions) -> Result<Material, MaterialError> {
    let mut builder = Material::builder(entry.name)
        .options(options)
        .reference(format!("{}, {}", data::REFERENCE, entry.pages));
    for curve in entry.curves {
        let (temperatures, values): (Vec<f64>, Vec<f64>) = curve
            .points
            .iter()
            .map(|p| (p.temp_c + ZERO_CELSIUS_K, p.value * curve.scale))
            .unzip();
        let source = match curve.shape {
            CurveShape::Table => ParameterSource::Table(
                temperatures
                    .into_iter()
                    .zip(values)
                    .map(|(t, v)| [t, v])
                    .collect(),
            ),
            CurveShape::Curve {
                order,
                out_of_range,
            } => {
                let interpolant = Interpolant::new(temperatures, values, order, out_of_range)
                    .map_err(|source| MaterialError::Curve {
                        key: curve.key.to_string(),
                        source,
                    })?;
                ParameterSource::Curve(interpolant)
            }
        };
        builder = builder.parameter(curve.key, source);
    }
    builder.build()
}
