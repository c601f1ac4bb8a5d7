//! 경도 환산표 회귀 테스트.
use material_reference_toolbox::hardness::{
    ConverterOptions, HardnessConverter, HardnessError, HardnessScale, REFERENCE_TABLE,
};
use material_reference_toolbox::interp::Aggregation;
use material_reference_toolbox::material::{Material, MaterialError};

fn assert_close(label: &str, actual: f64, expected: f64, abs_tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= abs_tol,
        "{label} expected {expected:.3} got {actual:.3} (diff {diff:.3}, tol {abs_tol})"
    );
}

#[test]
fn table_has_all_rows() {
    assert_eq!(REFERENCE_TABLE.len(), 441);
}

#[test]
fn every_defined_cell_reproduced_within_two_percent() {
    let conv = HardnessConverter::standard().expect("standard converter");
    let mut worst = 0.0_f64;
    for (i, row) in REFERENCE_TABLE.iter().enumerate() {
        for from in HardnessScale::ALL {
            let Some(a) = row.get(from) else { continue };
            let converted = conv.convert(from, a);
            for to in HardnessScale::ALL {
                if to == from {
                    continue;
                }
                let Some(b) = row.get(to) else { continue };
                let got = converted.get(to);
                let rel = (got - b).abs() / b.abs();
                assert!(
                    rel <= 0.02,
                    "row {i}: {from}={a} -> {to} expected {b} got {got}"
                );
                worst = worst.max(rel);
            }
        }
    }
    assert!(worst > 0.0);
}

#[test]
fn brinell_229_to_all_scales() {
    let values = HardnessConverter::standard()
        .unwrap()
        .convert(HardnessScale::Brinell, 229.0);
    assert_eq!(values.hb, 229.0);
    assert_close("HRA", values.hra, 61.8, 0.06);
    assert_close("HRC", values.hrc, 22.0, 0.06);
    assert_close("HRB", values.hrb, 98.2, 0.06);
    assert_close("HV", values.hv, 229.0, 0.06);
    assert_close("HSD", values.hsd, 32.5, 0.06);
}

#[test]
fn out_of_domain_is_nan_not_error() {
    let conv = HardnessConverter::standard().unwrap();
    let values = conv.convert(HardnessScale::Brinell, 800.0);
    assert_eq!(values.hb, 800.0);
    assert!(values.hrc.is_nan());
    assert!(values.hv.is_nan());

    // HRB 는 HB 244 까지만 정의됨
    let values = conv.convert(HardnessScale::Brinell, 400.0);
    assert!(values.hrb.is_nan());
    assert!(!values.hrc.is_nan());
}

#[test]
fn pair_domains_follow_table_coverage() {
    let conv = HardnessConverter::standard().unwrap();
    let (lo, hi) = conv
        .interpolant(HardnessScale::Brinell, HardnessScale::RockwellC)
        .unwrap()
        .domain();
    assert_close("HB->HRC lo", lo, 206.0, 1e-9);
    assert_close("HB->HRC hi", hi, 712.0, 1e-9);
    let (lo, hi) = conv
        .interpolant(HardnessScale::Brinell, HardnessScale::RockwellB)
        .unwrap()
        .domain();
    assert_close("HB->HRB lo", lo, 75.0, 1e-9);
    assert_close("HB->HRB hi", hi, 244.0, 1e-9);
    assert!(conv
        .interpolant(HardnessScale::Vickers, HardnessScale::Vickers)
        .is_none());
    assert_eq!(
        conv.scale_domain(HardnessScale::ShoreD),
        Some((20.6, 98.3))
    );
}

#[test]
fn validate_rejects_bad_input() {
    assert_eq!(
        HardnessConverter::validate([("HB", 200.0), ("HV", 200.0)]),
        Err(HardnessError::WrongCardinality(2))
    );
    assert_eq!(
        HardnessConverter::validate(Vec::<(&str, f64)>::new()),
        Err(HardnessError::WrongCardinality(0))
    );
    assert!(matches!(
        HardnessConverter::validate([("HQ", 10.0)]),
        Err(HardnessError::UnknownScale(_))
    ));
    assert!(matches!(
        HardnessConverter::validate([("HRC", f64::NAN)]),
        Err(HardnessError::NotNumeric { .. })
    ));
    assert!(matches!(
        HardnessConverter::parse_reading("HB", "abc"),
        Err(HardnessError::NotNumeric { .. })
    ));
    assert_eq!(
        HardnessConverter::validate([("hrc", 40.0)]),
        Ok((HardnessScale::RockwellC, 40.0))
    );
}

#[test]
fn convert_entries_matches_convert() {
    let conv = HardnessConverter::standard().unwrap();
    let a = conv.convert_entries([("HV", 300.0)]).unwrap();
    let b = conv.convert(HardnessScale::Vickers, 300.0);
    for ((scale, x), (_, y)) in a.iter().zip(b.iter()) {
        assert!(x == y || (x.is_nan() && y.is_nan()), "{scale}: {x} vs {y}");
    }
}

#[test]
fn cubic_material_hardness_echoes_input() {
    let values = Material::hardness(HardnessScale::RockwellC, 40.0).unwrap();
    assert_close("HRC", values.hrc, 40.0, 1e-9);
    assert_close("HB", values.hb, 373.0, 0.6);
    assert_close("HRA", values.hra, 70.4, 0.06);
    assert_close("HV", values.hv, 389.0, 0.6);
    assert_close("HSD", values.hsd, 53.0, 0.06);
    assert!(values.hrb.is_nan());

    // 입력 척도도 정의역 밖이면 NaN
    let values = Material::hardness(HardnessScale::RockwellC, 80.0).unwrap();
    assert!(values.hrc.is_nan());
    assert!(values.hb.is_nan());
}

#[test]
fn cubic_material_hardness_rejects_negative() {
    assert_eq!(
        Material::hardness(HardnessScale::Brinell, -1.0),
        Err(MaterialError::Hardness(HardnessError::Negative(-1.0)))
    );
    assert!(Material::hardness_entries([("HB", 200.0), ("HRC", 20.0)]).is_err());
}

#[test]
fn custom_options_build_independent_converter() {
    let conv = HardnessConverter::new(REFERENCE_TABLE, ConverterOptions::cubic()).unwrap();
    assert_eq!(conv.options().order, 3);
    let linear = HardnessConverter::standard().unwrap();
    let a = conv.convert(HardnessScale::Vickers, 500.0).hrc;
    let b = linear.convert(HardnessScale::Vickers, 500.0).hrc;
    assert!((a - b).abs() < 1.0, "cubic {a} linear {b}");
}

#[test]
fn median_aggregation_collapses_duplicate_rows() {
    // HB 115 행이 셋: HRB 64.9, 64.6, 64.4
    let median = HardnessConverter::new(
        REFERENCE_TABLE,
        ConverterOptions {
            aggregation: Aggregation::Median,
            ..ConverterOptions::default()
        },
    )
    .unwrap();
    assert_eq!(median.options().aggregation, Aggregation::Median);
    let mean = HardnessConverter::standard().unwrap();

    let by_median = median.convert(HardnessScale::Brinell, 115.0).hrb;
    let by_mean = mean.convert(HardnessScale::Brinell, 115.0).hrb;
    assert_close("HRB median", by_median, 64.6, 1e-9);
    assert_close("HRB mean", by_mean, (64.9 + 64.6 + 64.4) / 3.0, 1e-9);

    // 중복이 없는 구간은 두 방식이 같다
    let a = median.convert(HardnessScale::Brinell, 229.0).hrc;
    let b = mean.convert(HardnessScale::Brinell, 229.0).hrc;
    assert_close("HRC", a, b, 1e-9);
}
