//! 재료 빌더와 문헌 재료 목록.
use material_reference_toolbox::interp::{Interpolant, OutOfRange};
use material_reference_toolbox::material::{
    properties, Bound, Material, MaterialCatalog, MaterialError, MaterialOptions, ParameterSource,
};
use material_reference_toolbox::substance::Composition;
use material_reference_toolbox::units::ZERO_CELSIUS_K;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn k(celsius: f64) -> f64 {
    celsius + ZERO_CELSIUS_K
}

fn table() -> Vec<[f64; 2]> {
    vec![[300.0, 10.0], [400.0, 20.0], [500.0, 40.0], [600.0, 80.0]]
}

#[test]
fn scalar_is_constant_everywhere() {
    let m = Material::builder("steel")
        .parameter("density", 7850.0)
        .build()
        .unwrap();
    assert_eq!(m.evaluate("density", 1.0), 7850.0);
    assert_eq!(m.evaluate("density", 5000.0), 7850.0);
    assert!(m.evaluate("E", 300.0).is_nan());
}

#[test]
fn table_uses_builder_order_and_policy() {
    let linear = Material::builder("m")
        .parameter("sigma_t", table())
        .build()
        .unwrap();
    assert_close("mid", linear.evaluate("sigma_t", 450.0), 30.0, 1e-12);
    assert!(linear.evaluate("sigma_t", 700.0).is_nan());

    let step = Material::builder("m")
        .order(0)
        .out_of_range(OutOfRange::Extrapolate)
        .parameter("sigma_t", table())
        .build()
        .unwrap();
    assert_eq!(step.evaluate("sigma_t", 450.0), 20.0);
    assert_eq!(step.evaluate("sigma_t", 700.0), 80.0);

    let cubic = Material::builder("m")
        .order(3)
        .parameter("sigma_t", table())
        .build()
        .unwrap();
    assert_eq!(cubic.evaluate("sigma_t", 500.0), 40.0);
    assert!(cubic.parameter("sigma_t").is_some());
}

#[test]
fn short_table_and_bad_order_fail() {
    let err = Material::builder("m")
        .parameter("sigma_t", vec![[300.0, 1.0], [400.0, 2.0], [500.0, 3.0]])
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        MaterialError::TableTooShort {
            key: "sigma_t".into(),
            rows: 3
        }
    );
    assert_eq!(
        Material::builder("m").order(4).build().unwrap_err(),
        MaterialError::UnsupportedOrder(4)
    );
    assert_eq!(Material::builder(" ").build().unwrap_err(), MaterialError::EmptyName);
    let unsorted = vec![[400.0, 1.0], [300.0, 2.0], [500.0, 3.0], [600.0, 4.0]];
    assert!(matches!(
        Material::builder("m").parameter("x", unsorted).build(),
        Err(MaterialError::Curve { .. })
    ));
}

#[test]
fn known_scalars_checked_against_bounds() {
    let err = Material::builder("m")
        .parameter("density", -1.0)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        MaterialError::OutOfBounds {
            key: "density".into(),
            value: -1.0,
            bound: Bound::Positive
        }
    );
    // alpha 는 0 허용, 임의 키는 검사 없음
    assert!(Material::builder("m")
        .parameter("alpha", 0.0)
        .parameter("custom", -5.0)
        .build()
        .is_ok());
    assert!(matches!(
        Material::builder("m").parameter("E", f64::NAN).build(),
        Err(MaterialError::NonFinite { .. })
    ));
}

#[test]
fn table_and_curve_values_checked_against_bounds() {
    let rows = vec![[300.0, 8000.0], [400.0, 7900.0], [500.0, -1.0], [600.0, 7700.0]];
    assert_eq!(
        Material::builder("m").parameter("density", rows).build().unwrap_err(),
        MaterialError::OutOfBounds {
            key: "density".into(),
            value: -1.0,
            bound: Bound::Positive
        }
    );

    let curve = Interpolant::new(
        vec![300.0, 400.0, 500.0],
        vec![1e-5, 0.0, -2e-6],
        1,
        OutOfRange::Nan,
    )
    .unwrap();
    assert_eq!(
        Material::builder("m").parameter("alpha", curve).build().unwrap_err(),
        MaterialError::OutOfBounds {
            key: "alpha".into(),
            value: -2e-6,
            bound: Bound::NonNegative
        }
    );

    // 임의 키의 표는 검사 없음
    let negative: Vec<[f64; 2]> = table().iter().map(|&[t, v]| [t, -v]).collect();
    assert!(Material::builder("m").parameter("custom", negative).build().is_ok());
}

#[test]
fn failing_function_is_skipped() {
    let m = Material::builder("m")
        .parameter(
            "broken",
            ParameterSource::function(|t| {
                if t < 300.0 {
                    panic!("no data below 300 K");
                }
                t
            }),
        )
        .parameter("l", ParameterSource::function(|t| 10.0 + 0.01 * t))
        .parameter("density", 8000.0)
        .build()
        .unwrap();
    assert!(!m.parameters().contains_key("broken"));
    assert_close("l", m.evaluate("l", 500.0), 15.0, 1e-12);
    assert_eq!(m.evaluate("density", 300.0), 8000.0);
}

#[test]
fn prebuilt_curve_keeps_its_policy() {
    let curve = Interpolant::new(
        vec![300.0, 400.0, 500.0],
        vec![1.0, 2.0, 3.0],
        2,
        OutOfRange::Extrapolate,
    )
    .unwrap();
    let m = Material::builder("m")
        .parameter("KCU", curve)
        .build()
        .unwrap();
    assert_close("extrapolated", m.evaluate("KCU", 600.0), 4.0, 1e-9);
}

#[test]
fn sample_skips_undefined_points() {
    let m = Material::builder("m")
        .parameter("sigma_s", table())
        .build()
        .unwrap();
    let points = m.sample("sigma_s", &[200.0, 300.0, 450.0, 650.0]);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0], (300.0, 10.0));
}

#[test]
fn material_converts_to_substance() {
    let m = Material::builder("alloy")
        .composition(Composition::from_weights([("Ni", 3.0), ("Cr", 1.0)]).unwrap())
        .reference("handbook")
        .parameter("density", 8200.0)
        .build()
        .unwrap();
    assert_eq!(m.reference(), "handbook");
    let s = m.to_substance().unwrap();
    assert_eq!(s.name(), "alloy");
    assert_close("Ni", s.composition().fraction("Ni"), 0.75, 1e-12);
    assert_eq!(s.parameter("density").value(), 8200.0);
}

#[test]
fn young_modulus_through_material() {
    assert_close(
        "G",
        Material::young_modulus(0.3, Some(2.6), None).unwrap(),
        1.0,
        1e-12,
    );
    assert!(matches!(
        Material::young_modulus(0.3, None, None),
        Err(MaterialError::Validation(_))
    ));
}

#[test]
fn standard_catalog_contents() {
    let catalog = MaterialCatalog::standard().unwrap();
    assert_eq!(catalog.len(), 13);
    assert!(catalog.names().contains(&"08Х15Н24В4ТР"));

    let m = catalog.get("хн70мвтюб").expect("case-insensitive lookup");
    assert_eq!(m.name(), "ХН70МВТЮБ");
    assert!(m.reference().contains("c.412-413"));
    assert_close("sigma_s 20C", m.evaluate("sigma_s", k(20.0)), 1060e6, 1e-12);
    assert_close("sigma_s 650C", m.evaluate("sigma_s", k(650.0)), 955e6, 1e-9);
    assert!(m.evaluate("sigma_s", k(950.0)).is_nan());
    assert_close("KCU 750C", m.evaluate("KCU", k(750.0)), 0.7e6, 1e-9);

    // 자체 정책 곡선: 외삽
    let kcu = catalog.get("ХН80ТБЮ").unwrap().evaluate("KCU", k(800.0));
    assert!(kcu.is_finite());

    let e = catalog.get("09Х14Н19В2БР").unwrap().evaluate("E", k(100.0));
    assert_close("E 100C", e, 199e9, 1e-9);
}

#[test]
fn standard_catalog_with_extrapolating_tables() {
    let options = MaterialOptions {
        out_of_range: OutOfRange::Extrapolate,
        ..MaterialOptions::default()
    };
    let catalog = MaterialCatalog::standard_with(options).unwrap();
    let m = catalog.get("ХН70МВТЮБ").unwrap();
    assert!(m.evaluate("sigma_s", k(950.0)).is_finite());
}

#[test]
fn catalog_rejects_duplicates() {
    let mut catalog = MaterialCatalog::new();
    assert!(catalog.is_empty());
    catalog
        .insert(Material::builder("Alloy").build().unwrap())
        .unwrap();
    assert_eq!(
        catalog.insert(Material::builder("alloy").build().unwrap()),
        Err(MaterialError::Duplicate("alloy".into()))
    );
    assert_eq!(catalog.iter().count(), 1);
}

#[test]
fn parameter_vocabulary() {
    assert!(properties::all().iter().any(|p| p.key == "KCU"));
    assert_eq!(properties::describe("sigma_10000").map(|p| p.unit), Some("Pa"));
    assert_eq!(properties::creep_hours("sigma_10000"), Some(10000.0));
    assert_eq!(properties::describe("alpha").map(|p| p.bound), Some(Bound::NonNegative));
}
