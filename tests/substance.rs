//! 물질 모델: 조성 정규화, 파라미터, 고정 속성, 혼합, 탄성계수.
use std::collections::BTreeMap;

use material_reference_toolbox::substance::{
    young_modulus, AttributeValue, Composition, Parameter, State, Substance, ValidationError,
};
use proptest::prelude::*;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn with_mass(name: &str, weights: &[(&str, f64)], mass: f64) -> Substance {
    Substance::new(name)
        .unwrap()
        .with_composition(weights.iter().map(|&(e, w)| (e, w)))
        .unwrap()
        .with_parameter("mass", mass)
        .unwrap()
}

#[test]
fn composition_is_normalized() {
    let s = Substance::new("S")
        .unwrap()
        .with_composition([("A", 1.0), ("B", 1.0), ("C", 3.0)])
        .unwrap();
    assert_close("A", s.composition().fraction("A"), 0.2, 1e-12);
    assert_close("B", s.composition().fraction("B"), 0.2, 1e-12);
    assert_close("C", s.composition().fraction("C"), 0.6, 1e-12);

    let single = Composition::from_weights([("Fe", 7.0)]).unwrap();
    assert_eq!(single.get("Fe"), Some(1.0));
}

#[test]
fn composition_edits_renormalize() {
    let mut c = Composition::from_weights([("Fe", 1.0), ("C", 1.0)]).unwrap();
    c.insert("Ni", 1.0).unwrap();
    assert_close("Ni", c.fraction("Ni"), 0.5, 1e-12);
    assert_close("total", c.total(), 1.0, 1e-12);
    assert_eq!(c.remove("Ni"), Some(0.5));
    assert_close("Fe", c.fraction("Fe"), 0.5, 1e-12);
    assert_eq!(c.remove("W"), None);
}

#[test]
fn invalid_composition_rejected() {
    assert!(matches!(
        Composition::from_weights([("Fe", -1.0)]),
        Err(ValidationError::InvalidWeight { .. })
    ));
    assert_eq!(
        Composition::from_weights([(" ", 1.0)]),
        Err(ValidationError::EmptyElement)
    );
    // 합이 0 인 조성은 그대로 둔다
    let zero = Composition::from_weights([("Fe", 0.0)]).unwrap();
    assert_eq!(zero.total(), 0.0);
}

#[test]
fn empty_name_rejected() {
    assert_eq!(Substance::new("  ").unwrap_err(), ValidationError::EmptyName);
}

#[test]
fn clone_is_independent() {
    let original = with_mass("steel", &[("Fe", 0.98), ("C", 0.02)], 2.0);
    let mut copy = original.clone();
    copy.composition_mut().insert("Cr", 1.0).unwrap();
    copy.set_parameter("density", 7800.0).unwrap();
    copy.set_parameter("mass", 5.0).unwrap();

    assert!(original.composition().get("Cr").is_none());
    assert!(!original.contains("density"));
    assert_eq!(original.mass(), Some(2.0));
    assert_eq!(copy.mass(), Some(5.0));
}

#[test]
fn editing_original_leaves_clone_unchanged() {
    let mut original = with_mass("steel", &[("Fe", 0.98), ("C", 0.02)], 2.0);
    let copy = original.clone();
    original.composition_mut().insert("Cr", 1.0).unwrap();
    original.composition_mut().remove("C");
    original.set_parameter("density", 7800.0).unwrap();
    original.set_parameter("mass", 5.0).unwrap();

    assert!(copy.composition().get("Cr").is_none());
    assert_close("C", copy.composition().fraction("C"), 0.02, 1e-12);
    assert_close("Fe", copy.composition().fraction("Fe"), 0.98, 1e-12);
    assert!(!copy.contains("density"));
    assert_eq!(copy.mass(), Some(2.0));
}

#[test]
fn undefined_parameter_evaluates_to_nan() {
    let s = Substance::new("S").unwrap();
    assert!(s.parameter("density").at(300.0).is_nan());
    assert!(s.parameter("density").evaluate(&State::new()).is_nan());
    assert!(s.evaluate("density", &State::at_temperature(300.0)).is_nan());
}

#[test]
fn function_parameter_reads_named_state() {
    let s = Substance::new("gas")
        .unwrap()
        .with_parameter(
            "rho",
            Parameter::function(|st: &State| st.pressure() / (287.0 * st.temperature())),
        )
        .unwrap();
    // 알 수 없는 입력은 무시된다
    let state = State::new()
        .with("T", 300.0)
        .with("p", 101_325.0)
        .with("humidity", 0.5);
    assert_close("rho", s.evaluate("rho", &state), 101_325.0 / (287.0 * 300.0), 1e-12);
    assert!(s.evaluate("rho", &State::new()).is_nan());
}

#[test]
fn curve_parameter_from_interpolant() {
    use material_reference_toolbox::interp::{Interpolant, OutOfRange};
    let curve = Interpolant::new(vec![300.0, 400.0], vec![10.0, 20.0], 1, OutOfRange::Nan).unwrap();
    let s = Substance::new("S").unwrap().with_parameter("k", curve).unwrap();
    assert_close("k", s.parameter("k").at(350.0), 15.0, 1e-12);
    assert!(s.parameter("k").at(500.0).is_nan());
}

#[test]
fn parameter_validation() {
    let mut s = Substance::new("S").unwrap();
    assert_eq!(
        s.set_parameter("", 1.0),
        Err(ValidationError::EmptyParameterName)
    );
    assert!(matches!(
        s.set_parameter("E", f64::INFINITY),
        Err(ValidationError::NonFiniteParameter { .. })
    ));
    assert!(s.parameters().is_empty());
    s.set_parameter("E", 200).unwrap();
    assert_eq!(s.parameter("E").value(), 200.0);
}

#[test]
fn remove_parameter_errors() {
    let mut s = with_mass("S", &[("Fe", 1.0)], 1.0);
    assert!(matches!(
        s.remove_parameter("density"),
        Err(ValidationError::UnknownParameter(_))
    ));
    assert_eq!(
        s.remove_parameter("name").unwrap_err(),
        ValidationError::NameDeletion
    );
    assert!(s.remove_parameter("mass").is_ok());
    assert!(!s.contains("mass"));
}

#[test]
fn attribute_shape_is_closed() {
    let mut s = Substance::new("S").unwrap();
    assert_eq!(
        s.set_attribute("name", AttributeValue::Name("T".into())),
        Err(ValidationError::NameImmutable)
    );
    assert_eq!(s.delete_attribute("name"), Err(ValidationError::NameDeletion));
    assert!(matches!(
        s.set_attribute("color", AttributeValue::Name("red".into())),
        Err(ValidationError::UnknownAttribute(_))
    ));
    assert!(matches!(
        s.delete_attribute("composition"),
        Err(ValidationError::AttributeDeletion(_))
    ));
    assert!(matches!(
        s.set_attribute("composition", AttributeValue::Name("x".into())),
        Err(ValidationError::AttributeType(_))
    ));
    assert_eq!(s.name(), "S");

    let mut params = BTreeMap::new();
    params.insert("density".to_string(), Parameter::from(7800.0));
    s.set_attribute("parameters", AttributeValue::Parameters(params))
        .unwrap();
    assert_eq!(s.parameter("density").value(), 7800.0);

    let mut bad = BTreeMap::new();
    bad.insert("x".to_string(), Parameter::from(f64::NAN));
    assert!(s
        .set_attribute("parameters", AttributeValue::Parameters(bad))
        .is_err());
    assert!(s.contains("density"));
}

#[test]
fn mass_weighted_mixing() {
    let water = with_mass("H2O", &[("H", 2.0 / 18.0), ("O", 16.0 / 18.0)], 1.0);
    let iron = with_mass("Fe", &[("Fe", 1.0)], 3.0);
    let mix = (&water + &iron).unwrap();

    assert_eq!(mix.name(), "H2O+Fe");
    assert_eq!(mix.mass(), Some(4.0));
    assert_eq!(mix.parameters().len(), 1);
    assert_close("Fe", mix.composition().fraction("Fe"), 0.75, 1e-12);
    assert_close("O", mix.composition().fraction("O"), 16.0 / 18.0 / 4.0, 1e-12);
    assert_close("total", mix.composition().total(), 1.0, 1e-12);

    // 입력은 그대로
    assert_eq!(water.mass(), Some(1.0));
    assert!(water.composition().get("Fe").is_none());
}

#[test]
fn mixing_keeps_mass_of_empty_composition() {
    let empty = with_mass("A", &[], 1.0);
    let iron = with_mass("B", &[("Fe", 1.0)], 1.0);
    let mix = empty.mix(&iron).unwrap();
    assert_eq!(mix.mass(), Some(2.0));
    assert_close("Fe", mix.composition().fraction("Fe"), 0.5, 1e-12);
    assert_close("total", mix.composition().total(), 0.5, 1e-12);

    // 함량이 모두 0인 조성도 같은 취급
    let zero = with_mass("Z", &[("C", 0.0)], 1.0);
    let mix = zero.mix(&iron).unwrap();
    assert_close("Fe", mix.composition().fraction("Fe"), 0.5, 1e-12);
    assert_eq!(mix.composition().fraction("C"), 0.0);
}

#[test]
fn mixing_with_empty_composition_is_associative() {
    let a = with_mass("A", &[], 1.0);
    let b = with_mass("B", &[("Fe", 1.0)], 1.0);
    let c = with_mass("C", &[("O", 1.0)], 2.0);
    let left = a.mix(&b).unwrap().mix(&c).unwrap();
    let right = a.mix(&b.mix(&c).unwrap()).unwrap();
    for (label, mix) in [("(a+b)+c", &left), ("a+(b+c)", &right)] {
        assert_eq!(mix.mass(), Some(4.0), "{label}");
        assert_close(label, mix.composition().fraction("Fe"), 0.25, 1e-12);
        assert_close(label, mix.composition().fraction("O"), 0.5, 1e-12);
    }
}

#[test]
fn mixing_requires_mass() {
    let a = Substance::new("A")
        .unwrap()
        .with_composition([("Fe", 1.0)])
        .unwrap();
    let b = with_mass("B", &[("C", 1.0)], 1.0);
    assert_eq!(
        a.mix(&b).unwrap_err(),
        ValidationError::MissingMass {
            substance: "A".into()
        }
    );
    let zero = with_mass("Z", &[("C", 1.0)], 0.0);
    assert!(b.mix(&zero).is_err());
}

#[test]
fn excess_oxidizing_ratio() {
    let s = Substance::new("S")
        .unwrap()
        .with_composition([("O", 1.0), ("C", 3.0)])
        .unwrap();
    assert_close("oxidizer", s.excess_oxidizing(), 0.25, 1e-12);
    assert!(Substance::new("empty").unwrap().excess_oxidizing().is_nan());
}

#[test]
fn young_modulus_both_ways() {
    assert_close("G", young_modulus(0.3, Some(2.6), None).unwrap(), 1.0, 1e-12);
    assert_close("E", young_modulus(0.3, None, Some(1.0)).unwrap(), 2.6, 1e-12);
    assert_close(
        "E",
        Substance::young_modulus(0.3, None, Some(80e9)).unwrap(),
        208e9,
        1e-12,
    );
    assert_eq!(
        young_modulus(0.3, Some(1.0), Some(1.0)),
        Err(ValidationError::ModulusChoice)
    );
    assert_eq!(young_modulus(0.3, None, None), Err(ValidationError::ModulusChoice));
    assert_eq!(
        young_modulus(0.0, Some(1.0), None),
        Err(ValidationError::InvalidPoisson(0.0))
    );
    assert!(matches!(
        young_modulus(0.3, Some(-1.0), None),
        Err(ValidationError::InvalidModulus(_))
    ));
}

/// 빈 조성, 함량 0 원소, 같은 원소 반복을 포함한 입력.
fn weights() -> impl Strategy<Value = Vec<(&'static str, f64)>> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["Fe", "Ni", "C", "O"]),
            prop_oneof![Just(0.0), 0.0f64..1.0],
        ),
        0..4,
    )
}

proptest! {
    #[test]
    fn modulus_conversion_is_invertible(mu in 0.01f64..0.5, e in 1.0f64..1e12) {
        let g = young_modulus(mu, Some(e), None).unwrap();
        let back = young_modulus(mu, None, Some(g)).unwrap();
        prop_assert!((back - e).abs() <= 1e-9 * e);
    }

    #[test]
    fn normalized_fractions_sum_to_one(weights in prop::collection::vec(0.001f64..1000.0, 1..8)) {
        let c = Composition::from_weights(
            weights.iter().enumerate().map(|(i, &w)| (format!("E{i}"), w)),
        )
        .unwrap();
        prop_assert!((c.total() - 1.0).abs() < 1e-9);
        prop_assert!(c.iter().all(|(_, f)| (0.0..=1.0).contains(&f)));
    }

    #[test]
    fn mixing_is_associative(
        ma in 0.1f64..100.0,
        mb in 0.1f64..100.0,
        mc in 0.1f64..100.0,
        wa in weights(),
        wb in weights(),
        wc in weights(),
    ) {
        let a = with_mass("A", &wa, ma);
        let b = with_mass("B", &wb, mb);
        let c = with_mass("C", &wc, mc);
        let left = a.mix(&b).unwrap().mix(&c).unwrap();
        let right = a.mix(&b.mix(&c).unwrap()).unwrap();
        prop_assert!((left.mass().unwrap() - right.mass().unwrap()).abs() < 1e-9);
        for el in ["Fe", "Ni", "C", "O"] {
            let l = left.composition().fraction(el);
            let r = right.composition().fraction(el);
            prop_assert!((l - r).abs() < 1e-9, "{}: {} vs {}", el, l, r);
        }
    }
}
