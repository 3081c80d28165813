use std::cmp::Ordering;

use sassbridge_units::{Dimension, Error, Units};
use sassbridge_value::{SassNumber, SassType, SassValue};

fn units(list: &[&str]) -> Vec<String> {
    list.iter().map(|u| (*u).to_owned()).collect()
}

#[test]
fn can_be_constructed() {
    let dimension = Dimension::unitless(10.0);
    assert_eq!(dimension.value(), 10.0);
    assert!(dimension.is_unitless());
    assert_eq!(dimension.unit_str(), "");
}

#[test]
fn can_have_normal_units() {
    let dimension = Dimension::new(10.0, "px");
    assert_eq!(dimension.value(), 10.0);
    assert_eq!(dimension.numerator_units(), units(&["px"]));
    assert!(dimension.denominator_units().is_empty());
}

#[test]
fn accepts_every_unit_shape() {
    let from_expr = Dimension::new(10.0, "px/s");
    let from_pair = Dimension::new(10.0, ("px", "s"));
    let from_lists = Dimension::new(10.0, (units(&["px"]), units(&["s"])));
    let from_slices = Dimension::new(10.0, (&["px"][..], &["s"][..]));
    assert_eq!(from_expr, from_pair);
    assert_eq!(from_expr, from_lists);
    assert_eq!(from_expr, from_slices);
    assert_eq!(from_expr.unit_str(), "px/s");
}

#[test]
fn can_have_complex_units() {
    let dimension = Dimension::new(10.0, "px*px/em");
    assert_eq!(dimension.numerator_units(), units(&["px", "px"]));
    assert_eq!(dimension.denominator_units(), units(&["em"]));
}

#[test]
fn simplifies_complex_units() {
    let dimension = Dimension::new(10.0, "px*px/em*px");
    assert_eq!(dimension.value(), 10.0);
    assert_eq!(dimension.numerator_units(), units(&["px"]));
    assert_eq!(dimension.denominator_units(), units(&["em"]));
}

#[test]
fn sorts_units() {
    let dimension = Dimension::new(1.0, "s*px/rem*em");
    assert_eq!(dimension.numerator_units(), units(&["px", "s"]));
    assert_eq!(dimension.denominator_units(), units(&["em", "rem"]));
    assert_eq!(dimension.unit_str(), "px*s/em*rem");
}

#[test]
fn adds_same_units() {
    let sum = Dimension::new(10.0, "px")
        .add(&Dimension::new(10.0, "px"))
        .unwrap();
    assert_eq!(sum.value(), 20.0);
    assert_eq!(sum.numerator_units(), units(&["px"]));
}

#[test]
fn subtracts_same_units() {
    let difference = Dimension::new(10.0, "px")
        .subtract(&Dimension::new(10.0, "px"))
        .unwrap();
    assert_eq!(difference.value(), 0.0);
    assert_eq!(difference.numerator_units(), units(&["px"]));
}

#[test]
fn unitless_operand_adopts_units() {
    let sum = Dimension::new(10.0, "px")
        .add(&Dimension::unitless(5.0))
        .unwrap();
    assert_eq!(sum.to_string(), "15px");
}

#[test]
fn multiplies_with_units() {
    let product = Dimension::new(10.0, "px").multiply(&Dimension::new(10.0, "px"));
    assert_eq!(product.value(), 100.0);
    assert_eq!(product.numerator_units(), units(&["px", "px"]));
}

#[test]
fn negative_zero_renders_as_zero() {
    let product = Dimension::new(0.0, "px").multiply(&Dimension::unitless(-1.0));
    assert_eq!(product.to_string(), "0px");
    assert_eq!(Dimension::unitless(f64::NEG_INFINITY).to_string(), "-Infinity");
}

#[test]
fn multiplying_by_an_inverse_unit_cancels() {
    let per_px = Dimension::new(2.0, "/px");
    let product = Dimension::new(10.0, "px").multiply(&per_px);
    assert_eq!(product.value(), 20.0);
    assert!(product.is_unitless());

    let product = &Dimension::new(3.0, "px*s") * &Dimension::new(2.0, "em/s");
    assert_eq!(product.unit_str(), "em*px");
}

#[test]
fn divides_with_units() {
    let quotient = Dimension::new(10.0, "px").divide(&Dimension::new(10.0, "px"));
    assert_eq!(quotient.value(), 1.0);
    assert!(quotient.is_unitless());

    let rate = Dimension::new(10.0, "px") / Dimension::new(4.0, "s");
    assert_eq!(rate.to_string(), "2.5px/s");
}

#[test]
fn unitless_values_coerce_to_have_units() {
    let dimension = Dimension::unitless(10.0);
    assert_eq!(dimension.convert_to("px").unwrap().unit_str(), "px");
    assert_eq!(
        dimension.convert_to("px*rem/s").unwrap().unit_str(),
        "px*rem/s"
    );
}

#[test]
fn conversion_keeps_source_units() {
    let dimension = Dimension::new(3.0, "px/s");
    let converted = dimension.convert_to(("px", "s")).unwrap();
    assert_eq!(converted, dimension);
}

#[test]
fn conversion_is_an_exact_match() {
    let dimension = Dimension::new(3.0, "em*px");
    assert!(dimension.convert_to("em*px").is_ok());
    assert_eq!(
        dimension.convert_to("px*em"),
        Err(Error::IncompatibleUnits {
            from: "em*px".into(),
            to: "px*em".into()
        })
    );
    assert!(dimension.convert_to("em").is_err());
    assert!(dimension.convert_to(Units::none()).is_err());
}

#[test]
fn errors_for_addition_of_incompatible_units() {
    let err = Dimension::new(10.0, "px")
        .add(&Dimension::new(10.0, "s"))
        .unwrap_err();
    assert_eq!(err.to_string(), "Cannot convert s to px");
}

#[test]
fn errors_for_difference_of_incompatible_units() {
    let err = Dimension::new(10.0, "px")
        .subtract(&Dimension::new(10.0, "s"))
        .unwrap_err();
    assert!(matches!(err, Error::IncompatibleUnits { .. }));
    assert_eq!(err.to_string(), "Cannot convert s to px");
}

#[test]
fn has_strict_comparisons() {
    let d1 = Dimension::new(10.0, "px");
    let d2 = Dimension::new(-10.0, "px");
    assert_eq!(d1.compare_to(&d2).unwrap(), Ordering::Greater);
    assert_eq!(d2.compare_to(&d1).unwrap(), Ordering::Less);
    assert!(d1.gt(&d2).unwrap());
    assert!(!d1.lt(&d2).unwrap());
}

#[test]
fn has_equality_comparisons() {
    let d1 = Dimension::new(10.0, "px");
    let d2 = Dimension::new(10.0, "px");
    assert_eq!(d1.compare_to(&d2).unwrap(), Ordering::Equal);
    assert!(d2.equals(&d1).unwrap());
    assert!(d1.gte(&d2).unwrap());
    assert!(d1.lte(&d2).unwrap());
}

#[test]
fn comparisons_reject_incompatible_units() {
    let px = Dimension::new(1.0, "px");
    let s = Dimension::new(1.0, "s");
    assert!(px.compare_to(&s).is_err());
    assert!(px.lt(&s).is_err());
    assert!(px.lte(&s).is_err());
    assert!(px.gt(&s).is_err());
    assert!(px.gte(&s).is_err());
    assert!(px.equals(&s).is_err());
}

#[test]
fn outputs_a_sass_string() {
    assert_eq!(Dimension::new(10.0, "px").to_string(), "10px");
    assert_eq!(Dimension::new(1.5, "px*px/em").to_string(), "1.5px*px/em");
}

#[test]
fn is_a_number_type() {
    assert_eq!(Dimension::new(10.0, "px").type_of(), SassType::Number);
}

#[test]
fn converts_to_tagged_numbers() {
    assert_eq!(
        Dimension::new(2.0, "px").to_sass().unwrap(),
        SassValue::number(2.0, "px")
    );
    assert_eq!(
        Dimension::unitless(2.0).to_sass_number().unwrap(),
        SassNumber::unitless(2.0)
    );
}

#[test]
fn rejects_complex_units_as_tagged_numbers() {
    assert_eq!(
        Dimension::new(1.0, "px*px").to_sass_number(),
        Err(Error::UnsupportedUnit("px*px".into()))
    );
    assert!(matches!(
        Dimension::new(1.0, "px/s").to_sass(),
        Err(Error::UnsupportedUnit(_))
    ));
}

#[test]
fn builds_from_tagged_numbers() {
    let dimension = Dimension::from(&SassNumber::new(2.0, "px"));
    assert_eq!(dimension.value(), 2.0);
    assert_eq!(dimension.unit_str(), "px");
    assert!(Dimension::from(SassNumber::unitless(3.0)).is_unitless());
}
