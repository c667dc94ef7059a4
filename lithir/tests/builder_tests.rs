use lithir::{
    attrs::{Attribute, FloatAttr, FloatData, FloatType, IndexType, IntAttr, TypeSpec},
    utils::Error,
};

#[test]
fn from_width_rejects_non_positive_widths() {
    for width in [0, -8, -1, i64::MIN] {
        let err = FloatType::from_width(width).expect_err("non-positive width must fail");
        assert!(err.is_domain(), "expected a domain error, got {:?}", err);
    }
}

#[test]
fn from_width_rejects_widths_above_the_cap() {
    assert!(FloatType::from_width(FloatType::MAX_WIDTH_BITS).is_ok());

    let err = FloatType::from_width(FloatType::MAX_WIDTH_BITS + 1)
        .expect_err("width above the cap must fail");
    assert!(err.is_domain(), "expected a domain error, got {:?}", err);
}

#[test]
fn widths_are_not_limited_to_the_common_ones() {
    // The width set is any positive integer up to the cap, not just 32/64.
    for width in [1, 8, 16, 32, 64, 80, 128, 4096] {
        let ty = FloatType::from_width(width).expect("width should be accepted");
        assert_eq!(ty.width(), Some(width));
    }
}

#[test]
fn from_width_is_idempotent() {
    assert_eq!(
        FloatType::from_width(32).unwrap(),
        FloatType::from_width(32).unwrap()
    );
    assert_ne!(
        FloatType::from_width(32).unwrap(),
        FloatType::from_width(64).unwrap()
    );
}

#[test]
fn value_and_width_assembles_both_components() {
    let attr = FloatAttr::from_value_and_width(3.5, 32).unwrap();

    assert_eq!(attr.value(), Some(3.5));
    assert_eq!(
        attr.ty(),
        Some(&Attribute::FloatType(FloatType::from_width(32).unwrap()))
    );
    assert_eq!(attr.params()[0], Attribute::Float(FloatData::new(3.5)));
}

#[test]
fn value_and_width_surfaces_the_width_domain_error() {
    let err = FloatAttr::from_value_and_width(3.5, 0).expect_err("zero width must fail");
    assert!(err.is_domain(), "expected a domain error, got {:?}", err);
}

#[test]
fn builder_reuses_an_existing_type_attribute() {
    let ty = FloatType::from_width(64).unwrap();

    let from_existing = FloatAttr::from_value_and_width(1.25, ty.clone()).unwrap();
    let from_width = FloatAttr::from_value_and_width(1.25, 64).unwrap();
    assert_eq!(from_existing, from_width);

    let from_attr =
        FloatAttr::from_value_and_width(1.25, Attribute::FloatType(ty)).unwrap();
    assert_eq!(from_attr, from_width);
}

#[test]
fn builder_accepts_the_index_marker() {
    let via_spec = FloatAttr::from_value_and_width(1.5, TypeSpec::Index).unwrap();
    let via_type = FloatAttr::from_value_and_width(1.5, IndexType).unwrap();
    let via_attr = FloatAttr::from_value_and_width(1.5, Attribute::Index(IndexType)).unwrap();

    assert_eq!(via_spec, via_type);
    assert_eq!(via_spec, via_attr);
    assert_eq!(via_spec.ty(), Some(&Attribute::Index(IndexType)));
    assert_eq!(via_spec.to_string(), "float<1.5, index>");
}

#[test]
fn builder_rejects_a_non_type_existing_attribute() {
    for wrong in [
        Attribute::Int(IntAttr::new(32)),
        Attribute::Float(FloatData::new(32.0)),
        Attribute::FloatValue(FloatAttr::from_value_and_width(1.0, 32).unwrap()),
    ] {
        let err = FloatAttr::from_value_and_width(3.5, wrong.clone())
            .expect_err("non-type attribute must fail");
        match err {
            Error::Normalization { kind, found } => {
                assert_eq!(kind, FloatAttr::KIND);
                assert!(
                    found.contains(wrong.kind_name()),
                    "message should name the offending kind: {}",
                    found
                );
            }
            other => panic!("expected a normalization error, got {:?}", other),
        }
    }
}

#[test]
fn builder_preserves_special_payloads() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.0] {
        let attr = FloatAttr::from_value_and_width(value, 64).unwrap();
        assert_eq!(attr.bits(), Some(value.to_bits()));
    }
}
