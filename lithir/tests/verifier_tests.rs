use lithir::{
    attrs::{
        Attribute, FloatAttr, FloatData, FloatType, IndexType, IntAttr, MAX_ATTR_DEPTH,
    },
    context::Context,
    dialects,
    utils::Error,
};
use smallvec::SmallVec;

fn standard_context() -> Context {
    let mut ctx = Context::new();
    dialects::install_standard(&mut ctx).expect("standard dialects should install");
    ctx
}

#[test]
fn well_formed_attributes_verify() {
    let attrs = [
        Attribute::Int(IntAttr::new(-3)),
        Attribute::Float(FloatData::new(f64::NAN)),
        Attribute::Index(IndexType),
        Attribute::FloatType(FloatType::from_width(32).unwrap()),
        Attribute::FloatValue(FloatAttr::from_value_and_width(3.5, 32).unwrap()),
    ];

    for attr in attrs {
        attr.verify().unwrap_or_else(|error| {
            panic!("{} should verify, got {:?}", attr, error);
        });

        // Verification is idempotent and side-effect-free.
        let before = attr.clone();
        attr.verify().unwrap();
        assert_eq!(attr, before);
    }
}

#[test]
fn swapped_parameter_kind_is_caught_at_position_zero() {
    // Hand-assembled float_type whose single parameter holds a float payload
    // instead of an integer width.
    let bogus = FloatType::from_params_unchecked(SmallVec::from_iter([Attribute::Float(
        FloatData::new(3.14),
    )]));

    match bogus.verify() {
        Err(Error::ParameterKind {
            kind,
            position,
            expected,
            found,
        }) => {
            assert_eq!(kind, FloatType::KIND);
            assert_eq!(position, 0);
            assert!(expected.contains("int"), "expected description: {}", expected);
            assert_eq!(found, FloatData::KIND);
        }
        other => panic!("expected a parameter kind error, got {:?}", other),
    }
}

#[test]
fn wrong_arity_is_caught_by_verify() {
    let empty = FloatType::from_params_unchecked(SmallVec::new());
    match empty.verify() {
        Err(Error::Shape {
            kind,
            expected,
            found,
        }) => {
            assert_eq!(kind, FloatType::KIND);
            assert_eq!(expected, 1);
            assert_eq!(found, 0);
        }
        other => panic!("expected a shape error, got {:?}", other),
    }

    let two_widths = FloatType::from_params_unchecked(SmallVec::from_iter([
        Attribute::Int(IntAttr::new(32)),
        Attribute::Int(IntAttr::new(64)),
    ]));
    assert!(two_widths.verify().unwrap_err().is_shape());

    // The checked constructor reports the same failures up front.
    assert!(FloatType::new(SmallVec::new()).unwrap_err().is_shape());
}

#[test]
fn non_positive_width_is_caught_by_verify() {
    let zero = FloatType::from_params_unchecked(SmallVec::from_iter([Attribute::Int(
        IntAttr::new(0),
    )]));
    assert!(zero.verify().unwrap_err().is_domain());

    let negative = FloatType::from_params_unchecked(SmallVec::from_iter([Attribute::Int(
        IntAttr::new(-8),
    )]));
    assert!(negative.verify().unwrap_err().is_domain());
}

#[test]
fn float_attr_verification_recurses_into_its_type() {
    // A float value whose embedded type carries a bad width: the kind
    // predicates hold, so only recursion can catch the domain violation.
    let bad_type = FloatType::from_params_unchecked(SmallVec::from_iter([Attribute::Int(
        IntAttr::new(0),
    )]));
    let attr = FloatAttr::from_params_unchecked(SmallVec::from_iter([
        Attribute::Float(FloatData::new(3.5)),
        Attribute::FloatType(bad_type),
    ]));

    assert!(attr.verify().unwrap_err().is_domain());
}

#[test]
fn pathological_nesting_hits_the_depth_guard() {
    // float_type<float_type<...>> is ill-kinded, but the guard must trip
    // before the per-position checks get a chance to reject it.
    let mut attr = Attribute::FloatType(FloatType::from_width(32).unwrap());
    for _ in 0..(MAX_ATTR_DEPTH + 8) {
        attr = Attribute::FloatType(FloatType::from_params_unchecked(SmallVec::from_iter([
            attr,
        ])));
    }

    match attr.verify() {
        Err(Error::NestingTooDeep { limit }) => assert_eq!(limit, MAX_ATTR_DEPTH),
        other => panic!("expected the depth guard to trip, got {:?}", other),
    }
}

#[test]
fn context_verify_dispatches_by_kind_name() {
    let ctx = standard_context();

    let attr = Attribute::FloatValue(FloatAttr::from_value_and_width(3.5, 32).unwrap());
    ctx.verify(&attr).unwrap();

    let bogus = Attribute::FloatType(FloatType::from_params_unchecked(SmallVec::from_iter([
        Attribute::Float(FloatData::new(3.14)),
    ])));
    assert!(ctx.verify(&bogus).unwrap_err().is_parameter_kind());
}

#[test]
fn context_verify_rejects_unregistered_kinds() {
    let mut ctx = Context::new();
    dialects::BuiltinDialect::install(&mut ctx).unwrap();

    // The float dialect was never installed into this context.
    let attr = Attribute::FloatType(FloatType::from_width(32).unwrap());
    match ctx.verify(&attr) {
        Err(Error::UnknownKind { name }) => assert_eq!(name, FloatType::KIND),
        other => panic!("expected an unknown kind error, got {:?}", other),
    }
}
