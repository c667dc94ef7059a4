use chumsky::prelude::*;
use smallvec::SmallVec;

use crate::{
    attrs::{
        Attribute,
        scalar::{FloatData, IntAttr},
    },
    context::Context,
    utils::{Error, Result, SyntaxIssue},
};

impl<const N: usize> chumsky::container::Container<Attribute> for SmallVec<Attribute, N> {
    fn with_capacity(n: usize) -> Self {
        SmallVec::with_capacity(n)
    }

    fn push(&mut self, item: Attribute) {
        SmallVec::push(self, item)
    }
}

/// Parses a float literal: a decimal number that carries a fraction or an
/// exponent, or one of the keywords `inf` and `NaN`, optionally negated.
///
/// A bare run of digits is deliberately not a float, so float and integer
/// literals never overlap. Every textual NaN maps to the canonical quiet-NaN
/// payload.
pub fn float_literal_parser<'src>()
-> impl Parser<'src, &'src str, f64, extra::Err<Rich<'src, char>>> + Clone {
    let fraction = just('.').then(text::digits(10));

    let exponent = one_of("eE")
        .then(one_of("+-").or_not())
        .then(text::digits(10));

    let number = text::digits(10).then(choice((
        fraction.then(exponent.clone().or_not()).ignored(),
        exponent.ignored(),
    )));

    just('-')
        .or_not()
        .then(choice((
            just("inf").ignored(),
            just("NaN").ignored(),
            number.ignored(),
        )))
        .to_slice()
        .try_map(|s: &str, span| match s.parse::<f64>() {
            Ok(value) if value.is_nan() => Ok(f64::NAN),
            Ok(value) => Ok(value),
            Err(_) => Err(Rich::custom(span, format!("invalid float literal: {}", s))),
        })
        .labelled("float literal")
}

/// Parses a decimal integer literal, optionally negated.
pub fn int_literal_parser<'src>()
-> impl Parser<'src, &'src str, i64, extra::Err<Rich<'src, char>>> + Clone {
    just('-')
        .or_not()
        .then(text::digits(10))
        .to_slice()
        .try_map(|s: &str, span| {
            s.parse::<i64>()
                .map_err(|_| Rich::custom(span, format!("integer literal out of range: {}", s)))
        })
        .labelled("integer literal")
}

/// Parses one attribute, dispatching kind names through `ctx`.
///
/// The grammar is `float-literal | int-literal | ident params?` with
/// `params = '<' attribute (',' attribute)* '>'` and free whitespace around
/// delimiters. Construction goes through [`Context::construct`], so unknown
/// kind names and constructor failures (arity, parameter kind, domain)
/// surface as parse errors at the offending span.
pub fn attribute_parser<'src>(
    ctx: &'src Context,
) -> impl Parser<'src, &'src str, Attribute, extra::Err<Rich<'src, char>>> {
    recursive(|tree| {
        let float_attr =
            float_literal_parser().map(|value| Attribute::Float(FloatData::new(value)));

        let int_attr = int_literal_parser().map(|value| Attribute::Int(IntAttr::new(value)));

        let params = tree
            .padded()
            .separated_by(just(','))
            .collect::<SmallVec<Attribute, 2>>()
            .delimited_by(just('<').padded(), just('>'))
            .labelled("parameter list");

        let named = text::ascii::ident()
            .then(params.or_not())
            .try_map(
                |(name, params): (&str, Option<SmallVec<Attribute, 2>>), span| {
                    ctx.construct(name, params.unwrap_or_default())
                        .map_err(|error| Rich::custom(span, error.to_string()))
                },
            )
            .labelled("named attribute");

        // Floats first: a bare digit run falls through to the integer rule.
        choice((float_attr, int_attr, named)).labelled("attribute")
    })
}

/// Parse exactly one attribute from `src`.
///
/// Accumulated parse errors come back as [`Error::Syntax`], one
/// [`SyntaxIssue`] per reported span.
pub fn parse_attribute(ctx: &Context, src: &str) -> Result<Attribute> {
    let (output, errors) = attribute_parser(ctx)
        .padded()
        .then_ignore(end())
        .parse(src)
        .into_output_errors();

    match output {
        Some(attr) if errors.is_empty() => Ok(attr),
        _ => Err(Error::Syntax {
            errors: errors
                .into_iter()
                .map(|error| SyntaxIssue {
                    start: error.span().start,
                    end: error.span().end,
                    message: error.to_string(),
                })
                .collect(),
        }),
    }
}
