use strum::EnumIs;
use thiserror::Error;

/// A single parse failure, with its byte span into the source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyntaxIssue {
    pub start: usize,
    pub end: usize,
    pub message: String,
}

#[derive(Debug, PartialEq, Eq, Hash, EnumIs, Error)]
pub enum Error {
    /// A parametrized kind received the wrong number of parameters.
    #[error("`{kind}` expects {expected} parameter(s), found {found}.")]
    Shape {
        kind: &'static str,
        expected: usize,
        found: usize,
    },

    /// A parameter does not satisfy the predicate declared for its position.
    #[error("parameter {position} of `{kind}` must be {expected}, found `{found}`.")]
    ParameterKind {
        kind: &'static str,
        position: usize,
        expected: &'static str,
        found: &'static str,
    },

    /// A payload violates a numeric constraint of its kind.
    #[error("invalid `{kind}`: {message}")]
    Domain {
        kind: &'static str,
        message: String,
    },

    /// A builder input that has no canonical form for the requested kind.
    #[error("cannot normalize {found} into `{kind}`.")]
    Normalization {
        kind: &'static str,
        found: String,
    },

    /// The textual form could not be parsed.
    #[error("encountered {} syntax issue(s) while parsing an attribute.", .errors.len())]
    Syntax { errors: Vec<SyntaxIssue> },

    /// A kind with the same name is already registered in the context.
    #[error("an attribute kind named `{name}` is already registered.")]
    DuplicateKind { name: &'static str },

    /// No kind with this name has been registered in the context.
    #[error("no attribute kind named `{name}` is registered.")]
    UnknownKind { name: String },

    /// The attribute tree is nested deeper than the verifier follows.
    #[error("attribute nesting exceeds the supported maximum depth of {limit}.")]
    NestingTooDeep { limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
