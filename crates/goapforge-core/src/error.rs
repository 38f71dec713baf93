//! Error types for GoapForge

use thiserror::Error;

use crate::value::ValueType;

/// A malformed or inconsistent model element, detected while building a [`Model`](crate::Model).
///
/// Construction is fail-fast: the first error aborts the build and no partial model is kept.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructionError {
    /// An id field is missing or empty.
    #[error("Cannot construct {kind}. The id is null or empty.")]
    EmptyId { kind: &'static str },

    /// A type name outside of BOOLEAN, STRING, INT, FLOAT.
    #[error("The type {0} is not supported")]
    UnsupportedType(String),

    /// An operator symbol that is neither a comparison nor an assignment operator.
    #[error("The operator '{0}' is not a known operator")]
    UnknownOperator(String),

    /// A variable was re-added with a different type.
    #[error(
        "Cannot update variable '{id}'. The old type and the new type are not the same ({existing}!={requested})."
    )]
    ConflictingVariableType {
        id: String,
        existing: ValueType,
        requested: ValueType,
    },

    /// A reference to a variable that is not part of the model.
    #[error("Cannot construct {context}. The \"{variable}\" variable does not exist.")]
    UnknownVariable { context: String, variable: String },

    /// The two sides of a condition, effect or binding have different types.
    #[error("Cannot construct {context}. \"{variable}\" is {expected} but the argument is {found}.")]
    TypeMismatch {
        context: String,
        variable: String,
        expected: ValueType,
        found: ValueType,
    },

    /// The operator is not registered for the variable's type.
    #[error("Cannot construct {context}. The {operator} operator is not supported for the {value_type} type.")]
    UnsupportedOperator {
        context: String,
        operator: &'static str,
        value_type: ValueType,
    },

    /// An argument must carry exactly one of a variable id or a literal.
    #[error(
        "Cannot construct {context}. The argument must include exactly one variable id or literal value (found {found})."
    )]
    InvalidArgument { context: String, found: usize },

    /// A literal JSON value that cannot be read as the variable's type.
    #[error("Cannot construct {context}. The value {value} cannot be read as {expected}.")]
    InvalidLiteral {
        context: String,
        value: String,
        expected: ValueType,
    },

    /// Costs and weights must be finite and non-negative.
    #[error("Cannot construct {context}. The {field} must be a finite non-negative number (got {value}).")]
    InvalidNumber {
        context: String,
        field: &'static str,
        value: f64,
    },

    /// A behavior refers to a transition that is not part of the model.
    #[error("Cannot add transition {transition} to behavior {behavior}. Transition does not exist.")]
    UnknownTransition { behavior: String, transition: String },

    /// A lookup by behavior id failed.
    #[error("The behavior '{0}' does not exist")]
    UnknownBehavior(String),
}

/// A failure while evaluating conditions or applying effects against a world state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// The variable is not part of the active model.
    #[error("{context} refers to a variable {variable} which cannot be found")]
    UnknownVariable { context: String, variable: String },

    /// The operator is not registered for the type.
    #[error("The {operator} operator is not supported for the {value_type} type")]
    UnsupportedOperator {
        operator: &'static str,
        value_type: ValueType,
    },

    /// A value of an unexpected type reached the operator table.
    #[error("Comparison between {expected} and {found} is not supported")]
    TypeMismatch { expected: ValueType, found: ValueType },

    /// Integer `/=` or `%=` with a zero operand.
    #[error("Integer division by zero applying {operator}")]
    DivisionByZero { operator: &'static str },

    /// Integer arithmetic left the i64 range.
    #[error("Integer overflow applying {operator}")]
    Overflow { operator: &'static str },
}

/// Main error type for GoapForge operations.
#[derive(Debug, Error)]
pub enum GoapError {
    /// The model, goal or initial state could not be built.
    #[error("Construction error: {0}")]
    Construction(#[from] ConstructionError),

    /// Planning hit an inconsistent model or an arithmetic failure.
    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),

    /// Error in planner configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A request or result could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The planning worker could not be started or died before delivering a result.
    #[error("Planning worker failed: {0}")]
    Worker(String),
}

/// Result type alias for GoapForge operations
pub type Result<T> = std::result::Result<T, GoapError>;
