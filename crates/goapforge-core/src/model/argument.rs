//! Right-hand operands of conditions and effects.

use std::fmt;

use crate::error::{ConstructionError, EvaluationError};
use crate::model::variable::{Variable, VariableIndex};
use crate::state::WorldState;
use crate::value::Value;

/// A literal value or a reference to another variable, resolved against the
/// current state at evaluation time.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Literal(Value),
    Reference(String),
}

impl Argument {
    pub fn literal(value: impl Into<Value>) -> Self {
        Argument::Literal(value.into())
    }

    pub fn reference(variable_id: impl Into<String>) -> Self {
        Argument::Reference(variable_id.into())
    }

    /// Checks that the argument can be used as an operand for `variable`.
    pub(crate) fn check(
        &self,
        variables: &VariableIndex,
        context: &str,
        variable: &Variable,
    ) -> Result<(), ConstructionError> {
        let found = match self {
            Argument::Literal(value) => value.value_type(),
            Argument::Reference(id) => variables.require(context, id)?.value_type(),
        };
        if found != variable.value_type() {
            return Err(ConstructionError::TypeMismatch {
                context: context.to_string(),
                variable: variable.id().to_string(),
                expected: variable.value_type(),
                found,
            });
        }
        Ok(())
    }

    /// Resolves the operand, binding a default for an unset referenced variable.
    pub fn resolve(
        &self,
        state: &mut WorldState,
        variables: &VariableIndex,
        context: &dyn Fn() -> String,
    ) -> Result<Value, EvaluationError> {
        match self {
            Argument::Literal(value) => Ok(value.clone()),
            Argument::Reference(id) => state
                .resolve_or_insert_default(variables, id)
                .cloned()
                .ok_or_else(|| EvaluationError::UnknownVariable {
                    context: context(),
                    variable: id.clone(),
                }),
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Literal(value) => write!(f, "{}", value),
            Argument::Reference(id) => f.write_str(id),
        }
    }
}
