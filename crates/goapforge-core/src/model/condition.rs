//! Conditions and goals.

use std::collections::HashSet;

use crate::error::ConstructionError;
use crate::model::argument::Argument;
use crate::model::variable::VariableIndex;
use crate::operator::ComparisonOperator;
use crate::schema::ConditionInput;
use crate::value::{Value, ValueType};

/// A predicate `variable op argument` over a world state.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    variable_id: String,
    operator: ComparisonOperator,
    argument: Argument,
    value_type: ValueType,
}

impl Condition {
    pub fn new(
        variables: &VariableIndex,
        variable_id: impl Into<String>,
        operator: ComparisonOperator,
        argument: Argument,
    ) -> Result<Self, ConstructionError> {
        let variable_id = variable_id.into();
        let context = format!("condition {}{}{}", variable_id, operator, argument);
        if variable_id.is_empty() {
            return Err(ConstructionError::EmptyId { kind: "condition" });
        }
        let variable = variables.require(&context, &variable_id)?;
        if !variable.value_type().supports_comparison(operator) {
            return Err(ConstructionError::UnsupportedOperator {
                context,
                operator: operator.symbol(),
                value_type: variable.value_type(),
            });
        }
        argument.check(variables, &context, variable)?;
        Ok(Self {
            value_type: variable.value_type(),
            variable_id,
            operator,
            argument,
        })
    }

    pub fn from_input(
        variables: &VariableIndex,
        input: &ConditionInput,
    ) -> Result<Self, ConstructionError> {
        let operator = input.comparison_operator.parse::<ComparisonOperator>()?;
        let context = format!("condition on {}", input.variable_id);
        let argument = input.argument.to_argument(&context)?;
        Self::new(variables, input.variable_id.clone(), operator, argument)
    }

    /// `variable == value`, used when a state is the distance target.
    pub fn equality(variable_id: &str, value: &Value) -> Self {
        Self {
            variable_id: variable_id.to_string(),
            operator: ComparisonOperator::Eq,
            argument: Argument::Literal(value.clone()),
            value_type: value.value_type(),
        }
    }

    /// Stable id, e.g. `hunger>=1` or `name=="bob"`.
    pub fn id(&self) -> String {
        format!("{}{}{}", self.variable_id, self.operator, self.argument)
    }

    pub fn variable_id(&self) -> &str {
        &self.variable_id
    }

    pub fn operator(&self) -> ComparisonOperator {
        self.operator
    }

    pub fn argument(&self) -> &Argument {
        &self.argument
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }
}

/// Drops conditions whose id was already seen, keeping the first.
pub(crate) fn dedupe(conditions: Vec<Condition>) -> Vec<Condition> {
    let mut seen = HashSet::new();
    conditions
        .into_iter()
        .filter(|c| seen.insert(c.id()))
        .collect()
}

/// A conjunction of conditions. The empty goal is trivially satisfied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Goal {
    conditions: Vec<Condition>,
}

impl Goal {
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self {
            conditions: dedupe(conditions),
        }
    }

    pub fn from_inputs(
        variables: &VariableIndex,
        inputs: &[ConditionInput],
    ) -> Result<Self, ConstructionError> {
        let conditions = inputs
            .iter()
            .map(|input| Condition::from_input(variables, input))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(conditions))
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// `{c1,c2}` in insertion order.
    pub fn id(&self) -> String {
        let ids: Vec<String> = self.conditions.iter().map(Condition::id).collect();
        format!("{{{}}}", ids.join(","))
    }
}
