//! Effects: ordered assignments applied when a transition fires.

use crate::error::ConstructionError;
use crate::model::argument::Argument;
use crate::model::variable::VariableIndex;
use crate::operator::AssignmentOperator;
use crate::schema::EffectInput;
use crate::value::ValueType;

/// `variable op= argument`, applied at position `order` within its transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    variable_id: String,
    operator: AssignmentOperator,
    argument: Argument,
    value_type: ValueType,
    order: u32,
}

impl Effect {
    pub fn new(
        variables: &VariableIndex,
        variable_id: impl Into<String>,
        operator: AssignmentOperator,
        argument: Argument,
        order: u32,
    ) -> Result<Self, ConstructionError> {
        let variable_id = variable_id.into();
        if variable_id.is_empty() {
            return Err(ConstructionError::EmptyId { kind: "effect" });
        }
        let context = format!("effect {}{}{}", variable_id, operator, argument);
        let variable = variables.require(&context, &variable_id)?;
        if !variable.value_type().supports_assignment(operator) {
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
            order,
        })
    }

    pub fn from_input(
        variables: &VariableIndex,
        input: &EffectInput,
        order: u32,
    ) -> Result<Self, ConstructionError> {
        let operator = input.assignment_operator.parse::<AssignmentOperator>()?;
        let context = format!("effect on {}", input.variable_id);
        let argument = input.argument.to_argument(&context)?;
        Self::new(variables, input.variable_id.clone(), operator, argument, order)
    }

    /// Stable id, e.g. `hunger-=1`.
    pub fn id(&self) -> String {
        format!("{}{}{}", self.variable_id, self.operator, self.argument)
    }

    pub fn variable_id(&self) -> &str {
        &self.variable_id
    }

    pub fn operator(&self) -> AssignmentOperator {
        self.operator
    }

    pub fn argument(&self) -> &Argument {
        &self.argument
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn order(&self) -> u32 {
        self.order
    }
}
