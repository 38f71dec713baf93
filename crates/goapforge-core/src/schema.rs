//! Wire shapes for model definitions.
//!
//! These mirror the JSON requests accepted by the planner. They are plain data;
//! validation happens when they are turned into model elements.

use serde::{Deserialize, Serialize};

use crate::error::ConstructionError;
use crate::model::Argument;
use crate::value::{Value, ValueType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableInput {
    pub id: String,
    pub type_of: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl VariableInput {
    pub fn new(id: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            id: id.into(),
            type_of: value_type.name().to_string(),
            weight: None,
            description: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}

/// Either a variable reference or exactly one typed literal.
///
/// `{"variableId": "x"}`, `{"INT": 5}`, `{"STRING": "bob"}`, ...
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgumentInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_id: Option<String>,
    #[serde(default, rename = "BOOLEAN", skip_serializing_if = "Option::is_none")]
    pub boolean: Option<bool>,
    #[serde(default, rename = "STRING", skip_serializing_if = "Option::is_none")]
    pub string: Option<String>,
    #[serde(default, rename = "INT", skip_serializing_if = "Option::is_none")]
    pub int: Option<i64>,
    #[serde(default, rename = "FLOAT", skip_serializing_if = "Option::is_none")]
    pub float: Option<f64>,
}

impl ArgumentInput {
    pub fn variable(id: impl Into<String>) -> Self {
        Self {
            variable_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        match value.into() {
            Value::Boolean(v) => Self {
                boolean: Some(v),
                ..Self::default()
            },
            Value::String(v) => Self {
                string: Some(v),
                ..Self::default()
            },
            Value::Int(v) => Self {
                int: Some(v),
                ..Self::default()
            },
            Value::Float(v) => Self {
                float: Some(v),
                ..Self::default()
            },
        }
    }

    /// Resolves the populated alternative. An empty variable id counts as absent.
    pub fn to_argument(&self, context: &str) -> Result<Argument, ConstructionError> {
        let reference = self
            .variable_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| Argument::Reference(id.to_string()));
        let mut candidates: Vec<Argument> = reference.into_iter().collect();
        candidates.extend(self.boolean.map(|v| Argument::Literal(Value::Boolean(v))));
        candidates.extend(
            self.string
                .clone()
                .map(|v| Argument::Literal(Value::String(v))),
        );
        candidates.extend(self.int.map(|v| Argument::Literal(Value::Int(v))));
        candidates.extend(self.float.map(|v| Argument::Literal(Value::Float(v))));

        if candidates.len() != 1 {
            return Err(ConstructionError::InvalidArgument {
                context: context.to_string(),
                found: candidates.len(),
            });
        }
        Ok(candidates.remove(0))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionInput {
    pub variable_id: String,
    pub comparison_operator: String,
    pub argument: ArgumentInput,
}

impl ConditionInput {
    pub fn new(
        variable_id: impl Into<String>,
        comparison_operator: impl Into<String>,
        argument: ArgumentInput,
    ) -> Self {
        Self {
            variable_id: variable_id.into(),
            comparison_operator: comparison_operator.into(),
            argument,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectInput {
    pub variable_id: String,
    pub assignment_operator: String,
    pub argument: ArgumentInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl EffectInput {
    pub fn new(
        variable_id: impl Into<String>,
        assignment_operator: impl Into<String>,
        argument: ArgumentInput,
    ) -> Self {
        Self {
            variable_id: variable_id.into(),
            assignment_operator: assignment_operator.into(),
            argument,
            order: None,
        }
    }

    pub fn with_order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionInput {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Opaque payload returned verbatim in plans.
    #[serde(default)]
    pub action: serde_json::Value,
    #[serde(default)]
    pub conditions: Vec<ConditionInput>,
    #[serde(default)]
    pub effects: Vec<EffectInput>,
}

impl TransitionInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cost: None,
            description: None,
            action: serde_json::Value::Null,
            conditions: Vec::new(),
            effects: Vec::new(),
        }
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn with_action(mut self, action: serde_json::Value) -> Self {
        self.action = action;
        self
    }

    pub fn with_condition(mut self, condition: ConditionInput) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn with_effect(mut self, effect: EffectInput) -> Self {
        self.effects.push(effect);
        self
    }
}

/// An initial or query state entry: `{"variableId": "hunger", "value": 5}` or
/// `{"variableId": "hunger", "INT": 5}`. With neither, the type default is bound.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingInput {
    pub variable_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(default, rename = "BOOLEAN", skip_serializing_if = "Option::is_none")]
    pub boolean: Option<bool>,
    #[serde(default, rename = "STRING", skip_serializing_if = "Option::is_none")]
    pub string: Option<String>,
    #[serde(default, rename = "INT", skip_serializing_if = "Option::is_none")]
    pub int: Option<i64>,
    #[serde(default, rename = "FLOAT", skip_serializing_if = "Option::is_none")]
    pub float: Option<f64>,
}

impl BindingInput {
    pub fn new(variable_id: impl Into<String>, value: impl Into<Value>) -> Self {
        let literal = ArgumentInput::literal(value);
        Self {
            variable_id: variable_id.into(),
            value: None,
            boolean: literal.boolean,
            string: literal.string,
            int: literal.int,
            float: literal.float,
        }
    }

    /// Binding that falls back to the variable's default.
    pub fn unset(variable_id: impl Into<String>) -> Self {
        Self {
            variable_id: variable_id.into(),
            ..Self::default()
        }
    }

    /// Reads the bound value as `value_type`.
    pub fn to_value(&self, value_type: ValueType) -> Result<Value, ConstructionError> {
        let context = format!("binding {}", self.variable_id);
        let typed: Vec<Value> = [
            self.boolean.map(Value::Boolean),
            self.string.clone().map(Value::String),
            self.int.map(Value::Int),
            self.float.map(Value::Float),
        ]
        .into_iter()
        .flatten()
        .collect();

        let untyped = self.value.as_ref().filter(|v| !v.is_null());
        let found = typed.len() + usize::from(untyped.is_some());
        if found > 1 {
            return Err(ConstructionError::InvalidArgument { context, found });
        }

        if let Some(json) = untyped {
            return Value::from_json(value_type, json).ok_or_else(|| {
                ConstructionError::InvalidLiteral {
                    context,
                    value: json.to_string(),
                    expected: value_type,
                }
            });
        }

        match typed.into_iter().next() {
            None => Ok(value_type.default_value()),
            Some(value) if value.value_type() == value_type => Ok(value),
            Some(value) => Err(ConstructionError::TypeMismatch {
                context,
                variable: self.variable_id.clone(),
                expected: value_type,
                found: value.value_type(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorInput {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub transitions: Vec<String>,
}
