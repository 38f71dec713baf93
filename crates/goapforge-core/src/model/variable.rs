//! Typed variables and the per-model variable index.

use std::collections::BTreeMap;

use crate::error::ConstructionError;
use crate::schema::VariableInput;
use crate::value::ValueType;

/// A named, typed slot of the world state.
///
/// `weight` scales this variable's contribution to the heuristic distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    id: String,
    value_type: ValueType,
    weight: f64,
    description: Option<String>,
}

impl Variable {
    pub fn new(id: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            id: id.into(),
            value_type,
            weight: 1.0,
            description: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn validate(&self) -> Result<(), ConstructionError> {
        if self.id.is_empty() {
            return Err(ConstructionError::EmptyId { kind: "variable" });
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(ConstructionError::InvalidNumber {
                context: format!("variable {}", self.id),
                field: "weight",
                value: self.weight,
            });
        }
        Ok(())
    }
}

impl TryFrom<&VariableInput> for Variable {
    type Error = ConstructionError;

    fn try_from(input: &VariableInput) -> Result<Self, Self::Error> {
        let value_type = input.type_of.parse::<ValueType>()?;
        let variable = Variable {
            id: input.id.clone(),
            value_type,
            weight: input.weight.unwrap_or(1.0),
            description: input.description.clone(),
        };
        variable.validate()?;
        Ok(variable)
    }
}

/// Variables of a model, keyed by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableIndex {
    variables: BTreeMap<String, Variable>,
}

impl VariableIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable, or merges it into an existing one of the same type.
    ///
    /// Re-adding an id with a different type is rejected.
    pub fn insert(&mut self, variable: Variable) -> Result<(), ConstructionError> {
        variable.validate()?;
        if let Some(existing) = self.variables.get(&variable.id) {
            if existing.value_type != variable.value_type {
                return Err(ConstructionError::ConflictingVariableType {
                    id: variable.id,
                    existing: existing.value_type,
                    requested: variable.value_type,
                });
            }
        }
        self.variables.insert(variable.id.clone(), variable);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Variable> {
        self.variables.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.variables.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }

    /// Looks up `id` for construction of `context`.
    pub(crate) fn require(&self, context: &str, id: &str) -> Result<&Variable, ConstructionError> {
        self.get(id)
            .ok_or_else(|| ConstructionError::UnknownVariable {
                context: context.to_string(),
                variable: id.to_string(),
            })
    }
}
