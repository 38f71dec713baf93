//! World states and the operations evaluated against them.

mod distance;
mod dynamics;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use serde::Serialize;

pub use distance::{distance_to, DistanceTarget, Weighting};
pub use dynamics::{apply_effect, apply_transition, is_enabled};

use crate::error::ConstructionError;
use crate::model::VariableIndex;
use crate::schema::BindingInput;
use crate::value::Value;

/// A partial assignment of values to variables.
///
/// Variables without an entry resolve to their type's default. Resolution
/// during planning writes that default back, so states grow as they are read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldState {
    values: BTreeMap<String, Value>,
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state with one entry per binding. Later bindings of the same
    /// variable win.
    pub fn derive(
        variables: &VariableIndex,
        bindings: &[BindingInput],
    ) -> Result<Self, ConstructionError> {
        let mut state = Self::new();
        for binding in bindings {
            let variable = variables.require("world state", &binding.variable_id)?;
            let value = binding.to_value(variable.value_type())?;
            state.values.insert(binding.variable_id.clone(), value);
        }
        Ok(state)
    }

    /// Builder-style insert.
    pub fn with(mut self, variable_id: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(variable_id.into(), value.into());
        self
    }

    pub fn insert(&mut self, variable_id: impl Into<String>, value: Value) -> Option<Value> {
        self.values.insert(variable_id.into(), value)
    }

    /// The bound value, without default filling.
    pub fn resolve(&self, variable_id: &str) -> Option<&Value> {
        self.values.get(variable_id)
    }

    /// The bound value, binding the type default first if unset.
    ///
    /// Returns `None` only when the variable is not part of the model.
    pub fn resolve_or_insert_default(
        &mut self,
        variables: &VariableIndex,
        variable_id: &str,
    ) -> Option<&Value> {
        if !self.values.contains_key(variable_id) {
            let default = variables.get(variable_id)?.value_type().default_value();
            self.values.insert(variable_id.to_string(), default);
        }
        self.values.get(variable_id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Stable id: `{a=1,b="x"}`, sorted by variable id.
    ///
    /// String values are escaped, so distinct states never share a signature.
    pub fn signature(&self) -> String {
        let entries: Vec<String> = self
            .values
            .iter()
            .map(|(id, value)| match value {
                Value::String(s) => format!("{}={:?}", id, s),
                other => format!("{}={}", id, other),
            })
            .collect();
        format!("{{{}}}", entries.join(","))
    }

    /// Entries in wire form, sorted by variable id.
    pub fn bindings(&self) -> Vec<Binding> {
        self.values
            .iter()
            .map(|(id, value)| Binding {
                id: format!("{}={}", id, value),
                variable_id: id.clone(),
                value: value.clone(),
            })
            .collect()
    }
}

/// A state entry as returned to callers: `{"id": "hunger=0", "variableId": "hunger", "INT": 0}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    pub id: String,
    pub variable_id: String,
    #[serde(flatten)]
    pub value: Value,
}
