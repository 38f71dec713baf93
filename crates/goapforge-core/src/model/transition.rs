//! Transitions (actions) and behaviors.

use crate::error::ConstructionError;
use crate::model::condition::{dedupe, Condition};
use crate::model::effect::Effect;
use crate::model::variable::VariableIndex;
use crate::schema::{BehaviorInput, TransitionInput};

/// An action the planner may take: enabled when all conditions hold, it
/// applies its effects in order and adds `cost` to the path.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    id: String,
    description: Option<String>,
    cost: f64,
    action: serde_json::Value,
    conditions: Vec<Condition>,
    effects: Vec<Effect>,
}

impl Transition {
    pub fn from_input(
        variables: &VariableIndex,
        input: &TransitionInput,
    ) -> Result<Self, ConstructionError> {
        if input.id.is_empty() {
            return Err(ConstructionError::EmptyId { kind: "transition" });
        }
        let cost = input.cost.unwrap_or(1.0);
        if !cost.is_finite() || cost < 0.0 {
            return Err(ConstructionError::InvalidNumber {
                context: format!("transition {}", input.id),
                field: "cost",
                value: cost,
            });
        }

        let conditions = input
            .conditions
            .iter()
            .map(|c| Condition::from_input(variables, c))
            .collect::<Result<Vec<_>, _>>()?;

        let mut effects: Vec<Effect> = Vec::with_capacity(input.effects.len());
        for effect in &input.effects {
            let order = match effect.order {
                Some(order) => order,
                None => effects
                    .iter()
                    .map(Effect::order)
                    .max()
                    .map_or(0, |highest| highest.saturating_add(1)),
            };
            effects.push(Effect::from_input(variables, effect, order)?);
        }
        // Stable: equal orders keep declaration order.
        effects.sort_by_key(Effect::order);

        Ok(Self {
            id: input.id.clone(),
            description: input.description.clone(),
            cost,
            action: input.action.clone(),
            conditions: dedupe(conditions),
            effects,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn action(&self) -> &serde_json::Value {
        &self.action
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Effects sorted by ascending order.
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }
}

/// A named subset of a model's transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Behavior {
    id: String,
    description: Option<String>,
    transitions: Vec<String>,
}

impl Behavior {
    pub(crate) fn from_input(
        input: &BehaviorInput,
        has_transition: impl Fn(&str) -> bool,
    ) -> Result<Self, ConstructionError> {
        if input.id.is_empty() {
            return Err(ConstructionError::EmptyId { kind: "behavior" });
        }
        let mut transitions: Vec<String> = Vec::with_capacity(input.transitions.len());
        for id in &input.transitions {
            if !has_transition(id) {
                return Err(ConstructionError::UnknownTransition {
                    behavior: input.id.clone(),
                    transition: id.clone(),
                });
            }
            if !transitions.contains(id) {
                transitions.push(id.clone());
            }
        }
        Ok(Self {
            id: input.id.clone(),
            description: input.description.clone(),
            transitions,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn transitions(&self) -> &[String] {
        &self.transitions
    }
}
