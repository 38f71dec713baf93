//! Planning model: variables, transitions and behaviors.
//!
//! A [`Model`] is built once and then shared read-only by every search that
//! runs against it. Building is fail-fast; any [`ConstructionError`] aborts it.
//!
//! ```
//! use goapforge_core::model::Model;
//! use goapforge_core::schema::{ArgumentInput, ConditionInput, EffectInput, TransitionInput, VariableInput};
//! use goapforge_core::ValueType;
//!
//! let model = Model::from_inputs(
//!     &[VariableInput::new("hunger", ValueType::Int)],
//!     &[TransitionInput::new("eat")
//!         .with_condition(ConditionInput::new("hunger", ">=", ArgumentInput::literal(1i64)))
//!         .with_effect(EffectInput::new("hunger", "-=", ArgumentInput::literal(1i64)))],
//!     &[],
//! )
//! .unwrap();
//! assert_eq!(model.transitions().len(), 1);
//! assert_eq!(model.transitions()[0].conditions()[0].id(), "hunger>=1");
//! ```

mod argument;
mod condition;
mod effect;
mod transition;
mod variable;


use std::collections::{BTreeMap, HashMap};

pub use argument::Argument;
pub use condition::{Condition, Goal};
pub use effect::Effect;
pub use transition::{Behavior, Transition};
pub use variable::{Variable, VariableIndex};

use crate::error::ConstructionError;
use crate::schema::{BehaviorInput, BindingInput, ConditionInput, TransitionInput, VariableInput};
use crate::state::WorldState;

/// The variables, transitions and behaviors a planner searches over.
#[derive(Debug, Clone, Default)]
pub struct Model {
    variables: VariableIndex,
    transitions: Vec<Transition>,
    transition_index: HashMap<String, usize>,
    behaviors: BTreeMap<String, Behavior>,
}

impl Model {
    pub fn builder() -> ModelBuilder {
        ModelBuilder::default()
    }

    /// Builds a model from wire inputs. Variables are added first so transitions
    /// may reference any of them.
    pub fn from_inputs(
        variables: &[VariableInput],
        transitions: &[TransitionInput],
        behaviors: &[BehaviorInput],
    ) -> Result<Self, ConstructionError> {
        let mut builder = Self::builder();
        for variable in variables {
            builder.add_variable(Variable::try_from(variable)?)?;
        }
        for transition in transitions {
            builder.add_transition(transition)?;
        }
        for behavior in behaviors {
            builder.add_behavior(behavior)?;
        }
        Ok(builder.build())
    }

    pub fn variables(&self) -> &VariableIndex {
        &self.variables
    }

    /// Transitions in insertion order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn transition(&self, id: &str) -> Option<&Transition> {
        self.transition_index.get(id).map(|&i| &self.transitions[i])
    }

    pub fn behavior(&self, id: &str) -> Option<&Behavior> {
        self.behaviors.get(id)
    }

    pub fn behaviors(&self) -> impl Iterator<Item = &Behavior> {
        self.behaviors.values()
    }

    /// Indices of the transitions available under `behavior`, in model order.
    /// Without a behavior every transition is available.
    pub fn transition_indices(&self, behavior: Option<&str>) -> Result<Vec<usize>, ConstructionError> {
        match behavior {
            None => Ok((0..self.transitions.len()).collect()),
            Some(id) => {
                let behavior = self
                    .behaviors
                    .get(id)
                    .ok_or_else(|| ConstructionError::UnknownBehavior(id.to_string()))?;
                let mut indices: Vec<usize> = behavior
                    .transitions()
                    .iter()
                    .filter_map(|t| self.transition_index.get(t).copied())
                    .collect();
                indices.sort_unstable();
                Ok(indices)
            }
        }
    }

    /// Builds a goal over this model's variables.
    pub fn goal(&self, conditions: &[ConditionInput]) -> Result<Goal, ConstructionError> {
        Goal::from_inputs(&self.variables, conditions)
    }

    /// Derives a world state from explicit bindings.
    pub fn state(&self, bindings: &[BindingInput]) -> Result<WorldState, ConstructionError> {
        WorldState::derive(&self.variables, bindings)
    }
}

/// Incremental [`Model`] construction.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    model: Model,
}

impl ModelBuilder {
    /// Adds a variable, merging with an existing one of the same type.
    pub fn add_variable(&mut self, variable: Variable) -> Result<&mut Self, ConstructionError> {
        self.model.variables.insert(variable)?;
        Ok(self)
    }

    /// Adds a transition. A transition with the same id is replaced in place.
    pub fn add_transition(&mut self, input: &TransitionInput) -> Result<&mut Self, ConstructionError> {
        let transition = Transition::from_input(&self.model.variables, input)?;
        match self.model.transition_index.get(transition.id()) {
            Some(&i) => self.model.transitions[i] = transition,
            None => {
                self.model
                    .transition_index
                    .insert(transition.id().to_string(), self.model.transitions.len());
                self.model.transitions.push(transition);
            }
        }
        Ok(self)
    }

    /// Adds a behavior. Every listed transition must already be in the model.
    pub fn add_behavior(&mut self, input: &BehaviorInput) -> Result<&mut Self, ConstructionError> {
        let index = &self.model.transition_index;
        let behavior = Behavior::from_input(input, |id| index.contains_key(id))?;
        self.model
            .behaviors
            .insert(behavior.id().to_string(), behavior);
        Ok(self)
    }

    pub fn build(self) -> Model {
        self.model
    }
}
