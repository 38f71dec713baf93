//! Request shapes accepted by the boundary operations.

use goapforge_core::schema::{
    BehaviorInput, BindingInput, ConditionInput, TransitionInput, VariableInput,
};
use goapforge_core::{Goal, Model, Result, WorldState};
use serde::{Deserialize, Serialize};

/// `{variables, transitions, behaviors?, behavior?, initialState, goal}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningRequest {
    pub variables: Vec<VariableInput>,
    pub transitions: Vec<TransitionInput>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub behaviors: Vec<BehaviorInput>,
    /// Restricts the search to one behavior's transitions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior: Option<String>,
    #[serde(default)]
    pub initial_state: Vec<BindingInput>,
    #[serde(default)]
    pub goal: Vec<ConditionInput>,
}

impl PlanningRequest {
    /// Builds the model, initial state and goal, failing on the first invalid element.
    pub fn build(&self) -> Result<(Model, WorldState, Goal)> {
        let model = Model::from_inputs(&self.variables, &self.transitions, &self.behaviors)?;
        let initial_state = model.state(&self.initial_state)?;
        let goal = model.goal(&self.goal)?;
        Ok((model, initial_state, goal))
    }
}

/// `{variables, transition, state}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleStepRequest {
    pub variables: Vec<VariableInput>,
    pub transition: TransitionInput,
    #[serde(default)]
    pub state: Vec<BindingInput>,
}

/// `{variables, transitions, state}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnabledTransitionsRequest {
    pub variables: Vec<VariableInput>,
    pub transitions: Vec<TransitionInput>,
    #[serde(default)]
    pub state: Vec<BindingInput>,
}

/// `{variables, state, goal}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalCheckRequest {
    pub variables: Vec<VariableInput>,
    #[serde(default)]
    pub state: Vec<BindingInput>,
    #[serde(default)]
    pub goal: Vec<ConditionInput>,
}
