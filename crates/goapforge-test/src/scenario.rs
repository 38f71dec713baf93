//! A planning problem as wire inputs.

use goapforge_core::schema::{
    BehaviorInput, BindingInput, ConditionInput, TransitionInput, VariableInput,
};
use goapforge_core::{Goal, Model, WorldState};

#[derive(Debug, Clone, Default)]
pub struct Scenario {
    pub variables: Vec<VariableInput>,
    pub transitions: Vec<TransitionInput>,
    pub behaviors: Vec<BehaviorInput>,
    pub initial_state: Vec<BindingInput>,
    pub goal: Vec<ConditionInput>,
}

impl Scenario {
    pub fn model(&self) -> Model {
        Model::from_inputs(&self.variables, &self.transitions, &self.behaviors)
            .expect("fixture model should build")
    }

    pub fn initial_state(&self, model: &Model) -> WorldState {
        model
            .state(&self.initial_state)
            .expect("fixture state should build")
    }

    pub fn goal(&self, model: &Model) -> Goal {
        model.goal(&self.goal).expect("fixture goal should build")
    }

    /// Model, initial state and goal in one call.
    pub fn build(&self) -> (Model, WorldState, Goal) {
        let model = self.model();
        let initial = self.initial_state(&model);
        let goal = self.goal(&model);
        (model, initial, goal)
    }

    pub fn with_initial_state(mut self, bindings: Vec<BindingInput>) -> Self {
        self.initial_state = bindings;
        self
    }

    pub fn with_goal(mut self, goal: Vec<ConditionInput>) -> Self {
        self.goal = goal;
        self
    }
}
