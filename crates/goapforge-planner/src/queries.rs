//! One-shot queries against a model, outside of a search.

use goapforge_core::state::{apply_transition, distance_to, is_enabled};
use goapforge_core::{EvaluationError, Goal, Model, Transition, VariableIndex, Weighting, WorldState, EPSILON};

/// The state after `transition`, or `None` when it is not enabled in `state`.
pub fn single_step(
    transition: &Transition,
    variables: &VariableIndex,
    state: &WorldState,
) -> Result<Option<WorldState>, EvaluationError> {
    let mut current = state.clone();
    if !is_enabled(transition, &mut current, variables)? {
        return Ok(None);
    }
    apply_transition(transition, &current, variables).map(Some)
}

/// Ids of the transitions enabled in `state`, in model order.
pub fn enabled_transitions(
    model: &Model,
    state: &WorldState,
) -> Result<Vec<String>, EvaluationError> {
    let mut current = state.clone();
    let mut enabled = Vec::new();
    for transition in model.transitions() {
        if is_enabled(transition, &mut current, model.variables())? {
            enabled.push(transition.id().to_string());
        }
    }
    Ok(enabled)
}

/// Whether every condition of `goal` holds in `state`.
pub fn are_goals_satisfied(
    variables: &VariableIndex,
    state: &WorldState,
    goal: &Goal,
) -> Result<bool, EvaluationError> {
    let mut current = state.clone();
    let distance = distance_to(&mut current, goal, variables, Weighting::Unweighted)?;
    Ok(distance <= EPSILON)
}

#[cfg(test)]
#[path = "queries_tests.rs"]
mod tests;
