//! Transition enablement and application.

use tracing::trace;

use crate::error::EvaluationError;
use crate::model::{Effect, Transition, VariableIndex};
use crate::registry::{self, EPSILON};
use crate::state::distance::{condition_distance, Weighting};
use crate::state::WorldState;

/// True when every condition of `transition` is within `EPSILON` in `state`.
pub fn is_enabled(
    transition: &Transition,
    state: &mut WorldState,
    variables: &VariableIndex,
) -> Result<bool, EvaluationError> {
    let context = || format!("transition {}", transition.id());
    for condition in transition.conditions() {
        let distance = condition_distance(state, condition, variables, Weighting::Unweighted, &context)?;
        if distance > EPSILON {
            trace!(
                event = "transition_disabled",
                transition = transition.id(),
                condition = %condition.id(),
                distance,
            );
            return Ok(false);
        }
    }
    Ok(true)
}

/// The successor of `state` under `transition`. Effects run in order, each
/// seeing the values written by the ones before it.
pub fn apply_transition(
    transition: &Transition,
    state: &WorldState,
    variables: &VariableIndex,
) -> Result<WorldState, EvaluationError> {
    let mut next = state.clone();
    let context = || format!("transition {}", transition.id());
    for effect in transition.effects() {
        apply_effect(&mut next, effect, variables, &context)?;
    }
    Ok(next)
}

/// Applies one effect to `state` in place.
pub fn apply_effect(
    state: &mut WorldState,
    effect: &Effect,
    variables: &VariableIndex,
    context: &dyn Fn() -> String,
) -> Result<(), EvaluationError> {
    let unknown = || EvaluationError::UnknownVariable {
        context: context(),
        variable: effect.variable_id().to_string(),
    };
    let variable = variables.get(effect.variable_id()).ok_or_else(unknown)?;
    let operand = effect.argument().resolve(state, variables, context)?;
    let current = state
        .resolve_or_insert_default(variables, effect.variable_id())
        .ok_or_else(unknown)?;

    let updated = registry::apply(effect.operator(), variable.value_type(), current, &operand)?;
    state.insert(effect.variable_id(), updated);
    Ok(())
}
