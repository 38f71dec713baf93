//! The four boundary operations over wire requests.
//!
//! Each call builds its own model from the request, so concurrent calls share nothing.

use std::slice;
use std::time::Duration;

use goapforge_config::PlannerConfig;
use goapforge_core::{Binding, Model, Result};
use goapforge_planner::{queries, ActionPlan, PlanJob, PlanManager, Planner};
use tracing::debug;

use crate::request::{
    EnabledTransitionsRequest, GoalCheckRequest, PlanningRequest, SingleStepRequest,
};

/// Searches for a plan on the calling thread.
///
/// `Ok(None)` means the goal is unreachable from the initial state.
pub fn generate_plan(
    request: &PlanningRequest,
    config: &PlannerConfig,
) -> Result<Option<ActionPlan>> {
    let (model, initial_state, goal) = request.build()?;
    let mut planner = Planner::new(&model).with_config(config.clone());
    if let Some(behavior) = request.behavior.as_deref() {
        planner = planner.with_behavior(behavior)?;
    }
    Ok(planner.plan(&initial_state, &goal)?)
}

/// Searches for a plan on a dedicated worker thread.
///
/// With a `deadline` the search is cancelled once it passes and the partial plan
/// is returned. A panicking worker is reported as [`GoapError::Worker`](goapforge_core::GoapError::Worker).
pub fn generate_plan_isolated(
    request: &PlanningRequest,
    config: &PlannerConfig,
    deadline: Option<Duration>,
) -> Result<Option<ActionPlan>> {
    let (model, initial_state, goal) = request.build()?;
    let job = PlanJob {
        model,
        initial_state,
        goal,
        behavior: request.behavior.clone(),
    };
    let handle = PlanManager::new(config.clone()).submit(job)?;
    match deadline {
        Some(deadline) => handle.join_with_deadline(deadline),
        None => handle.join(),
    }
}

/// The state after applying `request.transition`, or `None` when it is not enabled.
pub fn single_step(request: &SingleStepRequest) -> Result<Option<Vec<Binding>>> {
    let model = Model::from_inputs(&request.variables, slice::from_ref(&request.transition), &[])?;
    let state = model.state(&request.state)?;
    let Some(transition) = model.transitions().first() else {
        return Ok(None);
    };

    let next = queries::single_step(transition, model.variables(), &state)?;
    debug!(
        event = "single_step",
        transition = transition.id(),
        applied = next.is_some(),
    );
    Ok(next.map(|state| state.bindings()))
}

/// Ids of the transitions enabled in `request.state`, in request order.
pub fn enabled_transitions(request: &EnabledTransitionsRequest) -> Result<Vec<String>> {
    let model = Model::from_inputs(&request.variables, &request.transitions, &[])?;
    let state = model.state(&request.state)?;
    Ok(queries::enabled_transitions(&model, &state)?)
}

/// Whether every goal condition holds in `request.state`.
pub fn are_goals_satisfied(request: &GoalCheckRequest) -> Result<bool> {
    let model = Model::from_inputs(&request.variables, &[], &[])?;
    let state = model.state(&request.state)?;
    let goal = model.goal(&request.goal)?;
    Ok(queries::are_goals_satisfied(model.variables(), &state, &goal)?)
}
