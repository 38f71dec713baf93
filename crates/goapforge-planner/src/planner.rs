//! Best-first planner.
//!
//! Logging levels:
//! - **INFO**: Search start/end with problem scale and counters
//! - **WARN**: Searches that stop on a limit or exhaust the reachable states
//! - **DEBUG**: Each expanded node
//! - **TRACE**: Iterations and disabled transitions

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use goapforge_config::PlannerConfig;
use goapforge_core::state::{apply_transition, distance_to, is_enabled};
use goapforge_core::{
    Condition, ConstructionError, DistanceTarget, EvaluationError, Goal, Model, Transition,
    Weighting, WorldState, EPSILON,
};
use tracing::{debug, info, trace, warn};
use uuid::Uuid;

use crate::frontier::OpenFrontier;
use crate::node::{NodeArena, NodeId, PlannerNode};
use crate::plan::{ActionPlan, PlanStatus};
use crate::scope::SearchScope;
use crate::termination::{
    ExternalTermination, IterationLimitTermination, OrTermination, Termination,
    TerminationReason, TimeTermination,
};

/// Searches a [`Model`] for the cheapest transition sequence reaching a goal.
///
/// Nodes are expanded in order of path cost plus weighted goal distance.
/// Transitions are tried in model order.
///
/// # Example
///
/// ```
/// use goapforge_core::model::Model;
/// use goapforge_core::schema::{ArgumentInput, BindingInput, ConditionInput, EffectInput, TransitionInput, VariableInput};
/// use goapforge_core::ValueType;
/// use goapforge_planner::Planner;
///
/// let model = Model::from_inputs(
///     &[VariableInput::new("hunger", ValueType::Int)],
///     &[TransitionInput::new("eat")
///         .with_condition(ConditionInput::new("hunger", ">=", ArgumentInput::literal(1i64)))
///         .with_effect(EffectInput::new("hunger", "-=", ArgumentInput::literal(1i64)))],
///     &[],
/// ).unwrap();
/// let initial = model.state(&[BindingInput::new("hunger", 2i64)]).unwrap();
/// let goal = model.goal(&[ConditionInput::new("hunger", "==", ArgumentInput::literal(0i64))]).unwrap();
///
/// let plan = Planner::new(&model).plan(&initial, &goal).unwrap().unwrap();
/// assert_eq!(plan.transitions, vec!["eat", "eat"]);
/// ```
#[derive(Debug, Clone)]
pub struct Planner<'m> {
    model: &'m Model,
    transitions: Vec<usize>,
    config: PlannerConfig,
    terminate: Option<Arc<AtomicBool>>,
    plan_id: Option<Uuid>,
}

impl<'m> Planner<'m> {
    /// A planner over every transition of `model` with the default configuration.
    pub fn new(model: &'m Model) -> Self {
        Self {
            model,
            transitions: (0..model.transitions().len()).collect(),
            config: PlannerConfig::default(),
            terminate: None,
            plan_id: None,
        }
    }

    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Restricts the search to the transitions of a behavior.
    pub fn with_behavior(mut self, behavior: &str) -> Result<Self, ConstructionError> {
        self.transitions = self.model.transition_indices(Some(behavior))?;
        Ok(self)
    }

    /// Stops the search with a partial plan once `flag` is set.
    pub fn with_terminate(mut self, flag: Arc<AtomicBool>) -> Self {
        self.terminate = Some(flag);
        self
    }

    pub fn with_plan_id(mut self, plan_id: Uuid) -> Self {
        self.plan_id = Some(plan_id);
        self
    }

    fn termination(
        &self,
    ) -> OrTermination<(
        IterationLimitTermination,
        Option<TimeTermination>,
        Option<ExternalTermination>,
    )> {
        OrTermination((
            IterationLimitTermination::new(self.config.iteration_limit),
            self.config.time_limit().map(TimeTermination::new),
            self.terminate.clone().map(ExternalTermination::new),
        ))
    }

    /// Plans from `initial` to `goal`.
    ///
    /// Returns `Ok(None)` when every reachable state was explored without
    /// satisfying the goal. When a limit stops the search first, the plan to
    /// the most recently expanded state is returned with status
    /// [`PlanStatus::FailedToConverge`].
    pub fn plan(
        &self,
        initial: &WorldState,
        goal: &Goal,
    ) -> Result<Option<ActionPlan>, EvaluationError> {
        let plan_id = self.plan_id.unwrap_or_else(Uuid::new_v4);
        let termination = self.termination();

        info!(
            event = "plan_start",
            plan_id = %plan_id,
            variable_count = self.model.variables().len(),
            transition_count = self.transitions.len(),
            goal = %goal.id(),
            iteration_limit = self.config.iteration_limit,
        );

        let mut search = Search::new(self.model, goal, &self.transitions, plan_id);
        let outcome = search.run(initial, &termination)?;

        let plan = match outcome {
            SearchOutcome::Solved(node) => Some(search.into_plan(node, initial, None)),
            SearchOutcome::Stopped(node, reason) => {
                warn!(
                    event = "converge_failed",
                    plan_id = %plan_id,
                    reason = %reason,
                    iterations = search.scope.iteration(),
                );
                Some(search.into_plan(node, initial, Some(reason)))
            }
            SearchOutcome::Exhausted => {
                let statistics = search.scope.finish();
                warn!(
                    event = "no_plan",
                    plan_id = %plan_id,
                    iterations = statistics.iterations,
                    expanded = statistics.expanded,
                    duration_ms = statistics.elapsed_ms,
                );
                None
            }
        };

        if let Some(plan) = &plan {
            info!(
                event = "plan_end",
                plan_id = %plan_id,
                status = %plan.status,
                total_steps = plan.total_steps,
                total_cost = plan.total_cost,
                iterations = plan.statistics.iterations,
                expanded = plan.statistics.expanded,
                generated = plan.statistics.generated,
                duration_ms = plan.statistics.elapsed_ms,
            );
        }
        Ok(plan)
    }
}

enum SearchOutcome {
    Solved(NodeId),
    Stopped(NodeId, TerminationReason),
    Exhausted,
}

/// Mutable state of one search.
struct Search<'p> {
    model: &'p Model,
    goal: &'p Goal,
    transitions: &'p [usize],
    arena: NodeArena,
    frontier: OpenFrontier,
    /// Signature of each reached state to the node holding it.
    visited: HashMap<String, NodeId>,
    scope: SearchScope,
}

impl<'p> Search<'p> {
    fn new(model: &'p Model, goal: &'p Goal, transitions: &'p [usize], plan_id: Uuid) -> Self {
        Self {
            model,
            goal,
            transitions,
            arena: NodeArena::new(),
            frontier: OpenFrontier::new(),
            visited: HashMap::new(),
            scope: SearchScope::new(plan_id),
        }
    }

    fn run<T: Termination>(
        &mut self,
        initial: &WorldState,
        termination: &T,
    ) -> Result<SearchOutcome, EvaluationError> {
        let model = self.model;
        let variables = model.variables();
        self.scope.start_search();

        // Every state carries every variable, so equal states share a signature.
        let mut state = initial.clone();
        for variable in variables.iter() {
            state.resolve_or_insert_default(variables, variable.id());
        }
        let signature = state.signature();
        let heuristic = distance_to(&mut state, self.goal, variables, Weighting::Weighted)?;
        // Weight-0 variables vanish from the heuristic, so the goal test stays unweighted.
        let satisfied =
            distance_to(&mut state, self.goal, variables, Weighting::Unweighted)? <= EPSILON;
        let root = self.arena.push(PlannerNode::root(state, heuristic));
        if satisfied {
            self.arena[root].mark_closed();
            return Ok(SearchOutcome::Solved(root));
        }
        self.frontier.push(root, self.arena[root].score());
        self.visited.insert(signature, root);

        let mut last_closed = None;
        loop {
            if self.frontier.is_empty() {
                return Ok(SearchOutcome::Exhausted);
            }
            self.scope.increment_iteration();
            trace!(
                event = "iteration",
                iteration = self.scope.iteration(),
                open = self.frontier.len(),
                closed = self.scope.statistics().expanded,
            );
            if let Some(reason) = termination.check(&self.scope) {
                return Ok(SearchOutcome::Stopped(last_closed.unwrap_or(root), reason));
            }

            let Some(current) = self.frontier.pop_min() else {
                return Ok(SearchOutcome::Exhausted);
            };
            self.arena[current].mark_closed();
            last_closed = Some(current);
            self.scope.statistics_mut().expanded += 1;
            debug!(
                event = "node_expanded",
                iteration = self.scope.iteration(),
                node = current.index(),
                cost = self.arena[current].cost(),
                heuristic = self.arena[current].heuristic(),
                open = self.frontier.len(),
            );

            let distance = distance_to(
                self.arena[current].state_mut(),
                self.goal,
                variables,
                Weighting::Unweighted,
            )?;
            if distance <= EPSILON {
                return Ok(SearchOutcome::Solved(current));
            }
            self.expand(current)?;
        }
    }

    /// Generates the successors of `current` through every enabled transition.
    fn expand(&mut self, current: NodeId) -> Result<(), EvaluationError> {
        let model = self.model;
        let goal = self.goal;
        let transitions = self.transitions;
        let variables = model.variables();

        for &index in transitions {
            let transition = &model.transitions()[index];
            if !is_enabled(transition, self.arena[current].state_mut(), variables)? {
                continue;
            }
            let mut successor = apply_transition(transition, self.arena[current].state(), variables)?;
            self.scope.statistics_mut().generated += 1;
            let cost = self.arena[current].cost() + transition.cost();
            let signature = successor.signature();
            let target = ExactState::new(&successor, &signature);

            let hit = match self.visited.get(&signature).copied() {
                Some(id) if self.matches(id, &target)? => Some(id),
                _ => None,
            };
            let existing = match hit {
                Some(id) if self.arena[id].is_closed() => {
                    self.scope.statistics_mut().duplicates += 1;
                    continue;
                }
                Some(id) => Some(id),
                None => self.find_open_match(&target)?,
            };

            match existing {
                Some(id) => {
                    self.scope.statistics_mut().duplicates += 1;
                    if cost > self.arena[id].cost() {
                        continue;
                    }
                    let heuristic = distance_to(&mut successor, goal, variables, Weighting::Weighted)?;
                    self.relax(id, current, index, cost, heuristic);
                    self.visited.insert(signature, id);
                }
                None => {
                    let heuristic = distance_to(&mut successor, goal, variables, Weighting::Weighted)?;
                    let node = PlannerNode::child(current, index, successor, cost, heuristic);
                    let score = node.score();
                    let id = self.arena.push(node);
                    self.frontier.push(id, score);
                    self.visited.insert(signature, id);
                }
            }
        }
        Ok(())
    }

    /// Whether the state of `id` holds every entry of `target`.
    fn matches(&mut self, id: NodeId, target: &ExactState<'_>) -> Result<bool, EvaluationError> {
        let variables = self.model.variables();
        let distance = distance_to(
            self.arena[id].state_mut(),
            target,
            variables,
            Weighting::Unweighted,
        )?;
        Ok(distance == 0.0)
    }

    /// An open node whose state already holds every entry of `target`.
    ///
    /// States carry every model variable, so after a signature miss this
    /// scan normally finds nothing.
    fn find_open_match(
        &mut self,
        target: &ExactState<'_>,
    ) -> Result<Option<NodeId>, EvaluationError> {
        let open: Vec<NodeId> = self.frontier.iter().collect();
        for id in open {
            if self.matches(id, target)? {
                return Ok(Some(id));
            }
        }
        Ok(None)
    }

    fn relax(&mut self, id: NodeId, parent: NodeId, transition: usize, cost: f64, heuristic: f64) {
        let old_score = self.arena[id].score();
        self.arena[id].relax(parent, transition, cost, heuristic);
        let new_score = self.arena[id].score();
        if new_score.total_cmp(&old_score).is_ne() {
            let removed = self.frontier.remove(id, old_score);
            debug_assert!(removed, "open node missing from frontier");
            self.frontier.push(id, new_score);
        }
        self.scope.statistics_mut().relaxations += 1;
    }

    fn into_plan(
        self,
        node: NodeId,
        initial: &WorldState,
        termination: Option<TerminationReason>,
    ) -> ActionPlan {
        let model = self.model;
        let transitions: Vec<&Transition> = self
            .arena
            .path(node)
            .into_iter()
            .filter_map(|id| self.arena[id].transition_index())
            .map(|index| &model.transitions()[index])
            .collect();

        ActionPlan {
            id: self.scope.plan_id(),
            total_cost: self.arena[node].cost(),
            total_steps: transitions.len(),
            transitions: transitions.iter().map(|t| t.id().to_string()).collect(),
            actions: transitions.iter().map(|t| t.action().clone()).collect(),
            initial_state: initial.bindings(),
            final_state: self.arena[node].state().bindings(),
            status: if termination.is_some() {
                PlanStatus::FailedToConverge
            } else {
                PlanStatus::Solved
            },
            termination,
            statistics: self.scope.finish(),
        }
    }
}

/// A successor state as a distance target, with its equality conditions built once.
struct ExactState<'s> {
    conditions: Vec<Condition>,
    signature: &'s str,
}

impl<'s> ExactState<'s> {
    fn new(state: &WorldState, signature: &'s str) -> Self {
        Self {
            conditions: state
                .iter()
                .map(|(id, value)| Condition::equality(id, value))
                .collect(),
            signature,
        }
    }
}

impl DistanceTarget for ExactState<'_> {
    fn conditions(&self) -> Cow<'_, [Condition]> {
        Cow::Borrowed(&self.conditions)
    }

    fn describe(&self) -> String {
        format!("world state {}", self.signature)
    }
}

#[cfg(test)]
#[path = "planner_tests.rs"]
mod tests;
