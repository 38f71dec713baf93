//! GoapForge Planner - Best-first search over goal-oriented action models
//!
//! This crate provides:
//! - [`Planner`]: cost-plus-distance search from an initial state to a goal
//! - [`PlanManager`]: runs each search on an isolated worker thread
//! - [`queries`]: single-step application, enabled transitions, goal checks
//! - [`termination`]: iteration, time and external stop conditions

pub mod frontier;
pub mod manager;
pub mod node;
pub mod plan;
pub mod planner;
pub mod queries;
pub mod scope;
pub mod statistics;
pub mod termination;

pub use frontier::OpenFrontier;
pub use manager::{PlanHandle, PlanJob, PlanManager};
pub use node::{NodeArena, NodeId, PlannerNode};
pub use plan::{ActionPlan, PlanStatus};
pub use planner::Planner;
pub use queries::{are_goals_satisfied, enabled_transitions, single_step};
pub use scope::SearchScope;
pub use statistics::SearchStatistics;
pub use termination::{
    ExternalTermination, IterationLimitTermination, OrTermination, Termination,
    TerminationReason, TimeTermination,
};
