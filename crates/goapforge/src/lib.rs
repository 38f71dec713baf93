//! GoapForge - A Goal-Oriented Action Planner in Rust
//!
//! Describe typed variables and costed transitions, then ask for the cheapest
//! sequence of transitions that satisfies a goal.
//!
//! # Example
//!
//! ```rust
//! use goapforge::prelude::*;
//!
//! let request: PlanningRequest = serde_json::from_value(serde_json::json!({
//!     "variables": [{ "id": "hunger", "typeOf": "INT" }],
//!     "transitions": [{
//!         "id": "eat",
//!         "action": { "type": "eat" },
//!         "conditions": [{ "variableId": "hunger", "comparisonOperator": ">=", "argument": { "INT": 1 } }],
//!         "effects": [{ "variableId": "hunger", "assignmentOperator": "-=", "argument": { "INT": 1 } }]
//!     }],
//!     "initialState": [{ "variableId": "hunger", "value": 3 }],
//!     "goal": [{ "variableId": "hunger", "comparisonOperator": "<", "argument": { "INT": 1 } }]
//! }))
//! .unwrap();
//!
//! let plan = generate_plan(&request, &PlannerConfig::default()).unwrap().unwrap();
//! assert_eq!(plan.transitions, vec!["eat", "eat", "eat"]);
//! assert_eq!(plan.total_cost, 3.0);
//! ```

mod api;
mod request;

pub use api::{
    are_goals_satisfied, enabled_transitions, generate_plan, generate_plan_isolated, single_step,
};
pub use request::{EnabledTransitionsRequest, GoalCheckRequest, PlanningRequest, SingleStepRequest};

// Model and state types
pub use goapforge_core::{
    operator_catalogue, schema, AssignmentOperator, Binding, ComparisonOperator,
    ConstructionError, EvaluationError, GoapError, Goal, Model, Result, Value, ValueType,
    WorldState,
};

// Configuration
pub use goapforge_config::{ConfigError, PlannerConfig};

// Search
pub use goapforge_planner::{
    ActionPlan, PlanHandle, PlanJob, PlanManager, PlanStatus, Planner, SearchStatistics,
    TerminationReason,
};

#[cfg(feature = "console")]
pub use goapforge_console as console;

pub mod prelude {
    pub use super::{
        are_goals_satisfied, enabled_transitions, generate_plan, generate_plan_isolated,
        single_step,
    };
    pub use super::{
        EnabledTransitionsRequest, GoalCheckRequest, PlanningRequest, SingleStepRequest,
    };
    pub use super::{ActionPlan, GoapError, PlanStatus, PlannerConfig, Value, ValueType};
}
