//! GoapForge Core - Model types for goal-oriented action planning
//!
//! This crate provides the fundamental abstractions for GoapForge:
//! - Typed values and the per-type operator registry
//! - Model elements: variables, conditions, effects, transitions, behaviors
//! - World states with distance and transition dynamics
//! - Wire shapes for model definitions

pub mod error;
pub mod model;
pub mod operator;
pub mod registry;
pub mod schema;
pub mod state;
pub mod value;

pub use error::{ConstructionError, EvaluationError, GoapError, Result};
pub use model::{
    Argument, Behavior, Condition, Effect, Goal, Model, ModelBuilder, Transition, Variable,
    VariableIndex,
};
pub use operator::{AssignmentOperator, ComparisonOperator};
pub use registry::{operator_catalogue, OperatorInfo, TypeOperators, EPSILON};
pub use state::{Binding, DistanceTarget, Weighting, WorldState};
pub use value::{Value, ValueType};
