//! Problems whose goal cannot be reached.

use goapforge_core::schema::{
    ArgumentInput, BindingInput, ConditionInput, EffectInput, TransitionInput, VariableInput,
};
use goapforge_core::ValueType;

use crate::Scenario;

/// `bump` counts up to 3 and then disables itself. Goal: counter == 10.
///
/// Only four states are reachable, so the search runs out of open nodes.
pub fn bounded_counter() -> Scenario {
    Scenario {
        variables: vec![VariableInput::new("counter", ValueType::Int)],
        transitions: vec![TransitionInput::new("bump")
            .with_condition(ConditionInput::new(
                "counter",
                "<",
                ArgumentInput::literal(3i64),
            ))
            .with_effect(EffectInput::new("counter", "+=", ArgumentInput::literal(1i64)))],
        initial_state: vec![BindingInput::new("counter", 0i64)],
        goal: vec![ConditionInput::new(
            "counter",
            "==",
            ArgumentInput::literal(10i64),
        )],
        ..Scenario::default()
    }
}

/// `climb` is always enabled and always reaches a new state. Goal: counter < 0.
pub fn endless_counter() -> Scenario {
    Scenario {
        variables: vec![VariableInput::new("counter", ValueType::Int)],
        transitions: vec![TransitionInput::new("climb").with_effect(EffectInput::new(
            "counter",
            "+=",
            ArgumentInput::literal(1i64),
        ))],
        initial_state: vec![BindingInput::new("counter", 0i64)],
        goal: vec![ConditionInput::new(
            "counter",
            "<",
            ArgumentInput::literal(0i64),
        )],
        ..Scenario::default()
    }
}
