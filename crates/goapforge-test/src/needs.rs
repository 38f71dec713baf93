//! Single-variable needs.

use goapforge_core::schema::{
    ArgumentInput, BindingInput, ConditionInput, EffectInput, TransitionInput, VariableInput,
};
use goapforge_core::ValueType;
use serde_json::json;

use crate::Scenario;

/// `eat` lowers hunger by one while hunger >= 1. Goal: hunger == 0.
pub fn hunger(initial: i64) -> Scenario {
    Scenario {
        variables: vec![VariableInput::new("hunger", ValueType::Int)],
        transitions: vec![TransitionInput::new("eat")
            .with_action(json!({"type": "eat"}))
            .with_condition(ConditionInput::new(
                "hunger",
                ">=",
                ArgumentInput::literal(1i64),
            ))
            .with_effect(EffectInput::new("hunger", "-=", ArgumentInput::literal(1i64)))],
        initial_state: vec![BindingInput::new("hunger", initial)],
        goal: vec![ConditionInput::new(
            "hunger",
            "==",
            ArgumentInput::literal(0i64),
        )],
        ..Scenario::default()
    }
}

/// `toggle` flips a light that starts on. Goal: light == false.
pub fn toggle() -> Scenario {
    Scenario {
        variables: vec![VariableInput::new("light", ValueType::Boolean)],
        transitions: vec![TransitionInput::new("toggle").with_effect(EffectInput::new(
            "light",
            "^=",
            ArgumentInput::literal(true),
        ))],
        initial_state: vec![BindingInput::new("light", true)],
        goal: vec![ConditionInput::new(
            "light",
            "==",
            ArgumentInput::literal(false),
        )],
        ..Scenario::default()
    }
}

/// `rename` assigns a string. Goal: name == "bob".
pub fn rename() -> Scenario {
    Scenario {
        variables: vec![VariableInput::new("name", ValueType::String)],
        transitions: vec![TransitionInput::new("rename").with_effect(EffectInput::new(
            "name",
            "=",
            ArgumentInput::literal("bob"),
        ))],
        initial_state: vec![BindingInput::unset("name")],
        goal: vec![ConditionInput::new(
            "name",
            "==",
            ArgumentInput::literal("bob"),
        )],
        ..Scenario::default()
    }
}

/// `copy` sets target from source. Goal: target == source, by reference.
pub fn copy_reference() -> Scenario {
    Scenario {
        variables: vec![
            VariableInput::new("source", ValueType::Int),
            VariableInput::new("target", ValueType::Int),
        ],
        transitions: vec![TransitionInput::new("copy").with_effect(EffectInput::new(
            "target",
            "=",
            ArgumentInput::variable("source"),
        ))],
        initial_state: vec![BindingInput::new("source", 7i64)],
        goal: vec![ConditionInput::new(
            "target",
            "==",
            ArgumentInput::variable("source"),
        )],
        ..Scenario::default()
    }
}
