//! Problems with several paths of different cost.

use goapforge_core::schema::{
    ArgumentInput, BehaviorInput, BindingInput, ConditionInput, EffectInput, TransitionInput,
    VariableInput,
};
use goapforge_core::ValueType;

use crate::Scenario;

/// `mine` (+1 gold, cost 1) versus `steal` (gold = 3, cost 10). Goal: gold >= 3.
///
/// Behaviors: `honest` only mines, `criminal` only steals.
pub fn gold() -> Scenario {
    Scenario {
        variables: vec![VariableInput::new("gold", ValueType::Int)],
        transitions: vec![
            TransitionInput::new("mine")
                .with_condition(ConditionInput::new("gold", "<", ArgumentInput::literal(10i64)))
                .with_effect(EffectInput::new("gold", "+=", ArgumentInput::literal(1i64))),
            TransitionInput::new("steal")
                .with_cost(10.0)
                .with_effect(EffectInput::new("gold", "=", ArgumentInput::literal(3i64))),
        ],
        behaviors: vec![
            BehaviorInput {
                id: "honest".to_string(),
                description: None,
                transitions: vec!["mine".to_string()],
            },
            BehaviorInput {
                id: "criminal".to_string(),
                description: Some("takes the expensive shortcut".to_string()),
                transitions: vec!["steal".to_string()],
            },
        ],
        initial_state: vec![BindingInput::new("gold", 0i64)],
        goal: vec![ConditionInput::new(
            "gold",
            ">=",
            ArgumentInput::literal(3i64),
        )],
    }
}

/// `walk` then `climb` (cost 1 each) reaches the ledge more cheaply than
/// `jump` (cost 5), but `jump` is generated first. From the ledge `wave`
/// reaches the goal.
pub fn ledge() -> Scenario {
    let at = |value: i64| ConditionInput::new("position", "==", ArgumentInput::literal(value));
    let go = |value: i64| EffectInput::new("position", "=", ArgumentInput::literal(value));
    Scenario {
        variables: vec![
            VariableInput::new("position", ValueType::Int),
            VariableInput::new("waved", ValueType::Boolean),
        ],
        transitions: vec![
            TransitionInput::new("walk").with_condition(at(0)).with_effect(go(1)),
            TransitionInput::new("jump")
                .with_cost(5.0)
                .with_condition(at(0))
                .with_effect(go(2)),
            TransitionInput::new("climb").with_condition(at(1)).with_effect(go(2)),
            TransitionInput::new("wave").with_condition(at(2)).with_effect(EffectInput::new(
                "waved",
                "=",
                ArgumentInput::literal(true),
            )),
        ],
        initial_state: vec![
            BindingInput::new("position", 0i64),
            BindingInput::new("waved", false),
        ],
        goal: vec![ConditionInput::new(
            "waved",
            "==",
            ArgumentInput::literal(true),
        )],
        ..Scenario::default()
    }
}
