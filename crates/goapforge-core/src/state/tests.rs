use super::*;
use crate::error::EvaluationError;
use crate::model::{Goal, Model};
use crate::schema::{ArgumentInput, ConditionInput, EffectInput, TransitionInput, VariableInput};
use crate::{ConstructionError, ValueType};

fn model() -> Model {
    Model::from_inputs(
        &[
            VariableInput::new("hunger", ValueType::Int),
            VariableInput::new("food", ValueType::Int).with_weight(10.0),
            VariableInput::new("light", ValueType::Boolean),
            VariableInput::new("name", ValueType::String),
            VariableInput::new("energy", ValueType::Float),
        ],
        &[
            TransitionInput::new("eat")
                .with_condition(ConditionInput::new("hunger", ">=", ArgumentInput::literal(1i64)))
                .with_effect(EffectInput::new("hunger", "-=", ArgumentInput::literal(1i64))),
            TransitionInput::new("toggle").with_effect(EffectInput::new(
                "light",
                "^=",
                ArgumentInput::literal(true),
            )),
            TransitionInput::new("cook")
                .with_effect(EffectInput::new("food", "=", ArgumentInput::variable("hunger")))
                .with_effect(EffectInput::new("food", "*=", ArgumentInput::literal(2i64))),
        ],
        &[],
    )
    .unwrap()
}

fn goal(model: &Model, conditions: &[ConditionInput]) -> Goal {
    model.goal(conditions).unwrap()
}

#[test]
fn test_derive_binds_explicit_entries_only() {
    let model = model();
    let state = model
        .state(&[
            BindingInput::new("hunger", 5i64),
            BindingInput::unset("name"),
        ])
        .unwrap();
    assert_eq!(state.len(), 2);
    assert_eq!(state.resolve("hunger"), Some(&Value::Int(5)));
    assert_eq!(state.resolve("name"), Some(&Value::String(String::new())));
    assert_eq!(state.resolve("light"), None);
}

#[test]
fn test_derive_reads_untyped_values() {
    let model = model();
    let bindings: Vec<BindingInput> = serde_json::from_str(
        r#"[{"variableId":"hunger","value":3},{"variableId":"energy","value":2},{"variableId":"light","BOOLEAN":true}]"#,
    )
    .unwrap();
    let state = model.state(&bindings).unwrap();
    assert_eq!(state.resolve("hunger"), Some(&Value::Int(3)));
    assert_eq!(state.resolve("energy"), Some(&Value::Float(2.0)));
    assert_eq!(state.resolve("light"), Some(&Value::Boolean(true)));
}

#[test]
fn test_derive_rejects_bad_bindings() {
    let model = model();
    let err = model.state(&[BindingInput::new("hunger", "five")]).unwrap_err();
    assert!(matches!(err, ConstructionError::TypeMismatch { .. }));

    let err = model.state(&[BindingInput::new("thirst", 1i64)]).unwrap_err();
    assert!(matches!(err, ConstructionError::UnknownVariable { .. }));
}

#[test]
fn test_signature_is_sorted_and_stable() {
    let a = WorldState::new().with("b", "x").with("a", 1i64);
    let b = WorldState::new().with("a", 1i64).with("b", "x");
    assert_eq!(a.signature(), "{a=1,b=\"x\"}");
    assert_eq!(a.signature(), b.signature());
}

#[test]
fn test_signature_escapes_strings() {
    let a = WorldState::new().with("a", "1\",b=\"2").with("b", "3");
    let b = WorldState::new().with("a", "1").with("b", "2\",b=\"3");
    assert_ne!(a.signature(), b.signature());
    assert_eq!(b.signature(), r#"{a="1",b="2\",b=\"3"}"#);
}

#[test]
fn test_resolve_fills_default() {
    let model = model();
    let mut state = WorldState::new();
    assert_eq!(
        state.resolve_or_insert_default(model.variables(), "light"),
        Some(&Value::Boolean(false))
    );
    assert_eq!(state.len(), 1);
    assert_eq!(state.resolve_or_insert_default(model.variables(), "ghost"), None);
}

#[test]
fn test_distance_to_self_is_zero() {
    let model = model();
    let reference = WorldState::new()
        .with("hunger", 4i64)
        .with("name", "bob")
        .with("energy", 0.5);
    let mut source = reference.clone();
    let d = distance_to(&mut source, &reference, model.variables(), Weighting::Unweighted).unwrap();
    assert_eq!(d, 0.0);
}

#[test]
fn test_distance_is_asymmetric() {
    let model = model();
    let goal = goal(
        &model,
        &[ConditionInput::new("hunger", "<", ArgumentInput::literal(3i64))],
    );
    let mut hungry = WorldState::new().with("hunger", 5i64);
    let d = distance_to(&mut hungry, &goal, model.variables(), Weighting::Weighted).unwrap();
    assert_eq!(d, 2.0);

    let mut full = WorldState::new().with("hunger", 1i64);
    let d = distance_to(&mut full, &goal, model.variables(), Weighting::Weighted).unwrap();
    assert_eq!(d, 0.0);

    // A state with fewer entries is closer to a larger one than the reverse.
    let small = WorldState::new().with("hunger", 1i64);
    let large = WorldState::new().with("hunger", 1i64).with("name", "bob");
    let mut from_small = small.clone();
    let mut from_large = large.clone();
    let forward = distance_to(&mut from_large, &small, model.variables(), Weighting::Unweighted).unwrap();
    let backward = distance_to(&mut from_small, &large, model.variables(), Weighting::Unweighted).unwrap();
    assert_eq!(forward, 0.0);
    assert_eq!(backward, 1.0);
}

#[test]
fn test_weighting_scales_heuristic() {
    let model = model();
    let goal = goal(
        &model,
        &[ConditionInput::new("food", ">=", ArgumentInput::literal(2i64))],
    );
    let mut state = WorldState::new();
    let weighted = distance_to(&mut state, &goal, model.variables(), Weighting::Weighted).unwrap();
    let unweighted = distance_to(&mut state, &goal, model.variables(), Weighting::Unweighted).unwrap();
    assert_eq!(weighted, 20.0);
    assert_eq!(unweighted, 2.0);
    assert_eq!(state.resolve("food"), Some(&Value::Int(0)));
}

#[test]
fn test_enablement() {
    let model = model();
    let eat = model.transition("eat").unwrap();
    let mut hungry = WorldState::new().with("hunger", 2i64);
    let mut full = WorldState::new();
    assert!(is_enabled(eat, &mut hungry, model.variables()).unwrap());
    assert!(!is_enabled(eat, &mut full, model.variables()).unwrap());
    assert_eq!(full.resolve("hunger"), Some(&Value::Int(0)));
}

#[test]
fn test_toggle_flips_boolean() {
    let model = model();
    let toggle = model.transition("toggle").unwrap();
    let on = WorldState::new().with("light", true);
    let off = apply_transition(toggle, &on, model.variables()).unwrap();
    assert_eq!(off.resolve("light"), Some(&Value::Boolean(false)));
    assert_eq!(on.resolve("light"), Some(&Value::Boolean(true)));
}

#[test]
fn test_effects_see_earlier_writes() {
    let model = model();
    let cook = model.transition("cook").unwrap();
    let state = WorldState::new().with("hunger", 3i64);
    let next = apply_transition(cook, &state, model.variables()).unwrap();
    assert_eq!(next.resolve("food"), Some(&Value::Int(6)));
}

#[test]
fn test_unknown_variable_in_state_target() {
    let model = model();
    let target = WorldState::new().with("ghost", 1i64);
    let mut source = WorldState::new();
    let err = distance_to(&mut source, &target, model.variables(), Weighting::Unweighted).unwrap_err();
    assert!(matches!(err, EvaluationError::UnknownVariable { .. }));
}

#[test]
fn test_bindings_wire_shape() {
    let state = WorldState::new().with("hunger", 0i64);
    let json = serde_json::to_value(state.bindings()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{"id": "hunger=0", "variableId": "hunger", "INT": 0}])
    );
}
