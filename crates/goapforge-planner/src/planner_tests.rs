use std::sync::atomic::AtomicBool;

use goapforge_core::schema::{
    ArgumentInput, ConditionInput, EffectInput, TransitionInput, VariableInput,
};
use goapforge_core::{Value, ValueType, WorldState};
use goapforge_test::{limits, needs, routes};

use super::*;

fn final_value(plan: &ActionPlan, variable: &str) -> Option<Value> {
    plan.final_state
        .iter()
        .find(|b| b.variable_id == variable)
        .map(|b| b.value.clone())
}

#[test]
fn test_hunger_plan() {
    let (model, initial, goal) = needs::hunger(3).build();
    let plan = Planner::new(&model).plan(&initial, &goal).unwrap().unwrap();

    assert_eq!(plan.status, PlanStatus::Solved);
    assert_eq!(plan.transitions, vec!["eat", "eat", "eat"]);
    assert_eq!(plan.total_steps, 3);
    assert_eq!(plan.total_cost, 3.0);
    assert_eq!(plan.actions.len(), 3);
    assert_eq!(plan.actions[0], serde_json::json!({"type": "eat"}));
    assert_eq!(final_value(&plan, "hunger"), Some(Value::Int(0)));
    assert_eq!(plan.initial_state[0].value, Value::Int(3));
    assert_eq!(plan.termination, None);
}

#[test]
fn test_goal_already_satisfied() {
    let (model, initial, goal) = needs::hunger(0).build();
    let plan = Planner::new(&model).plan(&initial, &goal).unwrap().unwrap();

    assert_eq!(plan.status, PlanStatus::Solved);
    assert_eq!(plan.total_steps, 0);
    assert_eq!(plan.total_cost, 0.0);
    assert!(plan.transitions.is_empty());
    assert_eq!(plan.statistics.iterations, 0);
}

#[test]
fn test_empty_goal_is_trivially_satisfied() {
    let (model, initial, _) = needs::hunger(2).build();
    let plan = Planner::new(&model)
        .plan(&initial, &Goal::default())
        .unwrap()
        .unwrap();
    assert!(plan.is_solved());
    assert_eq!(plan.total_steps, 0);
}

#[test]
fn test_toggle_plan() {
    let (model, initial, goal) = needs::toggle().build();
    let plan = Planner::new(&model).plan(&initial, &goal).unwrap().unwrap();

    assert_eq!(plan.transitions, vec!["toggle"]);
    assert_eq!(final_value(&plan, "light"), Some(Value::Boolean(false)));
}

#[test]
fn test_reference_goal() {
    let (model, initial, goal) = needs::copy_reference().build();
    let plan = Planner::new(&model).plan(&initial, &goal).unwrap().unwrap();

    assert_eq!(plan.transitions, vec!["copy"]);
    assert_eq!(final_value(&plan, "target"), Some(Value::Int(7)));
}

#[test]
fn test_string_goal() {
    let (model, initial, goal) = needs::rename().build();
    let plan = Planner::new(&model).plan(&initial, &goal).unwrap().unwrap();
    assert_eq!(plan.transitions, vec!["rename"]);
    assert_eq!(final_value(&plan, "name"), Some(Value::from("bob")));
}

#[test]
fn test_cheaper_route_wins() {
    let (model, initial, goal) = routes::gold().build();
    let plan = Planner::new(&model).plan(&initial, &goal).unwrap().unwrap();

    assert_eq!(plan.transitions, vec!["mine", "mine", "mine"]);
    assert_eq!(plan.total_cost, 3.0);
    assert!(plan.statistics.relaxations >= 1);
}

#[test]
fn test_open_node_is_relaxed_onto_cheaper_parent() {
    let (model, initial, goal) = routes::ledge().build();
    let plan = Planner::new(&model).plan(&initial, &goal).unwrap().unwrap();

    assert_eq!(plan.transitions, vec!["walk", "climb", "wave"]);
    assert_eq!(plan.total_cost, 3.0);
    assert_eq!(plan.statistics.relaxations, 1);
}

/// Applies the plan's transitions to `initial` and checks the result against its final state.
fn assert_replay_reaches_final_state(model: &Model, initial: &WorldState, plan: &ActionPlan) {
    let variables = model.variables();
    let mut state = initial.clone();
    for id in &plan.transitions {
        let transition = model
            .transitions()
            .iter()
            .find(|t| t.id() == id)
            .unwrap();
        state = apply_transition(transition, &state, variables).unwrap();
    }
    for binding in &plan.final_state {
        assert_eq!(
            state.resolve_or_insert_default(variables, &binding.variable_id),
            Some(&binding.value),
            "replayed {} differs from the final state",
            binding.variable_id
        );
    }
}

#[test]
fn test_quoted_strings_keep_states_apart() {
    let tricky = "1\",b=\"2";
    let model = Model::from_inputs(
        &[
            VariableInput::new("a", ValueType::String),
            VariableInput::new("b", ValueType::String),
        ],
        &[
            TransitionInput::new("t1")
                .with_effect(EffectInput::new("a", "=", ArgumentInput::literal(tricky)))
                .with_effect(EffectInput::new("b", "=", ArgumentInput::literal("3"))),
            TransitionInput::new("t2")
                .with_effect(EffectInput::new("a", "=", ArgumentInput::literal("1")))
                .with_effect(EffectInput::new("b", "=", ArgumentInput::literal("2\",b=\"3"))),
        ],
        &[],
    )
    .unwrap();
    let initial = WorldState::new();
    let goal = model
        .goal(&[ConditionInput::new("a", "==", ArgumentInput::literal(tricky))])
        .unwrap();

    let plan = Planner::new(&model).plan(&initial, &goal).unwrap().unwrap();

    assert_eq!(plan.transitions, vec!["t1"]);
    assert_eq!(final_value(&plan, "a"), Some(Value::String(tricky.to_string())));
    assert_replay_reaches_final_state(&model, &initial, &plan);
}

#[test]
fn test_relaxed_plans_replay_to_final_state() {
    for scenario in [routes::gold(), routes::ledge(), needs::hunger(3)] {
        let (model, initial, goal) = scenario.build();
        let plan = Planner::new(&model).plan(&initial, &goal).unwrap().unwrap();
        assert_replay_reaches_final_state(&model, &initial, &plan);
    }
}

#[test]
fn test_zero_weight_goal_is_still_searched() {
    let model = Model::from_inputs(
        &[VariableInput::new("flag", ValueType::Boolean).with_weight(0.0)],
        &[TransitionInput::new("raise").with_effect(EffectInput::new(
            "flag",
            "=",
            ArgumentInput::literal(true),
        ))],
        &[],
    )
    .unwrap();
    let initial = WorldState::new();
    let goal = model
        .goal(&[ConditionInput::new("flag", "==", ArgumentInput::literal(true))])
        .unwrap();

    let plan = Planner::new(&model).plan(&initial, &goal).unwrap().unwrap();

    assert!(plan.is_solved());
    assert_eq!(plan.transitions, vec!["raise"]);
    assert_eq!(final_value(&plan, "flag"), Some(Value::Boolean(true)));
}

#[test]
fn test_behavior_restricts_transitions() {
    let (model, initial, goal) = routes::gold().build();

    let plan = Planner::new(&model)
        .with_behavior("criminal")
        .unwrap()
        .plan(&initial, &goal)
        .unwrap()
        .unwrap();
    assert_eq!(plan.transitions, vec!["steal"]);
    assert_eq!(plan.total_cost, 10.0);

    let err = Planner::new(&model).with_behavior("pirate").unwrap_err();
    assert_eq!(err, ConstructionError::UnknownBehavior("pirate".to_string()));
}

#[test]
fn test_disabled_transitions_never_appear() {
    let (model, initial, goal) = routes::ledge().build();
    let plan = Planner::new(&model).plan(&initial, &goal).unwrap().unwrap();

    let mut state = initial.clone();
    for id in &plan.transitions {
        let transition = model.transition(id).unwrap();
        assert!(is_enabled(transition, &mut state, model.variables()).unwrap());
        state = apply_transition(transition, &state, model.variables()).unwrap();
    }
}

#[test]
fn test_unreachable_goal_returns_none() {
    let (model, initial, goal) = limits::bounded_counter().build();
    let plan = Planner::new(&model).plan(&initial, &goal).unwrap();
    assert!(plan.is_none());
}

#[test]
fn test_iteration_limit_returns_partial_plan() {
    let (model, initial, goal) = limits::endless_counter().build();
    let plan = Planner::new(&model).plan(&initial, &goal).unwrap().unwrap();

    assert_eq!(plan.status, PlanStatus::FailedToConverge);
    assert_eq!(plan.termination, Some(TerminationReason::IterationLimit));
    assert_eq!(plan.statistics.iterations, 100);
    assert_eq!(plan.statistics.expanded, 99);
    assert_eq!(plan.total_steps, 98);
    assert_eq!(final_value(&plan, "counter"), Some(Value::Int(98)));
}

#[test]
fn test_configured_iteration_limit() {
    let (model, initial, goal) = limits::endless_counter().build();
    let plan = Planner::new(&model)
        .with_config(PlannerConfig::default().with_iteration_limit(5))
        .plan(&initial, &goal)
        .unwrap()
        .unwrap();
    assert_eq!(plan.total_steps, 3);
}

#[test]
fn test_limit_before_first_expansion_returns_root() {
    let (model, initial, goal) = limits::endless_counter().build();
    let plan = Planner::new(&model)
        .with_config(PlannerConfig::default().with_iteration_limit(1))
        .plan(&initial, &goal)
        .unwrap()
        .unwrap();
    assert_eq!(plan.status, PlanStatus::FailedToConverge);
    assert_eq!(plan.total_steps, 0);
}

#[test]
fn test_terminate_flag_cancels() {
    let (model, initial, goal) = limits::endless_counter().build();
    let flag = Arc::new(AtomicBool::new(true));
    let plan = Planner::new(&model)
        .with_config(PlannerConfig::default().with_iteration_limit(10_000))
        .with_terminate(flag)
        .plan(&initial, &goal)
        .unwrap()
        .unwrap();
    assert_eq!(plan.termination, Some(TerminationReason::Cancelled));
}

#[test]
fn test_plan_id_is_kept() {
    let (model, initial, goal) = needs::toggle().build();
    let id = Uuid::new_v4();
    let plan = Planner::new(&model)
        .with_plan_id(id)
        .plan(&initial, &goal)
        .unwrap()
        .unwrap();
    assert_eq!(plan.id, id);
}

#[test]
fn test_evaluation_error_propagates() {
    let (model, _, goal) = needs::hunger(1).build();
    let initial = WorldState::new().with("hunger", i64::MIN);
    let plan = Planner::new(&model).plan(&initial, &goal);
    // hunger >= 1 is false for i64::MIN, so nothing is applied.
    assert!(plan.unwrap().is_none());

    let (model, initial, goal) = limits::endless_counter().build();
    let initial = initial.with("counter", i64::MAX);
    let err = Planner::new(&model).plan(&initial, &goal).unwrap_err();
    assert!(matches!(err, EvaluationError::Overflow { .. }));
}

#[test]
fn test_plan_serializes_to_wire_shape() {
    let (model, initial, goal) = needs::hunger(1).build();
    let plan = Planner::new(&model).plan(&initial, &goal).unwrap().unwrap();
    let json = serde_json::to_value(&plan).unwrap();

    assert_eq!(json["status"], "SOLVED");
    assert_eq!(json["totalSteps"], 1);
    assert_eq!(json["totalCost"], 1.0);
    assert_eq!(json["transitions"], serde_json::json!(["eat"]));
    assert_eq!(
        json["finalState"],
        serde_json::json!([{"id": "hunger=0", "variableId": "hunger", "INT": 0}])
    );
    assert!(json.get("termination").is_none());
}
