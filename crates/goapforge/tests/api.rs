use std::time::Duration;

use goapforge::prelude::*;
use goapforge::{ConstructionError, TerminationReason};
use serde_json::{json, Value as Json};

fn request(value: Json) -> PlanningRequest {
    serde_json::from_value(value).unwrap()
}

fn hunger_request(initial: i64) -> PlanningRequest {
    request(json!({
        "variables": [{ "id": "hunger", "typeOf": "INT", "weight": 1.0 }],
        "transitions": [{
            "id": "eat",
            "cost": 1.0,
            "action": { "type": "eat" },
            "conditions": [{ "variableId": "hunger", "comparisonOperator": ">=", "argument": { "INT": 1 } }],
            "effects": [{ "variableId": "hunger", "assignmentOperator": "-=", "argument": { "INT": 1 } }]
        }],
        "initialState": [{ "variableId": "hunger", "value": initial }],
        "goal": [{ "variableId": "hunger", "comparisonOperator": "<", "argument": { "INT": 1 } }]
    }))
}

fn counter_request() -> PlanningRequest {
    request(json!({
        "variables": [{ "id": "counter", "typeOf": "INT" }],
        "transitions": [{
            "id": "climb",
            "effects": [{ "variableId": "counter", "assignmentOperator": "+=", "argument": { "INT": 1 } }]
        }],
        "initialState": [],
        "goal": [{ "variableId": "counter", "comparisonOperator": "<", "argument": { "INT": 0 } }]
    }))
}

#[test]
fn test_hunger_plan_wire_shape() {
    let plan = generate_plan(&hunger_request(3), &PlannerConfig::default())
        .unwrap()
        .unwrap();

    let wire = serde_json::to_value(&plan).unwrap();
    assert_eq!(wire["totalSteps"], 3);
    assert_eq!(wire["totalCost"], 3.0);
    assert_eq!(wire["transitions"], json!(["eat", "eat", "eat"]));
    assert_eq!(wire["actions"], json!([{ "type": "eat" }, { "type": "eat" }, { "type": "eat" }]));
    assert_eq!(wire["status"], "SOLVED");
    assert_eq!(
        wire["initialState"],
        json!([{ "id": "hunger=3", "variableId": "hunger", "INT": 3 }])
    );
    assert_eq!(
        wire["finalState"],
        json!([{ "id": "hunger=0", "variableId": "hunger", "INT": 0 }])
    );
    assert!(wire.get("termination").is_none());
    assert_eq!(wire["statistics"]["expanded"], 4);
}

#[test]
fn test_goal_already_satisfied() {
    let plan = generate_plan(&hunger_request(0), &PlannerConfig::default())
        .unwrap()
        .unwrap();
    assert_eq!(plan.status, PlanStatus::Solved);
    assert_eq!(plan.total_steps, 0);
    assert_eq!(plan.total_cost, 0.0);
    assert!(plan.transitions.is_empty());
}

#[test]
fn test_unreachable_goal_returns_null() {
    let request = request(json!({
        "variables": [{ "id": "counter", "typeOf": "INT" }],
        "transitions": [{
            "id": "bump",
            "conditions": [{ "variableId": "counter", "comparisonOperator": "<", "argument": { "INT": 3 } }],
            "effects": [{ "variableId": "counter", "assignmentOperator": "+=", "argument": { "INT": 1 } }]
        }],
        "goal": [{ "variableId": "counter", "comparisonOperator": "==", "argument": { "INT": 10 } }]
    }));

    let plan = generate_plan(&request, &PlannerConfig::default()).unwrap();
    assert!(plan.is_none());
    assert_eq!(serde_json::to_value(&plan).unwrap(), Json::Null);
}

#[test]
fn test_iteration_limit_returns_partial_plan() {
    let config = PlannerConfig::default().with_iteration_limit(5);
    let plan = generate_plan(&counter_request(), &config).unwrap().unwrap();

    assert_eq!(plan.status, PlanStatus::FailedToConverge);
    assert_eq!(plan.termination, Some(TerminationReason::IterationLimit));
    assert_eq!(plan.total_steps, 3);

    let wire = serde_json::to_value(&plan).unwrap();
    assert_eq!(wire["status"], "FAILED TO CONVERGE");
    assert_eq!(wire["termination"], "ITERATION_LIMIT");
}

#[test]
fn test_behavior_restricts_transitions() {
    let mut request = request(json!({
        "variables": [{ "id": "gold", "typeOf": "INT" }],
        "transitions": [
            {
                "id": "mine",
                "conditions": [{ "variableId": "gold", "comparisonOperator": "<", "argument": { "INT": 10 } }],
                "effects": [{ "variableId": "gold", "assignmentOperator": "+=", "argument": { "INT": 1 } }]
            },
            {
                "id": "steal",
                "cost": 10.0,
                "effects": [{ "variableId": "gold", "assignmentOperator": "=", "argument": { "INT": 3 } }]
            }
        ],
        "behaviors": [
            { "id": "honest", "transitions": ["mine"] },
            { "id": "criminal", "transitions": ["steal"] }
        ],
        "goal": [{ "variableId": "gold", "comparisonOperator": ">=", "argument": { "INT": 3 } }]
    }));

    let plan = generate_plan(&request, &PlannerConfig::default()).unwrap().unwrap();
    assert_eq!(plan.transitions, vec!["mine", "mine", "mine"]);

    request.behavior = Some("criminal".to_string());
    let plan = generate_plan(&request, &PlannerConfig::default()).unwrap().unwrap();
    assert_eq!(plan.transitions, vec!["steal"]);
    assert_eq!(plan.total_cost, 10.0);

    request.behavior = Some("pirate".to_string());
    let err = generate_plan(&request, &PlannerConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        GoapError::Construction(ConstructionError::UnknownBehavior(_))
    ));
}

#[test]
fn test_unsupported_operator_fails_before_search() {
    let request = request(json!({
        "variables": [{ "id": "speed", "typeOf": "FLOAT" }],
        "transitions": [{
            "id": "wrap",
            "effects": [{ "variableId": "speed", "assignmentOperator": "%=", "argument": { "FLOAT": 2.0 } }]
        }],
        "goal": []
    }));

    let err = generate_plan(&request, &PlannerConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        GoapError::Construction(ConstructionError::UnsupportedOperator { .. })
    ));
}

#[test]
fn test_ambiguous_argument_is_rejected() {
    let request = request(json!({
        "variables": [{ "id": "hunger", "typeOf": "INT" }],
        "transitions": [],
        "goal": [{
            "variableId": "hunger",
            "comparisonOperator": "==",
            "argument": { "INT": 1, "variableId": "hunger" }
        }]
    }));

    let err = generate_plan(&request, &PlannerConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        GoapError::Construction(ConstructionError::InvalidArgument { found: 2, .. })
    ));
}

#[test]
fn test_isolated_plan_matches_inline_plan() {
    let inline = generate_plan(&hunger_request(4), &PlannerConfig::default())
        .unwrap()
        .unwrap();
    let isolated = generate_plan_isolated(&hunger_request(4), &PlannerConfig::default(), None)
        .unwrap()
        .unwrap();

    assert_eq!(isolated.transitions, inline.transitions);
    assert_eq!(isolated.total_cost, inline.total_cost);
    assert_eq!(isolated.final_state, inline.final_state);
}

#[test]
fn test_isolated_deadline_cancels_search() {
    let config = PlannerConfig::default().with_iteration_limit(u64::MAX);
    let plan = generate_plan_isolated(&counter_request(), &config, Some(Duration::from_millis(20)))
        .unwrap()
        .unwrap();

    assert_eq!(plan.status, PlanStatus::FailedToConverge);
    assert_eq!(plan.termination, Some(TerminationReason::Cancelled));
}

#[test]
fn test_single_step() {
    let step: SingleStepRequest = serde_json::from_value(json!({
        "variables": [{ "id": "light", "typeOf": "BOOLEAN" }],
        "transition": {
            "id": "toggle",
            "effects": [{ "variableId": "light", "assignmentOperator": "^=", "argument": { "BOOLEAN": true } }]
        },
        "state": [{ "variableId": "light", "BOOLEAN": true }]
    }))
    .unwrap();

    let next = single_step(&step).unwrap().unwrap();
    assert_eq!(
        serde_json::to_value(&next).unwrap(),
        json!([{ "id": "light=false", "variableId": "light", "BOOLEAN": false }])
    );
}

#[test]
fn test_single_step_not_applicable() {
    let step: SingleStepRequest = serde_json::from_value(json!({
        "variables": [{ "id": "hunger", "typeOf": "INT" }],
        "transition": {
            "id": "eat",
            "conditions": [{ "variableId": "hunger", "comparisonOperator": ">=", "argument": { "INT": 1 } }],
            "effects": [{ "variableId": "hunger", "assignmentOperator": "-=", "argument": { "INT": 1 } }]
        },
        "state": []
    }))
    .unwrap();

    assert_eq!(single_step(&step).unwrap(), None);
}

#[test]
fn test_enabled_transitions() {
    let query: EnabledTransitionsRequest = serde_json::from_value(json!({
        "variables": [
            { "id": "name", "typeOf": "STRING" },
            { "id": "greeted", "typeOf": "BOOLEAN" }
        ],
        "transitions": [
            {
                "id": "greet",
                "conditions": [{ "variableId": "name", "comparisonOperator": "!=", "argument": { "STRING": "" } }],
                "effects": [{ "variableId": "greeted", "assignmentOperator": "=", "argument": { "BOOLEAN": true } }]
            },
            {
                "id": "introduce",
                "conditions": [{ "variableId": "name", "comparisonOperator": "==", "argument": { "STRING": "" } }],
                "effects": [{ "variableId": "name", "assignmentOperator": "=", "argument": { "STRING": "bob" } }]
            },
            { "id": "idle" }
        ],
        "state": [{ "variableId": "name", "value": "bob" }]
    }))
    .unwrap();

    assert_eq!(enabled_transitions(&query).unwrap(), vec!["greet", "idle"]);
}

#[test]
fn test_are_goals_satisfied() {
    let mut query: GoalCheckRequest = serde_json::from_value(json!({
        "variables": [
            { "id": "source", "typeOf": "INT" },
            { "id": "target", "typeOf": "INT" }
        ],
        "state": [
            { "variableId": "source", "INT": 7 },
            { "variableId": "target", "INT": 7 }
        ],
        "goal": [{ "variableId": "target", "comparisonOperator": "==", "argument": { "variableId": "source" } }]
    }))
    .unwrap();
    assert!(are_goals_satisfied(&query).unwrap());

    query.state.pop();
    assert!(!are_goals_satisfied(&query).unwrap());
}

#[test]
fn test_binding_for_unknown_variable_is_rejected() {
    let query: GoalCheckRequest = serde_json::from_value(json!({
        "variables": [{ "id": "hunger", "typeOf": "INT" }],
        "state": [{ "variableId": "thirst", "INT": 1 }],
        "goal": []
    }))
    .unwrap();

    let err = are_goals_satisfied(&query).unwrap_err();
    assert!(matches!(
        err,
        GoapError::Construction(ConstructionError::UnknownVariable { .. })
    ));
}
