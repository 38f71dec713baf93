//! Plans returned by a search.

use std::fmt;

use goapforge_core::Binding;
use serde::Serialize;
use uuid::Uuid;

use crate::statistics::SearchStatistics;
use crate::termination::TerminationReason;

/// Whether the plan reaches the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlanStatus {
    #[serde(rename = "SOLVED")]
    Solved,
    /// A limit stopped the search; the plan leads to the last expanded state.
    #[serde(rename = "FAILED TO CONVERGE")]
    FailedToConverge,
}

impl PlanStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PlanStatus::Solved => "SOLVED",
            PlanStatus::FailedToConverge => "FAILED TO CONVERGE",
        }
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered list of transitions from the initial state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlan {
    pub id: Uuid,
    pub total_cost: f64,
    pub total_steps: usize,
    /// Transition ids, first step first.
    pub transitions: Vec<String>,
    /// Action payloads of those transitions, in the same order.
    pub actions: Vec<serde_json::Value>,
    pub initial_state: Vec<Binding>,
    pub final_state: Vec<Binding>,
    pub status: PlanStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination: Option<TerminationReason>,
    pub statistics: SearchStatistics,
}

impl ActionPlan {
    pub fn is_solved(&self) -> bool {
        self.status == PlanStatus::Solved
    }
}
