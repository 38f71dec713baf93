//! Iteration limit termination.

use super::{Termination, TerminationReason};
use crate::scope::SearchScope;

/// Terminates once the iteration counter reaches a limit.
///
/// # Example
///
/// ```
/// use goapforge_planner::termination::IterationLimitTermination;
///
/// let term = IterationLimitTermination::new(100);
/// ```
#[derive(Debug, Clone)]
pub struct IterationLimitTermination {
    limit: u64,
}

impl IterationLimitTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for IterationLimitTermination {
    fn check(&self, scope: &SearchScope) -> Option<TerminationReason> {
        (scope.iteration() >= self.limit).then_some(TerminationReason::IterationLimit)
    }
}
