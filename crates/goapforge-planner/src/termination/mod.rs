//! Termination conditions for a search.

mod composite;
mod external;
mod iteration;
mod time;

use std::fmt::{self, Debug};

use serde::Serialize;

use crate::scope::SearchScope;

pub use composite::OrTermination;
pub use external::ExternalTermination;
pub use iteration::IterationLimitTermination;
pub use time::TimeTermination;

/// Why a search stopped before reaching its goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TerminationReason {
    IterationLimit,
    TimeLimit,
    Cancelled,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TerminationReason::IterationLimit => "iteration limit",
            TerminationReason::TimeLimit => "time limit",
            TerminationReason::Cancelled => "cancelled",
        })
    }
}

/// Trait for determining when to stop searching.
pub trait Termination: Send + Debug {
    /// Returns the reason to stop, or `None` to keep going.
    fn check(&self, scope: &SearchScope) -> Option<TerminationReason>;

    /// Returns true if the search should terminate.
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        self.check(scope).is_some()
    }
}

/// An absent termination never fires.
impl<T: Termination> Termination for Option<T> {
    fn check(&self, scope: &SearchScope) -> Option<TerminationReason> {
        self.as_ref().and_then(|t| t.check(scope))
    }
}
