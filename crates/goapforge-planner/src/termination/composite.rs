//! Composite termination (OR).
//!
//! Uses macro-generated tuple implementations.

use super::{Termination, TerminationReason};
use crate::scope::SearchScope;

/// Terminates when ANY child terminates, reporting the first child's reason.
///
/// # Examples
///
/// ```
/// use goapforge_planner::termination::{IterationLimitTermination, OrTermination, TimeTermination};
///
/// // Stop after 2 seconds OR 1000 iterations
/// let termination = OrTermination((
///     TimeTermination::seconds(2),
///     IterationLimitTermination::new(1000),
/// ));
/// ```
#[derive(Debug)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    /// Creates a new OR termination from a tuple of terminations.
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

macro_rules! impl_or_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T),+> Termination for OrTermination<($($T,)+)>
        where
            $($T: Termination,)+
        {
            fn check(&self, scope: &SearchScope) -> Option<TerminationReason> {
                None$(.or_else(|| (self.0).$idx.check(scope)))+
            }
        }
    };
}

impl_or_termination!(0: T0);
impl_or_termination!(0: T0, 1: T1);
impl_or_termination!(0: T0, 1: T1, 2: T2);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3, 4: T4);
