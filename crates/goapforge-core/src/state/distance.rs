//! Distance from a state to a goal or to another state.

use std::borrow::Cow;

use crate::error::EvaluationError;
use crate::model::{Condition, Goal, VariableIndex};
use crate::registry;
use crate::state::WorldState;

/// Whether per-variable weights scale the distance.
///
/// Weighted distances guide the search; unweighted ones decide satisfaction
/// and state equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weighting {
    Weighted,
    Unweighted,
}

/// Something a state can be measured against.
pub trait DistanceTarget {
    /// The conditions whose distances are summed.
    fn conditions(&self) -> Cow<'_, [Condition]>;

    /// Names the target in evaluation errors.
    fn describe(&self) -> String;
}

impl DistanceTarget for Goal {
    fn conditions(&self) -> Cow<'_, [Condition]> {
        Cow::Borrowed(Goal::conditions(self))
    }

    fn describe(&self) -> String {
        format!("goal {}", self.id())
    }
}

/// A state as a target contributes one `variable == value` condition per entry.
impl DistanceTarget for WorldState {
    fn conditions(&self) -> Cow<'_, [Condition]> {
        Cow::Owned(
            self.iter()
                .map(|(id, value)| Condition::equality(id, value))
                .collect(),
        )
    }

    fn describe(&self) -> String {
        format!("world state {}", self.signature())
    }
}

/// Sum of per-condition distances from `source` to `target`.
///
/// Not symmetric. Unset variables read by the conditions are bound to their
/// default in `source`.
pub fn distance_to<T>(
    source: &mut WorldState,
    target: &T,
    variables: &VariableIndex,
    weighting: Weighting,
) -> Result<f64, EvaluationError>
where
    T: DistanceTarget + ?Sized,
{
    let conditions = target.conditions();
    let context = || target.describe();
    let mut total = 0.0;
    for condition in conditions.iter() {
        total += condition_distance(source, condition, variables, weighting, &context)?;
    }
    Ok(total)
}

pub(crate) fn condition_distance(
    source: &mut WorldState,
    condition: &Condition,
    variables: &VariableIndex,
    weighting: Weighting,
    context: &dyn Fn() -> String,
) -> Result<f64, EvaluationError> {
    let unknown = |id: &str| EvaluationError::UnknownVariable {
        context: context(),
        variable: id.to_string(),
    };
    let variable = variables
        .get(condition.variable_id())
        .ok_or_else(|| unknown(condition.variable_id()))?;
    let rhs = condition.argument().resolve(source, variables, context)?;
    let lhs = source
        .resolve_or_insert_default(variables, condition.variable_id())
        .ok_or_else(|| unknown(condition.variable_id()))?;

    let distance = registry::compare(condition.operator(), variable.value_type(), lhs, &rhs)?;
    Ok(match weighting {
        Weighting::Weighted => distance * variable.weight(),
        Weighting::Unweighted => distance,
    })
}
