//! Per-type operator table.
//!
//! Every (type, operator) pair is resolved by an exhaustive match, so the set of
//! supported combinations is closed and checked at compile time:
//!
//! | type    | comparison              | assignment                   |
//! |---------|-------------------------|------------------------------|
//! | BOOLEAN | `==` `!=`               | `=` `&=` `^=` `\|=`          |
//! | STRING  | `==` `!=`               | `=`                          |
//! | INT     | `==` `!=` `<` `<=` `>` `>=` | `=` `+=` `-=` `*=` `/=` `%=` |
//! | FLOAT   | `==` `!=` `<` `<=` `>` `>=` | `=` `+=` `-=` `*=` `/=`      |

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::EvaluationError;
use crate::operator::{AssignmentOperator, ComparisonOperator};
use crate::value::{Value, ValueType};

/// Tolerance below which a distance counts as satisfied.
pub const EPSILON: f64 = 1e-5;

impl ValueType {
    /// Whether conditions on this type may use `op`.
    pub fn supports_comparison(self, op: ComparisonOperator) -> bool {
        use ComparisonOperator::*;
        match (self, op) {
            (_, Eq | Ne) => true,
            (ValueType::Int | ValueType::Float, Lt | Le | Gt | Ge) => true,
            (ValueType::Boolean | ValueType::String, Lt | Le | Gt | Ge) => false,
        }
    }

    /// Whether effects on this type may use `op`.
    pub fn supports_assignment(self, op: AssignmentOperator) -> bool {
        use AssignmentOperator::*;
        match (self, op) {
            (_, Assign) => true,
            (ValueType::Boolean, And | Xor | Or) => true,
            (ValueType::Boolean, Add | Sub | Mul | Div | Rem) => false,
            (ValueType::String, _) => false,
            (ValueType::Int, Add | Sub | Mul | Div | Rem) => true,
            (ValueType::Float, Add | Sub | Mul | Div) => true,
            (ValueType::Int | ValueType::Float, And | Xor | Or) => false,
            (ValueType::Float, Rem) => false,
        }
    }

    /// Comparison operators registered for this type.
    pub fn comparison_operators(self) -> Vec<ComparisonOperator> {
        ComparisonOperator::ALL
            .into_iter()
            .filter(|op| self.supports_comparison(*op))
            .collect()
    }

    /// Assignment operators registered for this type.
    pub fn assignment_operators(self) -> Vec<AssignmentOperator> {
        AssignmentOperator::ALL
            .into_iter()
            .filter(|op| self.supports_assignment(*op))
            .collect()
    }
}

/// One row of the operator catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorInfo {
    pub id: &'static str,
    pub description: &'static str,
}

/// The operators available for one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeOperators {
    pub type_of: ValueType,
    pub comparison: Vec<OperatorInfo>,
    pub assignment: Vec<OperatorInfo>,
}

/// Lists the operators registered for each type.
pub fn operator_catalogue() -> Vec<TypeOperators> {
    ValueType::ALL
        .into_iter()
        .map(|value_type| TypeOperators {
            type_of: value_type,
            comparison: value_type
                .comparison_operators()
                .into_iter()
                .map(|op| OperatorInfo {
                    id: op.symbol(),
                    description: op.description(),
                })
                .collect(),
            assignment: value_type
                .assignment_operators()
                .into_iter()
                .map(|op| OperatorInfo {
                    id: op.symbol(),
                    description: op.description(),
                })
                .collect(),
        })
        .collect()
}

fn check_type(expected: ValueType, value: &Value) -> Result<(), EvaluationError> {
    let found = value.value_type();
    if found == expected {
        Ok(())
    } else {
        Err(EvaluationError::TypeMismatch { expected, found })
    }
}

fn equality(holds: bool) -> f64 {
    if holds {
        0.0
    } else {
        1.0
    }
}

/// Ordering and absolute difference of two numeric values of the same type.
fn numeric_order(lhs: &Value, rhs: &Value) -> Option<(Ordering, f64)> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => {
            let diff = (i128::from(*a) - i128::from(*b)).unsigned_abs() as f64;
            Some((a.cmp(b), diff))
        }
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b).map(|ord| (ord, (a - b).abs())),
        _ => None,
    }
}

/// Distance from `lhs` to satisfying `lhs op rhs`.
///
/// Zero when the comparison holds. Otherwise `==`/`!=` give 1, `<=`/`>=` give
/// the absolute difference and strict `<`/`>` give at least `2 * EPSILON`, so
/// an unsatisfied strict comparison between equal values never reads as met.
pub fn compare(
    op: ComparisonOperator,
    value_type: ValueType,
    lhs: &Value,
    rhs: &Value,
) -> Result<f64, EvaluationError> {
    check_type(value_type, lhs)?;
    check_type(value_type, rhs)?;
    if !value_type.supports_comparison(op) {
        return Err(EvaluationError::UnsupportedOperator {
            operator: op.symbol(),
            value_type,
        });
    }

    let distance = match op {
        ComparisonOperator::Eq => equality(lhs == rhs),
        ComparisonOperator::Ne => equality(lhs != rhs),
        ComparisonOperator::Lt | ComparisonOperator::Le | ComparisonOperator::Gt | ComparisonOperator::Ge => {
            // NaN on either side never satisfies an ordering.
            let Some((ordering, diff)) = numeric_order(lhs, rhs) else {
                return Ok(f64::INFINITY);
            };
            let holds = match op {
                ComparisonOperator::Lt => ordering == Ordering::Less,
                ComparisonOperator::Le => ordering != Ordering::Greater,
                ComparisonOperator::Gt => ordering == Ordering::Greater,
                _ => ordering != Ordering::Less,
            };
            if holds {
                0.0
            } else if matches!(op, ComparisonOperator::Lt | ComparisonOperator::Gt) {
                diff.max(2.0 * EPSILON)
            } else {
                diff
            }
        }
    };
    Ok(distance)
}

/// Integer division rounded half up: `floor(a / b + 0.5)`.
fn rounded_div(a: i64, b: i64) -> Option<i64> {
    let (mut num, mut den) = (i128::from(a), i128::from(b));
    if den < 0 {
        num = -num;
        den = -den;
    }
    i64::try_from((2 * num + den).div_euclid(2 * den)).ok()
}

/// Computes `current op operand`.
pub fn apply(
    op: AssignmentOperator,
    value_type: ValueType,
    current: &Value,
    operand: &Value,
) -> Result<Value, EvaluationError> {
    use AssignmentOperator::*;

    check_type(value_type, current)?;
    check_type(value_type, operand)?;
    let unsupported = EvaluationError::UnsupportedOperator {
        operator: op.symbol(),
        value_type,
    };
    if !value_type.supports_assignment(op) {
        return Err(unsupported);
    }
    let overflow = EvaluationError::Overflow {
        operator: op.symbol(),
    };

    match (op, current, operand) {
        (Assign, _, value) => Ok(value.clone()),

        (And, Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(*a && *b)),
        (Xor, Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(a ^ b)),
        (Or, Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(*a || *b)),

        (Add, Value::Int(a), Value::Int(b)) => a.checked_add(*b).map(Value::Int).ok_or(overflow),
        (Sub, Value::Int(a), Value::Int(b)) => a.checked_sub(*b).map(Value::Int).ok_or(overflow),
        (Mul, Value::Int(a), Value::Int(b)) => a.checked_mul(*b).map(Value::Int).ok_or(overflow),
        (Div | Rem, Value::Int(_), Value::Int(0)) => Err(EvaluationError::DivisionByZero {
            operator: op.symbol(),
        }),
        (Div, Value::Int(a), Value::Int(b)) => rounded_div(*a, *b).map(Value::Int).ok_or(overflow),
        (Rem, Value::Int(a), Value::Int(b)) => a.checked_rem(*b).map(Value::Int).ok_or(overflow),

        (Add, Value::Float(a), Value::Float(b)) => Ok(Value::Float(a + b)),
        (Sub, Value::Float(a), Value::Float(b)) => Ok(Value::Float(a - b)),
        (Mul, Value::Float(a), Value::Float(b)) => Ok(Value::Float(a * b)),
        (Div, Value::Float(a), Value::Float(b)) => Ok(Value::Float(a / b)),

        _ => Err(unsupported),
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
