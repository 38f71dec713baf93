//! Comparison and assignment operators.
//!
//! Operators travel on the wire as their symbol (`"=="`, `"+="`, ...). Each
//! operator carries a short description used by tooling to explain it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConstructionError;

/// Operators used by conditions: they measure how far a value is from satisfying them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
}

impl ComparisonOperator {
    pub const ALL: [ComparisonOperator; 6] = [
        ComparisonOperator::Eq,
        ComparisonOperator::Ne,
        ComparisonOperator::Gt,
        ComparisonOperator::Ge,
        ComparisonOperator::Lt,
        ComparisonOperator::Le,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "==",
            ComparisonOperator::Ne => "!=",
            ComparisonOperator::Lt => "<",
            ComparisonOperator::Le => "<=",
            ComparisonOperator::Gt => ">",
            ComparisonOperator::Ge => ">=",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "Is equal to",
            ComparisonOperator::Ne => "Is not equal to",
            ComparisonOperator::Lt => "Less than",
            ComparisonOperator::Le => "Equal or less than",
            ComparisonOperator::Gt => "Greater than",
            ComparisonOperator::Ge => "Equal or greater than",
        }
    }

    /// Looks up an operator by its symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ComparisonOperator {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| ConstructionError::UnknownOperator(s.to_string()))
    }
}

/// Operators used by effects: they compute a variable's next value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentOperator {
    #[serde(rename = "=")]
    Assign,
    #[serde(rename = "+=")]
    Add,
    #[serde(rename = "-=")]
    Sub,
    #[serde(rename = "*=")]
    Mul,
    #[serde(rename = "/=")]
    Div,
    #[serde(rename = "%=")]
    Rem,
    #[serde(rename = "&=")]
    And,
    #[serde(rename = "^=")]
    Xor,
    #[serde(rename = "|=")]
    Or,
}

impl AssignmentOperator {
    pub const ALL: [AssignmentOperator; 9] = [
        AssignmentOperator::Assign,
        AssignmentOperator::Add,
        AssignmentOperator::Sub,
        AssignmentOperator::Mul,
        AssignmentOperator::Div,
        AssignmentOperator::Rem,
        AssignmentOperator::And,
        AssignmentOperator::Xor,
        AssignmentOperator::Or,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::Add => "+=",
            AssignmentOperator::Sub => "-=",
            AssignmentOperator::Mul => "*=",
            AssignmentOperator::Div => "/=",
            AssignmentOperator::Rem => "%=",
            AssignmentOperator::And => "&=",
            AssignmentOperator::Xor => "^=",
            AssignmentOperator::Or => "|=",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "Assign to",
            AssignmentOperator::Add => "Add",
            AssignmentOperator::Sub => "Subtract",
            AssignmentOperator::Mul => "Multiply by",
            AssignmentOperator::Div => "Divide by",
            AssignmentOperator::Rem => "Integer remainder",
            AssignmentOperator::And => "Logical AND",
            AssignmentOperator::Xor => "Logical exclusive OR",
            AssignmentOperator::Or => "Logical OR",
        }
    }

    /// Looks up an operator by its symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for AssignmentOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for AssignmentOperator {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| ConstructionError::UnknownOperator(s.to_string()))
    }
}
