//! # Conditions
//!
//! A condition compares one fact against a literal: `[field, operator, value]`.
//! Evaluation never fails. A missing fact, an unknown operator, a malformed
//! condition or values that cannot be ordered all make the condition false.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::GeneticError;

/// Known facts, keyed by field name.
pub type Facts = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Lt => "<",
            Operator::Le => "<=",
        }
    }

    /// Applies the operator to `fact OP literal`.
    pub fn apply(&self, fact: &Value, literal: &Value) -> bool {
        match self {
            Operator::Eq => values_equal(fact, literal),
            Operator::Ne => !values_equal(fact, literal),
            Operator::Gt => compare(fact, literal) == Some(Ordering::Greater),
            Operator::Ge => matches!(
                compare(fact, literal),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            Operator::Lt => compare(fact, literal) == Some(Ordering::Less),
            Operator::Le => matches!(
                compare(fact, literal),
                Some(Ordering::Less | Ordering::Equal)
            ),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "==" => Ok(Operator::Eq),
            "!=" => Ok(Operator::Ne),
            ">" => Ok(Operator::Gt),
            ">=" => Ok(Operator::Ge),
            "<" => Ok(Operator::Lt),
            "<=" => Ok(Operator::Le),
            other => Err(GeneticError::Configuration(format!(
                "Unknown operator '{}'",
                other
            ))),
        }
    }
}

/// Orders two scalars of compatible type. Booleans order as 0 and 1 next to
/// numbers; nulls and mixed types are unordered.
fn compare(lhs: &Value, rhs: &Value) -> Option<Ordering> {
    match (lhs, rhs) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => as_number(lhs)?.partial_cmp(&as_number(rhs)?),
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn values_equal(lhs: &Value, rhs: &Value) -> bool {
    match compare(lhs, rhs) {
        Some(ordering) => ordering == Ordering::Equal,
        None => lhs == rhs,
    }
}

/// One `[field, operator, value]` entry of a rule.
///
/// Entries that do not have that shape are kept as `Malformed` so an edited
/// rule table still loads; they never match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Condition {
    Compare(String, String, Value),
    Malformed(Value),
}

impl Condition {
    pub fn new(field: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Condition::Compare(field.into(), operator.as_str().to_string(), value.into())
    }

    pub fn holds(&self, facts: &Facts) -> bool {
        let Condition::Compare(field, operator, literal) = self else {
            return false;
        };
        let Ok(operator) = operator.parse::<Operator>() else {
            return false;
        };
        facts
            .get(field)
            .is_some_and(|fact| operator.apply(fact, literal))
    }
}
