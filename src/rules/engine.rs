use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::condition::{Condition, Facts};
use crate::error::Result;

/// A named, prioritized set of conditions with an action to take when all hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    /// Higher wins. Missing in JSON means 0.
    #[serde(default)]
    pub priority: i64,
    /// All must hold. An empty list always matches.
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub action: Map<String, Value>,
}

impl Rule {
    pub fn new(name: impl Into<String>, priority: i64) -> Self {
        Self {
            name: name.into(),
            priority,
            conditions: Vec::new(),
            action: Map::new(),
        }
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn with_action(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.action.insert(key.into(), value.into());
        self
    }

    pub fn matches(&self, facts: &Facts) -> bool {
        self.conditions.iter().all(|condition| condition.holds(facts))
    }

    /// Returns an action field if it is a string.
    pub fn action_str(&self, key: &str) -> Option<&str> {
        self.action.get(key).and_then(Value::as_str)
    }
}

/// The rules that fired for a set of facts.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<'a> {
    /// The highest-priority matching rule.
    pub best: Option<&'a Rule>,
    /// Every matching rule, highest priority first. Equal priorities keep
    /// table order.
    pub matched: Vec<&'a Rule>,
}

/// Evaluates `rules` against `facts`.
pub fn evaluate<'a>(facts: &Facts, rules: &'a [Rule]) -> Evaluation<'a> {
    let mut matched: Vec<&Rule> = rules.iter().filter(|rule| rule.matches(facts)).collect();
    matched.sort_by(|a, b| b.priority.cmp(&a.priority));

    debug!(
        matched = matched.len(),
        best = matched.first().map(|rule| rule.name.as_str()),
        "rules evaluated"
    );

    Evaluation {
        best: matched.first().copied(),
        matched,
    }
}

/// An ordered rule table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Parses a JSON array of rules.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::RuleParse` if the text is not a valid rule table.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a rule table, falling back to [`RuleSet::ac_defaults`] when it is invalid.
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(rules) => rules,
            Err(e) => {
                warn!(error = %e, "invalid rule table, using default rules");
                Self::ac_defaults()
            }
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn evaluate(&self, facts: &Facts) -> Evaluation<'_> {
        evaluate(facts, &self.rules)
    }
}
