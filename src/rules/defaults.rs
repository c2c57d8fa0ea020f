//! The built-in air-conditioning rule table.

use super::condition::{Condition, Operator};
use super::engine::{Rule, RuleSet};

fn ac_rule(
    name: &str,
    priority: i64,
    conditions: Vec<Condition>,
    mode: &str,
    fan: &str,
    setpoint: &str,
    reason: &str,
) -> Rule {
    let mut rule = Rule::new(name, priority)
        .with_action("mode", mode)
        .with_action("fan", fan)
        .with_action("setpoint", setpoint)
        .with_action("reason", reason);
    rule.conditions = conditions;
    rule
}

impl RuleSet {
    /// The seven controller rules, highest priority first.
    ///
    /// Facts used: `windows_open` (bool), `occupancy` (`"OCCUPIED"` or
    /// `"EMPTY"`), `temperature` and `humidity` (numbers) and `time_of_day`
    /// (`"MORNING"`, `"AFTERNOON"`, `"EVENING"` or `"NIGHT"`).
    pub fn ac_defaults() -> Self {
        RuleSet::new(vec![
            ac_rule(
                "Windows open → turn AC off",
                100,
                vec![Condition::new("windows_open", Operator::Eq, true)],
                "OFF",
                "LOW",
                "-",
                "Windows are open",
            ),
            ac_rule(
                "No one home → eco mode",
                90,
                vec![
                    Condition::new("occupancy", Operator::Eq, "EMPTY"),
                    Condition::new("temperature", Operator::Ge, 24),
                ],
                "ECO",
                "LOW",
                "27°C",
                "Home empty; save energy",
            ),
            ac_rule(
                "Too cold → turn off",
                85,
                vec![Condition::new("temperature", Operator::Le, 22)],
                "OFF",
                "LOW",
                "-",
                "Already cold",
            ),
            ac_rule(
                "Hot & humid → cool strong",
                80,
                vec![
                    Condition::new("occupancy", Operator::Eq, "OCCUPIED"),
                    Condition::new("temperature", Operator::Ge, 30),
                    Condition::new("humidity", Operator::Ge, 70),
                ],
                "COOL",
                "HIGH",
                "23°C",
                "Hot and humid",
            ),
            ac_rule(
                "Night → sleep mode",
                75,
                vec![
                    Condition::new("occupancy", Operator::Eq, "OCCUPIED"),
                    Condition::new("time_of_day", Operator::Eq, "NIGHT"),
                    Condition::new("temperature", Operator::Ge, 26),
                ],
                "SLEEP",
                "LOW",
                "26°C",
                "Night comfort",
            ),
            ac_rule(
                "Hot → cool",
                70,
                vec![
                    Condition::new("occupancy", Operator::Eq, "OCCUPIED"),
                    Condition::new("temperature", Operator::Ge, 28),
                ],
                "COOL",
                "MEDIUM",
                "24°C",
                "Temperature high",
            ),
            ac_rule(
                "Slightly warm → gentle cool",
                60,
                vec![
                    Condition::new("occupancy", Operator::Eq, "OCCUPIED"),
                    Condition::new("temperature", Operator::Ge, 26),
                    Condition::new("temperature", Operator::Lt, 28),
                ],
                "COOL",
                "LOW",
                "25°C",
                "Slightly warm",
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Facts;
    use serde_json::{json, Value};

    fn facts(value: Value) -> Facts {
        value.as_object().cloned().unwrap()
    }

    fn fired(facts: &Facts) -> Vec<String> {
        RuleSet::ac_defaults()
            .evaluate(facts)
            .matched
            .iter()
            .map(|rule| rule.name.clone())
            .collect()
    }

    #[test]
    fn test_defaults_are_priority_ordered() {
        let rules = RuleSet::ac_defaults();
        assert_eq!(rules.rules().len(), 7);
        assert!(rules.rules().windows(2).all(|w| w[0].priority > w[1].priority));
    }

    #[test]
    fn test_windows_open_turns_ac_off() {
        let rules = RuleSet::ac_defaults();
        let facts = facts(json!({"windows_open": true, "temperature": 30}));

        let evaluation = rules.evaluate(&facts);
        let best = evaluation.best.unwrap();

        assert_eq!(best.name, "Windows open → turn AC off");
        assert_eq!(best.priority, 100);
        assert_eq!(best.action_str("mode"), Some("OFF"));
        assert_eq!(best.action_str("fan"), Some("LOW"));
    }

    #[test]
    fn test_hot_humid_occupied_home() {
        let facts = facts(json!({
            "temperature": 31.0,
            "humidity": 75.0,
            "occupancy": "OCCUPIED",
            "time_of_day": "AFTERNOON",
            "windows_open": false
        }));

        assert_eq!(fired(&facts), vec!["Hot & humid → cool strong", "Hot → cool"]);
    }

    #[test]
    fn test_night_sleep_mode() {
        let facts = facts(json!({
            "temperature": 27.0,
            "humidity": 50.0,
            "occupancy": "OCCUPIED",
            "time_of_day": "NIGHT",
            "windows_open": false
        }));

        assert_eq!(
            fired(&facts),
            vec!["Night → sleep mode", "Slightly warm → gentle cool"]
        );
    }

    #[test]
    fn test_empty_home_eco() {
        let facts = facts(json!({
            "temperature": 25.0,
            "humidity": 46.0,
            "occupancy": "EMPTY",
            "time_of_day": "MORNING",
            "windows_open": false
        }));

        let rules = RuleSet::ac_defaults();
        let best = rules.evaluate(&facts).best.unwrap();
        assert_eq!(best.action_str("mode"), Some("ECO"));
        assert_eq!(best.action_str("setpoint"), Some("27°C"));
    }

    #[test]
    fn test_sidebar_defaults_are_too_cold() {
        // temperature 22 with windows open: both rules fire, windows wins
        let facts = facts(json!({
            "temperature": 22.0,
            "humidity": 46.0,
            "occupancy": "OCCUPIED",
            "time_of_day": "MORNING",
            "windows_open": true
        }));

        assert_eq!(
            fired(&facts),
            vec!["Windows open → turn AC off", "Too cold → turn off"]
        );
    }
}
