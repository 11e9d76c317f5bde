//! Wire schema for the goal-conflict analysis pipeline.
//!
//! All of these types are transient: built per request, serialized, and
//! discarded. The model-facing side (`GoalConflict`, `ThreeYesCheck`) is
//! deserialized permissively from whatever the LLM returns; entries that
//! fail deserialization are dropped by the validator, not errored.

use serde::{Deserialize, Serialize};

/// Minimum trimmed input length accepted before calling the model.
pub const MIN_POLICY_TEXT_CHARS: usize = 50;

/// Request body for both analysis endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyText {
    pub policy_text: String,
}

impl PolicyText {
    /// Whether the trimmed text meets the minimum length.
    pub fn is_long_enough(&self) -> bool {
        self.policy_text.trim().chars().count() >= MIN_POLICY_TEXT_CHARS
    }
}

/// The three-yes check: three independent yes/no judgments with reasoning,
/// produced entirely by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreeYesCheck {
    pub system_function: bool,
    pub system_function_reasoning: String,
    pub implementation_collision: bool,
    pub implementation_reasoning: String,
    pub current_pressure: bool,
    pub pressure_reasoning: String,
}

fn default_centrality() -> f64 {
    0.5
}

/// One identified goal conflict.
///
/// `centrality_score` defaults to 0.5 when the model omits it; the same
/// value is used for sorting and in the returned object. `category` is a
/// free string (ZENTRAL / PRUEF / HINTERGRUND by convention, not enforced).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalConflict {
    pub conflict: String,
    pub function_a: String,
    pub function_b: String,
    pub implementation_collision: String,
    #[serde(default = "default_centrality")]
    pub centrality_score: f64,
    pub three_yes: ThreeYesCheck,
    pub category: String,
}

/// Response of the multi-conflict endpoint.
///
/// `total_count` always equals `conflicts.len()`. `attempted_count` is the
/// number of entries the model proposed before validation, so silently
/// dropped entries stay observable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiConflictResponse {
    pub conflicts: Vec<GoalConflict>,
    pub total_count: usize,
    pub attempted_count: usize,
}

/// Response of the single-conflict endpoint: the highest-centrality conflict
/// with the three-yes fields promoted to the top level.
///
/// The conflict-level `implementation_collision` description keeps its name;
/// the promoted three-yes boolean of the same name becomes
/// `implementation_collision_check` to avoid the key clash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleConflictResponse {
    pub conflict: String,
    pub function_a: String,
    pub function_b: String,
    pub implementation_collision: String,
    pub centrality_score: f64,
    pub system_function: bool,
    pub system_function_reasoning: String,
    pub implementation_collision_check: bool,
    pub implementation_reasoning: String,
    pub current_pressure: bool,
    pub pressure_reasoning: String,
    pub category: String,
}

impl From<GoalConflict> for SingleConflictResponse {
    fn from(c: GoalConflict) -> Self {
        Self {
            conflict: c.conflict,
            function_a: c.function_a,
            function_b: c.function_b,
            implementation_collision: c.implementation_collision,
            centrality_score: c.centrality_score,
            system_function: c.three_yes.system_function,
            system_function_reasoning: c.three_yes.system_function_reasoning,
            implementation_collision_check: c.three_yes.implementation_collision,
            implementation_reasoning: c.three_yes.implementation_reasoning,
            current_pressure: c.three_yes.current_pressure,
            pressure_reasoning: c.three_yes.pressure_reasoning,
            category: c.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check() -> ThreeYesCheck {
        ThreeYesCheck {
            system_function: true,
            system_function_reasoning: "Beide Funktionen sind essentiell".into(),
            implementation_collision: true,
            implementation_reasoning: "Flächenkonkurrenz".into(),
            current_pressure: false,
            pressure_reasoning: "Kein akuter Druck".into(),
        }
    }

    #[test]
    fn test_policy_text_length_gate() {
        let short = PolicyText {
            policy_text: "   zu kurz   ".into(),
        };
        assert!(!short.is_long_enough());

        let long = PolicyText {
            policy_text: "x".repeat(50),
        };
        assert!(long.is_long_enough());

        // Surrounding whitespace does not count toward the minimum
        let padded = PolicyText {
            policy_text: format!("   {}   ", "x".repeat(49)),
        };
        assert!(!padded.is_long_enough());
    }

    #[test]
    fn test_goal_conflict_centrality_default() {
        let raw = serde_json::json!({
            "conflict": "Wohnraum vs. Klimaschutz",
            "function_a": "Wohnraumversorgung",
            "function_b": "Klimaschutz und Dekarbonisierung",
            "implementation_collision": "Sanierungspflichten verteuern Neubau",
            "three_yes": {
                "system_function": true,
                "system_function_reasoning": "a",
                "implementation_collision": true,
                "implementation_reasoning": "b",
                "current_pressure": true,
                "pressure_reasoning": "c"
            },
            "category": "ZENTRAL"
        });

        let conflict: GoalConflict = serde_json::from_value(raw).unwrap();
        assert!((conflict.centrality_score - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_response_flattens_three_yes() {
        let conflict = GoalConflict {
            conflict: "Test".into(),
            function_a: "A".into(),
            function_b: "B".into(),
            implementation_collision: "Beschreibung".into(),
            centrality_score: 0.9,
            three_yes: check(),
            category: "ZENTRAL".into(),
        };

        let single = SingleConflictResponse::from(conflict);
        let json = serde_json::to_value(&single).unwrap();

        assert!(json.get("three_yes").is_none());
        assert_eq!(json["system_function"], true);
        assert_eq!(json["implementation_collision"], "Beschreibung");
        assert_eq!(json["implementation_collision_check"], true);
        assert_eq!(json["pressure_reasoning"], "Kein akuter Druck");
    }
}
