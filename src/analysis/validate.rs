//! Validation and normalization of parsed model output.
//!
//! Per-entry failures are recovered by dropping the entry and logging it;
//! the drop stays observable through the attempted count. Robustness over
//! completeness, per entry.

use super::schema::GoalConflict;
use serde_json::Value;
use std::cmp::Ordering;

/// Result of validating a parsed `{"conflicts": [...]}` reply.
#[derive(Debug, Clone)]
pub struct ValidatedConflicts {
    /// Entries that survived schema validation, sorted by centrality
    /// descending.
    pub conflicts: Vec<GoalConflict>,
    /// Entries the model proposed, before validation.
    pub attempted: usize,
}

/// Validate and sort the conflicts array of a parsed reply.
///
/// A missing `conflicts` key is treated as an empty array. Entries missing
/// a required field, or with a malformed nested `three_yes` object, are
/// dropped and logged.
pub fn validate_conflicts(reply: &Value) -> ValidatedConflicts {
    let raw = reply
        .get("conflicts")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    let attempted = raw.len();

    let mut conflicts: Vec<GoalConflict> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(conflict) => Some(conflict),
            Err(error) => {
                tracing::warn!(index, %error, "Dropping malformed conflict entry");
                None
            }
        })
        .collect();

    conflicts.sort_by(|a, b| {
        b.centrality_score
            .partial_cmp(&a.centrality_score)
            .unwrap_or(Ordering::Equal)
    });

    ValidatedConflicts {
        conflicts,
        attempted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(conflict: &str, score: f64) -> Value {
        json!({
            "conflict": conflict,
            "function_a": "Wirtschaftswachstum und Wettbewerbsfähigkeit",
            "function_b": "Klimaschutz und Dekarbonisierung",
            "implementation_collision": "CO2-Bepreisung verteuert Produktion",
            "centrality_score": score,
            "three_yes": {
                "system_function": true,
                "system_function_reasoning": "Begründung",
                "implementation_collision": true,
                "implementation_reasoning": "Begründung",
                "current_pressure": true,
                "pressure_reasoning": "Begründung"
            },
            "category": "ZENTRAL"
        })
    }

    #[test]
    fn test_sorted_by_centrality_descending() {
        let reply = json!({
            "conflicts": [entry("niedrig", 0.2), entry("hoch", 0.9), entry("mittel", 0.5)]
        });

        let validated = validate_conflicts(&reply);
        assert_eq!(validated.attempted, 3);
        let scores: Vec<f64> = validated
            .conflicts
            .iter()
            .map(|c| c.centrality_score)
            .collect();
        assert_eq!(scores, vec![0.9, 0.5, 0.2]);
    }

    #[test]
    fn test_missing_conflicts_key_is_empty() {
        let validated = validate_conflicts(&json!({}));
        assert!(validated.conflicts.is_empty());
        assert_eq!(validated.attempted, 0);
    }

    #[test]
    fn test_malformed_entry_is_dropped() {
        let mut broken = entry("kaputt", 0.7);
        broken["three_yes"]
            .as_object_mut()
            .unwrap()
            .remove("current_pressure");

        let reply = json!({ "conflicts": [entry("intakt", 0.4), broken] });
        let validated = validate_conflicts(&reply);

        assert_eq!(validated.attempted, 2);
        assert_eq!(validated.conflicts.len(), 1);
        assert_eq!(validated.conflicts[0].conflict, "intakt");
    }

    #[test]
    fn test_entry_missing_required_field_is_dropped() {
        let mut broken = entry("kaputt", 0.7);
        broken.as_object_mut().unwrap().remove("function_b");

        let reply = json!({ "conflicts": [broken] });
        let validated = validate_conflicts(&reply);

        assert_eq!(validated.attempted, 1);
        assert!(validated.conflicts.is_empty());
    }

    #[test]
    fn test_missing_centrality_defaults_to_half() {
        let mut no_score = entry("ohne Score", 0.0);
        no_score.as_object_mut().unwrap().remove("centrality_score");

        let reply = json!({ "conflicts": [no_score, entry("hoch", 0.9), entry("niedrig", 0.1)] });
        let validated = validate_conflicts(&reply);

        let scores: Vec<f64> = validated
            .conflicts
            .iter()
            .map(|c| c.centrality_score)
            .collect();
        assert_eq!(scores, vec![0.9, 0.5, 0.1]);
        assert_eq!(validated.conflicts[1].conflict, "ohne Score");
    }
}
