//! Merging partial policy documents over defaults.
//!
//! The server may return a document with whole sections or single fields
//! missing. Objects merge key by key; any non-object value in the overlay
//! (arrays included) replaces the base value outright. A `null` in the
//! overlay keeps the base value.

use serde_json::{Map, Value};

/// Merge `overlay` onto `base`, returning the combined document.
pub fn merge_over(base: Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => Value::Object(merge_objects(base, overlay)),
        (base, Value::Null) => base,
        (_, overlay) => overlay.clone(),
    }
}

fn merge_objects(mut base: Map<String, Value>, overlay: &Map<String, Value>) -> Map<String, Value> {
    for (key, value) in overlay {
        let merged = match base.remove(key) {
            Some(existing) => merge_over(existing, value),
            None if value.is_null() => continue,
            None => value.clone(),
        };
        base.insert(key.clone(), merged);
    }
    base
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::SlaPolicy;

    #[test]
    fn nested_objects_merge_key_by_key() {
        let base = json!({ "a": { "x": 1, "y": 2 }, "b": true });
        let merged = merge_over(base, &json!({ "a": { "y": 5 } }));
        assert_eq!(merged, json!({ "a": { "x": 1, "y": 5 }, "b": true }));
    }

    #[test]
    fn arrays_replace_rather_than_concatenate() {
        let base = json!({ "days": [1, 2, 3, 4, 5] });
        let merged = merge_over(base, &json!({ "days": [6, 7] }));
        assert_eq!(merged, json!({ "days": [6, 7] }));
    }

    #[test]
    fn null_keeps_the_base_value() {
        let base = json!({ "a": 1 });
        assert_eq!(merge_over(base.clone(), &json!({ "a": null })), base);
        assert_eq!(merge_over(base.clone(), &json!({ "b": null })), base);
        assert_eq!(merge_over(base.clone(), &Value::Null), base);
    }

    #[test]
    fn unknown_keys_are_carried_through() {
        let merged = merge_over(json!({ "a": 1 }), &json!({ "extra": "kept" }));
        assert_eq!(merged["extra"], "kept");
    }

    #[test]
    fn missing_escalation_level_keeps_its_default() {
        let partial = json!({
            "escalation": {
                "level1": { "triggerPercent": 40, "notify": ["manager"] }
            }
        });
        let policy = SlaPolicy::from_partial(&partial).unwrap();
        let defaults = SlaPolicy::default();

        assert_eq!(policy.escalation().level1.trigger_percent.get(), 40);
        assert_eq!(policy.escalation().level2, defaults.escalation().level2);
        assert_eq!(policy.escalation().breach, defaults.escalation().breach);
        assert_eq!(policy.priorities(), defaults.priorities());
        assert_eq!(policy.business_hours(), defaults.business_hours());
    }

    #[test]
    fn server_fields_win_over_defaults() {
        let partial = json!({
            "businessHours": { "mode": "24/7", "workingDays": [1, 2, 3, 4, 5, 6, 7] },
            "priorities": { "critical": { "responseMinutes": 5 } },
            "notifications": { "dailyReport": true }
        });
        let policy = SlaPolicy::from_partial(&partial).unwrap();

        assert_eq!(policy.business_hours().working_days.len(), 7);
        assert_eq!(policy.business_hours().start_time.to_string(), "09:00");
        let critical = policy.priority("critical").unwrap();
        assert_eq!(critical.response_minutes.get(), 5);
        assert_eq!(critical.resolution_hours.get(), 4);
        assert!(policy.notifications().daily_report);
        assert!(policy.notifications().breach_alert);
    }

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(SlaPolicy::from_partial(&json!({})).unwrap(), SlaPolicy::default());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let partial = json!({ "escalation": { "level1": { "triggerPercent": 150 } } });
        assert!(SlaPolicy::from_partial(&partial).is_err());
    }
}
