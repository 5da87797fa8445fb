use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::catalog::{StatDefinition, StatKind};

/// Player statistics as returned by the backend: one flat object keyed by
/// each stat's `source_field`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerRecord {
    fields: Map<String, JsonValue>,
}

impl PlayerRecord {
    pub fn new(fields: Map<String, JsonValue>) -> Self {
        Self { fields }
    }

    /// Raw value of `field`; `null` counts as absent
    pub fn value(&self, field: &str) -> Option<&JsonValue> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    /// Display value of `def` on this record, if the record defines it
    pub fn formatted(&self, def: &StatDefinition) -> Option<String> {
        format_stat_value(def.kind, self.value(def.source_field)?)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<JsonValue> for PlayerRecord {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }
}

/// Render a raw record value for display.
///
/// Numbers get a `%` suffix for percentages and a `$` prefix for money;
/// strings are already formatted by the backend and pass through.
pub fn format_stat_value(kind: StatKind, value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::Number(n) => {
            let number = match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => i.to_string(),
                (None, Some(f)) => f.to_string(),
                (None, None) => n.to_string(),
            };
            Some(match kind {
                StatKind::Percent => format!("{}%", number),
                StatKind::Money => format!("${}", number),
                StatKind::Count | StatKind::Ratio => number,
            })
        }
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use serde_json::json;

    #[test]
    fn test_format_by_kind() {
        assert_eq!(format_stat_value(StatKind::Percent, &json!(31)).as_deref(), Some("31%"));
        assert_eq!(format_stat_value(StatKind::Percent, &json!(24.5)).as_deref(), Some("24.5%"));
        assert_eq!(format_stat_value(StatKind::Money, &json!(-15.7)).as_deref(), Some("$-15.7"));
        assert_eq!(format_stat_value(StatKind::Count, &json!(1200)).as_deref(), Some("1200"));
        assert_eq!(format_stat_value(StatKind::Ratio, &json!(2.5)).as_deref(), Some("2.5"));
        assert_eq!(format_stat_value(StatKind::Percent, &json!("18%")).as_deref(), Some("18%"));
        assert_eq!(format_stat_value(StatKind::Percent, &json!([1])), None);
    }

    #[test]
    fn test_null_is_undefined() {
        let record = PlayerRecord::from(json!({"vpip": null, "pfr": 18}));
        let vpip = catalog::find("VPIP").unwrap();
        let pfr = catalog::find("PFR").unwrap();
        assert_eq!(record.formatted(vpip), None);
        assert_eq!(record.formatted(pfr).as_deref(), Some("18%"));
    }

    #[test]
    fn test_deserialize_flat_object() {
        let record: PlayerRecord =
            serde_json::from_str(r#"{"hands": 1500, "wtsd": 27.1}"#).unwrap();
        assert_eq!(record.value("hands"), Some(&json!(1500)));
        assert!(record.value("missing").is_none());
    }
}
