use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventBus {
    pub name: String,
    pub rules: Vec<Rule>,
    pub created: jiff::Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub event_pattern: EventPattern,
    pub targets: Vec<Target>,
    pub enabled: bool,
}

/// Filter describing which events a rule accepts.
///
/// Matching semantics (spec §4.6): `source` matches iff empty or contains
/// `event.source`; `type_` matches iff empty or contains `event.type`;
/// `data`, if present, must be a top-level subset match against
/// `event.data` — every key in the pattern must equal the value at that
/// key in the event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPattern {
    #[serde(default)]
    pub source: Vec<String>,
    #[serde(default, rename = "type")]
    pub type_: Vec<String>,
    #[serde(default)]
    pub data: Option<HashMap<String, serde_json::Value>>,
}

impl EventPattern {
    pub fn matches(&self, event: &Event) -> bool {
        let source_ok = self.source.is_empty() || self.source.iter().any(|s| s == &event.source);
        let type_ok = self.type_.is_empty() || self.type_.iter().any(|t| t == &event.r#type);
        let data_ok = match &self.data {
            None => true,
            Some(expected) => expected
                .iter()
                .all(|(k, v)| event.data.get(k) == Some(v)),
        };
        source_ok && type_ok && data_ok
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub id: String,
    /// Opaque ARN-shaped or provider-specific destination identifier.
    pub arn: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub source: String,
    pub r#type: String,
    #[serde(default)]
    pub data: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(source: &str, ty: &str) -> Event {
        Event {
            source: source.to_string(),
            r#type: ty.to_string(),
            data: HashMap::from([("userId".to_string(), serde_json::json!("123"))]),
        }
    }

    #[test]
    fn empty_pattern_matches_everything() {
        let pattern = EventPattern::default();
        assert!(pattern.matches(&event("user-service", "user.created")));
    }

    #[test]
    fn source_and_type_filter_must_both_match() {
        let pattern = EventPattern {
            source: vec!["user-service".to_string()],
            type_: vec!["user.created".to_string()],
            data: None,
        };
        assert!(pattern.matches(&event("user-service", "user.created")));
        assert!(!pattern.matches(&event("billing", "user.created")));
    }

    #[test]
    fn data_pattern_is_top_level_equality() {
        let pattern = EventPattern {
            source: vec![],
            type_: vec![],
            data: Some(HashMap::from([(
                "userId".to_string(),
                serde_json::json!("123"),
            )])),
        };
        assert!(pattern.matches(&event("user-service", "user.created")));

        let mismatched = EventPattern {
            source: vec![],
            type_: vec![],
            data: Some(HashMap::from([(
                "userId".to_string(),
                serde_json::json!("999"),
            )])),
        };
        assert!(!mismatched.matches(&event("user-service", "user.created")));
    }
}
