//! Typed-record validation (spec §4.4) over configuration content and
//! dependency descriptors.
//!
//! The dependency schema (spec §6.2) has fixed, known-in-advance fields, so
//! it's validated by hand to get the exact domain-oriented message wording
//! spec §4.4 calls for ("Must be one of: ...", "Invalid format: ...",
//! "Missing required field: ..."). Arbitrary caller-supplied schemas (the
//! `createCustom` escape hatch, and `ConfigurationService::validate_configuration`)
//! go through `jsonschema` (Draft-7) instead.

use std::time::{Duration, Instant};

use regex_lite::Regex;
use serde_json::Value;

/// One validation failure: `{path, message, value?}` (spec §4.4).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
    pub value: Option<Value>,
}

impl ValidationIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ValidationOutcome {
    pub ok: bool,
    pub errors: Vec<ValidationIssue>,
}

impl ValidationOutcome {
    pub fn ok() -> Self {
        Self { ok: true, errors: vec![] }
    }

    pub fn failed(errors: Vec<ValidationIssue>) -> Self {
        Self { ok: errors.is_empty(), errors }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct InvalidRecord {
    pub index: usize,
    pub errors: Vec<ValidationIssue>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration: Duration,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct BatchOutcome {
    pub ok: bool,
    pub validated: Vec<Value>,
    pub invalid: Vec<InvalidRecord>,
    pub summary: BatchSummary,
}

/// Validates records against the fixed `ApplicationDependency` schema
/// (spec §6.2).
pub struct DependencyValidator {
    id_pattern: Regex,
    name_pattern: Regex,
    region_patterns: [Regex; 2],
    version_pattern: Regex,
}

const DEPENDENCY_TYPES: &[&str] = &[
    "database", "cache", "queue", "storage", "compute", "network", "secrets", "config",
    "event-bus",
];
const DEPENDENCY_PROVIDERS: &[&str] = &["aws", "azure", "gcp"];
const DEPENDENCY_STATUSES: &[&str] = &[
    "pending", "validating", "valid", "invalid", "deploying", "deployed", "failed",
];
const DEPENDENCY_ENVIRONMENTS: &[&str] = &["dev", "staging", "prod"];

impl Default for DependencyValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyValidator {
    pub fn new() -> Self {
        Self {
            id_pattern: Regex::new(r"^dep-[a-z0-9-]+$").expect("static pattern"),
            name_pattern: Regex::new(r"^[a-zA-Z0-9-_]+$").expect("static pattern"),
            region_patterns: [
                Regex::new(r"^[a-z]{2}-[a-z]+-\d$").expect("static pattern"),
                Regex::new(r"^[a-z]+-[a-z]+-\d$").expect("static pattern"),
            ],
            version_pattern: Regex::new(r"^\d+\.\d+\.\d+$").expect("static pattern"),
        }
    }

    fn one_of_message(field: &str, options: &[&str]) -> String {
        let _ = field;
        format!("Must be one of: {}", options.join(", "))
    }

    /// Validate a single record, given as a JSON value (the record shape
    /// the descriptor round-trips through on the wire).
    pub fn validate(&self, record: &Value) -> ValidationOutcome {
        let mut errors = Vec::new();
        let Some(obj) = record.as_object() else {
            return ValidationOutcome::failed(vec![ValidationIssue::new(
                "",
                "Record must be a JSON object",
            )]);
        };

        self.require_string(obj, "id", &mut errors);
        self.require_string(obj, "name", &mut errors);
        self.require_string(obj, "type", &mut errors);
        self.require_string(obj, "provider", &mut errors);
        self.require_string(obj, "region", &mut errors);
        self.require_string(obj, "status", &mut errors);
        self.require_string(obj, "created", &mut errors);
        self.require_string(obj, "updated", &mut errors);

        if let Some(id) = obj.get("id").and_then(Value::as_str) {
            if !self.id_pattern.is_match(id) {
                errors.push(
                    ValidationIssue::new(
                        "/id",
                        "Invalid format: does not match pattern ^dep-[a-z0-9-]+$",
                    )
                    .with_value(Value::String(id.to_string())),
                );
            }
        }

        if let Some(name) = obj.get("name").and_then(Value::as_str) {
            if name.is_empty() || name.chars().count() > 255 {
                errors.push(ValidationIssue::new(
                    "/name",
                    "Must be between 1 and 255 characters",
                ));
            } else if !self.name_pattern.is_match(name) {
                errors.push(ValidationIssue::new(
                    "/name",
                    "Invalid format: does not match pattern ^[a-zA-Z0-9-_]+$",
                ));
            }
        }

        if let Some(type_) = obj.get("type").and_then(Value::as_str) {
            if !DEPENDENCY_TYPES.contains(&type_) {
                errors.push(
                    ValidationIssue::new("/type", Self::one_of_message("type", DEPENDENCY_TYPES))
                        .with_value(Value::String(type_.to_string())),
                );
            }
        }

        if let Some(provider) = obj.get("provider").and_then(Value::as_str) {
            if !DEPENDENCY_PROVIDERS.contains(&provider) {
                errors.push(ValidationIssue::new(
                    "/provider",
                    Self::one_of_message("provider", DEPENDENCY_PROVIDERS),
                ));
            }
        }

        if let Some(region) = obj.get("region").and_then(Value::as_str) {
            let matches = self.region_patterns.iter().any(|p| p.is_match(region));
            if !matches {
                errors.push(
                    ValidationIssue::new(
                        "/region",
                        "Invalid format: does not match pattern ^[a-z]{2}-[a-z]+-\\d$ or ^[a-z]+-[a-z]+-\\d$",
                    )
                    .with_value(Value::String(region.to_string())),
                );
            }
        }

        if let Some(status) = obj.get("status").and_then(Value::as_str) {
            if !DEPENDENCY_STATUSES.contains(&status) {
                errors.push(ValidationIssue::new(
                    "/status",
                    Self::one_of_message("status", DEPENDENCY_STATUSES),
                ));
            }
        }

        if let Some(version) = obj.get("version").and_then(Value::as_str) {
            if !self.version_pattern.is_match(version) {
                errors.push(ValidationIssue::new(
                    "/version",
                    "Invalid format: does not match pattern ^\\d+\\.\\d+\\.\\d+$",
                ));
            }
        }

        if let Some(environment) = obj.get("environment").and_then(Value::as_str) {
            if !DEPENDENCY_ENVIRONMENTS.contains(&environment) {
                errors.push(ValidationIssue::new(
                    "/environment",
                    Self::one_of_message("environment", DEPENDENCY_ENVIRONMENTS),
                ));
            }
        }

        if let Some(description) = obj.get("description").and_then(Value::as_str) {
            if description.chars().count() > 1000 {
                errors.push(ValidationIssue::new(
                    "/description",
                    "Must be at most 1000 characters",
                ));
            }
        }

        let known_fields = [
            "id", "name", "type", "provider", "region", "status", "created", "updated",
            "version", "environment", "description", "configuration", "policy",
            "generatedName", "tags", "dependencies", "deployedAt",
        ];
        for key in obj.keys() {
            if !known_fields.contains(&key.as_str()) {
                errors.push(ValidationIssue::new(
                    format!("/{key}"),
                    format!("Unknown additional property: {key}"),
                ));
            }
        }

        ValidationOutcome::failed(errors)
    }

    fn require_string(
        &self,
        obj: &serde_json::Map<String, Value>,
        field: &str,
        errors: &mut Vec<ValidationIssue>,
    ) {
        match obj.get(field) {
            None => errors.push(ValidationIssue::new(
                format!("/{field}"),
                format!("Missing required field: {field}"),
            )),
            Some(v) if !v.is_string() => errors.push(ValidationIssue::new(
                format!("/{field}"),
                format!("Must be a string: {field}"),
            )),
            Some(_) => {}
        }
    }

    pub fn validate_batch(&self, records: &[Value]) -> BatchOutcome {
        let start = Instant::now();
        let mut validated = Vec::new();
        let mut invalid = Vec::new();

        for (index, record) in records.iter().enumerate() {
            let outcome = self.validate(record);
            if outcome.ok {
                validated.push(record.clone());
            } else {
                invalid.push(InvalidRecord {
                    index,
                    errors: outcome.errors,
                });
            }
        }

        let total = records.len();
        let failed = invalid.len();
        BatchOutcome {
            ok: failed == 0,
            validated,
            invalid,
            summary: BatchSummary {
                total,
                passed: total - failed,
                failed,
                duration: start.elapsed(),
            },
        }
    }
}

/// A compiled JSON Schema (Draft-7) validator for arbitrary, caller-supplied
/// schemas — the `createCustom` escape hatch and
/// `ConfigurationService::validate_configuration`.
pub struct SchemaValidator {
    compiled: jsonschema::Validator,
}

impl SchemaValidator {
    pub fn compile(schema: &Value) -> Result<Self, String> {
        let compiled = jsonschema::options()
            .with_draft(jsonschema::Draft::Draft7)
            .build(schema)
            .map_err(|e| e.to_string())?;
        Ok(Self { compiled })
    }

    pub fn validate(&self, record: &Value) -> ValidationOutcome {
        let errors: Vec<ValidationIssue> = self
            .compiled
            .iter_errors(record)
            .map(|e| ValidationIssue::new(e.instance_path.to_string(), e.to_string()))
            .collect();
        ValidationOutcome::failed(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_dependency() -> Value {
        json!({
            "id": "dep-web-app-db",
            "name": "web-app-db",
            "type": "database",
            "provider": "aws",
            "region": "us-east-1",
            "status": "pending",
            "created": "2026-01-01T00:00:00Z",
            "updated": "2026-01-01T00:00:00Z",
        })
    }

    #[test]
    fn valid_record_passes() {
        let validator = DependencyValidator::new();
        let outcome = validator.validate(&valid_dependency());
        assert!(outcome.ok, "{:?}", outcome.errors);
    }

    #[test]
    fn bad_id_and_region_are_flagged_at_their_paths() {
        let validator = DependencyValidator::new();
        let mut record = valid_dependency();
        record["id"] = json!("invalid-id");
        record["region"] = json!("bad-region");

        let outcome = validator.validate(&record);
        assert!(!outcome.ok);
        let paths: Vec<&str> = outcome.errors.iter().map(|e| e.path.as_str()).collect();
        assert!(paths.contains(&"/id"));
        assert!(paths.contains(&"/region"));
    }

    #[test]
    fn batch_of_100_flags_exactly_the_bad_one() {
        let validator = DependencyValidator::new();
        let mut records: Vec<Value> = (0..100)
            .map(|i| {
                let mut record = valid_dependency();
                record["id"] = json!(format!("dep-web-app-{i}"));
                record
            })
            .collect();
        records[42]["id"] = json!("invalid-id");
        records[42]["region"] = json!("bad-region");

        let outcome = validator.validate_batch(&records);
        assert_eq!(outcome.invalid.len(), 1);
        assert_eq!(outcome.invalid[0].index, 42);
        assert_eq!(outcome.summary.total, 100);
        assert_eq!(outcome.summary.passed, 99);
        assert_eq!(outcome.summary.failed, 1);
    }

    #[test]
    fn missing_required_field_message() {
        let validator = DependencyValidator::new();
        let mut record = valid_dependency();
        record.as_object_mut().unwrap().remove("name");
        let outcome = validator.validate(&record);
        assert!(outcome.errors.iter().any(|e| e.path == "/name"
            && e.message.contains("Missing required field")));
    }

    #[test]
    fn enum_violation_message_lists_options() {
        let validator = DependencyValidator::new();
        let mut record = valid_dependency();
        record["type"] = json!("not-a-type");
        let outcome = validator.validate(&record);
        let err = outcome.errors.iter().find(|e| e.path == "/type").unwrap();
        assert!(err.message.starts_with("Must be one of:"));
    }
}
