use std::collections::HashMap;

use jsonschema::{Draft, JSONSchema};
use once_cell::sync::Lazy;
use serde_json::Value;

use super::PricingRow;
use crate::{Error, Result, ValidationIssue};

/// Draft-7 schema for a single pricing row. Descriptive metadata fields
/// stay open-ended; only identity and rates are constrained.
static ROW_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema = serde_json::json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["provider", "model", "input_per_mtok"],
        "properties": {
            "provider": { "type": "string", "minLength": 1 },
            "model": { "type": "string", "minLength": 1 },
            "model_id": { "type": "string", "minLength": 1 },
            "input_per_mtok": { "type": "number", "minimum": 0 },
            "output_per_mtok": { "type": "number", "minimum": 0 },
            "cached_input_per_mtok": { "type": "number", "minimum": 0 },
            "currency": { "type": "string" },
            "source_url": { "type": "string" },
            "retrieved_at": { "type": "string" },
            "pricing_confidence": { "type": "string" },
            "tier": { "type": "string" },
            "modality": { "type": "string" },
            "tokenization": { "type": "string" },
            "notes": { "type": "string" }
        },
        "additionalProperties": true
    });
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("embedded pricing-row schema compiles")
});

/// Dot-separated path into the pricing document for row `index`.
fn issue_path(index: usize, instance_path: &str) -> String {
    let field = instance_path.trim_start_matches('/').replace('/', ".");
    if field.is_empty() {
        index.to_string()
    } else {
        format!("{}.{}", index, field)
    }
}

/// Validate raw pricing data into rows.
///
/// Accepts either a bare array of rows or a wrapper object with a `models`
/// array. Every violation is collected — never just the first — and
/// duplicate `(provider, model)` pairs are rejected. Failure is always the
/// structured [`Error::InvalidPricing`], never a panic, so the caller can
/// render a fallback state.
pub fn validate_prices(data: &Value) -> Result<Vec<PricingRow>> {
    let entries = match (data.as_array(), data.get("models").and_then(Value::as_array)) {
        (Some(rows), _) => rows,
        (None, Some(rows)) => rows,
        (None, None) => {
            return Err(Error::invalid_pricing(vec![ValidationIssue::new(
                "",
                "expected an array of pricing rows or an object with a `models` array",
            )]))
        }
    };

    let mut issues = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        if let Err(errors) = ROW_SCHEMA.validate(entry) {
            for error in errors {
                issues.push(ValidationIssue::new(
                    issue_path(index, &error.instance_path.to_string()),
                    error.to_string(),
                ));
            }
        }
    }
    if !issues.is_empty() {
        return Err(Error::invalid_pricing(issues));
    }

    let rows: Vec<PricingRow> = entries
        .iter()
        .map(|entry| serde_json::from_value(entry.clone()))
        .collect::<std::result::Result<_, _>>()?;

    let mut seen: HashMap<String, usize> = HashMap::new();
    for (index, row) in rows.iter().enumerate() {
        if let Some(first) = seen.insert(row.natural_id(), index) {
            issues.push(ValidationIssue::new(
                index.to_string(),
                format!(
                    "duplicate (provider, model) pair '{}' (first seen at row {})",
                    row.natural_id(),
                    first
                ),
            ));
        }
    }
    if !issues.is_empty() {
        return Err(Error::invalid_pricing(issues));
    }

    tracing::debug!(rows = rows.len(), "pricing data validated");
    Ok(rows)
}
