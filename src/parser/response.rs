//! Walks the nested news response.
//!
//! Response shape:
//! `{status, result: {docs: [{source: {enriched: {url: {<type>: item | [item]}}}}]}}`
//!
//! Handles envelope classification, document extraction and the
//! normalization of single-item fields into lists.

use super::schema::{ItemRecord, ResponseStatus};
use crate::shaper::AnalysisType;
use crate::utils::error::ShapeError;
use log::{debug, warn};
use serde_json::Value;

/// Decide whether the service reported success or failure
///
/// **Public** - called before any aggregation
///
/// # Errors
/// * `ShapeError::InvalidEnvelope` - body is not an object or has no usable `status`
pub fn classify_response(raw: &Value) -> Result<ResponseStatus, ShapeError> {
    let obj = raw.as_object().ok_or_else(|| {
        ShapeError::InvalidEnvelope("response must be a JSON object".to_string())
    })?;

    match obj.get("status").and_then(Value::as_str) {
        Some("OK") => Ok(ResponseStatus::Ok),
        Some("ERROR") => Ok(ResponseStatus::UpstreamError),
        Some(other) => Err(ShapeError::InvalidEnvelope(format!(
            "unexpected status '{}'",
            other
        ))),
        None => Err(ShapeError::InvalidEnvelope(
            "missing status field".to_string(),
        )),
    }
}

/// Get the documents of a successful response
///
/// A response without `result` or `result.docs` has no documents.
pub fn extract_documents(raw: &Value) -> Result<&[Value], ShapeError> {
    let Some(result) = raw.get("result") else {
        debug!("Response has no result, treating as zero documents");
        return Ok(&[]);
    };

    match result.get("docs") {
        None | Some(Value::Null) => {
            debug!("Response has no docs, treating as zero documents");
            Ok(&[])
        }
        Some(Value::Array(docs)) => Ok(docs.as_slice()),
        Some(other) => Err(ShapeError::InvalidEnvelope(format!(
            "result.docs must be an array, found {}",
            json_kind(other)
        ))),
    }
}

/// Extract the item records of one document
///
/// **Public** - main per-document entry point
///
/// # Arguments
/// * `doc` - One element of `result.docs`
/// * `index` - Position of the document, for error reporting
/// * `kind` - Which list to read under `source.enriched.url`
///
/// # Errors
/// * `ShapeError::MissingPath` - the document has no such list
/// * `ShapeError::InvalidItem` - a record is not an object with a string `text`
pub fn extract_items(
    doc: &Value,
    index: usize,
    kind: AnalysisType,
) -> Result<Vec<ItemRecord>, ShapeError> {
    let pointer = format!("/source/enriched/url/{}", kind.response_key());
    let field = doc.pointer(&pointer).ok_or_else(|| ShapeError::MissingPath {
        doc: index,
        path: format!("source.enriched.url.{}", kind.response_key()),
    })?;

    normalize_items(field, index)?
        .into_iter()
        .map(|item| {
            serde_json::from_value::<ItemRecord>(item.clone()).map_err(|e| {
                ShapeError::InvalidItem {
                    doc: index,
                    reason: e.to_string(),
                }
            })
        })
        .collect()
}

/// Coerce a one-or-many field into a list
///
/// **Private** - internal helper for extract_items
fn normalize_items(field: &Value, index: usize) -> Result<Vec<&Value>, ShapeError> {
    match field {
        Value::Array(items) => {
            if let Some(bad) = items.iter().find(|item| !item.is_object()) {
                return Err(ShapeError::InvalidItem {
                    doc: index,
                    reason: format!("expected an object, found {}", json_kind(bad)),
                });
            }
            Ok(items.iter().collect())
        }
        Value::Object(_) => Ok(vec![field]),
        other => Err(ShapeError::InvalidItem {
            doc: index,
            reason: format!("expected an object or array, found {}", json_kind(other)),
        }),
    }
}

impl ItemRecord {
    /// How much this record adds to its name's total
    ///
    /// Entities contribute their `count`; concepts and keywords contribute 1.
    pub fn occurrences(&self, kind: AnalysisType, doc: usize) -> Result<u64, ShapeError> {
        if !kind.counts_occurrences() {
            return Ok(1);
        }

        let count = self.count.as_ref().ok_or(ShapeError::MissingField {
            doc,
            field: "count",
        })?;

        parse_count(count).map_err(|reason| {
            warn!("Entity '{}' has an unusable count: {}", self.text, reason);
            ShapeError::InvalidCount { doc, reason }
        })
    }
}

/// Parse a non-negative integer count from a number or decimal string
pub fn parse_count(val: &Value) -> Result<u64, String> {
    if let Some(n) = val.as_u64() {
        return Ok(n);
    }

    if let Some(f) = val.as_f64() {
        if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
            return Ok(f as u64);
        }
        return Err(format!("{} is not a non-negative integer", f));
    }

    if let Some(s) = val.as_str() {
        return s
            .trim()
            .parse::<u64>()
            .map_err(|e| format!("'{}' is not a valid count: {}", s, e));
    }

    Err(format!("expected number or string, found {}", json_kind(val)))
}

fn json_kind(val: &Value) -> &'static str {
    match val {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
