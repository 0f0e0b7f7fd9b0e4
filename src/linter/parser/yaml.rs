//! YAML parsing for Kubernetes manifest files.
//!
//! Manifest files are multi-document streams; a kustomization resource
//! check loads its file again as a single document, so both entry points
//! live here together with the small field accessors the rules need.

use serde_yaml::Value;
use std::collections::BTreeSet;
use std::path::Path;

/// One parsed document within a file's multi-document stream.
#[derive(Debug, Clone)]
pub struct Document {
    /// The parsed YAML value.
    pub value: Value,
    /// Line number the document starts on (1-indexed).
    pub line: u32,
}

/// Parse a YAML string as a multi-document stream.
///
/// The first malformed document fails the whole stream; callers treat
/// that as a parse failure for the file and skip per-document checks.
pub fn parse_documents(content: &str) -> Result<Vec<Document>, YamlParseError> {
    let mut documents = Vec::new();
    let mut line_number = 1u32;

    // Split on document separator and track line numbers
    for chunk in content.split("\n---") {
        let doc = chunk.trim();
        if doc.is_empty() || is_comment_only(doc) {
            line_number += chunk.lines().count() as u32 + 1;
            continue;
        }

        match serde_yaml::from_str::<Value>(doc) {
            Ok(value) => documents.push(Document {
                value,
                line: line_number,
            }),
            Err(e) => {
                return Err(YamlParseError::SyntaxError(format!(
                    "at line {}: {}",
                    line_number, e
                )));
            }
        }

        line_number += chunk.lines().count() as u32 + 1;
    }

    Ok(documents)
}

/// Parse a YAML string as exactly one document.
///
/// Multi-document content is rejected, which is what the kustomization
/// resource check relies on.
pub fn parse_single_document(content: &str) -> Result<Value, YamlParseError> {
    serde_yaml::from_str(content).map_err(|e| YamlParseError::SyntaxError(e.to_string()))
}

/// Read a file and parse it as a multi-document stream.
pub fn load_documents(path: &Path) -> Result<Vec<Document>, YamlParseError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| YamlParseError::IoError(e.to_string()))?;

    parse_documents(&content)
}

/// Read a file and parse it as a single document.
pub fn load_single_document(path: &Path) -> Result<Value, YamlParseError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| YamlParseError::IoError(e.to_string()))?;

    parse_single_document(&content)
}

/// Get the `kind` of a document, or the empty string when absent.
pub fn document_kind(value: &Value) -> &str {
    value.get("kind").and_then(Value::as_str).unwrap_or("")
}

/// Get `metadata.name` of a document, or the empty string when absent.
pub fn object_name(value: &Value) -> &str {
    value
        .get("metadata")
        .and_then(|m| m.get("name"))
        .and_then(Value::as_str)
        .unwrap_or("")
}

/// Get the declared `resources` of a kustomization document.
///
/// Duplicates collapse and iteration order is sorted, so findings derived
/// from the set are stable across runs. Absent or non-list values yield an
/// empty set.
pub fn declared_resources(value: &Value) -> BTreeSet<String> {
    value
        .get("resources")
        .and_then(Value::as_sequence)
        .map(|seq| {
            seq.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn is_comment_only(doc: &str) -> bool {
    doc.lines().all(|l| {
        let l = l.trim();
        l.is_empty() || l.starts_with('#')
    })
}

/// YAML parsing errors.
#[derive(Debug, Clone)]
pub enum YamlParseError {
    /// The file could not be read.
    IoError(String),
    /// The content is not valid YAML.
    SyntaxError(String),
}

impl std::fmt::Display for YamlParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(msg) => write!(f, "failed to read file: {}", msg),
            Self::SyntaxError(msg) => write!(f, "YAML parse error: {}", msg),
        }
    }
}

impl std::error::Error for YamlParseError {}
