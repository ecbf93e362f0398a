//! Pathbuilder 2e export importer.
//!
//! Loads a character export (the JSON behind Pathbuilder's "Export JSON"
//! button) and hands back the inner character document. Only the document's
//! outer shape is checked here; the derivation stages read fields leniently.

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use super::pathbuilder_types::{RawDocument, BUILD_KEY};

/// Errors that can occur during import.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Export file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Invalid character document: {0}")]
    InvalidDocument(String),
}

/// Importer for one Pathbuilder export file.
pub struct PathbuilderImporter {
    export_path: PathBuf,
}

impl PathbuilderImporter {
    /// Create an importer for the export at `export_path`.
    pub fn new(export_path: impl Into<PathBuf>) -> Self {
        Self {
            export_path: export_path.into(),
        }
    }

    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    /// Read and parse the export file.
    pub fn import(&self) -> Result<RawDocument, ImportError> {
        if !self.export_path.exists() {
            return Err(ImportError::FileNotFound(self.export_path.clone()));
        }

        let content = std::fs::read_to_string(&self.export_path)?;
        tracing::debug!(
            path = %self.export_path.display(),
            bytes = content.len(),
            "Read Pathbuilder export"
        );
        Self::parse_str(&content)
    }

    /// Parse export JSON text.
    pub fn parse_str(json: &str) -> Result<RawDocument, ImportError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Accept an already-parsed export.
    ///
    /// The root must be an object. A `build` key holding an object is
    /// unwrapped; any other `build` value is left alone and the root itself
    /// is treated as the character.
    pub fn from_value(value: Value) -> Result<RawDocument, ImportError> {
        let Value::Object(mut root) = value else {
            return Err(ImportError::InvalidDocument(format!(
                "expected a JSON object at the root, found {}",
                json_kind(&value)
            )));
        };

        if root.get("success").and_then(Value::as_bool) == Some(false) {
            tracing::warn!("Export is flagged unsuccessful; reading it anyway");
        }

        if root.get(BUILD_KEY).is_some_and(Value::is_object) {
            if let Some(build) = root.remove(BUILD_KEY) {
                return Ok(RawDocument::new(build));
            }
        }

        Ok(RawDocument::new(Value::Object(root)))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
