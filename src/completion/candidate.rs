//! Completion candidates handed back to the host

use serde::{Deserialize, Serialize};
use std::fmt;

use super::catalog::AttributeSpec;

/// Classification of a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    Property,
    Keyword,
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateKind::Property => write!(f, "property"),
            CandidateKind::Keyword => write!(f, "keyword"),
        }
    }
}

/// How the host should interpret `insert_text`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertFormat {
    /// Literal text
    PlainText,
    /// Snippet with cursor stops and choice lists
    Snippet,
}

/// A single suggestion offered at the cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionCandidate {
    pub label: String,
    pub kind: CandidateKind,
    pub documentation: Option<String>,
    pub insert_text: String,
    pub insert_format: InsertFormat,
}

impl CompletionCandidate {
    /// Literal keyword, inserted as-is
    pub fn keyword(literal: &str) -> Self {
        Self {
            label: literal.to_string(),
            kind: CandidateKind::Keyword,
            documentation: None,
            insert_text: literal.to_string(),
            insert_format: InsertFormat::PlainText,
        }
    }

    /// Property candidate built from a catalog entry
    pub fn from_spec(spec: &AttributeSpec, insert_text: &str, insert_format: InsertFormat) -> Self {
        Self {
            label: spec.key.to_string(),
            kind: spec.kind,
            documentation: Some(spec.documentation.to_string()),
            insert_text: insert_text.to_string(),
            insert_format,
        }
    }
}

impl fmt::Display for CompletionCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.kind)
    }
}
