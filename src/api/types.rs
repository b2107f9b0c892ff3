use std::fmt;

use serde::{Deserialize, Serialize};

/// One page of the `/panels` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct PanelPage {
    pub results: Vec<Panel>,
    pub next: Option<String>,
}

/// A panel as returned by the registry. Listing pages omit gene membership,
/// so `genes` defaults to empty; fields the pipeline does not touch are kept
/// verbatim in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Panel {
    pub name: String,
    #[serde(default)]
    pub genes: Vec<GeneEntry>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneEntry {
    pub confidence_level: ConfidenceLevel,
    pub gene_data: GeneData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneData {
    pub hgnc_symbol: String,
    #[serde(default)]
    pub alias: Vec<String>,
}

/// The registry serves `confidence_level` as either a string or a number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfidenceLevel {
    Int(i64),
    Float(f64),
    Text(String),
}

impl ConfidenceLevel {
    /// Integer value of the field, if it has one. Floats truncate toward
    /// zero, text is trimmed and parsed.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Float(value) => Some(*value as i64),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{}", value),
            Self::Float(value) => write!(f, "{}", value),
            Self::Text(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/api/types.rs"]
mod tests;
