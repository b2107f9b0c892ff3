use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("confidence level must be 1, 2 or 3, got {0}")]
    ConfidenceLevelOutOfRange(u8),
}

/// Validated query against a single panel: registry id, panel name and the
/// confidence level of interest. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelQuery {
    id: u32,
    name: String,
    confidence_level: u8,
}

impl PanelQuery {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        confidence_level: u8,
    ) -> Result<Self, FormatError> {
        if !(1..=3).contains(&confidence_level) {
            return Err(FormatError::ConfidenceLevelOutOfRange(confidence_level));
        }
        Ok(Self {
            id,
            name: name.into(),
            confidence_level,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn confidence_level(&self) -> u8 {
        self.confidence_level
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/query.rs"]
mod tests;
