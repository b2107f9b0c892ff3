pub mod client;
pub mod types;

use thiserror::Error;

/// Public REST endpoint of the Genomics England PanelApp registry.
pub const PANELAPP_BASE_URL: &str = "https://panelapp.genomicsengland.co.uk/api/v1";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    Transport(#[from] ureq::Error),
    #[error("invalid json in response body: {0}")]
    Decode(#[from] std::io::Error),
    #[error("duplicate panel name in listing: {0}")]
    DuplicatePanel(String),
}
