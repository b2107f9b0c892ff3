use tracing::{debug, info};

use crate::api::types::{Panel, PanelPage};
use crate::api::{ApiError, PANELAPP_BASE_URL};
use crate::model::maps::{GeneSymbolMap, PanelGeneMap, PanelsByName};
use crate::panels::extract;

#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub base_url: String,
    /// Genes below this confidence level are excluded from extraction.
    pub confidence_threshold: u8,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: PANELAPP_BASE_URL.to_string(),
            confidence_threshold: 2,
        }
    }
}

/// Synchronous PanelApp registry client. Each request blocks until the
/// response arrives or the transport fails; failures propagate to the caller
/// unretried.
#[derive(Clone)]
pub struct PanelAppClient {
    base_url: String,
    confidence_threshold: u8,
    agent: ureq::Agent,
}

impl Default for PanelAppClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelAppClient {
    pub fn new() -> Self {
        Self::with_options(ClientOptions::default())
    }

    pub fn with_options(options: ClientOptions) -> Self {
        Self {
            base_url: options.base_url.trim_end_matches('/').to_string(),
            confidence_threshold: options.confidence_threshold,
            agent: ureq::agent(),
        }
    }

    pub fn confidence_threshold(&self) -> u8 {
        self.confidence_threshold
    }

    /// Walk the paginated `/panels` listing and return every panel keyed by
    /// name. Panel names must be unique across the whole traversal; a
    /// collision means the listing is inconsistent and is rejected.
    pub fn fetch_all_panels(&self) -> Result<PanelsByName, ApiError> {
        let mut panels = PanelsByName::new();
        let mut next = Some(format!("{}/panels", self.base_url));
        while let Some(url) = next {
            debug!(url = %url, "fetching panel listing page");
            let page: PanelPage = self.agent.get(&url).call()?.into_json()?;
            for panel in page.results {
                if panels.contains_key(&panel.name) {
                    return Err(ApiError::DuplicatePanel(panel.name));
                }
                panels.insert(panel.name.clone(), panel);
            }
            next = page.next;
        }
        Ok(panels)
    }

    /// Fetch the detail object for one panel, including gene membership.
    pub fn fetch_panel_genes(&self, panel_id: u32) -> Result<Panel, ApiError> {
        let url = format!("{}/panels/{}", self.base_url, panel_id);
        info!(panel_id, "requesting panel detail");
        let panel: Panel = self.agent.get(&url).call()?.into_json()?;
        Ok(panel)
    }

    pub fn extract_gene_symbols(&self, panel: &Panel) -> GeneSymbolMap {
        extract::extract_gene_symbols(panel, self.confidence_threshold)
    }

    pub fn build_panel_gene_map(&self, panels: &PanelsByName) -> PanelGeneMap {
        extract::build_panel_gene_map(panels, self.confidence_threshold)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/api/client.rs"]
mod tests;
