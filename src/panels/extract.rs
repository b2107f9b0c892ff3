use tracing::warn;

use crate::api::types::Panel;
use crate::model::maps::{AliasSet, GeneSymbolMap, PanelGeneMap, PanelsByName};

/// Collect the gene symbols of a panel at or above the confidence threshold,
/// keyed by HGNC symbol. Entries whose confidence level cannot be read as an
/// integer are skipped with a diagnostic; a symbol listed twice within the
/// same panel keeps its last alias set.
pub fn extract_gene_symbols(panel: &Panel, confidence_threshold: u8) -> GeneSymbolMap {
    let mut symbols = GeneSymbolMap::new();
    for gene in &panel.genes {
        let level = match gene.confidence_level.as_int() {
            Some(level) => level,
            None => {
                warn!(
                    panel = %panel.name,
                    symbol = %gene.gene_data.hgnc_symbol,
                    confidence_level = %gene.confidence_level,
                    "unreadable confidence level, skipping gene"
                );
                continue;
            }
        };
        if level < i64::from(confidence_threshold) {
            continue;
        }
        let aliases: AliasSet = gene.gene_data.alias.iter().cloned().collect();
        symbols.insert(gene.gene_data.hgnc_symbol.clone(), aliases);
    }
    symbols
}

/// Reshape a panel listing into panel name -> gene symbol -> aliases. Both
/// levels iterate in ascending lexicographic key order.
pub fn build_panel_gene_map(panels: &PanelsByName, confidence_threshold: u8) -> PanelGeneMap {
    panels
        .iter()
        .map(|(name, panel)| (name.clone(), extract_gene_symbols(panel, confidence_threshold)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/panels/extract.rs"]
mod tests;
