use std::collections::{BTreeMap, BTreeSet};

use crate::api::types::Panel;

/// Deduplicated alias names for one gene.
pub type AliasSet = BTreeSet<String>;

/// HGNC symbol to its aliases, key-sorted.
pub type GeneSymbolMap = BTreeMap<String, AliasSet>;

/// Panel name to its gene map, key-sorted.
pub type PanelGeneMap = BTreeMap<String, GeneSymbolMap>;

/// All panels of the registry, keyed by unique panel name.
pub type PanelsByName = BTreeMap<String, Panel>;
