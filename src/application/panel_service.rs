// Panel service - Use case for turning panel definitions into stat panels
use crate::domain::error::PanelError;
use crate::domain::stat_panel::StatPanel;
use crate::infrastructure::config::{prepare_target, PanelDefinition, PanelsConfig};
use anyhow::Context;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct PanelService {
    panels_config: PanelsConfig,
}

impl PanelService {
    pub fn new(panels_config: PanelsConfig) -> Self {
        Self { panels_config }
    }

    /// Build every configured panel, in file order
    pub fn build_panels(&self) -> anyhow::Result<Vec<StatPanel>> {
        let panels = self
            .panels_config
            .panels
            .iter()
            .map(|definition| {
                build_panel(definition, &self.panels_config.vars).with_context(|| {
                    tracing::warn!("Rejecting panel {}", definition.params.title);
                    format!("Failed to build panel \"{}\"", definition.params.title)
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        tracing::info!("Built {} stat panels", panels.len());
        Ok(panels)
    }
}

/// Create the panel, then append targets, links, thresholds, mappings and
/// data links in that order
pub fn build_panel(
    definition: &PanelDefinition,
    vars: &HashMap<String, String>,
) -> Result<StatPanel, PanelError> {
    let targets = definition.targets.iter().cloned().map(|mut target| {
        prepare_target(&mut target, vars);
        target
    });

    let panel = StatPanel::create(definition.params.clone())
        .add_targets(targets)?
        .add_links(definition.links.iter().cloned())
        .add_thresholds(definition.thresholds.iter().cloned())
        .add_mappings(definition.mappings.iter().cloned())
        .add_data_links(definition.data_links.iter().cloned());

    tracing::debug!(
        "Built panel {} ({:?} schema, {} targets, {} mappings)",
        panel.title(),
        panel.schema(),
        panel.targets().len(),
        panel.field_defaults().mappings.len()
    );

    Ok(panel)
}
