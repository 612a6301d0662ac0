// Stat panel domain model and its copy-on-append builder operations
use super::error::PanelError;
use super::field_config::{
    DisplayOptions, FieldDefaults, PanelLayout, ReduceOptions, ThresholdStep, Thresholds,
};
use super::params::{RepeatDirection, StatPanelParams};
use super::plugin_version::{PluginVersion, SchemaKind};
use super::ref_id::ref_id;
use serde::Serialize;
use serde_json::{Map, Value};

const PANEL_TYPE: &str = "stat";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Repeat {
    pub repeat: String,
    pub repeat_direction: RepeatDirection,
    pub repeat_max_per_row: Option<u32>,
}

/// A single "stat" panel, ready to be serialized into a dashboard's panel
/// list.
///
/// Every `add_*` operation borrows the panel and returns an extended copy,
/// so one base panel can be branched into several variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatPanel {
    #[serde(rename = "type")]
    kind: &'static str,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    transparent: bool,
    datasource: Option<Value>,
    targets: Vec<Map<String, Value>>,
    links: Vec<Value>,
    #[serde(flatten)]
    repeat: Option<Repeat>,
    plugin_version: PluginVersion,
    #[serde(flatten)]
    layout: PanelLayout,

    #[serde(skip)]
    next_target: usize,
    #[serde(skip)]
    next_mapping: u64,
}

impl StatPanel {
    pub fn create(params: StatPanelParams) -> Self {
        let reduce = ReduceOptions::new(
            params.all_values,
            params.value_limit,
            &params.reducer_function,
            &params.fields,
        );
        let display = DisplayOptions {
            orientation: params.orientation,
            color_mode: params.color_mode,
            graph_mode: params.graph_mode,
            justify_mode: params.justify_mode,
        };
        let defaults = FieldDefaults {
            unit: params.unit,
            min: params.min,
            max: params.max,
            decimals: params.decimals,
            display_name: params.display_name,
            no_value: params.no_value,
            thresholds: Thresholds {
                mode: params.thresholds_mode,
                steps: Vec::new(),
            },
            mappings: Vec::new(),
            links: Vec::new(),
        };

        let layout = match params.plugin_version.schema() {
            SchemaKind::Modern => PanelLayout::modern(reduce, display, defaults),
            SchemaKind::Legacy => PanelLayout::legacy(reduce, display, defaults),
        };

        let repeat = params.repeat.map(|variable| Repeat {
            repeat: variable,
            repeat_direction: params.repeat_direction,
            repeat_max_per_row: params.repeat_max_per_row,
        });

        Self {
            kind: PANEL_TYPE,
            title: params.title,
            description: params.description,
            transparent: params.transparent,
            datasource: params.datasource,
            targets: Vec::new(),
            links: Vec::new(),
            repeat,
            plugin_version: params.plugin_version,
            layout,
            next_target: 0,
            next_mapping: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn schema(&self) -> SchemaKind {
        match self.layout {
            PanelLayout::Legacy { .. } => SchemaKind::Legacy,
            PanelLayout::Modern { .. } => SchemaKind::Modern,
        }
    }

    pub fn targets(&self) -> &[Map<String, Value>] {
        &self.targets
    }

    pub fn links(&self) -> &[Value] {
        &self.links
    }

    pub fn field_defaults(&self) -> &FieldDefaults {
        self.layout.defaults()
    }

    /// Appends `target` with the next letter as its `refId`, overriding any
    /// `refId` the caller supplied. Fails once A..Z are used up.
    pub fn add_target(&self, mut target: Map<String, Value>) -> Result<Self, PanelError> {
        let id = ref_id(self.next_target)?;
        target.insert("refId".to_string(), Value::String(id));

        let mut panel = self.clone();
        panel.targets.push(target);
        panel.next_target += 1;
        Ok(panel)
    }

    pub fn add_targets<I>(&self, targets: I) -> Result<Self, PanelError>
    where
        I: IntoIterator<Item = Map<String, Value>>,
    {
        targets
            .into_iter()
            .try_fold(self.clone(), |panel, target| panel.add_target(target))
    }

    pub fn add_link(&self, link: Value) -> Self {
        let mut panel = self.clone();
        panel.links.push(link);
        panel
    }

    pub fn add_links<I>(&self, links: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        links
            .into_iter()
            .fold(self.clone(), |panel, link| panel.add_link(link))
    }

    pub fn add_threshold(&self, step: ThresholdStep) -> Self {
        let mut panel = self.clone();
        panel.layout.defaults_mut().thresholds.steps.push(step);
        panel
    }

    pub fn add_thresholds<I>(&self, steps: I) -> Self
    where
        I: IntoIterator<Item = ThresholdStep>,
    {
        steps
            .into_iter()
            .fold(self.clone(), |panel, step| panel.add_threshold(step))
    }

    /// Appends `mapping` with the next integer `id`, starting at 0.
    pub fn add_mapping(&self, mut mapping: Map<String, Value>) -> Self {
        mapping.insert("id".to_string(), Value::from(self.next_mapping));

        let mut panel = self.clone();
        panel.layout.defaults_mut().mappings.push(mapping);
        panel.next_mapping += 1;
        panel
    }

    pub fn add_mappings<I>(&self, mappings: I) -> Self
    where
        I: IntoIterator<Item = Map<String, Value>>,
    {
        mappings
            .into_iter()
            .fold(self.clone(), |panel, mapping| panel.add_mapping(mapping))
    }

    pub fn add_data_link(&self, link: Value) -> Self {
        let mut panel = self.clone();
        panel.layout.defaults_mut().links.push(link);
        panel
    }

    pub fn add_data_links<I>(&self, links: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        links
            .into_iter()
            .fold(self.clone(), |panel, link| panel.add_data_link(link))
    }

    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
