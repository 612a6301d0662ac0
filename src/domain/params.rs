// Stat panel construction parameters
use super::plugin_version::PluginVersion;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Auto,
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Value,
    Background,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphMode {
    None,
    #[default]
    Area,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JustifyMode {
    #[default]
    Auto,
    Center,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdsMode {
    #[default]
    Absolute,
    Percentage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatDirection {
    #[default]
    #[serde(rename = "h")]
    Horizontal,
    #[serde(rename = "v")]
    Vertical,
}

/// Everything `StatPanel::create` needs. Only `title` is required; use
/// `StatPanelParams::new` with struct update syntax for the rest:
///
/// ```
/// use stat_panels::domain::params::StatPanelParams;
///
/// let params = StatPanelParams {
///     unit: "bytes".to_string(),
///     decimals: Some(1),
///     ..StatPanelParams::new("Memory")
/// };
/// assert_eq!(params.reducer_function, "mean");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatPanelParams {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub transparent: bool,
    pub datasource: Option<Value>,

    // Value reduction
    #[serde(default)]
    pub all_values: bool,
    pub value_limit: Option<u32>,
    #[serde(default = "default_reducer_function")]
    pub reducer_function: String,
    #[serde(default)]
    pub fields: String,

    // Display
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub color_mode: ColorMode,
    #[serde(default)]
    pub graph_mode: GraphMode,
    #[serde(default)]
    pub justify_mode: JustifyMode,

    // Field defaults
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Kept as given, so `0` stays an integer and `0.5` a float
    pub min: Option<Number>,
    pub max: Option<Number>,
    pub decimals: Option<i32>,
    pub display_name: Option<String>,
    pub no_value: Option<String>,
    #[serde(default)]
    pub thresholds_mode: ThresholdsMode,

    // Repetition
    pub repeat: Option<String>,
    #[serde(default)]
    pub repeat_direction: RepeatDirection,
    pub repeat_max_per_row: Option<u32>,

    #[serde(default)]
    pub plugin_version: PluginVersion,
}

fn default_reducer_function() -> String {
    "mean".to_string()
}

fn default_unit() -> String {
    "none".to_string()
}

impl StatPanelParams {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            transparent: false,
            datasource: None,
            all_values: false,
            value_limit: None,
            reducer_function: default_reducer_function(),
            fields: String::new(),
            orientation: Orientation::default(),
            color_mode: ColorMode::default(),
            graph_mode: GraphMode::default(),
            justify_mode: JustifyMode::default(),
            unit: default_unit(),
            min: None,
            max: None,
            decimals: None,
            display_name: None,
            no_value: None,
            thresholds_mode: ThresholdsMode::default(),
            repeat: None,
            repeat_direction: RepeatDirection::default(),
            repeat_max_per_row: None,
            plugin_version: PluginVersion::default(),
        }
    }
}
