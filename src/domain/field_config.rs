// Schema-dependent parts of a stat panel: reduce options, display options
// and field defaults, arranged either in the legacy or the modern layout.
use super::params::{ColorMode, GraphMode, JustifyMode, Orientation, ThresholdsMode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A `{color, value}` threshold boundary. The base step has no value and
/// serializes as `"value": null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdStep {
    pub color: String,
    #[serde(default)]
    pub value: Option<f64>,
}

impl ThresholdStep {
    pub fn new(color: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            color: color.into(),
            value,
        }
    }

    pub fn base(color: impl Into<String>) -> Self {
        Self::new(color, None)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Thresholds {
    pub mode: ThresholdsMode,
    pub steps: Vec<ThresholdStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefaults {
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_value: Option<String>,
    pub thresholds: Thresholds,
    pub mappings: Vec<Map<String, Value>>,
    pub links: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReduceOptions {
    pub values: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    pub calcs: Vec<String>,
    pub fields: String,
}

impl ReduceOptions {
    /// `limit` only survives when every value is shown.
    pub fn new(all_values: bool, value_limit: Option<u32>, reducer: &str, fields: &str) -> Self {
        Self {
            values: all_values,
            limit: value_limit.filter(|_| all_values),
            calcs: vec![reducer.to_string()],
            fields: fields.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    pub orientation: Orientation,
    pub color_mode: ColorMode,
    pub graph_mode: GraphMode,
    pub justify_mode: JustifyMode,
}

/// Pre-7 layout: reduction and defaults both live under `fieldOptions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldOptions {
    #[serde(flatten)]
    pub reduce: ReduceOptions,
    pub defaults: FieldDefaults,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyOptions {
    pub field_options: FieldOptions,
    #[serde(flatten)]
    pub display: DisplayOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModernOptions {
    pub reduce_options: ReduceOptions,
    #[serde(flatten)]
    pub display: DisplayOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldConfig {
    pub defaults: FieldDefaults,
}

/// The version-dependent half of a panel. Flattened into the panel object,
/// so exactly one of the two layouts appears in the output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PanelLayout {
    Legacy {
        options: LegacyOptions,
    },
    Modern {
        options: ModernOptions,
        #[serde(rename = "fieldConfig")]
        field_config: FieldConfig,
    },
}

impl PanelLayout {
    pub fn legacy(reduce: ReduceOptions, display: DisplayOptions, defaults: FieldDefaults) -> Self {
        PanelLayout::Legacy {
            options: LegacyOptions {
                field_options: FieldOptions { reduce, defaults },
                display,
            },
        }
    }

    pub fn modern(reduce: ReduceOptions, display: DisplayOptions, defaults: FieldDefaults) -> Self {
        PanelLayout::Modern {
            options: ModernOptions {
                reduce_options: reduce,
                display,
            },
            field_config: FieldConfig { defaults },
        }
    }

    pub fn defaults(&self) -> &FieldDefaults {
        match self {
            PanelLayout::Legacy { options } => &options.field_options.defaults,
            PanelLayout::Modern { field_config, .. } => &field_config.defaults,
        }
    }

    pub fn defaults_mut(&mut self) -> &mut FieldDefaults {
        match self {
            PanelLayout::Legacy { options } => &mut options.field_options.defaults,
            PanelLayout::Modern { field_config, .. } => &mut field_config.defaults,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_limit_requires_all_values() {
        assert_eq!(ReduceOptions::new(false, Some(5), "mean", "").limit, None);
        assert_eq!(ReduceOptions::new(true, Some(5), "mean", "").limit, Some(5));
        assert_eq!(ReduceOptions::new(true, None, "mean", "").limit, None);
    }

    #[test]
    fn test_base_threshold_step_serializes_null_value() {
        let steps = vec![ThresholdStep::base("green"), ThresholdStep::new("red", Some(80.0))];
        assert_eq!(
            serde_json::to_value(&steps).unwrap(),
            json!([
                { "color": "green", "value": null },
                { "color": "red", "value": 80.0 }
            ])
        );
    }
}
