use crate::domain::field_config::ThresholdStep;
use crate::domain::params::StatPanelParams;
use anyhow::Context;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

pub const DEFAULT_PANELS_PATH: &str = "config/panels";

#[derive(Debug, Deserialize, Clone)]
pub struct PanelsConfig {
    /// Values for `${name}` placeholders in target queries
    #[serde(default)]
    pub vars: HashMap<String, String>,
    #[serde(default)]
    pub panels: Vec<PanelDefinition>,
}

/// One stat panel: its construction parameters plus everything appended
/// to it afterwards.
#[derive(Debug, Deserialize, Clone)]
pub struct PanelDefinition {
    #[serde(flatten)]
    pub params: StatPanelParams,
    #[serde(default)]
    pub targets: Vec<Map<String, Value>>,
    #[serde(default)]
    pub thresholds: Vec<ThresholdStep>,
    #[serde(default)]
    pub mappings: Vec<Map<String, Value>>,
    #[serde(default)]
    pub links: Vec<Value>,
    #[serde(default)]
    pub data_links: Vec<Value>,
}

/// Load panel definitions from `path` (extension optional, format picked by
/// the `config` crate).
pub fn load_panels_config(path: &str) -> anyhow::Result<PanelsConfig> {
    read_panels_config(config::File::with_name(path))
        .with_context(|| format!("Failed to load panel definitions from {}", path))
}

/// Parse panel definitions from an in-memory TOML document
#[cfg(test)]
pub(crate) fn parse_panels_config(document: &str) -> anyhow::Result<PanelsConfig> {
    read_panels_config(config::File::from_str(document, config::FileFormat::Toml))
}

fn read_panels_config<S>(source: S) -> anyhow::Result<PanelsConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder().add_source(source).build()?;

    Ok(settings.try_deserialize()?)
}

/// Replace template variables in a query string
pub fn prepare_query(query: &str, vars: &HashMap<String, String>) -> String {
    let mut result = query.to_string();
    for (key, value) in vars {
        let placeholder = format!("${{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}

/// Apply `prepare_query` to every string inside a target, at any depth
pub fn prepare_target(target: &mut Map<String, Value>, vars: &HashMap<String, String>) {
    for value in target.values_mut() {
        prepare_value(value, vars);
    }
}

fn prepare_value(value: &mut Value, vars: &HashMap<String, String>) {
    match value {
        Value::String(s) => *s = prepare_query(s, vars),
        Value::Array(items) => items.iter_mut().for_each(|v| prepare_value(v, vars)),
        Value::Object(map) => map.values_mut().for_each(|v| prepare_value(v, vars)),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::params::Orientation;
    use serde_json::{json, Number};

    #[test]
    fn test_prepare_query() {
        let mut vars = HashMap::new();
        vars.insert("job".to_string(), "api".to_string());
        vars.insert("window".to_string(), "5m".to_string());

        let query = "rate(http_requests_total{job=\"${job}\"}[${window}])";
        let result = prepare_query(query, &vars);

        assert_eq!(result, "rate(http_requests_total{job=\"api\"}[5m])");
    }

    #[test]
    fn test_prepare_query_leaves_unknown_vars() {
        let vars = HashMap::from([("job".to_string(), "api".to_string())]);
        assert_eq!(
            prepare_query("up{job=\"${job}\", instance=\"${instance}\"}", &vars),
            "up{job=\"api\", instance=\"${instance}\"}"
        );
    }

    #[test]
    fn test_prepare_target_walks_nested_values() {
        let vars = HashMap::from([("db".to_string(), "metrics".to_string())]);
        let mut target = match json!({
            "expr": "SELECT * FROM ${db}",
            "interval": 30,
            "tags": [{ "value": "${db}" }],
            "extra": { "database": "${db}" }
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        prepare_target(&mut target, &vars);

        assert_eq!(target["expr"], json!("SELECT * FROM metrics"));
        assert_eq!(target["interval"], json!(30));
        assert_eq!(target["tags"][0]["value"], json!("metrics"));
        assert_eq!(target["extra"]["database"], json!("metrics"));
    }

    #[test]
    fn test_parse_panels_config() {
        let config = parse_panels_config(
            r#"
            [vars]
            job = "api"

            [[panels]]
            title = "Requests"
            unit = "reqps"
            orientation = "vertical"
            max = 100
            targets = [{ expr = "rate(http_requests_total{job=\"${job}\"}[5m])" }]
            thresholds = [{ color = "green" }, { color = "red", value = 80.0 }]
            mappings = [{ type = 1, value = "0", text = "idle" }]
            links = [{ title = "Runbook", url = "https://example.com/runbook" }]
            data_links = [{ title = "Details", url = "/d/requests" }]

            [[panels]]
            title = "Legacy"
            plugin_version = "6.7"
            "#,
        )
        .unwrap();

        assert_eq!(config.vars["job"], "api");
        assert_eq!(config.panels.len(), 2);

        let requests = &config.panels[0];
        assert_eq!(requests.params.title, "Requests");
        assert_eq!(requests.params.unit, "reqps");
        assert_eq!(requests.params.orientation, Orientation::Vertical);
        assert_eq!(requests.params.max, Some(Number::from(100)));
        assert_eq!(requests.params.reducer_function, "mean");
        assert_eq!(requests.targets.len(), 1);
        assert_eq!(
            requests.thresholds,
            vec![ThresholdStep::base("green"), ThresholdStep::new("red", Some(80.0))]
        );
        assert_eq!(requests.mappings[0]["text"], json!("idle"));
        assert_eq!(requests.links.len(), 1);
        assert_eq!(requests.data_links.len(), 1);

        let legacy = &config.panels[1];
        assert_eq!(legacy.params.plugin_version.as_str(), "6.7");
        assert!(legacy.targets.is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_title() {
        let result = parse_panels_config(
            r#"
            [[panels]]
            unit = "bytes"
            "#,
        );
        assert!(result.is_err());
    }
}
