// JSON output for built panel lists
use crate::domain::stat_panel::StatPanel;
use anyhow::Context;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    #[default]
    Pretty,
    Compact,
}

/// Serialize `panels` as a JSON array and write it, newline-terminated,
/// to `writer`
pub fn write_panels<W: Write>(
    mut writer: W,
    panels: &[StatPanel],
    style: OutputStyle,
) -> anyhow::Result<()> {
    match style {
        OutputStyle::Pretty => serde_json::to_writer_pretty(&mut writer, panels),
        OutputStyle::Compact => serde_json::to_writer(&mut writer, panels),
    }
    .context("Failed to serialize panels")?;

    writeln!(writer).context("Failed to write panels")?;
    writer.flush().context("Failed to flush panel output")?;

    tracing::debug!("Wrote {} panels ({:?})", panels.len(), style);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::params::StatPanelParams;
    use serde_json::{json, Value};

    #[test]
    fn test_write_compact_panel_list() {
        let panels = vec![
            StatPanel::create(StatPanelParams::new("One")),
            StatPanel::create(StatPanelParams::new("Two")),
        ];
        let mut out = Vec::new();

        write_panels(&mut out, &panels, OutputStyle::Compact).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.trim_end().lines().count(), 1);

        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["title"], json!("One"));
        assert_eq!(parsed[1]["title"], json!("Two"));
        assert_eq!(parsed[1]["type"], json!("stat"));
    }

    #[test]
    fn test_write_pretty_empty_list() {
        let mut out = Vec::new();
        write_panels(&mut out, &[], OutputStyle::Pretty).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }
}
