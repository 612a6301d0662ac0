// Main entry point - load panel definitions, build stat panels, print JSON
use clap::Parser;
use stat_panels::application::panel_service::PanelService;
use stat_panels::infrastructure::config::{load_panels_config, DEFAULT_PANELS_PATH};
use stat_panels::infrastructure::json_output::{write_panels, OutputStyle};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stat-panels")]
#[command(about = "Build stat panel JSON from panel definitions", long_about = None)]
struct Cli {
    /// Panel definitions file (extension optional)
    #[arg(default_value = DEFAULT_PANELS_PATH)]
    path: String,

    /// Print the panel list on a single line
    #[arg(long)]
    compact: bool,
}

impl Cli {
    fn output_style(&self) -> OutputStyle {
        if self.compact {
            OutputStyle::Compact
        } else {
            OutputStyle::Pretty
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the panel JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let panels_config = load_panels_config(&cli.path)?;
    tracing::info!(
        "Loaded {} panel definitions from {}",
        panels_config.panels.len(),
        cli.path
    );

    let service = PanelService::new(panels_config);
    let panels = service.build_panels()?;

    write_panels(std::io::stdout().lock(), &panels, cli.output_style())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["stat-panels"]).unwrap();
        assert_eq!(cli.path, DEFAULT_PANELS_PATH);
        assert_eq!(cli.output_style(), OutputStyle::Pretty);
    }

    #[test]
    fn test_path_and_compact() {
        let cli = Cli::try_parse_from(["stat-panels", "dashboards/api.toml", "--compact"]).unwrap();
        assert_eq!(cli.path, "dashboards/api.toml");
        assert_eq!(cli.output_style(), OutputStyle::Compact);
    }

    #[test]
    fn test_help_flags_are_recognised() {
        for flag in ["--help", "-h"] {
            let err = Cli::try_parse_from(["stat-panels", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp, "{flag}");
        }
    }

    #[test]
    fn test_rejects_unknown_flag_and_extra_path() {
        let err = Cli::try_parse_from(["stat-panels", "-x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        let err = Cli::try_parse_from(["stat-panels", "a", "b"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
