mod cli;
mod config;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use tracing::info;

use sagdec_core::Dataset;
use sagdec_filter::{apply, selector_options, Dimension, FilterState};
use sagdec_views::{DashboardView, ExportDocument};

use crate::cli::{CliArgs, Command, FilterArgs};
use crate::config::CliConfig;
use crate::terminal::Terminal;

/// Filter State from flags, falling back to configured tokens.
fn build_filters(config: &CliConfig, args: &FilterArgs) -> FilterState {
    let mut state = FilterState::new();
    for dimension in Dimension::ALL {
        if let Some(token) = config.resolve_filter(dimension, args.token(dimension)) {
            state.set(dimension, &token);
        }
    }
    state
}

fn export(dataset: &Dataset, filters: &FilterState, out: Option<&std::path::Path>) -> Result<()> {
    let points = apply(&dataset.points, filters);
    let document = ExportDocument::new(filters, dataset.point_count(), points, chrono::Utc::now());
    let json = document.to_json_pretty().context("failed to serialize export")?;

    match out {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write export: {}", path.display()))?;
            info!(count = document.count, path = %path.display(), "Export written");
        }
        None => {
            let mut stdout = io::stdout();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();
    let config = CliConfig::load(args.config.as_deref()).context("failed to load configuration")?;
    let terminal = Terminal::new(config.use_color(args.no_color));
    let dataset_config = config.resolve_dataset(args.seed, args.points);

    let command = args.command.unwrap_or(Command::Render(FilterArgs::default()));
    match command {
        Command::Options => {
            terminal.print_options(&mut io::stdout(), &selector_options())?;
        }
        Command::Render(filter_args) => {
            let dataset = Dataset::builtin(&dataset_config);
            let filters = build_filters(&config, &filter_args);
            let view = DashboardView::compose(&dataset, &filters);
            terminal.render_dashboard(&mut io::stdout(), &view)?;
        }
        Command::Export { filters: filter_args, out } => {
            let dataset = Dataset::builtin(&dataset_config);
            let filters = build_filters(&config, &filter_args);
            export(&dataset, &filters, out.as_deref())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sagdec_core::config::DatasetConfig;
    use sagdec_core::Zone;
    use sagdec_filter::Selection;

    #[test]
    fn test_build_filters_precedence() {
        let mut config = CliConfig::default();
        config.filters.zone = Some("Rural".to_string());
        config.filters.cluster = Some("4".to_string());
        let args = FilterArgs {
            zone: Some("Urbana".to_string()),
            ..FilterArgs::default()
        };
        let state = build_filters(&config, &args);
        assert_eq!(state.zone, Selection::Only(Zone::Urban));
        assert_eq!(state.token(Dimension::Cluster), "4");
        assert!(state.authority.is_any());
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        let dataset = Dataset::builtin(&DatasetConfig::default());
        let filters = FilterState::new().zone(Zone::Rural);
        export(&dataset, &filters, Some(&path)).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let expected = apply(&dataset.points, &filters).len();
        assert_eq!(json["count"].as_u64().unwrap() as usize, expected);
        assert_eq!(json["filters"]["zone"], "Rural");
    }
}
