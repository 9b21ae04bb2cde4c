use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use sagdec_filter::Dimension;

/// Terminal rendering of the SAGDEC analytics dashboard.
///
/// Filter tokens accept the dashboard's own values (`Urbana`, `Bogotá`,
/// `3`) as well as `All`/`Todas`/`Todos` for unfiltered.
#[derive(Parser, Debug)]
#[command(name = "sagdec", about = "SAGDEC analytics dashboard in the terminal")]
pub struct CliArgs {
    /// Path to config file (default: ~/.config/sagdec/config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Seed for the synthetic point collection
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Number of synthetic points
    #[arg(long, global = true)]
    pub points: Option<usize>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render every dashboard view for the given filters (default)
    Render(FilterArgs),
    /// List the selectors and their options
    Options,
    /// Write the filtered points as JSON
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Zone: Urbana, Rural
    #[arg(long)]
    pub zone: Option<String>,

    /// Education authority: Antioquia, Bogotá, Valle, Atlántico, Cundinamarca
    #[arg(long)]
    pub authority: Option<String>,

    /// Stratum 1-6
    #[arg(long)]
    pub stratum: Option<String>,

    /// Cluster id
    #[arg(long)]
    pub cluster: Option<String>,

    /// Shift: Mañana, Completa, Nocturna (does not narrow the points)
    #[arg(long)]
    pub shift: Option<String>,
}

impl FilterArgs {
    pub fn token(&self, dimension: Dimension) -> Option<&str> {
        match dimension {
            Dimension::Zone => self.zone.as_deref(),
            Dimension::Authority => self.authority.as_deref(),
            Dimension::Stratum => self.stratum.as_deref(),
            Dimension::Cluster => self.cluster.as_deref(),
            Dimension::Shift => self.shift.as_deref(),
        }
    }
}
