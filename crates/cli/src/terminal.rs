use anyhow::Result;
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::Write;

use sagdec_filter::Selector;
use sagdec_views::{
    BarChart, ClusterGrid, ConfidenceTier, DashboardView, LiveClusterShare, RulesTable, ScatterChart,
    StatCard, Tone,
};

/// Color scheme for terminal output.
struct Colors;

impl Colors {
    const TITLE: Color = Color::Magenta;
    const HEADER: Color = Color::Cyan;
    const DIM: Color = Color::DarkGrey;
    const VALUE: Color = Color::White;
    const WARN: Color = Color::Yellow;
    const SELECTED: Color = Color::Green;
}

/// Width of the longest bar in the establishments chart.
const BAR_WIDTH: usize = 40;

/// Scatter rows printed before the remainder is summarised.
const SCATTER_PREVIEW: usize = 10;

/// `#RRGGBB` to an RGB terminal colour.
pub fn hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some(Color::Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Number of `█` cells for `count` relative to `max`.
pub fn bar_cells(count: u32, max: u32, width: usize) -> usize {
    if max == 0 {
        return 0;
    }
    ((count as f64 / max as f64) * width as f64).round() as usize
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Red => Color::Red,
        Tone::Yellow => Color::Yellow,
        Tone::Green => Color::Green,
    }
}

fn tier_color(tier: ConfidenceTier) -> Color {
    match tier {
        ConfidenceTier::Strong => Color::Red,
        ConfidenceTier::Moderate => Color::Yellow,
        ConfidenceTier::Weak => Color::Green,
    }
}

/// Writes dashboard views as plain text, coloured unless disabled.
pub struct Terminal {
    color: bool,
}

impl Terminal {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint<W: Write>(&self, out: &mut W, color: Color, text: &str) -> Result<()> {
        if self.color {
            queue!(out, SetForegroundColor(color), Print(text), ResetColor)?;
        } else {
            queue!(out, Print(text))?;
        }
        Ok(())
    }

    fn heading<W: Write>(&self, out: &mut W, text: &str) -> Result<()> {
        self.paint(out, Colors::HEADER, &format!("\n{text}\n"))?;
        self.paint(out, Colors::DIM, &format!("{}\n", "-".repeat(text.chars().count())))
    }

    /// Every section of the dashboard, top to bottom.
    pub fn render_dashboard<W: Write>(&self, out: &mut W, view: &DashboardView) -> Result<()> {
        self.paint(out, Colors::TITLE, &format!("{}\n", view.title))?;
        self.paint(out, Colors::DIM, &format!("{}\n", view.subtitle))?;
        writeln!(out, "{}", view.headline)?;

        self.print_statistics(out, &view.statistics)?;
        self.print_selectors(out, &view.selectors)?;
        if !view.ignored_dimensions.is_empty() {
            let names: Vec<&str> = view.ignored_dimensions.iter().map(|d| d.name()).collect();
            self.paint(
                out,
                Colors::WARN,
                &format!("note: {} is set but does not narrow the points\n", names.join(", ")),
            )?;
        }
        self.print_bar_chart(out, &view.establishments)?;
        self.print_scatter(out, &view.correlation, view.total_points)?;
        self.print_rules(out, &view.rules)?;
        self.print_clusters(out, &view.clusters)?;
        self.print_live_shares(out, &view.live_clusters)?;
        out.flush()?;
        Ok(())
    }

    pub fn print_statistics<W: Write>(&self, out: &mut W, cards: &[StatCard]) -> Result<()> {
        self.heading(out, "Resumen")?;
        for card in cards {
            self.paint(out, Colors::VALUE, &format!("{:>8}", card.value))?;
            writeln!(out, "  {}", card.label)?;
        }
        Ok(())
    }

    pub fn print_selectors<W: Write>(&self, out: &mut W, selectors: &[Selector]) -> Result<()> {
        self.heading(out, "Filtros")?;
        for selector in selectors {
            let current = selector.current.as_deref().unwrap_or("-");
            write!(out, "{:<26}", selector.label)?;
            self.paint(out, Colors::SELECTED, &format!("{current}\n"))?;
        }
        Ok(())
    }

    /// Selector listing for `sagdec options`.
    pub fn print_options<W: Write>(&self, out: &mut W, selectors: &[Selector]) -> Result<()> {
        for selector in selectors {
            self.paint(out, Colors::HEADER, &format!("{} ", selector.label))?;
            self.paint(out, Colors::DIM, &format!("(--{})\n", selector.dimension))?;
            for opt in &selector.options {
                writeln!(out, "  {:<14} {}", opt.value, opt.label)?;
            }
        }
        out.flush()?;
        Ok(())
    }

    pub fn print_bar_chart<W: Write>(&self, out: &mut W, chart: &BarChart) -> Result<()> {
        self.heading(out, chart.title)?;
        let max = chart.max_count();
        for bar in &chart.bars {
            write!(out, "{:<8} ", bar.label)?;
            let cells = "█".repeat(bar_cells(bar.count, max, BAR_WIDTH));
            self.paint(out, hex_color(bar.gradient.top).unwrap_or(Colors::VALUE), &cells)?;
            writeln!(out, " {} ({})", bar.tooltip.title, bar.tooltip.subtitle)?;
        }
        Ok(())
    }

    pub fn print_scatter<W: Write>(&self, out: &mut W, chart: &ScatterChart, total: usize) -> Result<()> {
        self.heading(out, chart.title)?;
        writeln!(out, "{} of {} points ({} vs {})", chart.points.len(), total, chart.x_label, chart.y_label)?;
        for point in chart.points.iter().take(SCATTER_PREVIEW) {
            self.paint(out, hex_color(point.color).unwrap_or(Colors::VALUE), "● ")?;
            writeln!(
                out,
                "Cluster {:<3} {:<7} estrato {}  sedes {}",
                point.detail.cluster, point.detail.zone, point.detail.stratum, point.detail.sites_display
            )?;
        }
        if chart.points.len() > SCATTER_PREVIEW {
            self.paint(
                out,
                Colors::DIM,
                &format!("... {} more\n", chart.points.len() - SCATTER_PREVIEW),
            )?;
        }
        Ok(())
    }

    pub fn print_rules<W: Write>(&self, out: &mut W, table: &RulesTable) -> Result<()> {
        self.heading(out, table.title)?;
        writeln!(
            out,
            "{:<22} {:<24} {:>8} {:>10} {:>6} {:>8}",
            table.columns[0], table.columns[1], table.columns[2], table.columns[3], table.columns[4], table.columns[5]
        )?;
        for row in &table.rows {
            write!(out, "{:<22} {:<24} {:>8} ", row.antecedent, row.consequent, row.support)?;
            self.paint(out, tier_color(row.confidence_tier), &format!("{:>10}", row.confidence))?;
            write!(out, " {:>6} ", row.lift)?;
            self.paint(out, tone_color(row.impact_tone), &format!("{:>8}\n", row.impact_label))?;
        }
        Ok(())
    }

    pub fn print_clusters<W: Write>(&self, out: &mut W, grid: &ClusterGrid) -> Result<()> {
        self.heading(out, grid.title)?;
        for card in &grid.cards {
            let marker = if card.selected { "▶ " } else { "  " };
            self.paint(out, Colors::SELECTED, marker)?;
            self.paint(out, hex_color(&card.color).unwrap_or(Colors::VALUE), &card.heading)?;
            writeln!(out, " {} ({})", card.name, card.share)?;
            self.paint(out, Colors::DIM, &format!("    {}\n", card.traits))?;
        }
        Ok(())
    }

    pub fn print_live_shares<W: Write>(&self, out: &mut W, shares: &[LiveClusterShare]) -> Result<()> {
        self.heading(out, "Distribución en los puntos filtrados")?;
        for share in shares {
            let authored = share
                .authored_percentage
                .map(|p| format!("{p}%"))
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                out,
                "Cluster {:<3} {:>4} puntos {:>6.1}%   (estudio: {})",
                share.id, share.count, share.percentage, authored
            )?;
        }
        Ok(())
    }
}
