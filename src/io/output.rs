use crate::complexity::{ColorBand, ScoreBreakdown, Severity};
use crate::config::DisplayThresholds;
use crate::dashboard::{Dashboard, DashboardRow};
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// A dashboard row with its derived navigation path and label
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    #[serde(flatten)]
    pub row: DashboardRow,
    pub object_path: String,
    pub severity: Severity,
    #[serde(skip)]
    pub band: ColorBand,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub threshold: f64,
    pub blueprints_scanned: usize,
    pub entries_scanned: usize,
    pub rows: Vec<ReportRow>,
}

impl DashboardReport {
    pub fn new(dashboard: &Dashboard, display: &DisplayThresholds) -> Self {
        let rows = dashboard
            .rows()
            .iter()
            .map(|row| ReportRow {
                object_path: row.object_path(),
                severity: row.severity(display),
                band: ColorBand::from_percent(row.percent, display),
                row: row.clone(),
            })
            .collect();

        Self {
            threshold: dashboard.threshold(),
            blueprints_scanned: dashboard.scanned_blueprints(),
            entries_scanned: dashboard.scanned_entries(),
            rows,
        }
    }
}

/// Per-node explanation of one entry's score
#[derive(Debug, Clone, Serialize)]
pub struct BreakdownReport {
    pub blueprint: String,
    pub graph: String,
    pub entry: String,
    pub severity: Severity,
    #[serde(skip)]
    pub band: ColorBand,
    pub max_depth: u32,
    #[serde(flatten)]
    pub breakdown: ScoreBreakdown,
}

impl BreakdownReport {
    pub fn new(
        blueprint: &str,
        graph: &str,
        entry: &str,
        breakdown: ScoreBreakdown,
        display: &DisplayThresholds,
    ) -> Self {
        let percent = breakdown.score.percent;
        Self {
            blueprint: blueprint.to_string(),
            graph: graph.to_string(),
            entry: entry.to_string(),
            severity: Severity::from_percent(percent, display),
            band: ColorBand::from_percent(percent, display),
            max_depth: breakdown.max_depth(),
            breakdown,
        }
    }
}

pub trait OutputWriter {
    fn write_dashboard(&mut self, report: &DashboardReport) -> anyhow::Result<()>;
    fn write_breakdown(&mut self, report: &BreakdownReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_dashboard(&mut self, report: &DashboardReport) -> anyhow::Result<()> {
        self.write_json(report)
    }

    fn write_breakdown(&mut self, report: &BreakdownReport) -> anyhow::Result<()> {
        self.write_json(report)
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_dashboard(&mut self, report: &DashboardReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Blueprint Complexity Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Blueprints Scanned | {} |", report.blueprints_scanned)?;
        writeln!(self.writer, "| Entries Scanned | {} |", report.entries_scanned)?;
        writeln!(self.writer, "| Threshold | {:.1}% |", report.threshold)?;
        writeln!(self.writer, "| Entries Over Threshold | {} |", report.rows.len())?;
        writeln!(self.writer)?;

        if report.rows.is_empty() {
            writeln!(self.writer, "No entries at or above the threshold.")?;
            return Ok(());
        }

        writeln!(self.writer, "## Complex Entries")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Blueprint | Entry | Score | Percent | Severity |")?;
        writeln!(self.writer, "|-----------|-------|-------|---------|----------|")?;
        for entry in &report.rows {
            writeln!(
                self.writer,
                "| `{}` | {} | {:.1} | {:.1}% | {} |",
                entry.object_path,
                escape_markdown(&entry.row.entry_display_name),
                entry.row.raw_score,
                entry.row.percent,
                entry.severity
            )?;
        }
        Ok(())
    }

    fn write_breakdown(&mut self, report: &BreakdownReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "# {} / {} / {}",
            report.blueprint,
            report.graph,
            escape_markdown(&report.entry)
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**Score:** {:.1} ({:.1}%, {}), max depth {}",
            report.breakdown.score.raw_score,
            report.breakdown.score.percent,
            report.severity,
            report.max_depth
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Node | Roles | Depth | Contribution |")?;
        writeln!(self.writer, "|------|-------|-------|--------------|")?;
        for node in &report.breakdown.nodes {
            writeln!(
                self.writer,
                "| {} | {} | {} | {:.1} |",
                escape_markdown(node_label(&node.title, node.guid.as_str())),
                node.roles,
                node.depth,
                node.contribution
            )?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_dashboard(&mut self, report: &DashboardReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Blueprint Complexity".bold())?;
        writeln!(
            self.writer,
            "Scanned {} entries in {} blueprints, {} at or above {:.1}%",
            report.entries_scanned,
            report.blueprints_scanned,
            report.rows.len(),
            report.threshold
        )?;

        if report.rows.is_empty() {
            writeln!(self.writer, "{}", "Nothing over the threshold.".green())?;
            return Ok(());
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Blueprint", "Entry", "Score", "Percent", "Severity"]);

        for entry in &report.rows {
            let color = table_color(entry.band);
            table.add_row(vec![
                Cell::new(&entry.object_path),
                Cell::new(&entry.row.entry_display_name),
                Cell::new(format!("{:.1}", entry.row.raw_score)),
                Cell::new(format!("{:.1}%", entry.row.percent)).fg(color),
                Cell::new(entry.severity.label()).fg(color),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_breakdown(&mut self, report: &BreakdownReport) -> anyhow::Result<()> {
        let summary = format!(
            "{:.1} ({:.1}%) {}",
            report.breakdown.score.raw_score, report.breakdown.score.percent, report.severity
        );
        writeln!(
            self.writer,
            "{} {} / {}",
            report.blueprint.bold(),
            report.graph,
            report.entry
        )?;
        writeln!(self.writer, "Score: {}", paint(&summary, report.band))?;
        writeln!(self.writer, "Max depth: {}", report.max_depth)?;

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Node", "Roles", "Depth", "Contribution"]);
        for node in &report.breakdown.nodes {
            let indent = "  ".repeat(node.depth as usize);
            table.add_row(vec![
                Cell::new(format!(
                    "{}{}",
                    indent,
                    node_label(&node.title, node.guid.as_str())
                )),
                Cell::new(node.roles.to_string()),
                Cell::new(node.depth),
                Cell::new(format!("{:.1}", node.contribution)),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}

pub fn create_writer(format: OutputFormat, writer: Box<dyn Write>) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

fn node_label<'a>(title: &'a str, guid: &'a str) -> &'a str {
    if title.is_empty() {
        guid
    } else {
        title
    }
}

fn escape_markdown(text: &str) -> String {
    text.replace('|', "\\|")
}

fn table_color(band: ColorBand) -> Color {
    match band {
        ColorBand::Green => Color::Green,
        ColorBand::Orange => Color::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
        ColorBand::Red => Color::Red,
        ColorBand::Maroon => Color::DarkRed,
    }
}

fn paint(text: &str, band: ColorBand) -> ColoredString {
    match band {
        ColorBand::Green => text.green(),
        ColorBand::Orange => text.truecolor(255, 165, 0),
        ColorBand::Red => text.red(),
        ColorBand::Maroon => text.truecolor(128, 0, 0).bold(),
    }
}
