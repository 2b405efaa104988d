use crate::domain::returns::{Horizon, ReturnRecord};
use crate::ranking::RankingTable;
use anyhow::Context;
use std::path::Path;

/// Column headers shared by the console and CSV renderings.
pub fn header() -> [&'static str; 4] {
    [
        "Operator",
        Horizon::Short.column_label(),
        Horizon::Medium.column_label(),
        Horizon::Long.column_label(),
    ]
}

// Console rows use "; " so the output stays readable if return figures ever
// carry European decimal commas upstream.
const CONSOLE_SEPARATOR: &str = "; ";

/// Human-readable rendering of the ranking, header first, one line per
/// operator in table order.
pub fn render_console(table: &RankingTable) -> String {
    let mut out = String::new();
    out.push_str(&header().join(CONSOLE_SEPARATOR));
    out.push('\n');
    for rec in table.records() {
        out.push_str(&row_cells(rec).join(CONSOLE_SEPARATOR));
        out.push('\n');
    }
    out
}

pub fn write_csv<W: std::io::Write>(table: &RankingTable, writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(header()).context("write CSV header failed")?;
    for rec in table.records() {
        wtr.write_record(row_cells(rec))
            .context("write CSV row failed")?;
    }
    wtr.flush().context("flush CSV output failed")?;
    Ok(())
}

/// Overwrites `path` on every run; partial rankings are never appended.
pub fn export_csv(table: &RankingTable, path: &Path) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create {} failed", path.display()))?;
    write_csv(table, file)
}

fn row_cells(rec: &ReturnRecord) -> [String; 4] {
    [
        rec.name.clone(),
        cell(rec.value(Horizon::Short)),
        cell(rec.value(Horizon::Medium)),
        cell(rec.value(Horizon::Long)),
    ]
}

// Unknown values render as an empty cell, never as zero.
fn cell(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_default()
}
