use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::info;
use tessera_common::{Record, Value};

/// Load records from a file, dispatching on the extension.
///
/// Supported formats:
/// * `.csv`  – header row, comma separated
/// * `.tsv`  – header row, tab separated
/// * `.json` – array of objects
///
/// Delimited cells that parse as numbers become numbers, empty cells and `NA`
/// become null.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            parse_delimited(file, b',')?
        }
        "tsv" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            parse_delimited(file, b'\t')?
        }
        "json" => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_json(&text)?
        }
        other => bail!("Unsupported file extension: .{other}"),
    };

    info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

pub fn parse_delimited<R: Read>(reader: R, delimiter: u8) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .context("reading headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("row {row_no}"))?;
        let record = headers
            .iter()
            .zip(row.iter())
            .map(|(name, cell)| (name.clone(), Value::parse_cell(cell)))
            .collect();
        records.push(record);
    }
    Ok(records)
}

pub fn parse_json(text: &str) -> Result<Vec<Record>> {
    serde_json::from_str(text).context("expected a JSON array of flat objects")
}
