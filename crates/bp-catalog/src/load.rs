//! Catalog readers.
//!
//! Every source is first flattened into a header row plus string cells, then
//! mapped through [`ColumnMap`] so CSV exports and hand-written YAML share the
//! same aliasing and error reporting.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::catalog::Catalog;
use crate::columns::{Column, ColumnMap};
use crate::record::PumpRecord;
use crate::{CatalogError, CatalogResult};

/// Header row plus data rows, all cells as trimmed text.
#[derive(Debug, Clone, Default, PartialEq)]
struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Load a catalog, choosing the reader from the file extension.
pub fn load_catalog(path: &Path) -> CatalogResult<Catalog> {
    let content = std::fs::read_to_string(path)?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let catalog = match ext.as_str() {
        "csv" => parse_csv(&content)?,
        "yaml" | "yml" => parse_yaml(&content)?,
        "json" => parse_json(&content)?,
        other => return Err(CatalogError::UnsupportedFormat(other.to_string())),
    };

    debug!(
        path = %path.display(),
        records = catalog.len(),
        "loaded pump catalog"
    );
    Ok(catalog)
}

/// Parse comma-separated text with a header row.
///
/// Quoted cells may contain commas, `""` escapes and line breaks; blank lines
/// are skipped.
pub fn parse_csv(content: &str) -> CatalogResult<Catalog> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(CatalogError::Malformed("no header row".to_string()));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    build_catalog(RawTable { headers, rows })
}

/// Parse a YAML list of row maps.
pub fn parse_yaml(content: &str) -> CatalogResult<Catalog> {
    let rows: Vec<BTreeMap<String, serde_yaml::Value>> = serde_yaml::from_str(content)?;
    let rows = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|(k, v)| Ok((k, yaml_cell(v)?)))
                .collect::<CatalogResult<Vec<_>>>()
        })
        .collect::<CatalogResult<Vec<_>>>()?;
    build_catalog(table_from_maps(rows))
}

/// Parse a JSON array of row objects.
pub fn parse_json(content: &str) -> CatalogResult<Catalog> {
    let rows: Vec<BTreeMap<String, serde_json::Value>> = serde_json::from_str(content)?;
    let rows = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|(k, v)| Ok((k, json_cell(v)?)))
                .collect::<CatalogResult<Vec<_>>>()
        })
        .collect::<CatalogResult<Vec<_>>>()?;
    build_catalog(table_from_maps(rows))
}

fn yaml_cell(value: serde_yaml::Value) -> CatalogResult<String> {
    match value {
        serde_yaml::Value::Null => Ok(String::new()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::String(s) => Ok(s),
        other => Err(CatalogError::Malformed(format!(
            "expected a scalar cell, found {other:?}"
        ))),
    }
}

fn json_cell(value: serde_json::Value) -> CatalogResult<String> {
    match value {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::String(s) => Ok(s),
        other => Err(CatalogError::Malformed(format!(
            "expected a scalar cell, found {other}"
        ))),
    }
}

/// Union of keys becomes the header row; absent keys become empty cells.
///
/// Keys are canonicalized per row first, so rows spelling a column
/// differently still land in the same cell.
fn table_from_maps(rows: Vec<Vec<(String, String)>>) -> RawTable {
    let rows: Vec<Vec<(String, String)>> = rows
        .into_iter()
        .map(|row| {
            let mut canonical: Vec<(String, String)> = Vec::with_capacity(row.len());
            for (key, value) in row {
                let key = Column::from_header(&key)
                    .map(|c| c.canonical().to_string())
                    .unwrap_or(key);
                if !canonical.iter().any(|(k, _)| *k == key) {
                    canonical.push((key, value));
                }
            }
            canonical
        })
        .collect();

    let mut headers: Vec<String> = Vec::new();
    for row in &rows {
        for (key, _) in row {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let rows = rows
        .into_iter()
        .map(|row| {
            headers
                .iter()
                .map(|h| {
                    row.iter()
                        .find(|(k, _)| k == h)
                        .map(|(_, v)| v.clone())
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect();

    RawTable { headers, rows }
}

fn build_catalog(table: RawTable) -> CatalogResult<Catalog> {
    let map = ColumnMap::resolve(&table.headers)?;
    debug!(
        columns = table.headers.len(),
        rows = table.rows.len(),
        "resolved catalog columns"
    );

    let records = table
        .rows
        .iter()
        .enumerate()
        .map(|(idx, cells)| parse_record(&map, idx + 1, cells))
        .collect::<CatalogResult<Vec<_>>>()?;

    Catalog::new(records)
}

fn cell<'a>(map: &ColumnMap, cells: &'a [String], column: Column) -> &'a str {
    map.position(column)
        .and_then(|idx| cells.get(idx))
        .map(|s| s.trim())
        .unwrap_or("")
}

fn number(map: &ColumnMap, cells: &[String], row: usize, column: Column) -> CatalogResult<f64> {
    let raw = cell(map, cells, column);
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| CatalogError::InvalidValue {
            row,
            column: column.canonical(),
            value: raw.to_string(),
        })
}

fn parse_record(map: &ColumnMap, row: usize, cells: &[String]) -> CatalogResult<PumpRecord> {
    let model = cell(map, cells, Column::Model);
    if model.is_empty() {
        return Err(CatalogError::InvalidValue {
            row,
            column: Column::Model.canonical(),
            value: String::new(),
        });
    }

    let stages_raw = cell(map, cells, Column::Stages);
    let stages = if stages_raw.is_empty() {
        None
    } else {
        // tables exported from spreadsheets often write counts as "12.0"
        let v = stages_raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0 && v.fract() == 0.0)
            .ok_or_else(|| CatalogError::InvalidValue {
                row,
                column: Column::Stages.canonical(),
                value: stages_raw.to_string(),
            })?;
        Some(v as u32)
    };

    let record = PumpRecord {
        model: model.to_string(),
        phase: cell(map, cells, Column::Phase).to_string(),
        hp: number(map, cells, row, Column::Hp)?,
        min_flow_lph: number(map, cells, row, Column::MinFlow)?,
        max_flow_lph: number(map, cells, row, Column::MaxFlow)?,
        min_head_m: number(map, cells, row, Column::MinHead)?,
        max_head_m: number(map, cells, row, Column::MaxHead)?,
        stages,
    };

    if record.min_flow_lph > record.max_flow_lph {
        return Err(CatalogError::InvalidRange {
            row,
            model: record.model,
            what: "minimum flow exceeds maximum flow",
        });
    }
    if record.min_head_m > record.max_head_m {
        return Err(CatalogError::InvalidRange {
            row,
            model: record.model,
            what: "minimum head exceeds maximum head",
        });
    }

    Ok(record)
}
