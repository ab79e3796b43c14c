//! Header normalization for tabular pump catalogs.
//!
//! Manufacturer tables name the same field many ways ("Qmin", "Min Flow",
//! "Minimum Flow (LPH)"). Headers are normalized (trimmed, lower-cased,
//! whitespace collapsed) and looked up in a fixed alias table.

use crate::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Model,
    Phase,
    Hp,
    MinFlow,
    MaxFlow,
    MinHead,
    MaxHead,
    Stages,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnEntry {
    pub column: Column,
    pub canonical: &'static str,
    pub required: bool,
    pub aliases: &'static [&'static str],
}

const COLUMNS: [ColumnEntry; 8] = [
    ColumnEntry {
        column: Column::Model,
        canonical: "model",
        required: true,
        aliases: &["pump", "model", "model name", "pump model", "pump name"],
    },
    ColumnEntry {
        column: Column::Phase,
        canonical: "phase",
        required: true,
        aliases: &["phase", "phases", "supply phase"],
    },
    ColumnEntry {
        column: Column::Hp,
        canonical: "hp",
        required: true,
        aliases: &["hp", "rated hp", "power (hp)", "motor hp", "power hp"],
    },
    ColumnEntry {
        column: Column::MinFlow,
        canonical: "qmin",
        required: true,
        aliases: &[
            "qmin",
            "q min",
            "min flow",
            "minimum flow",
            "min flow (lph)",
            "minimum flow (lph)",
            "min_flow_lph",
        ],
    },
    ColumnEntry {
        column: Column::MaxFlow,
        canonical: "qmax",
        required: true,
        aliases: &[
            "qmax",
            "q max",
            "max flow",
            "maximum flow",
            "max flow (lph)",
            "maximum flow (lph)",
            "max_flow_lph",
        ],
    },
    ColumnEntry {
        column: Column::MinHead,
        canonical: "hmin",
        required: true,
        aliases: &[
            "hmin",
            "h min",
            "min head",
            "minimum head",
            "min head (m)",
            "minimum head (m)",
            "min_head_m",
        ],
    },
    ColumnEntry {
        column: Column::MaxHead,
        canonical: "hmax",
        required: true,
        aliases: &[
            "hmax",
            "h max",
            "max head",
            "maximum head",
            "max head (m)",
            "maximum head (m)",
            "max_head_m",
        ],
    },
    ColumnEntry {
        column: Column::Stages,
        canonical: "stages",
        required: false,
        aliases: &[
            "stages",
            "no of stages",
            "no. of stages",
            "number of stages",
            "stage count",
        ],
    },
];

impl Column {
    pub fn entry(self) -> &'static ColumnEntry {
        let idx = match self {
            Column::Model => 0,
            Column::Phase => 1,
            Column::Hp => 2,
            Column::MinFlow => 3,
            Column::MaxFlow => 4,
            Column::MinHead => 5,
            Column::MaxHead => 6,
            Column::Stages => 7,
        };
        &COLUMNS[idx]
    }

    pub fn canonical(self) -> &'static str {
        self.entry().canonical
    }

    /// Resolve a raw header to a known column.
    pub fn from_header(header: &str) -> Option<Column> {
        let key = normalize_header(header);
        COLUMNS
            .iter()
            .find(|e| e.aliases.contains(&key.as_str()))
            .map(|e| e.column)
    }
}

/// Trim, lower-case and collapse runs of whitespace to one space.
pub fn normalize_header(header: &str) -> String {
    header
        .trim_start_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

/// Position of each known column within a header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    positions: Vec<(Column, usize)>,
}

impl ColumnMap {
    /// Map headers to columns; every required column must be present.
    ///
    /// The first header matching a column wins; unknown headers are ignored.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> CatalogResult<Self> {
        let mut positions: Vec<(Column, usize)> = Vec::new();
        for (idx, header) in headers.iter().enumerate() {
            if let Some(column) = Column::from_header(header.as_ref()) {
                if !positions.iter().any(|(c, _)| *c == column) {
                    positions.push((column, idx));
                }
            }
        }

        let missing: Vec<String> = COLUMNS
            .iter()
            .filter(|e| e.required && !positions.iter().any(|(c, _)| *c == e.column))
            .map(|e| e.canonical.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(CatalogError::MissingColumns { missing });
        }

        Ok(Self { positions })
    }

    pub fn position(&self, column: Column) -> Option<usize> {
        self.positions
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, idx)| *idx)
    }
}
