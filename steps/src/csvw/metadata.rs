//! CSVW metadata documents and column loading.

use serde::Deserialize;
use url::Url;

use super::fetch::Fetcher;
use super::table::{column_cells, Cell};
use super::units::UnitTable;
use super::CsvwError;

/// A table description. Only the parts the loader needs are modelled.
#[derive(Debug, Clone, Deserialize)]
pub struct Table {
    /// Location of the CSV file, possibly relative to the metadata document.
    #[serde(default)]
    pub url: Option<String>,
    /// Column descriptions.
    #[serde(rename = "tableSchema", default)]
    pub table_schema: TableSchema,
}

/// The `tableSchema` of a table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableSchema {
    /// Columns in CSV order.
    #[serde(default)]
    pub columns: Vec<Column>,
}

/// A column description.
#[derive(Debug, Clone, Deserialize)]
pub struct Column {
    /// The column's name.
    #[serde(default)]
    pub name: Option<String>,
    /// Human-readable titles.
    #[serde(default)]
    pub titles: Option<Titles>,
    /// Unit notation under the Dublin Core key.
    #[serde(rename = "dc:unit", default)]
    pub dc_unit: Option<String>,
    /// Unit notation under the plain key.
    #[serde(default)]
    pub unit: Option<String>,
}

/// A column's `titles`: one string or a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Titles {
    /// A single title.
    One(String),
    /// Several titles, first preferred.
    Many(Vec<String>),
    /// Any other shape (e.g. a language map); never matched.
    Other(serde_json::Value),
}

impl Column {
    /// Returns true if the column is called `name` by name or by title.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
            || match &self.titles {
                Some(Titles::One(title)) => title == name,
                Some(Titles::Many(titles)) => titles.iter().any(|t| t == name),
                Some(Titles::Other(_)) | None => false,
            }
    }

    /// The first title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match &self.titles {
            Some(Titles::One(title)) => Some(title),
            Some(Titles::Many(titles)) => titles.first().map(String::as_str),
            Some(Titles::Other(_)) | None => None,
        }
    }

    /// The unit notation, preferring `dc:unit`.
    #[must_use]
    pub fn unit_notation(&self) -> Option<&str> {
        self.dc_unit
            .as_deref()
            .or(self.unit.as_deref())
            .filter(|u| !u.trim().is_empty())
    }
}

/// Picks the described table: `tables[0]`, or the document itself when it
/// has no `tables` key.
///
/// # Errors
///
/// [`CsvwError::NoTables`] for an empty `tables` array,
/// [`CsvwError::Metadata`] if the table does not have the expected shape.
pub fn first_table(document: serde_json::Value) -> Result<Table, CsvwError> {
    let table = match document {
        serde_json::Value::Object(mut map) => match map.remove("tables") {
            Some(serde_json::Value::Array(tables)) => {
                tables.into_iter().next().ok_or(CsvwError::NoTables)?
            }
            Some(table) => table,
            None => serde_json::Value::Object(map),
        },
        other => other,
    };
    serde_json::from_value(table).map_err(CsvwError::Metadata)
}

/// A column read from a CSVW-described table.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedColumn {
    /// One cell per data row.
    pub cells: Vec<Cell>,
    /// The QUDT unit IRI, if the notation is known.
    pub unit: Option<String>,
    /// The column title, or the requested name when it has none.
    pub title: String,
    /// The resolved location of the CSV file.
    pub csv_url: Url,
}

/// Loads column `name` of the first table described at `metadata_url`.
///
/// # Errors
///
/// Returns [`CsvwError`] if a document cannot be fetched or parsed, the
/// table has no URL, or no column is called `name`.
pub fn load_column<F: Fetcher>(
    fetcher: &F,
    metadata_url: &Url,
    name: &str,
    units: &UnitTable,
) -> Result<LoadedColumn, CsvwError> {
    let body = fetcher.fetch(metadata_url)?;
    let document: serde_json::Value =
        serde_json::from_str(&body).map_err(|source| CsvwError::Json {
            url: metadata_url.to_string(),
            source,
        })?;
    let table = first_table(document)?;

    let reference = table
        .url
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or(CsvwError::NoTableUrl)?;
    let csv_url = metadata_url
        .join(reference)
        .map_err(|source| CsvwError::InvalidUrl {
            url: reference.to_owned(),
            source,
        })?;

    let (index, column) = table
        .table_schema
        .columns
        .iter()
        .enumerate()
        .find(|(_, c)| c.matches(name))
        .ok_or_else(|| CsvwError::ColumnNotFound(name.to_owned()))?;

    let notation = column.unit_notation();
    let unit = notation.and_then(|n| units.lookup(n)).map(str::to_owned);
    if let (Some(notation), None) = (notation, &unit) {
        tracing::warn!(notation, column = name, "unknown unit notation; values stay unitless");
    }
    let title = column.title().unwrap_or(name).to_owned();

    let csv = fetcher.fetch(&csv_url)?;
    let cells = column_cells(&csv, index);
    tracing::debug!(%csv_url, column = name, index, rows = cells.len(), "loaded column");

    Ok(LoadedColumn {
        cells,
        unit,
        title,
        csv_url,
    })
}
