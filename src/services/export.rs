//! CSV / JSON export of the link list
//!
//! Both formats keep the order they are given (callers pass `list_all()`).

use std::str::FromStr;

use csv::WriterBuilder;
use serde::Serialize;

use crate::errors::{Result, WeblinksError};
use crate::storage::Link;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json => "application/json",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Csv => "links.csv",
            Self::Json => "links.json",
        }
    }

    pub fn render(&self, links: &[Link]) -> Result<Vec<u8>> {
        match self {
            Self::Csv => to_csv(links),
            Self::Json => to_json(links).map(String::into_bytes),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = WeblinksError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(WeblinksError::validation(format!(
                "Unsupported export format: {}. Valid: csv, json",
                other
            ))),
        }
    }
}

/// CSV 行（表头与 Web 导出一致）
#[derive(Debug, Serialize)]
struct CsvLinkRow<'a> {
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Tags")]
    tags: &'a str,
    #[serde(rename = "URL")]
    url: &'a str,
    #[serde(rename = "File Group")]
    file_group: &'a str,
}

/// JSON 导出对象，不包含 id
#[derive(Debug, Serialize)]
struct JsonLink<'a> {
    description: &'a str,
    tags: Option<&'a str>,
    url: &'a str,
    file_group: &'a str,
}

/// The header row is written even when there are no links.
pub fn to_csv(links: &[Link]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(vec![]);
    writer.write_record(["Description", "Tags", "URL", "File Group"])?;

    for link in links {
        writer.serialize(CsvLinkRow {
            description: &link.description,
            tags: link.tags.as_deref().unwrap_or_default(),
            url: &link.url,
            file_group: &link.file_group,
        })?;
    }

    writer
        .into_inner()
        .map_err(|e| WeblinksError::serialization(format!("Failed to finish CSV: {}", e.error())))
}

pub fn to_json(links: &[Link]) -> Result<String> {
    let rows: Vec<JsonLink<'_>> = links
        .iter()
        .map(|link| JsonLink {
            description: &link.description,
            tags: link.tags.as_deref(),
            url: &link.url,
            file_group: &link.file_group,
        })
        .collect();

    Ok(serde_json::to_string_pretty(&rows)?)
}
