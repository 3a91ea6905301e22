//! Boundary operations: ingest, history listing, detail, report generation
//!
//! Each operation takes the injected store (and config where relevant) and
//! returns serializable response types; transport layers do nothing but
//! decode their request and encode these results.

use crate::error::IngestError;
use chrono::{DateTime, Utc};
use csv2report_config::RuntimeConfig;
use csv2report_core::{process_csv, RawRow, SummaryResult};
use csv2report_history::{EntryId, HistoryEntry, HistoryStore};
use serde::Serialize;
use tracing::info;

/// Display name used when the caller supplies none.
pub const DEFAULT_DATASET_NAME: &str = "Untitled";

/// Successful ingest: the stored entry's id plus everything computed.
#[derive(Debug, Clone, Serialize)]
pub struct IngestResponse {
    pub dataset_id: EntryId,
    pub summary: SummaryResult,
    pub records: Vec<RawRow>,
}

/// One history listing item; the summary is omitted for list views.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryItem {
    pub id: EntryId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub row_count: u64,
}

/// Full detail of one retained entry.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetDetail {
    pub id: EntryId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub row_count: u64,
    pub summary: SummaryResult,
}

impl From<HistoryEntry> for DatasetDetail {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            created_at: entry.created_at,
            row_count: entry.row_count,
            summary: entry.summary,
        }
    }
}

/// A rendered report plus its suggested download filename.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// Ingest one CSV payload
///
/// Enforces the payload limit, runs the core pipeline, and retains the
/// result under the given display name (or `Untitled`). A validation
/// failure is terminal; nothing is stored.
pub fn ingest_csv(
    store: &HistoryStore,
    config: &RuntimeConfig,
    body: &[u8],
    name: Option<&str>,
) -> Result<IngestResponse, IngestError> {
    let limit = config.request.max_payload_bytes;
    if body.len() > limit {
        return Err(IngestError::PayloadTooLarge {
            size: body.len(),
            limit,
        });
    }

    let processed = process_csv(body)?;
    let name = name.unwrap_or(DEFAULT_DATASET_NAME);
    let entry = store.insert(
        name.to_string(),
        processed.records.len() as u64,
        processed.summary.clone(),
    );
    info!(
        id = %entry.id,
        name,
        rows = processed.records.len(),
        "ingested equipment dataset"
    );

    Ok(IngestResponse {
        dataset_id: entry.id,
        summary: processed.summary,
        records: processed.records,
    })
}

/// List retained ingests, most recent first, up to the retention bound.
pub fn history(store: &HistoryStore) -> Vec<HistoryItem> {
    store
        .list_default()
        .into_iter()
        .map(|entry| HistoryItem {
            id: entry.id,
            name: entry.name,
            created_at: entry.created_at,
            row_count: entry.row_count,
        })
        .collect()
}

/// Full summary for one retained entry.
pub fn dataset_detail(store: &HistoryStore, id: &EntryId) -> Result<DatasetDetail, IngestError> {
    let entry = store.get(id)?;
    Ok(entry.into())
}

/// Render the report for one retained entry.
pub fn report(store: &HistoryStore, id: &EntryId) -> Result<ReportDocument, IngestError> {
    let entry = store.get(id)?;
    let bytes = csv2report_report::render(&entry);
    Ok(ReportDocument {
        bytes,
        filename: csv2report_report::report_filename(&entry.id),
    })
}
