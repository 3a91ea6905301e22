// csv2report-handlers - Transport-agnostic boundary operations
//
// The operations a transport layer (HTTP server, CLI, desktop client)
// invokes: CSV ingest, history listing, dataset detail, and report
// generation. No framework types leak in here; requests arrive as bytes
// and ids, responses leave as serializable structs.

mod error;
mod processor;

pub use error::IngestError;
pub use processor::{
    dataset_detail, history, ingest_csv, report, DatasetDetail, HistoryItem, IngestResponse,
    ReportDocument, DEFAULT_DATASET_NAME,
};
