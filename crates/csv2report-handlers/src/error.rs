use csv2report_core::ValidationError;
use csv2report_history::NotFoundError;

/// Boundary error classification for ingest and lookup operations
///
/// Transport layers map these onto their own response types; the variants
/// carry everything needed for a status code and a human-readable body.
#[derive(Debug)]
pub enum IngestError {
    // 400-level: Client errors
    InvalidRequest {
        message: String,
        hint: Option<String>,
    },
    SchemaInvalid {
        missing: Vec<String>,
    },
    PayloadTooLarge {
        size: usize,
        limit: usize,
    },
    NotFound {
        id: String,
    },

    // 500-level: Server errors
    InternalError {
        message: String,
    },
}

impl IngestError {
    /// HTTP-equivalent status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest { .. } => 400,
            Self::SchemaInvalid { .. } => 400,
            Self::PayloadTooLarge { .. } => 413,
            Self::NotFound { .. } => 404,
            Self::InternalError { .. } => 500,
        }
    }

    /// Error type string for responses
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidRequest { .. } => "InvalidRequest",
            Self::SchemaInvalid { .. } => "SchemaInvalid",
            Self::PayloadTooLarge { .. } => "PayloadTooLarge",
            Self::NotFound { .. } => "NotFound",
            Self::InternalError { .. } => "InternalError",
        }
    }

    /// Human-readable message
    pub fn message(&self) -> String {
        match self {
            Self::InvalidRequest { message, .. } => message.clone(),
            Self::SchemaInvalid { missing } => {
                format!("Missing required columns: {}", missing.join(", "))
            }
            Self::PayloadTooLarge { size, limit } => format!(
                "Payload size {} bytes exceeds limit of {} bytes",
                size, limit
            ),
            Self::NotFound { id } => format!("Dataset not found: {}", id),
            Self::InternalError { message } => message.clone(),
        }
    }

    /// Optional hint for fixing the error
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::InvalidRequest { hint, .. } => hint.clone(),
            Self::SchemaInvalid { .. } => {
                Some("Upload a CSV with the Equipment Name, Type, Flowrate, Pressure, and Temperature columns".into())
            }
            Self::PayloadTooLarge { .. } => {
                Some("Reduce the upload size or increase CSV2REPORT_MAX_PAYLOAD_BYTES".into())
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for IngestError {}

impl From<ValidationError> for IngestError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Schema(schema) => Self::SchemaInvalid {
                missing: schema.missing,
            },
            ValidationError::Parse(parse) => Self::InvalidRequest {
                message: format!("Failed to parse CSV: {parse}"),
                hint: Some("Upload a UTF-8, comma-delimited CSV with a header row".into()),
            },
        }
    }
}

impl From<NotFoundError> for IngestError {
    fn from(err: NotFoundError) -> Self {
        Self::NotFound {
            id: err.id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let err = IngestError::InvalidRequest {
            message: "test".into(),
            hint: None,
        };
        assert_eq!(err.status_code(), 400);

        let err = IngestError::SchemaInvalid {
            missing: vec!["Flowrate".into()],
        };
        assert_eq!(err.status_code(), 400);

        let err = IngestError::PayloadTooLarge {
            size: 1000,
            limit: 500,
        };
        assert_eq!(err.status_code(), 413);

        let err = IngestError::NotFound { id: "x".into() };
        assert_eq!(err.status_code(), 404);

        let err = IngestError::InternalError {
            message: "failed".into(),
        };
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_schema_message_lists_columns() {
        let err = IngestError::SchemaInvalid {
            missing: vec!["Flowrate".into(), "Pressure".into()],
        };
        assert_eq!(err.message(), "Missing required columns: Flowrate, Pressure");
        assert_eq!(err.error_type(), "SchemaInvalid");
    }

    #[test]
    fn test_payload_message_carries_sizes() {
        let err = IngestError::PayloadTooLarge {
            size: 1000,
            limit: 500,
        };
        assert!(err.message().contains("1000"));
        assert!(err.message().contains("500"));
        assert!(err.hint().is_some());
    }

    #[test]
    fn test_not_found_conversion() {
        use csv2report_history::HistoryStore;

        let store = HistoryStore::new(1);
        let err = store.get(&"missing-id".into()).unwrap_err();
        let boundary: IngestError = err.into();
        assert_eq!(boundary.status_code(), 404);
        assert!(boundary.message().contains("missing-id"));
    }
}
