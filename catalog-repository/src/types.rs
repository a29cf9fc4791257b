//! Result types for search index write operations.

/// Summary of a bulk indexing request.
///
/// The bulk API reports success per item, so a request can partially fail.
/// `errors` holds the reasons reported for failed items, in item order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulkIndexSummary {
    /// Total number of documents submitted.
    pub total: usize,
    /// Number of documents indexed.
    pub succeeded: usize,
    /// Number of documents the engine rejected.
    pub failed: usize,
    /// Failure reasons for the rejected documents.
    pub errors: Vec<String>,
}

impl BulkIndexSummary {
    /// Whether every submitted document was indexed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Fold another summary into this one.
    pub fn merge(&mut self, other: BulkIndexSummary) {
        self.total += other.total;
        self.succeeded += other.succeeded;
        self.failed += other.failed;
        self.errors.extend(other.errors);
    }
}
