use async_trait::async_trait;

use super::error::FetchError;
use super::types::StatusMap;

/// A source of regional status snapshots.
///
/// Each call performs one fetch and reports either the full mapping returned
/// by the remote side or a typed failure. Implementations must not retry
/// internally: the poll loop retries on its next tick.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Short name used in log records
    fn name(&self) -> &'static str;

    /// Fetch the current status of every region the remote side reports
    async fn fetch(&self) -> Result<StatusMap, FetchError>;
}
