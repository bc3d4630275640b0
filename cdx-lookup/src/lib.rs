// Export the lookup pipeline modules
pub mod aggregate;
pub mod batch;
pub mod client;
pub mod config;
pub mod parse;
pub mod query;
pub mod replay;

// Re-export tests for integration testing
#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::aggregate::{summarize, LookupSummary};
pub use crate::batch::{lookup_url, run_batch, BatchResult, Progress, ResultRow};
pub use crate::client::{HttpIndexClient, IndexClient, TransportError};
pub use crate::config::ArchiveConfig;
pub use crate::parse::{parse_records, CaptureRecord};
pub use crate::query::CdxQuery;
pub use crate::replay::replay_url;
