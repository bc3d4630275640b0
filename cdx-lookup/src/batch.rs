use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;

use crate::aggregate::{summarize, LookupSummary};
use crate::client::{IndexClient, TransportError};
use crate::config::ArchiveConfig;
use crate::parse::parse_records;
use crate::query::CdxQuery;
use crate::replay::replay_url;

/// Emitted after each URL completes; the final event of an uncancelled
/// batch has `completed == total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

/// One line of the final report. A failed lookup keeps its error on the row
/// for observability but is otherwise indistinguishable from "never
/// indexed".
#[derive(Debug, Serialize)]
pub struct ResultRow {
    pub url: String,
    pub indexed: bool,
    pub versions: u64,
    pub replay_url: Option<String>,
    #[serde(skip)]
    pub failure: Option<TransportError>,
}

/// Rows in input order, one per input URL, duplicates included.
#[derive(Debug, Default, Serialize)]
pub struct BatchResult {
    pub rows: Vec<ResultRow>,
}

impl BatchResult {
    pub fn indexed(&self) -> usize {
        self.rows.iter().filter(|row| row.indexed).count()
    }

    pub fn failed(&self) -> usize {
        self.rows.iter().filter(|row| row.failure.is_some()).count()
    }
}

/// Runs the full pipeline for one URL: build the query, fetch the response,
/// parse the record stream, aggregate.
pub fn lookup_url<C: IndexClient + ?Sized>(
    config: &ArchiveConfig,
    client: &C,
    url: &str,
) -> Result<LookupSummary, TransportError> {
    let query = CdxQuery::new(&config.cdx_base, url);
    let body = client.fetch(&query)?;
    Ok(summarize(parse_records(&body)))
}

/// Looks up every URL in input order and returns one row per URL.
///
/// A transport failure affects only its own URL: the row degrades to zero
/// captures, a warning is logged, and the batch continues. The cancel flag
/// is checked between URLs; on cancellation the rows completed so far are
/// returned.
pub fn run_batch<C: IndexClient + ?Sized>(
    config: &ArchiveConfig,
    client: &C,
    urls: &[String],
    cancel: &AtomicBool,
    mut on_progress: impl FnMut(Progress),
) -> BatchResult {
    let total = urls.len();
    let mut result = BatchResult::default();

    for (done, url) in urls.iter().enumerate() {
        if cancel.load(Ordering::SeqCst) {
            log::warn!("batch cancelled after {} of {} URLs", done, total);
            break;
        }

        let row = match lookup_url(config, client, url) {
            Ok(summary) => {
                log::debug!("{}: {} captures", url, summary.count);
                ResultRow {
                    replay_url: replay_url(
                        &config.replay_base,
                        url,
                        summary.earliest_timestamp.as_deref(),
                    ),
                    indexed: summary.count > 0,
                    versions: summary.count,
                    url: url.clone(),
                    failure: None,
                }
            }
            Err(err) => {
                log::warn!("lookup failed for {}: {}", url, err);
                ResultRow {
                    url: url.clone(),
                    indexed: false,
                    versions: 0,
                    replay_url: None,
                    failure: Some(err),
                }
            }
        };

        result.rows.push(row);
        on_progress(Progress {
            completed: done + 1,
            total,
        });
    }

    result
}
