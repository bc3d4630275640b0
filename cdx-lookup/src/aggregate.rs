use crate::parse::CaptureRecord;

/// Aggregate over all captures of one URL.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupSummary {
    pub count: u64,
    /// Lexicographically smallest timestamp token; present iff `count > 0`.
    pub earliest_timestamp: Option<String>,
}

/// Reduces the capture records of one URL to a count and the earliest
/// timestamp.
///
/// "Earliest" is plain string comparison, not numeric or date-aware. The
/// archive's tokens are fixed-width, zero-padded and share an epoch, so
/// lexicographic order is capture order; switching to a parsed comparison
/// would change results for any token the archive emits outside that shape.
pub fn summarize(records: impl Iterator<Item = CaptureRecord>) -> LookupSummary {
    let mut count = 0;
    let mut earliest: Option<String> = None;

    for record in records {
        count += 1;
        match &earliest {
            Some(current) if *current <= record.timestamp => {}
            _ => earliest = Some(record.timestamp),
        }
    }

    LookupSummary {
        count,
        earliest_timestamp: earliest,
    }
}
