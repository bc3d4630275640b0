/// CDX query endpoint of the archive's index.
pub const DEFAULT_CDX_BASE: &str = "https://nettarkivet.nb.no/search/cdx";

/// Base URL of the archive's replay viewer. Keeps its trailing slash so
/// replay links are a plain concatenation of base, timestamp and URL.
pub const DEFAULT_REPLAY_BASE: &str = "https://nettarkivet.nb.no/search/";

/// Archive endpoints used by one batch run.
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    pub cdx_base: String,
    pub replay_base: String,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        ArchiveConfig {
            cdx_base: DEFAULT_CDX_BASE.to_string(),
            replay_base: DEFAULT_REPLAY_BASE.to_string(),
        }
    }
}
