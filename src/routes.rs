// Public API ==========================================================================================================

pub const DOWNLOADS: &str = "/downloads";
pub const STREAM_PREFIX: &str = "/stream/";

/// Builds the path that streams the torrent identified by `info_hash`. The hash is used verbatim.
#[must_use]
pub fn stream(info_hash: &str) -> String {
    format!("{STREAM_PREFIX}{info_hash}")
}

// Unit Tests ==========================================================================================================
