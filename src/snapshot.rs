//! Entry snapshot codec
//!
//! Entries arrive from collaborators as JSON documents. This module decodes
//! them into entry types and encodes resolution summaries back to JSON. It
//! works on text only; reading or writing files is left to the caller.

use crate::entry::ResolutionSummary;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur while decoding or encoding snapshots
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot is not a valid entry document
    #[error("Failed to decode entry snapshot: {0}")]
    DecodeFailed(#[source] serde_json::Error),

    /// The summary could not be encoded
    #[error("Failed to encode summary: {0}")]
    EncodeFailed(#[source] serde_json::Error),
}

/// Decodes an entry snapshot from JSON text
///
/// Works for any entry shape, e.g. `AnimeEntry` or `SimpleAnimeEntry`.
///
/// # Examples
///
/// ```
/// use anime_progress::{parse_entry_snapshot, AnimeEntry, EntryResolution};
///
/// let entry: AnimeEntry = parse_entry_snapshot(
///     r#"{"mediaId": 1, "episodes": [{"progressNumber": 1}], "listData": {"progress": 0}}"#,
/// )
/// .unwrap();
/// assert_eq!(entry.find_next_episode().map(|ep| ep.progress_number), Some(1));
/// ```
pub fn parse_entry_snapshot<E: DeserializeOwned>(json: &str) -> Result<E, SnapshotError> {
    serde_json::from_str(json).map_err(SnapshotError::DecodeFailed)
}

/// Encodes a summary as pretty-printed JSON
pub fn render_summary_json(summary: &ResolutionSummary) -> Result<String, SnapshotError> {
    serde_json::to_string_pretty(summary).map_err(SnapshotError::EncodeFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{AnimeEntry, EntryResolution, SimpleAnimeEntry};

    const SNAPSHOT: &str = r#"{
        "mediaId": 154587,
        "mediaTitle": "Frieren",
        "currentEpisodeCount": 28,
        "episodes": [
            {"type": "main", "progressNumber": 1, "episodeNumber": 1},
            {"type": "main", "progressNumber": 2, "episodeNumber": 2},
            {"type": "special", "progressNumber": 0, "episodeNumber": 1}
        ],
        "localFiles": [
            {"path": "/anime/Frieren/01.mkv", "metadata": {"episode": 1, "type": "main"}},
            {"path": "/anime/Frieren/02.mkv", "metadata": {"episode": 2, "type": "main"}}
        ],
        "listData": {"progress": 1, "status": "CURRENT"}
    }"#;

    #[test]
    fn test_parse_full_entry() {
        let entry: AnimeEntry = parse_entry_snapshot(SNAPSHOT).unwrap();
        assert_eq!(entry.media_title, "Frieren");
        assert_eq!(entry.current_episode_count, 28);
        assert_eq!(entry.find_next_local_file().map(|lf| lf.episode_number()), Some(2));
    }

    #[test]
    fn test_parse_simple_entry_ignores_extra_fields() {
        let entry: SimpleAnimeEntry = parse_entry_snapshot(SNAPSHOT).unwrap();
        assert_eq!(entry.media_id, 154587);
        assert_eq!(entry.current_progress(), 1);
    }

    #[test]
    fn test_parse_invalid_snapshot() {
        let result = parse_entry_snapshot::<AnimeEntry>("{not json");
        assert!(matches!(result, Err(SnapshotError::DecodeFailed(_))));
    }

    #[test]
    fn test_render_summary_json() {
        let entry: AnimeEntry = parse_entry_snapshot(SNAPSHOT).unwrap();
        let json = render_summary_json(&entry.summarize()).unwrap();
        assert!(json.contains(r#""nextEpisode": 2"#));
        assert!(json.contains(r#""watchedAll": false"#));
    }
}
