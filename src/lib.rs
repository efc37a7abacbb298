//! anime_progress - Work out what to watch next
//!
//! This library reconciles a user's watch-progress record for a series with
//! the episodes known for it and the files downloaded locally, answering the
//! questions a playback client asks: which episode comes next, which episode
//! is the latest, is the series fully watched, and is it tracked at all.
//!
//! All queries are synchronous, read-only and free of I/O. Entries are
//! populated by external collaborators (metadata service, file scanner) and
//! handed in as values.

mod catalog;
mod entry;
mod library;
mod playback;
mod snapshot;

pub use catalog::Catalog;
pub use entry::{
    AnimeEntry, EntryResolution, EntrySource, IntegrityError, ResolutionSummary,
    SimpleAnimeEntry,
};
pub use library::{
    Episode, EpisodeType, ListData, LocalFile, LocalFileMetadata, LocalFileType,
    MediaListStatus,
};
pub use playback::{QUALITY_AUTO, SourceTypeError, VideoSource, VideoSourceType, VideoSubtitle};
pub use snapshot::{SnapshotError, parse_entry_snapshot, render_summary_json};

use thiserror::Error;
use tracing::{debug, warn};

/// Which entry shape a snapshot should be decoded as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryShape {
    /// Decode as `AnimeEntry`
    #[default]
    Full,
    /// Decode as `SimpleAnimeEntry`
    Simple,
}

/// Outcome of resolving an entry snapshot
#[derive(Debug)]
pub struct Resolution {
    /// Every fact derived for the entry
    pub summary: ResolutionSummary,

    /// Set when the entry breaks the engine's uniqueness assumptions.
    /// The summary is still computed; lookups then use the first match.
    pub integrity_issue: Option<IntegrityError>,
}

/// Top-level error type for anime_progress operations
#[derive(Debug, Error)]
pub enum AnimeProgressError {
    /// Error decoding or encoding a snapshot
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// Entry data violates a uniqueness assumption
    #[error("Integrity error: {0}")]
    Integrity(#[from] IntegrityError),

    /// Unknown playback stream type
    #[error("Source type error: {0}")]
    SourceType(#[from] SourceTypeError),
}

/// Decodes an entry snapshot and derives its resolution summary
///
/// Integrity problems do not fail the call; they are logged and returned
/// alongside the summary so the caller can decide how much to trust it.
///
/// # Examples
///
/// ```
/// use anime_progress::{resolve_snapshot, EntryShape};
///
/// let json = r#"{
///     "mediaId": 1,
///     "episodes": [{"progressNumber": 1}, {"progressNumber": 2}],
///     "listData": {"progress": 2}
/// }"#;
///
/// let resolution = resolve_snapshot(json, EntryShape::Simple).unwrap();
/// assert!(resolution.summary.watched_all);
/// assert!(resolution.integrity_issue.is_none());
/// ```
pub fn resolve_snapshot(
    json: &str,
    shape: EntryShape,
) -> Result<Resolution, AnimeProgressError> {
    let resolution = match shape {
        EntryShape::Full => resolve_entry(&parse_entry_snapshot::<AnimeEntry>(json)?),
        EntryShape::Simple => resolve_entry(&parse_entry_snapshot::<SimpleAnimeEntry>(json)?),
    };
    Ok(resolution)
}

fn resolve_entry<E: EntryResolution>(entry: &E) -> Resolution {
    let integrity_issue = entry.check_integrity().err();
    if let Some(issue) = &integrity_issue {
        warn!("Entry data is inconsistent: {}", issue);
    }

    let summary = entry.summarize();
    debug!(
        "Resolved entry: progress={}, next={:?}, latest={:?}, watched_all={}",
        summary.current_progress, summary.next_episode, summary.latest_episode, summary.watched_all
    );

    Resolution {
        summary,
        integrity_issue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_full_snapshot() {
        let json = r#"{
            "mediaId": 5,
            "mediaTitle": "Series",
            "episodes": [{"progressNumber": 1}, {"progressNumber": 2}, {"progressNumber": 3}],
            "listData": {"progress": 1}
        }"#;
        let resolution = resolve_snapshot(json, EntryShape::Full).unwrap();
        assert_eq!(resolution.summary.next_episode, Some(2));
        assert_eq!(resolution.summary.unwatched_count, 2);
        assert!(!resolution.summary.downloaded);
    }

    #[test]
    fn test_resolve_reports_integrity_issue() {
        let json = r#"{
            "mediaId": 5,
            "episodes": [{"progressNumber": 1}, {"progressNumber": 1}],
            "listData": {"progress": 0}
        }"#;
        let resolution = resolve_snapshot(json, EntryShape::Full).unwrap();
        assert!(matches!(
            resolution.integrity_issue,
            Some(IntegrityError::DuplicateEpisodeProgress { progress_number: 1, .. })
        ));
        assert_eq!(resolution.summary.next_episode, Some(1));
    }

    #[test]
    fn test_resolve_invalid_snapshot() {
        let result = resolve_snapshot("[]", EntryShape::Simple);
        assert!(matches!(result, Err(AnimeProgressError::Snapshot(_))));
    }

    #[test]
    fn test_errors_convert_into_top_level() {
        fn strict(entry: &AnimeEntry) -> Result<i32, AnimeProgressError> {
            entry.check_integrity()?;
            let source_type = VideoSourceType::try_from(4)?;
            Ok(u8::from(source_type).into())
        }

        let entry = AnimeEntry::new(1, "Series").with_episodes(vec![Episode::main(1)]);
        let err = strict(&entry).unwrap_err();
        assert!(matches!(err, AnimeProgressError::SourceType(_)));
        assert_eq!(err.to_string(), "Source type error: Unknown video source type: 4");
    }
}
