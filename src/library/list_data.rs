//! The user's remote tracking record for a series.

use serde::{Deserialize, Serialize};

/// Status of a series in the user's list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaListStatus {
    Current,
    Planning,
    Completed,
    Dropped,
    Paused,
    Repeating,
}

/// Watch-progress record for a series in the user's list.
///
/// The presence of this record is what puts a series in the user's
/// collection. The values are taken as-is from the tracking service, so
/// `progress` is not range checked.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListData {
    /// Number of episodes watched
    pub progress: i32,
    /// User score
    #[serde(default)]
    pub score: f64,
    /// List the series belongs to
    #[serde(default)]
    pub status: Option<MediaListStatus>,
    /// Number of rewatches
    #[serde(default)]
    pub repeat: i32,
    /// Date the user started watching (as sent by the tracker)
    #[serde(default)]
    pub started_at: Option<String>,
    /// Date the user finished watching
    #[serde(default)]
    pub completed_at: Option<String>,
}

impl ListData {
    /// Creates a record with the given progress and no other data
    pub fn with_progress(progress: i32) -> Self {
        Self {
            progress,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_uses_tracker_casing() {
        let data: ListData =
            serde_json::from_str(r#"{"progress": 4, "status": "REPEATING", "repeat": 1}"#)
                .unwrap();
        assert_eq!(data.progress, 4);
        assert_eq!(data.status, Some(MediaListStatus::Repeating));
        assert_eq!(data.repeat, 1);
        assert_eq!(data.started_at, None);
    }
}
