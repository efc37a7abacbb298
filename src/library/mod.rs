/// Data structures for a series' episode catalog and local file inventory.
///
/// Episodes come from the metadata collaborator, local files from the
/// file-discovery collaborator. Both are consumed as already-populated values;
/// nothing in this module fetches or scans anything.
mod list_data;

pub use list_data::{ListData, MediaListStatus};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Classification of an episode within a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpisodeType {
    /// Canonical numbered story episode
    #[default]
    Main,
    /// Special, OVA or other extra
    Special,
    /// Creditless opening or ending
    Nc,
}

/// Represents a single episode of a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Whether this is a main episode or an extra
    #[serde(rename = "type", default)]
    pub episode_type: EpisodeType,
    /// The number compared against the user's list progress
    pub progress_number: i32,
    /// The episode number as shown to the user
    #[serde(default)]
    pub episode_number: i32,
    /// Episode number counted across all seasons
    #[serde(default)]
    pub absolute_episode_number: i32,
    /// Short label such as "Episode 3"
    #[serde(default)]
    pub display_title: String,
    /// The episode title
    #[serde(default)]
    pub episode_title: String,
}

impl Episode {
    /// Creates a main episode whose episode and progress numbers coincide
    pub fn main(number: i32) -> Self {
        Self {
            episode_type: EpisodeType::Main,
            progress_number: number,
            episode_number: number,
            absolute_episode_number: number,
            display_title: format!("Episode {}", number),
            episode_title: String::new(),
        }
    }

    /// Creates a special episode with the given progress number
    pub fn special(progress_number: i32) -> Self {
        Self {
            episode_type: EpisodeType::Special,
            display_title: format!("Special {}", progress_number),
            ..Self::main(progress_number)
        }
    }

    /// Returns true if this episode is canonical numbered content
    pub fn is_main(&self) -> bool {
        self.episode_type == EpisodeType::Main
    }
}

/// Classification of a local file, mirroring `EpisodeType`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocalFileType {
    #[default]
    Main,
    Special,
    Nc,
}

/// Episode information the file-discovery collaborator attached to a file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalFileMetadata {
    /// Episode number the file was matched to
    pub episode: i32,
    /// AniDB episode label (e.g. "S1" for specials)
    #[serde(default)]
    pub anidb_episode: String,
    /// Main or extra
    #[serde(rename = "type", default)]
    pub file_type: LocalFileType,
}

/// Represents a downloaded file matched to an episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalFile {
    /// Path to the file on disk
    pub path: PathBuf,
    /// File name
    #[serde(default)]
    pub name: String,
    /// Matched episode metadata
    pub metadata: LocalFileMetadata,
    /// Locked files are kept out of automatic re-matching
    #[serde(default)]
    pub locked: bool,
    /// Ignored files are kept out of the library
    #[serde(default)]
    pub ignored: bool,
    /// Media the file was matched to
    #[serde(default)]
    pub media_id: i32,
}

impl LocalFile {
    /// Creates a local file matched to the given episode
    pub fn new(path: impl Into<PathBuf>, episode: i32, file_type: LocalFileType) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            path,
            name,
            metadata: LocalFileMetadata {
                episode,
                anidb_episode: match file_type {
                    LocalFileType::Main => episode.to_string(),
                    LocalFileType::Special => format!("S{}", episode),
                    LocalFileType::Nc => String::new(),
                },
                file_type,
            },
            locked: false,
            ignored: false,
            media_id: 0,
        }
    }

    /// The episode number the file was matched to
    pub fn episode_number(&self) -> i32 {
        self.metadata.episode
    }

    /// Returns true if the file holds canonical numbered content
    pub fn is_main(&self) -> bool {
        self.metadata.file_type == LocalFileType::Main
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episode_classification() {
        assert!(Episode::main(1).is_main());
        assert!(!Episode::special(1).is_main());
        assert_eq!(Episode::special(4).progress_number, 4);
    }

    #[test]
    fn test_local_file_new() {
        let file = LocalFile::new("/anime/Show/Show - 03.mkv", 3, LocalFileType::Main);
        assert_eq!(file.name, "Show - 03.mkv");
        assert_eq!(file.episode_number(), 3);
        assert_eq!(file.metadata.anidb_episode, "3");
        assert!(file.is_main());

        let special = LocalFile::new("/anime/Show/Show - SP1.mkv", 1, LocalFileType::Special);
        assert_eq!(special.metadata.anidb_episode, "S1");
        assert!(!special.is_main());
    }

    #[test]
    fn test_episode_deserialize_defaults() {
        let episode: Episode = serde_json::from_str(r#"{"progressNumber": 7}"#).unwrap();
        assert_eq!(episode.episode_type, EpisodeType::Main);
        assert_eq!(episode.progress_number, 7);
        assert!(episode.display_title.is_empty());

        let episode: Episode =
            serde_json::from_str(r#"{"type": "special", "progressNumber": 0}"#).unwrap();
        assert!(!episode.is_main());
    }

    #[test]
    fn test_local_file_deserialize() {
        let json = r#"{
            "path": "/anime/Show/Show - 01.mkv",
            "metadata": { "episode": 1, "anidbEpisode": "1", "type": "main" }
        }"#;
        let file: LocalFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.episode_number(), 1);
        assert!(file.is_main());
        assert!(!file.locked);
    }
}
