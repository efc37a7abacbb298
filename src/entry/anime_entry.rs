//! Full series entry

use super::EntrySource;
use crate::catalog::Catalog;
use crate::library::{Episode, ListData, LocalFile};
use serde::{Deserialize, Serialize};

/// A series with its complete episode catalog, local files and list record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeEntry {
    /// Media identifier on the tracking service
    pub media_id: i32,
    /// Series title
    #[serde(default)]
    pub media_title: String,
    /// Number of episodes aired so far
    #[serde(default)]
    pub current_episode_count: i32,
    /// All known episodes
    #[serde(default)]
    pub episodes: Catalog<Episode>,
    /// Local files matched to this series
    #[serde(default)]
    pub local_files: Catalog<LocalFile>,
    /// The user's list record
    #[serde(default)]
    pub list_data: Option<ListData>,
}

impl AnimeEntry {
    /// Creates an entry with no populated collections
    pub fn new(media_id: i32, media_title: impl Into<String>) -> Self {
        Self {
            media_id,
            media_title: media_title.into(),
            ..Self::default()
        }
    }

    pub fn with_episodes(mut self, episodes: Vec<Episode>) -> Self {
        self.episodes = Catalog::Known(episodes);
        self
    }

    pub fn with_local_files(mut self, local_files: Vec<LocalFile>) -> Self {
        self.local_files = Catalog::Known(local_files);
        self
    }

    pub fn with_list_data(mut self, list_data: ListData) -> Self {
        self.list_data = Some(list_data);
        self
    }
}

impl EntrySource for AnimeEntry {
    fn episodes(&self) -> &Catalog<Episode> {
        &self.episodes
    }

    fn local_files(&self) -> &Catalog<LocalFile> {
        &self.local_files
    }

    fn list_data(&self) -> Option<&ListData> {
        self.list_data.as_ref()
    }
}
