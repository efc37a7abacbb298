//! Lightweight series entry used where full metadata is not needed

use super::EntrySource;
use crate::catalog::Catalog;
use crate::library::{Episode, ListData, LocalFile};
use serde::{Deserialize, Serialize};

/// A series entry carrying only what the resolution engine reads
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleAnimeEntry {
    pub media_id: i32,
    #[serde(default)]
    pub episodes: Catalog<Episode>,
    #[serde(default)]
    pub local_files: Catalog<LocalFile>,
    #[serde(default)]
    pub list_data: Option<ListData>,
}

impl EntrySource for SimpleAnimeEntry {
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

impl From<super::AnimeEntry> for SimpleAnimeEntry {
    fn from(entry: super::AnimeEntry) -> Self {
        Self {
            media_id: entry.media_id,
            episodes: entry.episodes,
            local_files: entry.local_files,
            list_data: entry.list_data,
        }
    }
}
