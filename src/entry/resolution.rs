//! Progress resolution over an entry's collections
//!
//! Every query here is a pure function of the entry's current field values.
//! Absence of data (an unknown catalog, no list record, no matching episode)
//! is reported as `None` or `false`, never as an error.

use super::integrity::{self, IntegrityError};
use super::EntrySource;
use crate::library::{Episode, ListData, LocalFile};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Snapshot of every fact the engine derives for an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionSummary {
    /// Progress from the user's list record (0 when not tracked)
    pub current_progress: i32,
    /// Whether the series has a list record
    pub in_collection: bool,
    /// Whether any local file exists
    pub downloaded: bool,
    /// Number of known episodes, `None` if the catalog is unknown
    pub episode_count: Option<usize>,
    /// Number of known main episodes, `None` if the catalog is unknown
    pub main_episode_count: Option<usize>,
    /// Number of local files
    pub local_file_count: usize,
    /// Number of main local files
    pub main_local_file_count: usize,
    /// Progress number of the episode to watch next
    pub next_episode: Option<i32>,
    /// Highest main progress number
    pub latest_episode: Option<i32>,
    /// Highest main local file episode number
    pub latest_local_file: Option<i32>,
    /// Whether the next episode has a main local file
    pub next_episode_downloaded: bool,
    /// Number of main episodes past the current progress
    pub unwatched_count: usize,
    /// Whether progress has reached the latest main episode
    pub watched_all: bool,
}

/// Queries answering what to play next and how far along a series is
///
/// Implemented for every `EntrySource`, so the full and simple entry shapes
/// share one implementation.
pub trait EntryResolution: EntrySource {
    /// Returns the user's progress, or 0 if the series is not in their list
    fn current_progress(&self) -> i32 {
        self.list_data().map_or(0, |data| data.progress)
    }

    /// Returns all episodes, or `None` if the catalog is unknown
    fn find_episodes(&self) -> Option<&[Episode]> {
        self.episodes().as_known()
    }

    /// Returns the main episodes, or `None` if the catalog is unknown
    ///
    /// A known catalog without any main episode yields an empty list.
    fn find_main_episodes(&self) -> Option<Vec<&Episode>> {
        let episodes = self.episodes().as_known()?;
        Some(episodes.iter().filter(|ep| ep.is_main()).collect())
    }

    /// Returns true if at least one local file exists
    ///
    /// Only presence counts; the files do not have to be main files.
    fn is_downloaded(&self) -> bool {
        self.local_files().has_items()
    }

    /// Returns the local files, or `None` if nothing is downloaded
    fn find_local_files(&self) -> Option<&[LocalFile]> {
        if !self.is_downloaded() {
            return None;
        }
        self.local_files().as_known()
    }

    /// Returns the main local files, or `None` if there are none
    fn find_main_local_files(&self) -> Option<Vec<&LocalFile>> {
        let local_files = self.find_local_files()?;
        let main: Vec<&LocalFile> = local_files.iter().filter(|lf| lf.is_main()).collect();
        if main.is_empty() {
            trace!("{} local file(s) present but none are main", local_files.len());
            return None;
        }
        Some(main)
    }

    /// Returns the user's list record
    fn find_list_data(&self) -> Option<&ListData> {
        self.list_data()
    }

    /// Returns true if the series is in the user's collection
    fn is_in_collection(&self) -> bool {
        self.find_list_data().is_some()
    }

    /// Returns the main episode whose progress number follows the current progress
    fn find_next_episode(&self) -> Option<&Episode> {
        let progress = self.current_progress();
        // No episode can follow i32::MAX
        let target = progress.checked_add(1)?;
        let main = self.find_main_episodes()?;

        let mut candidates = main.into_iter().filter(|ep| ep.progress_number == target);
        let next = candidates.next();
        if candidates.next().is_some() {
            warn!(
                "Multiple main episodes share progress number {}, using the first",
                target
            );
        }

        match next {
            Some(ep) => debug!("Next episode after progress {}: {}", progress, ep.progress_number),
            None => debug!("No main episode follows progress {}", progress),
        }
        next
    }

    /// Returns the main episode with the highest progress number
    ///
    /// On ties the first episode in catalog order wins.
    fn find_latest_episode(&self) -> Option<&Episode> {
        let latest = self.find_main_episodes()?.into_iter().reduce(|latest, ep| {
            if ep.progress_number > latest.progress_number {
                ep
            } else {
                latest
            }
        });
        if let Some(ep) = latest {
            debug!("Latest main episode: {}", ep.progress_number);
        }
        latest
    }

    /// Returns the main local file with the highest episode number
    ///
    /// On ties the first file in inventory order wins.
    fn find_latest_local_file(&self) -> Option<&LocalFile> {
        self.find_main_local_files()?.into_iter().reduce(|latest, lf| {
            if lf.episode_number() > latest.episode_number() {
                lf
            } else {
                latest
            }
        })
    }

    /// Returns true if progress has reached the latest main episode
    ///
    /// A series without any main episode is never considered fully watched.
    fn has_watched_all(&self) -> bool {
        match self.find_latest_episode() {
            Some(latest) => self.current_progress() >= latest.progress_number,
            None => false,
        }
    }

    /// Returns the first main episode with the given progress number
    fn find_episode_by_progress(&self, progress_number: i32) -> Option<&Episode> {
        self.find_main_episodes()?
            .into_iter()
            .find(|ep| ep.progress_number == progress_number)
    }

    /// Returns the main episodes past the current progress, in watch order
    fn find_unwatched_episodes(&self) -> Vec<&Episode> {
        let progress = self.current_progress();
        let mut unwatched: Vec<&Episode> = self
            .find_main_episodes()
            .unwrap_or_default()
            .into_iter()
            .filter(|ep| ep.progress_number > progress)
            .collect();
        unwatched.sort_by_key(|ep| ep.progress_number);
        unwatched
    }

    /// Returns the first main local file matched to the given episode number
    fn find_main_local_file_for_episode(&self, episode_number: i32) -> Option<&LocalFile> {
        self.find_main_local_files()?
            .into_iter()
            .find(|lf| lf.episode_number() == episode_number)
    }

    /// Returns the main local file for the next episode, if it is downloaded
    fn find_next_local_file(&self) -> Option<&LocalFile> {
        let next = self.find_next_episode()?;
        self.find_main_local_file_for_episode(next.progress_number)
    }

    /// Verifies the uniqueness assumptions behind the lookups above
    fn check_integrity(&self) -> Result<(), IntegrityError> {
        integrity::check_entry(self)
    }

    /// Collects every derived fact into a single summary
    fn summarize(&self) -> ResolutionSummary {
        let main_episodes = self.find_main_episodes();
        let next_episode = self.find_next_episode();

        ResolutionSummary {
            current_progress: self.current_progress(),
            in_collection: self.is_in_collection(),
            downloaded: self.is_downloaded(),
            episode_count: self.find_episodes().map(<[Episode]>::len),
            main_episode_count: main_episodes.as_ref().map(Vec::len),
            local_file_count: self.find_local_files().map_or(0, <[LocalFile]>::len),
            main_local_file_count: self.find_main_local_files().map_or(0, |lfs| lfs.len()),
            next_episode: next_episode.map(|ep| ep.progress_number),
            latest_episode: self.find_latest_episode().map(|ep| ep.progress_number),
            latest_local_file: self.find_latest_local_file().map(LocalFile::episode_number),
            next_episode_downloaded: self.find_next_local_file().is_some(),
            unwatched_count: self.find_unwatched_episodes().len(),
            watched_all: self.has_watched_all(),
        }
    }
}

impl<E: EntrySource + ?Sized> EntryResolution for E {}
