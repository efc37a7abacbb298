//! Consistency checks over an entry's collections
//!
//! The resolution engine assumes that progress numbers are unique among main
//! episodes and that no two main local files claim the same episode. Nothing
//! upstream guarantees either, so callers that care can verify it here before
//! trusting a "next episode" answer.

use super::EntrySource;
use crate::library::{Episode, LocalFile};
use std::collections::HashMap;
use std::hash::Hash;
use std::path::PathBuf;
use thiserror::Error;

/// Violations of the uniqueness assumptions the engine relies on
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntegrityError {
    /// Two main episodes share a progress number
    #[error(
        "Main episodes share progress number {progress_number}: '{first}' and '{second}'"
    )]
    DuplicateEpisodeProgress {
        progress_number: i32,
        first: String,
        second: String,
    },

    /// Two main local files are matched to the same episode
    #[error("Main local files share episode {episode}: {first} and {second}")]
    DuplicateLocalFileEpisode {
        episode: i32,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Checks an entry's main episodes and main local files for duplicates
///
/// Episodes are checked first; the first duplicate found is reported.
pub(super) fn check_entry<E: EntrySource + ?Sized>(entry: &E) -> Result<(), IntegrityError> {
    if let Some(episodes) = entry.episodes().as_known() {
        let main = episodes.iter().filter(|ep| ep.is_main());
        if let Some((first, second)) = first_duplicate(main, |ep| ep.progress_number) {
            return Err(IntegrityError::DuplicateEpisodeProgress {
                progress_number: first.progress_number,
                first: episode_label(first),
                second: episode_label(second),
            });
        }
    }

    if let Some(local_files) = entry.local_files().as_known() {
        let main = local_files.iter().filter(|lf| lf.is_main());
        if let Some((first, second)) = first_duplicate(main, LocalFile::episode_number) {
            return Err(IntegrityError::DuplicateLocalFileEpisode {
                episode: first.episode_number(),
                first: first.path.clone(),
                second: second.path.clone(),
            });
        }
    }

    Ok(())
}

/// Returns the first pair of items sharing a key, in encounter order
fn first_duplicate<'a, T, K, I, F>(items: I, key: F) -> Option<(&'a T, &'a T)>
where
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> K,
    K: Eq + Hash,
{
    let mut seen: HashMap<K, &'a T> = HashMap::new();
    for item in items {
        if let Some(previous) = seen.insert(key(item), item) {
            return Some((previous, item));
        }
    }
    None
}

fn episode_label(episode: &Episode) -> String {
    if episode.display_title.is_empty() {
        format!("progress {}", episode.progress_number)
    } else {
        episode.display_title.clone()
    }
}
