//! Series entries and the resolution engine
//!
//! An entry combines a series' episode catalog, local file inventory and the
//! user's list record. Two storage shapes exist: the full `AnimeEntry` and the
//! lighter `SimpleAnimeEntry`. Both expose their collections through the
//! `EntrySource` trait, and every query on them is provided once by the
//! `EntryResolution` extension trait.

mod anime_entry;
mod integrity;
mod resolution;
mod simple;

pub use anime_entry::AnimeEntry;
pub use integrity::IntegrityError;
pub use resolution::{EntryResolution, ResolutionSummary};
pub use simple::SimpleAnimeEntry;

use crate::catalog::Catalog;
use crate::library::{Episode, ListData, LocalFile};

/// Read access to the three collections an entry is made of
///
/// Implementors only hand out references; all derived facts (next episode,
/// completion, ...) come from `EntryResolution`, which is implemented for
/// every `EntrySource`.
pub trait EntrySource {
    /// The series' episode catalog
    fn episodes(&self) -> &Catalog<Episode>;

    /// Local files matched to the series
    fn local_files(&self) -> &Catalog<LocalFile>;

    /// The user's list record, if the series is in their collection
    fn list_data(&self) -> Option<&ListData>;
}

impl<E: EntrySource + ?Sized> EntrySource for &E {
    fn episodes(&self) -> &Catalog<Episode> {
        (**self).episodes()
    }

    fn local_files(&self) -> &Catalog<LocalFile> {
        (**self).local_files()
    }

    fn list_data(&self) -> Option<&ListData> {
        (**self).list_data()
    }
}
