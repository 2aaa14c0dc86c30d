use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::documents::kdoc::{DocumentEntry, DocumentId};

/// Parses every filename, keeps the ones carrying an id (and the draft
/// marker when `draft_only`), and orders them by id. Equal ids are ordered
/// by filename so the result does not depend on directory listing order.
pub fn build_index<S: AsRef<str>>(filenames: &[S], draft_only: bool) -> Vec<DocumentEntry> {
    let mut entries: Vec<DocumentEntry> = filenames
        .iter()
        .filter_map(|f| DocumentEntry::from_filename(f.as_ref()))
        .filter(|e| !draft_only || e.is_draft())
        .collect();
    entries.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.filename.cmp(&b.filename)));
    entries
}

/// Entry with the smallest id strictly greater than `current`.
/// `current` does not have to be present in the index.
pub fn find_next(index: &[DocumentEntry], current: DocumentId) -> Option<&DocumentEntry> {
    let pos = index.partition_point(|e| e.id <= current);
    index.get(pos)
}

/// Entry with the largest id strictly less than `current`.
pub fn find_prev(index: &[DocumentEntry], current: DocumentId) -> Option<&DocumentEntry> {
    let pos = index.partition_point(|e| e.id < current);
    pos.checked_sub(1).and_then(|i| index.get(i))
}

/// First entry carrying exactly `id`.
pub fn find_by_id(index: &[DocumentEntry], id: DocumentId) -> Option<&DocumentEntry> {
    let pos = index.partition_point(|e| e.id < id);
    index.get(pos).filter(|e| e.id == id)
}

/// Uniform pick over every valid entry of the unfiltered listing.
pub fn find_random<S, R>(filenames: &[S], rng: &mut R) -> Option<DocumentEntry>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let candidates: Vec<DocumentEntry> = filenames
        .iter()
        .filter_map(|f| DocumentEntry::from_filename(f.as_ref()))
        .collect();
    candidates.choose(rng).cloned()
}
