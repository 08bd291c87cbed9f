//! Registry - the player's Pokedex

use crate::types::{EntryUpdate, IndexEntry};

/// Every species the player has seen or captured.
///
/// Entries are unique by id and kept sorted by id. Merging is monotonic:
/// once an entry is seen or captured it stays that way, and no entry is
/// ever removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<IndexEntry>", into = "Vec<IndexEntry>")
)]
pub struct Registry {
    entries: Vec<IndexEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the registry with `update` folded in.
    ///
    /// A missing entry is created blank first. `seen`/`captured` are OR-ed
    /// in, the region becomes the update's region, and a detail payload
    /// overwrites every descriptive field.
    pub fn merge(&self, update: &EntryUpdate) -> Registry {
        let mut next = self.clone();
        next.merge_in_place(update);
        next
    }

    fn merge_in_place(&mut self, update: &EntryUpdate) {
        let idx = match self.entries.binary_search_by_key(&update.id, |e| e.id) {
            Ok(idx) => idx,
            Err(idx) => {
                self.entries.insert(
                    idx,
                    IndexEntry::new(update.id, update.name.clone(), update.region.clone()),
                );
                idx
            }
        };

        let entry = &mut self.entries[idx];
        entry.seen |= update.seen || update.captured;
        entry.captured |= update.captured;
        entry.region = update.region.clone();

        if let Some(detail) = &update.detail {
            entry.apply_detail(detail);
        }
    }

    pub fn get(&self, id: u32) -> Option<&IndexEntry> {
        self.entries
            .binary_search_by_key(&id, |e| e.id)
            .ok()
            .map(|idx| &self.entries[idx])
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// Entries in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn seen_count(&self) -> usize {
        self.entries.iter().filter(|e| e.seen).count()
    }

    pub fn captured_count(&self) -> usize {
        self.entries.iter().filter(|e| e.captured).count()
    }
}

/// Rebuilds the invariants from an arbitrary list: duplicates collapse into
/// one entry, flags OR together, and the later entry's fields win.
impl From<Vec<IndexEntry>> for Registry {
    fn from(mut entries: Vec<IndexEntry>) -> Self {
        entries.sort_by_key(|e| e.id);

        let mut merged: Vec<IndexEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            match merged.last_mut() {
                Some(last) if last.id == entry.id => {
                    let seen = last.seen || entry.seen || entry.captured;
                    let captured = last.captured || entry.captured;
                    *last = entry;
                    last.seen = seen;
                    last.captured = captured;
                }
                _ => {
                    let captured = entry.captured;
                    merged.push(entry);
                    if let Some(last) = merged.last_mut() {
                        last.seen |= captured;
                    }
                }
            }
        }

        Self { entries: merged }
    }
}

impl From<Registry> for Vec<IndexEntry> {
    fn from(registry: Registry) -> Self {
        registry.entries
    }
}

impl FromIterator<EntryUpdate> for Registry {
    fn from_iter<I: IntoIterator<Item = EntryUpdate>>(iter: I) -> Self {
        let mut registry = Registry::new();
        for update in iter {
            registry.merge_in_place(&update);
        }
        registry
    }
}
