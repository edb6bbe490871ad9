use crate::domain::model::Liquid;

/// Stable identity of a ledger entry. Insertion order decides display
/// tie-breaks only; identity is never derived from a display position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One ingredient's volume record.
#[derive(Debug, Clone)]
pub struct Entry {
    pub(crate) id: EntryId,
    pub(crate) volume: f64,
    pub(crate) bound: f64,
    pub(crate) liquid: Liquid,
}

impl Entry {
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Requested volume, or the derived volume if this entry is the filler.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Largest volume this entry could take without overflowing the
    /// container, as of the last recompute that did not skip it.
    pub fn bound(&self) -> f64 {
        self.bound
    }

    pub fn liquid(&self) -> &Liquid {
        &self.liquid
    }
}

/// Ordered collection of entries plus the filler pointer.
///
/// At most one entry is the filler, tracked explicitly as an
/// `Option<EntryId>` rather than a per-entry flag, so the "at most one"
/// invariant cannot be violated by construction.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<Entry>,
    filler: Option<EntryId>,
    next_id: u64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub(crate) fn entries_mut(&mut self) -> impl Iterator<Item = &mut Entry> {
        self.entries.iter_mut()
    }

    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub(crate) fn entry_mut(&mut self, id: EntryId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.entry(id).is_some()
    }

    pub fn filler(&self) -> Option<EntryId> {
        self.filler
    }

    pub(crate) fn set_filler(&mut self, filler: Option<EntryId>) {
        self.filler = filler;
    }

    /// Position of an entry in insertion order.
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Id of the entry at an insertion-order position.
    pub fn id_at(&self, index: usize) -> Option<EntryId> {
        self.entries.get(index).map(|e| e.id)
    }

    /// Sum of all non-filler volumes.
    pub fn used_volume(&self) -> f64 {
        self.entries
            .iter()
            .filter(|e| Some(e.id) != self.filler)
            .map(|e| e.volume)
            .sum()
    }

    /// Sum of every volume, filler included.
    pub fn total_entry_volume(&self) -> f64 {
        self.entries.iter().map(|e| e.volume).sum()
    }

    pub(crate) fn push(&mut self, liquid: Liquid, volume: f64) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            volume,
            bound: volume,
            liquid,
        });
        id
    }

    /// Removes the entry, keeping insertion order of the rest. The caller is
    /// responsible for clearing filler state first.
    pub(crate) fn remove(&mut self, id: EntryId) -> Option<Entry> {
        let idx = self.position(id)?;
        Some(self.entries.remove(idx))
    }
}
