use crate::core::ledger::{Entry, EntryId, Ledger};
use crate::core::{
    CONTAINER_MAX, CONTAINER_MIN, DEFAULT_CAPACITY, MAX_INGREDIENTS, MAX_NAME_LEN, VOLUME_EPSILON,
};
use crate::domain::model::{BlendSummary, Liquid};
use crate::domain::ports::Blender;
use crate::utils::error::{MixError, Result};
use crate::utils::validation::validate_range;

/// The volume-allocation engine: an ordered ledger of ingredient volumes
/// under a fixed container capacity, with an optional filler entry whose
/// volume is derived as whatever space the others leave.
///
/// Every mutating operation runs to completion and ends with a recompute
/// pass, so invariants hold between any two public calls:
/// non-filler volumes never sum past the capacity, at most one entry is the
/// filler, and the filler's volume always reflects the latest sibling edits.
#[derive(Debug, Clone)]
pub struct Mixer {
    pub(crate) ledger: Ledger,
    pub(crate) capacity: f64,
    pub(crate) name: String,
}

impl Default for Mixer {
    fn default() -> Self {
        Self::new()
    }
}

impl Mixer {
    pub fn new() -> Self {
        Self {
            ledger: Ledger::new(),
            capacity: DEFAULT_CAPACITY,
            name: String::new(),
        }
    }

    pub fn with_capacity(capacity: f64) -> Result<Self> {
        validate_range("capacity", capacity, CONTAINER_MIN, CONTAINER_MAX)?;
        Ok(Self {
            capacity,
            ..Self::new()
        })
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the mixture name, truncated to [`MAX_NAME_LEN`] characters.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name: String = name.into();
        self.name = name.chars().take(MAX_NAME_LEN).collect();
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.ledger.entries()
    }

    pub fn entry(&self, id: EntryId) -> Result<&Entry> {
        self.ledger.entry(id).ok_or(MixError::UnknownIngredient(id))
    }

    pub fn filler(&self) -> Option<EntryId> {
        self.ledger.filler()
    }

    /// Sum of non-filler volumes.
    pub fn used_volume(&self) -> f64 {
        self.ledger.used_volume()
    }

    /// Headroom left for the non-filler entries to grow into.
    pub fn free_volume(&self) -> f64 {
        self.capacity - self.ledger.used_volume()
    }

    /// Total mixture volume. With a filler set the mixture always fills the
    /// container; otherwise it is the plain sum of entry volumes.
    pub fn total_volume(&self) -> f64 {
        if self.ledger.filler().is_some() {
            self.capacity
        } else {
            self.ledger.total_entry_volume()
        }
    }

    /// Appends an ingredient, taking its current `ml` as the initial volume.
    ///
    /// Rejects when the ledger is full, or when the initial volume would not
    /// fit in the remaining free volume.
    pub fn add_ingredient(&mut self, liquid: Liquid) -> Result<EntryId> {
        if self.ledger.len() >= MAX_INGREDIENTS {
            return Err(MixError::IngredientLimit);
        }

        let volume = liquid.ml;
        validate_range("ml", volume, 0.0, self.free_volume().max(0.0))?;

        let id = self.ledger.push(liquid, volume);
        tracing::debug!("added ingredient {} with {:.1} ml", id, volume);

        self.recompute(None);
        self.derive_filler();
        Ok(id)
    }

    /// Removes an ingredient. The filler entry has its filler state cleared
    /// first so the ledger never points at a deleted entry.
    pub fn remove_ingredient(&mut self, id: EntryId) -> Result<()> {
        if !self.ledger.contains(id) {
            return Err(MixError::UnknownIngredient(id));
        }

        if self.ledger.filler() == Some(id) {
            self.toggle_filler(id)?;
        }

        self.ledger.remove(id);
        tracing::debug!("removed ingredient {}", id);

        self.recompute(None);
        self.derive_filler();
        Ok(())
    }

    /// Applies a requested volume to an entry.
    ///
    /// Returns `Ok(false)` and leaves the ledger untouched when the new
    /// volume would push the non-filler total past the capacity; that is a
    /// keystroke-level rejection, not an error. The entry being edited keeps
    /// its previous bound for this pass (`skip`), so the caller's input field
    /// is not reclamped against itself mid-edit.
    pub fn set_volume(&mut self, id: EntryId, ml: f64) -> Result<bool> {
        let entry = self.ledger.entry(id).ok_or(MixError::UnknownIngredient(id))?;
        if self.ledger.filler() == Some(id) {
            return Err(MixError::DerivedVolume(id));
        }
        validate_range("ml", ml, 0.0, CONTAINER_MAX)?;

        let others = self.ledger.used_volume() - entry.volume;
        if others + ml > self.capacity + VOLUME_EPSILON {
            tracing::debug!(
                "rejected {:.1} ml for {}: only {:.1} ml free",
                ml,
                id,
                self.capacity - others
            );
            return Ok(false);
        }

        if let Some(entry) = self.ledger.entry_mut(id) {
            entry.volume = ml;
        }
        self.recompute(Some(id));
        self.derive_filler();
        Ok(true)
    }

    /// Aggregate composition figures, produced by the external blender.
    /// A single-ingredient mixture is that liquid itself; an empty ledger
    /// blends to zero.
    pub fn mixture(&self, blender: &dyn Blender) -> BlendSummary {
        let liquids: Vec<Liquid> = self.ledger.entries().map(|e| e.liquid.clone()).collect();
        match liquids.as_slice() {
            [] => BlendSummary::default(),
            [only] => BlendSummary {
                pg: only.pg,
                vg: only.vg,
                nic: only.nic,
            },
            _ => blender.blend(&liquids),
        }
    }
}
