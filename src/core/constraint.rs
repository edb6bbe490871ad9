use crate::core::ledger::EntryId;
use crate::core::mixer::Mixer;
use crate::core::{CONTAINER_MAX, CONTAINER_MIN};
use crate::utils::error::{MixError, Result};
use crate::utils::rounding::round1;
use crate::utils::validation::validate_range;

/// Display form of an entry's volume bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundLabel {
    /// Numeric headroom, in ml.
    Ml(f64),
    /// Free volume dropped below 0.1 ml; a numeric bound would only show
    /// rounding noise.
    Full,
    /// The entry is the filler; its volume is derived, not bounded.
    Derived,
}

impl std::fmt::Display for BoundLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundLabel::Ml(ml) => write!(f, "{:.1}", ml),
            BoundLabel::Full => write!(f, "Full"),
            BoundLabel::Derived => Ok(()),
        }
    }
}

impl Mixer {
    /// Resizes the container, preserving mixture proportions.
    ///
    /// Non-filler volumes are rescaled by `new / old`; the filler, being a
    /// derived quantity, is left alone here and re-derived afterwards.
    pub fn set_capacity(&mut self, capacity: f64) -> Result<()> {
        validate_range("capacity", capacity, CONTAINER_MIN, CONTAINER_MAX)?;

        let ratio = capacity / self.capacity;
        self.rescale_entries(ratio);
        self.capacity = capacity;
        tracing::debug!("container resized to {:.1} ml (ratio {:.3})", capacity, ratio);

        self.recompute(None);
        self.derive_filler();
        Ok(())
    }

    /// Recomputes every entry's volume bound from the current free volume
    /// and forwards each entry's volume into its composition record.
    ///
    /// `skip` names the entry currently being edited by the caller; its
    /// stored bound is left as-is for this pass so the edit is not clamped
    /// against its own partial input.
    pub(crate) fn recompute(&mut self, skip: Option<EntryId>) {
        let free = self.capacity - self.ledger.used_volume();

        for entry in self.ledger.entries_mut() {
            if Some(entry.id()) != skip {
                entry.bound = round1(entry.volume + free);
            }
            let volume = entry.volume;
            entry.liquid.update_ml(volume);
        }
    }

    /// The bound as shown to the caller: numeric, the "Full" sentinel when
    /// the container has less than 0.1 ml of headroom, or empty for the
    /// filler entry.
    pub fn bound_label(&self, id: EntryId) -> Result<BoundLabel> {
        let entry = self.ledger.entry(id).ok_or(MixError::UnknownIngredient(id))?;

        if self.ledger.filler() == Some(id) {
            return Ok(BoundLabel::Derived);
        }
        if self.free_volume() < 0.1 {
            return Ok(BoundLabel::Full);
        }
        Ok(BoundLabel::Ml(entry.bound()))
    }
}
