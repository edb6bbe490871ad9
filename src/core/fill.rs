use crate::core::ledger::EntryId;
use crate::core::mixer::Mixer;
use crate::utils::error::{MixError, Result};
use crate::utils::rounding::round1;

impl Mixer {
    /// Makes `id` the filler, or clears it if it already is.
    ///
    /// Only one entry can fill the container, so selecting a new filler
    /// displaces the previous one. A cleared filler keeps its last derived
    /// volume as its requested volume and becomes editable again.
    pub fn toggle_filler(&mut self, id: EntryId) -> Result<()> {
        if !self.ledger.contains(id) {
            return Err(MixError::UnknownIngredient(id));
        }

        if self.ledger.filler() == Some(id) {
            self.ledger.set_filler(None);
            tracing::debug!("cleared filler {}", id);
        } else {
            self.ledger.set_filler(Some(id));
            tracing::debug!("set filler to {}", id);
        }

        self.recompute(Some(id));
        self.derive_filler();
        Ok(())
    }

    /// Re-derives the filler's volume as whatever the siblings leave of the
    /// container, clamped at zero. Called at the end of every mutation that
    /// can change a sibling volume, so the filler is never stale.
    ///
    /// The volume is written into the entry directly; going through
    /// `set_volume` would trigger another recompute/derive cycle for a value
    /// this function just produced.
    pub(crate) fn derive_filler(&mut self) {
        let Some(id) = self.ledger.filler() else {
            return;
        };

        let derived = round1((self.capacity - self.ledger.used_volume()).max(0.0));
        if let Some(entry) = self.ledger.entry_mut(id) {
            entry.volume = derived;
            entry.liquid.update_ml(derived);
        }
    }
}
