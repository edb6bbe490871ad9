use crate::core::mixer::Mixer;
use crate::utils::rounding::round1;

impl Mixer {
    /// Scales every non-filler volume by `ratio`, truncating back to the
    /// engine's one-decimal precision. The filler is not rescaled: its
    /// volume is derived from the new capacity right after.
    pub(crate) fn rescale_entries(&mut self, ratio: f64) {
        let filler = self.ledger.filler();
        for entry in self.ledger.entries_mut() {
            if Some(entry.id()) == filler {
                continue;
            }
            entry.volume = round1(entry.volume * ratio);
        }
    }
}
