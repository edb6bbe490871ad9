use serde::{Deserialize, Serialize};

/// One ingredient's composition record, as understood by the external
/// blending library: PG/VG percentages, nicotine strength and the current
/// volume in milliliters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Liquid {
    pub name: String,
    pub pg: f64,
    pub vg: f64,
    pub nic: f64,
    pub ml: f64,
}

impl Liquid {
    pub fn new(name: impl Into<String>, pg: f64, vg: f64, nic: f64, ml: f64) -> Self {
        Self {
            name: name.into(),
            pg,
            vg,
            nic,
            ml,
        }
    }

    /// The engine forwards volume changes through this call; it is the only
    /// field of the composition record the engine ever writes.
    pub fn update_ml(&mut self, ml: f64) {
        self.ml = ml;
    }
}

/// Aggregate PG/VG/nicotine figures for a whole mixture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BlendSummary {
    pub pg: f64,
    pub vg: f64,
    pub nic: f64,
}
