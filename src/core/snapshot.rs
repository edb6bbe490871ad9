use crate::core::ledger::Ledger;
use crate::core::mixer::Mixer;
use crate::core::{CONTAINER_MAX, CONTAINER_MIN, MAX_INGREDIENTS, MAX_NAME_LEN, VOLUME_EPSILON};
use crate::domain::model::Liquid;
use crate::utils::error::{MixError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The transfer shape a whole allocation state is exchanged in: ingredient
/// records, container size, which ingredient (by position) fills the
/// container, and the mixture name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixSnapshot {
    pub ingredients: Vec<Liquid>,
    pub container_vol: f64,
    pub filler_idx: Option<usize>,
    pub name: String,
}

impl Validate for MixSnapshot {
    fn validate(&self) -> Result<()> {
        if !self.container_vol.is_finite()
            || self.container_vol < CONTAINER_MIN
            || self.container_vol > CONTAINER_MAX
        {
            return Err(MixError::validation(format!(
                "container volume {} outside {}..={} ml",
                self.container_vol, CONTAINER_MIN, CONTAINER_MAX
            )));
        }

        if self.ingredients.len() > MAX_INGREDIENTS {
            return Err(MixError::validation(format!(
                "{} ingredients exceed the limit of {}",
                self.ingredients.len(),
                MAX_INGREDIENTS
            )));
        }

        for (idx, liquid) in self.ingredients.iter().enumerate() {
            if !liquid.ml.is_finite() || liquid.ml < 0.0 {
                return Err(MixError::validation(format!(
                    "ingredient {} ('{}') has invalid volume {}",
                    idx, liquid.name, liquid.ml
                )));
            }
        }

        let total: f64 = self.ingredients.iter().map(|l| l.ml).sum();
        if total > self.container_vol + VOLUME_EPSILON {
            return Err(MixError::validation(format!(
                "ingredients total {:.1} ml exceeds the {:.1} ml container",
                total, self.container_vol
            )));
        }

        if let Some(idx) = self.filler_idx {
            if idx >= self.ingredients.len() {
                return Err(MixError::validation(format!(
                    "filler index {} out of range for {} ingredients",
                    idx,
                    self.ingredients.len()
                )));
            }
        }

        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(MixError::validation(format!(
                "mixture name longer than {} characters",
                MAX_NAME_LEN
            )));
        }

        Ok(())
    }
}

impl Mixer {
    /// Replaces the whole allocation state with a snapshot's contents.
    ///
    /// All-or-nothing: the snapshot is validated up front and the new state
    /// is assembled on the side, so a failing load leaves the current
    /// ledger, capacity and name exactly as they were.
    pub fn load(&mut self, snapshot: &MixSnapshot) -> Result<()> {
        snapshot.validate()?;

        let mut next = Mixer {
            ledger: Ledger::new(),
            capacity: snapshot.container_vol,
            name: snapshot.name.clone(),
        };

        for liquid in &snapshot.ingredients {
            let volume = liquid.ml;
            next.ledger.push(liquid.clone(), volume);
        }
        next.recompute(None);

        if let Some(idx) = snapshot.filler_idx {
            // Validated above, so the position resolves.
            if let Some(id) = next.ledger.id_at(idx) {
                next.toggle_filler(id)?;
            }
        }

        tracing::debug!(
            "loaded snapshot '{}': {} ingredients in {:.1} ml",
            next.name,
            next.len(),
            next.capacity
        );
        *self = next;
        Ok(())
    }

    /// Exports the current state as a snapshot; loading it back reproduces
    /// an observably identical mixer.
    pub fn export(&self) -> MixSnapshot {
        let ingredients = self
            .ledger
            .entries()
            .map(|entry| {
                let mut liquid = entry.liquid().clone();
                liquid.update_ml(entry.volume());
                liquid
            })
            .collect();

        MixSnapshot {
            ingredients,
            container_vol: self.capacity,
            filler_idx: self.ledger.filler().and_then(|id| self.ledger.position(id)),
            name: self.name.clone(),
        }
    }
}

/// Reads a snapshot from a JSON file. Does not validate; validation happens
/// on load.
pub fn read_snapshot(path: impl AsRef<Path>) -> Result<MixSnapshot> {
    let data = std::fs::read_to_string(path)?;
    let snapshot = serde_json::from_str(&data)?;
    Ok(snapshot)
}

/// Writes a snapshot to a JSON file, pretty-printed.
pub fn write_snapshot(path: impl AsRef<Path>, snapshot: &MixSnapshot) -> Result<()> {
    let data = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(path, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> MixSnapshot {
        MixSnapshot {
            ingredients: vec![
                Liquid::new("Base", 30.0, 70.0, 0.0, 60.0),
                Liquid::new("Aroma", 100.0, 0.0, 0.0, 10.0),
            ],
            container_vol: 100.0,
            filler_idx: None,
            name: "House Mix".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_good_snapshot() {
        assert!(snapshot().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_overfull_container() {
        let mut snap = snapshot();
        snap.container_vol = 60.0;
        assert!(matches!(snap.validate(), Err(MixError::Validation { .. })));
    }

    #[test]
    fn test_validate_rejects_capacity_out_of_bounds() {
        let mut snap = snapshot();
        snap.container_vol = 20000.0;
        assert!(snap.validate().is_err());
        snap.container_vol = 5.0;
        assert!(snap.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_too_many_ingredients() {
        let mut snap = snapshot();
        snap.ingredients = (0..MAX_INGREDIENTS + 1)
            .map(|i| Liquid::new(format!("i{}", i), 50.0, 50.0, 0.0, 0.0))
            .collect();
        assert!(snap.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_filler_index_out_of_range() {
        let mut snap = snapshot();
        snap.filler_idx = Some(2);
        assert!(snap.validate().is_err());
        snap.filler_idx = Some(1);
        assert!(snap.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_volume() {
        let mut snap = snapshot();
        snap.ingredients[0].ml = -1.0;
        assert!(snap.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_long_name() {
        let mut snap = snapshot();
        snap.name = "n".repeat(MAX_NAME_LEN + 1);
        assert!(snap.validate().is_err());
    }

    #[test]
    fn test_snapshot_json_field_names() {
        let json = serde_json::to_value(snapshot()).unwrap();
        assert!(json.get("ingredients").is_some());
        assert!(json.get("container_vol").is_some());
        assert!(json.get("filler_idx").is_some());
        assert!(json.get("name").is_some());
        assert!(json["ingredients"][0].get("ml").is_some());
        assert!(json["ingredients"][0].get("pg").is_some());
    }
}
