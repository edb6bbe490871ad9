use crate::domain::model::{BlendSummary, Liquid};
use crate::domain::ports::Blender;

/// Reference [`Blender`] that weights each liquid's figures by its volume.
#[derive(Debug, Clone, Default)]
pub struct VolumeWeightedBlender;

impl Blender for VolumeWeightedBlender {
    fn blend(&self, liquids: &[Liquid]) -> BlendSummary {
        let total: f64 = liquids.iter().map(|l| l.ml).sum();
        if total <= 0.0 {
            return BlendSummary::default();
        }

        BlendSummary {
            pg: liquids.iter().map(|l| l.pg * l.ml).sum::<f64>() / total,
            vg: liquids.iter().map(|l| l.vg * l.ml).sum::<f64>() / total,
            nic: liquids.iter().map(|l| l.nic * l.ml).sum::<f64>() / total,
        }
    }
}
