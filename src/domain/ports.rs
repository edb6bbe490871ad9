use crate::domain::model::{BlendSummary, Liquid};

/// Blending arithmetic is external to the engine; anything that can turn a
/// set of liquids into aggregate PG/VG/nicotine figures satisfies this port.
pub trait Blender {
    fn blend(&self, liquids: &[Liquid]) -> BlendSummary;
}
