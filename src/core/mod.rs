pub mod constraint;
pub mod fill;
pub mod ledger;
pub mod mixer;
pub mod rescale;
pub mod snapshot;

pub use crate::domain::model::{BlendSummary, Liquid};
pub use crate::domain::ports::Blender;
pub use crate::utils::error::Result;

/// Smallest container the engine accepts, in ml.
pub const CONTAINER_MIN: f64 = 10.0;
/// Largest container the engine accepts, in ml.
pub const CONTAINER_MAX: f64 = 10_000.0;
/// Container size a new mixer starts with.
pub const DEFAULT_CAPACITY: f64 = 100.0;
/// Hard cap on ledger size, enforced by `add_ingredient`.
pub const MAX_INGREDIENTS: usize = 20;
/// Longest mixture name the transfer shape carries.
pub const MAX_NAME_LEN: usize = 30;

// Tolerance for capacity comparisons; volume sums accumulate float noise
// well below the engine's one-decimal precision.
pub(crate) const VOLUME_EPSILON: f64 = 1e-9;
