pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::VolumeWeightedBlender;
pub use domain::model::{BlendSummary, Liquid};
pub use domain::ports::Blender;
pub use self::core::constraint::BoundLabel;
pub use self::core::ledger::{Entry, EntryId, Ledger};
pub use self::core::mixer::Mixer;
pub use self::core::snapshot::MixSnapshot;
pub use self::core::{CONTAINER_MAX, CONTAINER_MIN, DEFAULT_CAPACITY, MAX_INGREDIENTS, MAX_NAME_LEN};
pub use utils::error::{MixError, Result};
