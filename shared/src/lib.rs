pub mod collate;
pub mod config;
pub mod error;
pub mod execution;
pub mod filter;
pub mod format;
pub mod heat;
pub mod histogram;
pub mod lenient;
pub mod notes;
pub mod power;
pub mod render;
pub mod resources;
pub mod roster;
pub mod snapshot;
pub mod war;

pub use config::{DashboardConfig, View};
pub use error::LoadError;
pub use filter::{SearchFields, filter_by_query};
pub use heat::{GapPolarity, HeatTier};
pub use snapshot::*;
