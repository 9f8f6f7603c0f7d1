pub mod chain;
pub mod delivery;
pub mod report;

pub use crate::domain::model::{DeliveryBackend, LayerSpec, SourceKind};
pub use crate::domain::ports::{DeliveryService, Report};
pub use crate::utils::error::Result;
