pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::CourierConfig;

pub use crate::core::chain::ReportChain;
pub use crate::core::delivery::delivery_service;
pub use crate::core::report::{
    CsvLayer, DateRangeLayer, PdfLayer, ReportExt, SalesSource, SortLayer, UserSource,
};
pub use domain::model::{DeliveryBackend, LayerSpec, SourceKind};
pub use domain::ports::{DeliveryService, Report};
pub use utils::error::{CourierError, DeliveryError, Result};
