// Domain layer: report/delivery models and ports (capabilities). Depends only on std, serde and chrono.

pub mod model;
pub mod ports;
