use crate::core::{DeliveryBackend, DeliveryService};
use crate::utils::error::DeliveryError;

type DeliveryResult<T> = std::result::Result<T, DeliveryError>;

/// In-house delivery; speaks the order-id interface natively.
#[derive(Debug, Clone, Copy, Default)]
pub struct InternalDelivery;

impl DeliveryService for InternalDelivery {
    fn deliver_order(&self, order_id: &str) -> DeliveryResult<String> {
        let notice = format!("Internal delivery: delivering order {}.", order_id);
        tracing::debug!("{}", notice);
        Ok(notice)
    }

    fn delivery_status(&self, order_id: &str) -> DeliveryResult<String> {
        Ok(format!("Internal delivery: order {} is on its way.", order_id))
    }
}

/// Third-party logistics API keyed by numeric item/shipment ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogisticsServiceA;

impl LogisticsServiceA {
    pub fn ship_item(&self, item_id: u64) -> String {
        let notice = format!("External logistics A: shipping item {}.", item_id);
        tracing::debug!("{}", notice);
        notice
    }

    pub fn track_shipment(&self, shipment_id: u64) -> String {
        format!("External logistics A: shipment {} in transit.", shipment_id)
    }
}

/// Third-party logistics API keyed by free-form package info / tracking codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogisticsServiceB;

impl LogisticsServiceB {
    pub fn send_package(&self, package_info: &str) -> String {
        let notice = format!(
            "External logistics B: sending package with info {}.",
            package_info
        );
        tracing::debug!("{}", notice);
        notice
    }

    pub fn check_package_status(&self, tracking_code: &str) -> String {
        format!("External logistics B: package {} delivered.", tracking_code)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LogisticsAdapterA {
    service: LogisticsServiceA,
}

impl LogisticsAdapterA {
    pub fn new(service: LogisticsServiceA) -> Self {
        Self { service }
    }

    // Order ids double as item and shipment ids on this backend, so they must be numeric.
    fn numeric_id(order_id: &str) -> DeliveryResult<u64> {
        order_id.trim().parse::<u64>().map_err(|e| {
            tracing::warn!("Rejecting order id '{}' for ExternalA: {}", order_id, e);
            DeliveryError::InvalidOrderId {
                order_id: order_id.to_string(),
                reason: format!("ExternalA requires a numeric id ({})", e),
            }
        })
    }
}

impl DeliveryService for LogisticsAdapterA {
    fn deliver_order(&self, order_id: &str) -> DeliveryResult<String> {
        let item_id = Self::numeric_id(order_id)?;
        Ok(self.service.ship_item(item_id))
    }

    fn delivery_status(&self, order_id: &str) -> DeliveryResult<String> {
        let shipment_id = Self::numeric_id(order_id)?;
        Ok(self.service.track_shipment(shipment_id))
    }
}

#[derive(Debug, Clone, Default)]
pub struct LogisticsAdapterB {
    service: LogisticsServiceB,
}

impl LogisticsAdapterB {
    pub fn new(service: LogisticsServiceB) -> Self {
        Self { service }
    }
}

impl DeliveryService for LogisticsAdapterB {
    fn deliver_order(&self, order_id: &str) -> DeliveryResult<String> {
        Ok(self.service.send_package(order_id))
    }

    fn delivery_status(&self, order_id: &str) -> DeliveryResult<String> {
        Ok(self.service.check_package_status(order_id))
    }
}

impl DeliveryBackend {
    pub fn service(self) -> Box<dyn DeliveryService> {
        match self {
            DeliveryBackend::Internal => Box::new(InternalDelivery),
            DeliveryBackend::ExternalA => Box::new(LogisticsAdapterA::new(LogisticsServiceA)),
            DeliveryBackend::ExternalB => Box::new(LogisticsAdapterB::new(LogisticsServiceB)),
        }
    }
}

/// Resolves a selector (`"Internal"`, `"ExternalA"`, `"ExternalB"`) to its backend.
pub fn delivery_service(selector: &str) -> DeliveryResult<Box<dyn DeliveryService>> {
    let backend: DeliveryBackend = selector.parse()?;
    tracing::debug!("Selected delivery backend {}", backend);
    Ok(backend.service())
}
