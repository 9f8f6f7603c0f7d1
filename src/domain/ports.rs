use crate::utils::error::DeliveryError;

/// Anything that can render itself as report text.
///
/// Implementations must be pure: calling `generate` twice on the same value
/// yields identical output.
pub trait Report: Send + Sync {
    fn generate(&self) -> String;
}

impl Report for Box<dyn Report> {
    fn generate(&self) -> String {
        (**self).generate()
    }
}

/// Uniform surface over every delivery backend.
pub trait DeliveryService: Send + Sync {
    /// Dispatches the order and returns the notice the backend emitted.
    fn deliver_order(&self, order_id: &str) -> Result<String, DeliveryError>;

    fn delivery_status(&self, order_id: &str) -> Result<String, DeliveryError>;
}
