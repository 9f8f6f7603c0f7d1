use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("Unknown service type: {selector}")]
    UnknownServiceType { selector: String },

    #[error("Invalid order id '{order_id}': {reason}")]
    InvalidOrderId { order_id: String, reason: String },
}

#[derive(Error, Debug)]
pub enum CourierError {
    #[error("Delivery failed: {0}")]
    Delivery(#[from] DeliveryError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown report source: {value}")]
    UnknownSource { value: String },
}

impl CourierError {
    /// Process exit code the binary reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CourierError::ConfigParseError { .. }
            | CourierError::InvalidConfigValueError { .. }
            | CourierError::UnknownSource { .. } => 2,
            CourierError::Delivery(_) => 3,
            CourierError::IoError(_) | CourierError::SerializationError(_) => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, CourierError>;
