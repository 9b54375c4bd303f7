//! Error types for the services crate.

use catalog::PaymentType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    /// The repository rejected the product
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// The repository accepted the product but failed to store it
    #[error("Failed to save product: {0}")]
    SaveFailed(String),

    /// No processor is registered for this kind of payment
    #[error("Unsupported payment type: {0:?}")]
    UnsupportedPaymentType(PaymentType),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
