//! Services crate for the shop.
//!
//! Contains the product service with its stub collaborators and the
//! payment routing layer.

pub mod collaborators;
pub mod error;
pub mod payment;
pub mod product_service;

pub use collaborators::{
    InMemoryProductRepository, Logger, Notification, Notifier, ProductRepository,
    RecordingNotifier, TracingLogger,
};
pub use error::{Result, ServiceError};
pub use payment::{CreditCardProcessor, PayPalProcessor, PaymentProcessor, PaymentService};
pub use product_service::ProductService;
