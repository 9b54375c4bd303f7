//! External collaborators of the product service.
//!
//! Each concern sits behind its own trait so the service can be wired with
//! whatever implementation fits. The implementations here are stand-ins:
//! they record what they were asked to do and emit a tracing event.

use catalog::Product;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Stores products
pub trait ProductRepository: Send + Sync {
    /// Whether `product` may be stored
    fn validate(&self, product: &Product) -> bool;

    /// Store `product`; returns false if it could not be stored
    fn save(&self, product: &Product) -> bool;
}

/// Writes log lines
pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
}

/// Delivers notifications to people
pub trait Notifier: Send + Sync {
    fn notify(&self, recipient: &str, subject: &str, body: &str);
}

/// A notification as it was handed to a notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================================
// Repository
// =============================================================================

/// Keeps saved products in memory.
///
/// A product is valid when it has a positive price, a non-negative
/// quantity and a category.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything saved so far, in save order
    pub fn saved(&self) -> Vec<Product> {
        lock(&self.products).clone()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn validate(&self, product: &Product) -> bool {
        product.price > 0.0 && product.quantity >= 0 && product.category.is_some()
    }

    fn save(&self, product: &Product) -> bool {
        tracing::debug!("Saving product {}", product.name);
        lock(&self.products).push(product.clone());
        true
    }
}

// =============================================================================
// Logger
// =============================================================================

/// Forwards log lines to `tracing` and keeps a copy
#[derive(Debug, Default)]
pub struct TracingLogger {
    lines: Mutex<Vec<String>>,
}

impl TracingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        lock(&self.lines).clone()
    }
}

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!("{}", message);
        lock(&self.lines).push(message.to_string());
    }
}

// =============================================================================
// Notifier
// =============================================================================

/// Records notifications instead of sending them
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Notification> {
        lock(&self.sent).clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, recipient: &str, subject: &str, body: &str) {
        tracing::info!(recipient, subject, "Notification queued");
        lock(&self.sent).push(Notification {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
    }
}
