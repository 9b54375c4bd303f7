//! Payment processing.
//!
//! Every payment method is its own `PaymentProcessor`. `PaymentService`
//! routes a payment to whichever registered processor handles its type, so
//! supporting a new method is a matter of registering one more processor.

use crate::error::{Result, ServiceError};
use catalog::{Payment, PaymentType};

/// Handles payments of exactly one type
pub trait PaymentProcessor: Send + Sync {
    /// The payment type this processor handles
    fn handles(&self) -> PaymentType;

    fn process(&self, payment: &Payment);
}

/// Stand-in for a card acquirer
#[derive(Debug, Default)]
pub struct CreditCardProcessor;

impl PaymentProcessor for CreditCardProcessor {
    fn handles(&self) -> PaymentType {
        PaymentType::CreditCard
    }

    fn process(&self, payment: &Payment) {
        tracing::info!(
            "Charging {:.2} {} to credit card (payment {})",
            payment.amount,
            payment.currency,
            payment.id
        );
    }
}

/// Stand-in for PayPal
#[derive(Debug, Default)]
pub struct PayPalProcessor;

impl PaymentProcessor for PayPalProcessor {
    fn handles(&self) -> PaymentType {
        PaymentType::PayPal
    }

    fn process(&self, payment: &Payment) {
        tracing::info!(
            "Requesting {:.2} {} through PayPal (payment {})",
            payment.amount,
            payment.currency,
            payment.id
        );
    }
}

/// Routes payments to registered processors.
///
/// ## Usage
/// ```ignore
/// let payments = PaymentService::new()
///     .with_processor(CreditCardProcessor)
///     .with_processor(PayPalProcessor);
///
/// payments.process(&payment)?;
/// ```
pub struct PaymentService {
    processors: Vec<Box<dyn PaymentProcessor>>,
}

impl PaymentService {
    /// Create a service with no processors
    pub fn new() -> Self {
        Self {
            processors: Vec::new(),
        }
    }

    /// Credit card and PayPal
    pub fn standard() -> Self {
        Self::new()
            .with_processor(CreditCardProcessor)
            .with_processor(PayPalProcessor)
    }

    /// Register a processor (builder pattern).
    ///
    /// When two processors handle the same type the first one registered
    /// wins.
    pub fn with_processor(mut self, processor: impl PaymentProcessor + 'static) -> Self {
        self.processors.push(Box::new(processor));
        self
    }

    /// Payment types with a registered processor
    pub fn supported(&self) -> Vec<PaymentType> {
        let mut types = Vec::new();
        for processor in &self.processors {
            if !types.contains(&processor.handles()) {
                types.push(processor.handles());
            }
        }
        types
    }

    /// Hand `payment` to the processor registered for its type
    pub fn process(&self, payment: &Payment) -> Result<()> {
        let processor = self
            .processors
            .iter()
            .find(|p| p.handles() == payment.payment_type)
            .ok_or(ServiceError::UnsupportedPaymentType(payment.payment_type))?;

        tracing::debug!("Processing payment {} as {:?}", payment.id, payment.payment_type);
        processor.process(payment);
        Ok(())
    }
}

impl Default for PaymentService {
    fn default() -> Self {
        Self::new()
    }
}
