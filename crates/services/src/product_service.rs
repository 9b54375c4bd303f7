//! Adding products to the shop.
//!
//! `ProductService` only sequences the steps; validation and storage,
//! logging, and notification each belong to a separate collaborator.

use crate::collaborators::{Logger, Notifier, ProductRepository};
use crate::error::{Result, ServiceError};
use catalog::{Product, User};

pub struct ProductService<R, L, N> {
    repository: R,
    logger: L,
    notifier: N,
}

impl<R, L, N> ProductService<R, L, N>
where
    R: ProductRepository,
    L: Logger,
    N: Notifier,
{
    pub fn new(repository: R, logger: L, notifier: N) -> Self {
        Self {
            repository,
            logger,
            notifier,
        }
    }

    /// Validate and store a product, then log it and tell its creator.
    ///
    /// Nothing is logged or sent when the product is rejected.
    pub fn add_product(&self, product: &Product, created_by: &User) -> Result<()> {
        if !self.repository.validate(product) {
            tracing::warn!("Rejected product {}", product.name);
            return Err(ServiceError::InvalidProduct(product.name.clone()));
        }

        if !self.repository.save(product) {
            return Err(ServiceError::SaveFailed(product.name.clone()));
        }

        let id = product.id.as_deref().unwrap_or(product.name.as_str());
        self.logger.log(&format!("Product added: {}", id));
        self.notifier.notify(
            &created_by.email,
            "Product Added",
            &format!("A new product has been added: {}", product.name),
        );

        Ok(())
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{InMemoryProductRepository, RecordingNotifier, TracingLogger};
    use catalog::{Color, Size};

    struct FullRepository;

    impl ProductRepository for FullRepository {
        fn validate(&self, _product: &Product) -> bool {
            true
        }

        fn save(&self, _product: &Product) -> bool {
            false
        }
    }

    fn service() -> ProductService<InMemoryProductRepository, TracingLogger, RecordingNotifier> {
        ProductService::new(
            InMemoryProductRepository::new(),
            TracingLogger::new(),
            RecordingNotifier::new(),
        )
    }

    fn creator() -> User {
        User::new("Ana", "ana@example.com")
    }

    #[test]
    fn test_add_valid_product() {
        let service = service();
        let product = Product::new("Camisa", Color::Green, Size::Large)
            .with_id("C-1")
            .with_price(19.99)
            .with_quantity(10)
            .with_category("clothing");

        service.add_product(&product, &creator()).unwrap();

        assert_eq!(service.repository().saved(), vec![product]);
        assert_eq!(service.logger().lines(), vec!["Product added: C-1".to_string()]);

        let sent = service.notifier().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recipient, "ana@example.com");
        assert_eq!(sent[0].subject, "Product Added");
        assert_eq!(sent[0].body, "A new product has been added: Camisa");
    }

    #[test]
    fn test_reject_invalid_product() {
        let service = service();
        let product = Product::new("Apple", Color::Green, Size::Small);

        let result = service.add_product(&product, &creator());

        assert!(matches!(result, Err(ServiceError::InvalidProduct(name)) if name == "Apple"));
        assert!(service.repository().saved().is_empty());
        assert!(service.logger().lines().is_empty());
        assert!(service.notifier().sent().is_empty());
    }

    #[test]
    fn test_save_failure_skips_notification() {
        let service = ProductService::new(FullRepository, TracingLogger::new(), RecordingNotifier::new());
        let product = Product::new("Tree", Color::Green, Size::Large);

        let result = service.add_product(&product, &creator());

        assert!(matches!(result, Err(ServiceError::SaveFailed(_))));
        assert!(service.notifier().sent().is_empty());
    }
}
