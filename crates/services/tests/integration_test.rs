//! Integration tests for the services crate.
//!
//! A small catalog is registered through the product service with the
//! stub collaborators, and payments are routed through the standard
//! processors.

use catalog::{Catalog, Color, Payment, PaymentType, Product, Size, User};
use services::{
    InMemoryProductRepository, PaymentService, ProductService, RecordingNotifier, ServiceError,
    TracingLogger,
};

fn priced_catalog() -> Catalog {
    Catalog::from(vec![
        Product::new("Apple", Color::Green, Size::Small)
            .with_id("A")
            .with_price(0.5)
            .with_quantity(100)
            .with_category("fruit"),
        Product::new("Tree", Color::Green, Size::Large)
            .with_id("T")
            .with_price(120.0)
            .with_quantity(2),
        Product::new("House", Color::Blue, Size::Large)
            .with_id("H")
            .with_price(250_000.0)
            .with_quantity(1)
            .with_category("real estate"),
    ])
}

#[test]
fn test_register_whole_catalog() {
    let service = ProductService::new(
        InMemoryProductRepository::new(),
        TracingLogger::new(),
        RecordingNotifier::new(),
    );
    let creator = User::new("Luis", "luis@example.com");

    let outcomes: Vec<_> = priced_catalog()
        .products()
        .iter()
        .map(|product| service.add_product(product, &creator))
        .collect();

    assert!(outcomes[0].is_ok());
    assert!(matches!(outcomes[1], Err(ServiceError::InvalidProduct(_))));
    assert!(outcomes[2].is_ok());

    let saved: Vec<_> = service
        .repository()
        .saved()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(saved, vec!["Apple", "House"]);
    assert_eq!(
        service.logger().lines(),
        vec!["Product added: A".to_string(), "Product added: H".to_string()]
    );
    assert!(service
        .notifier()
        .sent()
        .iter()
        .all(|n| n.recipient == "luis@example.com" && n.subject == "Product Added"));
}

#[test]
fn test_payment_service_standard_processors() {
    let payments = PaymentService::standard();

    assert_eq!(
        payments.supported(),
        vec![PaymentType::CreditCard, PaymentType::PayPal]
    );
    assert!(payments.process(&Payment::new(1, PaymentType::PayPal, 12.5)).is_ok());
    assert!(payments.process(&Payment::new(2, PaymentType::BankTransfer, 12.5)).is_err());
}
