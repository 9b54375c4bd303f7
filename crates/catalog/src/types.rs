//! Core domain types for the product catalog.
//!
//! Products are the items specifications are evaluated against. Users and
//! payments only exist so the service layer has something to work with.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Attribute Enums
// =============================================================================

/// Product color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
}

/// Product size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl FromStr for Color {
    type Err = CatalogError;

    /// Case-insensitive: "green", "Green" and "GREEN" all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            _ => Err(CatalogError::InvalidValue {
                field: "color".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for Size {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            _ => Err(CatalogError::InvalidValue {
                field: "size".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Blue => "BLUE",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Size::Small => "SMALL",
            Size::Medium => "MEDIUM",
            Size::Large => "LARGE",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Only `name`, `color` and `size` are required. The remaining fields are
/// what the service layer validates before saving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<String>,
    pub name: String,
    pub color: Color,
    pub size: Size,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: f32,
    pub quantity: i16,
}

impl Product {
    /// Create a product with just the attributes used for filtering
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            id: None,
            name: name.into(),
            color,
            size,
            description: None,
            category: None,
            price: 0.0,
            quantity: 0,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_price(mut self, price: f32) -> Self {
        self.price = price;
        self
    }

    pub fn with_quantity(mut self, quantity: i16) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.color, self.size)
    }
}

// =============================================================================
// Users and Payments
// =============================================================================

/// Whoever creates a product; gets notified when it is added
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Supported ways of paying
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentType {
    CreditCard,
    PayPal,
    BankTransfer,
}

impl FromStr for PaymentType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "credit-card" => Ok(PaymentType::CreditCard),
            "paypal" => Ok(PaymentType::PayPal),
            "bank-transfer" => Ok(PaymentType::BankTransfer),
            _ => Err(CatalogError::InvalidValue {
                field: "payment type".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// A single payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: u32,
    pub payment_type: PaymentType,
    pub description: String,
    pub amount: f64,
    pub currency: String,
}

impl Payment {
    pub fn new(id: u32, payment_type: PaymentType, amount: f64) -> Self {
        Self {
            id,
            payment_type,
            description: String::new(),
            amount,
            currency: "EUR".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_case_insensitive() {
        assert_eq!("green".parse::<Color>().unwrap(), Color::Green);
        assert_eq!("BLUE".parse::<Color>().unwrap(), Color::Blue);
        assert!("purple".parse::<Color>().is_err());
    }

    #[test]
    fn test_parse_size() {
        assert_eq!("Large".parse::<Size>().unwrap(), Size::Large);
        assert!(matches!(
            "huge".parse::<Size>(),
            Err(CatalogError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_parse_payment_type() {
        assert_eq!("credit_card".parse::<PaymentType>().unwrap(), PaymentType::CreditCard);
        assert_eq!("PayPal".parse::<PaymentType>().unwrap(), PaymentType::PayPal);
    }

    #[test]
    fn test_product_display() {
        let product = Product::new("Apple", Color::Green, Size::Small);
        assert_eq!(product.to_string(), "Apple (GREEN, SMALL)");
    }
}
