//! Parser for catalog files.
//!
//! Format, one product per line:
//! `name::color::size[::price::quantity::category]`
//!
//! Blank lines and lines starting with `#` are skipped. Color and size are
//! matched case-insensitively.

use crate::error::{CatalogError, Result};
use crate::types::{Color, Product, Size};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a whole catalog file and parse every product in it
pub fn parse_products_file(path: &Path) -> Result<Vec<Product>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;

    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_products(&content, &file)
}

/// Parse catalog content. `file` is only used in error messages.
pub fn parse_products(content: &str, file: &str) -> Result<Vec<Product>> {
    let mut products = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        products.push(parse_product_line(line_trimmed, file, line_no)?);
    }

    Ok(products)
}

fn parse_product_line(line: &str, file: &str, line_no: usize) -> Result<Product> {
    let parse_error = |reason: String| CatalogError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason,
    };

    let parts: Vec<&str> = line.split("::").map(str::trim).collect();
    if parts.len() < 3 {
        return Err(parse_error(format!(
            "Expected at least 3 fields (name::color::size), found {}",
            parts.len()
        )));
    }
    if parts.len() > 6 {
        return Err(parse_error(format!(
            "Expected at most 6 fields, found {}",
            parts.len()
        )));
    }

    let name = parts[0];
    if name.is_empty() {
        return Err(parse_error("Missing name".to_string()));
    }

    let color: Color = parts[1]
        .parse()
        .map_err(|e: CatalogError| parse_error(e.to_string()))?;
    let size: Size = parts[2]
        .parse()
        .map_err(|e: CatalogError| parse_error(e.to_string()))?;

    let mut product = Product::new(name, color, size);

    if let Some(price) = parts.get(3) {
        product.price = price
            .parse()
            .map_err(|e| parse_error(format!("Invalid price: {}", e)))?;
    }
    if let Some(quantity) = parts.get(4) {
        product.quantity = quantity
            .parse()
            .map_err(|e| parse_error(format!("Invalid quantity: {}", e)))?;
    }
    if let Some(category) = parts.get(5).filter(|c| !c.is_empty()) {
        product.category = Some(category.to_string());
    }

    Ok(product)
}
