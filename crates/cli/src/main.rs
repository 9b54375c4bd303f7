use anyhow::{Context, Result};
use catalog::{Catalog, Color, Payment, PaymentType, Product, Size, User};
use clap::{Parser, Subcommand};
use colored::Colorize;
use services::{
    InMemoryProductRepository, PaymentService, ProductService, RecordingNotifier, TracingLogger,
};
use spec_filter::specs::{all_of, color_is, name_is, size_is};
use spec_filter::{Filter, Specification, SpecificationExt, SpecificationFilter};
use std::path::PathBuf;

/// SolidShop - specification-based product filtering
#[derive(Parser)]
#[command(name = "solid-shop")]
#[command(about = "Filter a product catalog with composable specifications", long_about = None)]
struct Cli {
    /// Catalog file (name::color::size[::price::quantity::category] per line).
    /// Uses the built-in sample catalog when omitted.
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demo queries against the catalog
    Demo,

    /// Show products matching every given criterion
    Filter {
        /// Required color (red, green, blue)
        #[arg(long)]
        color: Option<Color>,

        /// Required size (small, medium, large)
        #[arg(long)]
        size: Option<Size>,

        /// Required name (case-insensitive)
        #[arg(long)]
        name: Option<String>,
    },

    /// Register a product through the product service
    AddProduct {
        #[arg(long)]
        name: String,

        #[arg(long)]
        color: Color,

        #[arg(long)]
        size: Size,

        #[arg(long)]
        price: f32,

        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        quantity: i16,

        #[arg(long)]
        category: Option<String>,

        /// Email of the user creating the product
        #[arg(long)]
        email: String,
    },

    /// Process a payment through the registered processors
    Pay {
        /// credit-card, paypal or bank-transfer
        #[arg(long = "type")]
        payment_type: PaymentType,

        #[arg(long)]
        amount: f64,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Demo => handle_demo(&load_catalog(cli.catalog.as_ref())?),
        Commands::Filter { color, size, name } => {
            let catalog = load_catalog(cli.catalog.as_ref())?;
            handle_filter(&catalog, color, size, name, cli.json)
        }
        Commands::AddProduct {
            name,
            color,
            size,
            price,
            quantity,
            category,
            email,
        } => {
            let mut product = Product::new(name, color, size)
                .with_price(price)
                .with_quantity(quantity);
            product.category = category;
            handle_add_product(product, email)
        }
        Commands::Pay {
            payment_type,
            amount,
        } => handle_pay(payment_type, amount),
    }
}

/// Load the catalog file, or the sample catalog when none is given
fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => {
            tracing::debug!("No catalog file given, using the sample catalog");
            Ok(Catalog::sample())
        }
    }
}

/// Handle the 'demo' command
fn handle_demo(catalog: &Catalog) -> Result<()> {
    let filter = SpecificationFilter;
    let products = catalog.products();

    println!("{}", "Blue products:".bold().blue());
    let blue = color_is(Color::Blue);
    for p in filter.filter(products, &blue) {
        println!(" - {} is {}", p.name, p.color);
    }

    println!("{}", "Large products:".bold().blue());
    let large = size_is(Size::Large);
    for p in filter.filter(products, &large) {
        println!(" - {} is {}", p.name, p.size);
    }

    println!("{}", "Large blue items:".bold().blue());
    let large_blue = color_is(Color::Blue).and(size_is(Size::Large));
    for p in filter.filter(products, &large_blue) {
        println!(" - {} is {} and {}", p.name, p.size, p.color);
    }

    println!("{}", "Large green items:".bold().blue());
    let large_green = color_is(Color::Green).and(size_is(Size::Large));
    for p in filter.filter(products, &large_green) {
        println!(" - {} is {} and {}", p.name, p.size, p.color);
    }

    Ok(())
}

/// Handle the 'filter' command
fn handle_filter(
    catalog: &Catalog,
    color: Option<Color>,
    size: Option<Size>,
    name: Option<String>,
    json: bool,
) -> Result<()> {
    let mut criteria: Vec<Box<dyn Specification<Product>>> = Vec::new();
    if let Some(color) = color {
        criteria.push(Box::new(color_is(color)));
    }
    if let Some(size) = size {
        criteria.push(Box::new(size_is(size)));
    }
    if let Some(name) = name {
        criteria.push(Box::new(name_is(name)));
    }
    let spec = all_of(criteria);

    let matches: Vec<&Product> = SpecificationFilter
        .filter(catalog.products(), &spec)
        .collect();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&matches).context("Failed to serialize products")?
        );
        return Ok(());
    }

    println!(
        "{}",
        format!("{} of {} products match {}", matches.len(), catalog.len(), spec.describe())
            .bold()
            .blue()
    );
    for product in matches {
        print_product(product);
    }
    Ok(())
}

/// Handle the 'add-product' command
fn handle_add_product(product: Product, email: String) -> Result<()> {
    let service = ProductService::new(
        InMemoryProductRepository::new(),
        TracingLogger::new(),
        RecordingNotifier::new(),
    );
    let creator = User::new(email.clone(), email);

    service
        .add_product(&product, &creator)
        .with_context(|| format!("Could not add {}", product.name))?;

    println!("{} Added {}", "✓".green(), product);
    for notification in service.notifier().sent() {
        println!(
            "  {} {} <{}>: {}",
            "•".cyan(),
            notification.subject,
            notification.recipient,
            notification.body
        );
    }
    Ok(())
}

/// Handle the 'pay' command
fn handle_pay(payment_type: PaymentType, amount: f64) -> Result<()> {
    let payments = PaymentService::standard();
    let payment = Payment::new(1, payment_type, amount);

    payments
        .process(&payment)
        .context("Payment was not processed")?;

    println!(
        "{} Processed {:.2} {} via {:?}",
        "✓".green(),
        payment.amount,
        payment.currency,
        payment.payment_type
    );
    Ok(())
}

/// Helper function to print one product line
fn print_product(product: &Product) {
    let mut line = format!(" - {} is {} and {}", product.name, product.size, product.color);
    if product.price > 0.0 {
        line.push_str(&format!(", {:.2}", product.price));
    }
    if let Some(category) = &product.category {
        line.push_str(&format!(" [{}]", category));
    }
    println!("{}", line);
}
