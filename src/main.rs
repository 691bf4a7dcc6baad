use clap::Parser;
use libris::utils::{logger, validation::Validate};
use libris::{CliConfig, HttpGateway, LibraryConfig, LibraryService, MemoryStore};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting libris demo");

    let mut config = match &cli.config {
        Some(path) => LibraryConfig::from_file(path)?,
        None => LibraryConfig::default(),
    };
    if let Some(endpoint) = &cli.gateway_endpoint {
        match config.gateway.as_mut() {
            Some(gateway) => gateway.endpoint = endpoint.clone(),
            None => {
                config.gateway = Some(libris::config::GatewayConfig {
                    endpoint: endpoint.clone(),
                    api_key: None,
                    timeout_seconds: None,
                })
            }
        }
    }
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let service = LibraryService::with_policy(MemoryStore::new(), config.loan_policy());

    // Walk the catalog, circulation, and reporting operations end to end.
    println!("Seeding catalog...");
    for (title, author, isbn, copies) in [
        ("The Great Gatsby", "F. Scott Fitzgerald", "9780743273565", 3),
        ("Great Expectations", "Charles Dickens", "9780141439563", 2),
        ("Moby-Dick", "Herman Melville", "9781503280786", 1),
    ] {
        let message = service
            .add_book_to_catalog(title, author, isbn, copies)
            .await?;
        println!("  {}", message);
    }

    let patron = "123456";

    println!("Borrowing...");
    let message = service.borrow_book_by_patron(patron, 1).await?;
    println!("  {}", message);

    println!("Searching for \"great\" by title...");
    for book in service.search_books_in_catalog("great", "title").await? {
        println!(
            "  [{}] {} by {} ({}/{} available)",
            book.id, book.title, book.author, book.available_copies, book.total_copies
        );
    }

    println!("Patron status for {}...", patron);
    let report = service.get_patron_status_report(patron).await?;
    println!(
        "  status: {}, books out: {}, late fees: ${:.2}",
        report.status, report.total_books_borrowed, report.total_late_fees
    );

    println!("Returning...");
    let message = service.return_book_by_patron(patron, 1).await?;
    println!("  {}", message);

    if let Some(gateway_config) = &config.gateway {
        let mut gateway = HttpGateway::new(&gateway_config.endpoint);
        if let Some(key) = &gateway_config.api_key {
            gateway = gateway.with_api_key(key);
        }
        if let Some(secs) = gateway_config.timeout_seconds {
            gateway = gateway.with_timeout(Duration::from_secs(secs));
        }

        println!("Paying late fees through {}...", gateway_config.endpoint);
        match service.pay_late_fees(patron, 1, &gateway).await {
            Ok(receipt) => println!("  {} (transaction {})", receipt.message, receipt.transaction_id),
            Err(e) => println!("  {}", e),
        }
    }

    println!("✅ Demo completed");
    Ok(())
}
