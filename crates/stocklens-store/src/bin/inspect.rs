//! # Dataset Inspector
//!
//! Loads an inventory dataset and prints what the dashboard would show:
//! the (optionally filtered and sorted) view, the statistics cards, and the
//! category set. Can also write the full report JSON next to the dataset.
//!
//! ## Usage
//! ```bash
//! # Inspect a dataset
//! cargo run -p stocklens-store --bin inspect -- --data ./data.json
//!
//! # Filter and sort like a user would
//! cargo run -p stocklens-store --bin inspect -- --data ./data.json \
//!     --search widget --category Tools --sort price
//!
//! # Also write the report JSON to a directory
//! cargo run -p stocklens-store --bin inspect -- --data ./data.json --report ./out
//! ```

use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use stocklens_core::SortColumn;
use stocklens_store::{InventoryReport, Notice, StoreState};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut data_path = String::from("./data.json");
    let mut search = String::new();
    let mut category = String::new();
    let mut sort: Option<SortColumn> = None;
    let mut report_dir: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data" | "-d" => {
                if i + 1 < args.len() {
                    data_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--search" | "-s" => {
                if i + 1 < args.len() {
                    search = args[i + 1].clone();
                    i += 1;
                }
            }
            "--category" | "-c" => {
                if i + 1 < args.len() {
                    category = args[i + 1].clone();
                    i += 1;
                }
            }
            "--sort" => {
                if i + 1 < args.len() {
                    sort = parse_sort_column(&args[i + 1]);
                    if sort.is_none() {
                        eprintln!("Unknown sort column: {}", args[i + 1]);
                        return ExitCode::FAILURE;
                    }
                    i += 1;
                }
            }
            "--report" | "-r" => {
                if i + 1 < args.len() {
                    report_dir = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stocklens Dataset Inspector");
                println!();
                println!("Usage: inspect [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --data <PATH>      Dataset file (default: ./data.json)");
                println!("  -s, --search <TERM>    Apply a search term");
                println!("  -c, --category <NAME>  Filter to one category");
                println!("      --sort <COLUMN>    Sort by id|name|category|stock|price");
                println!("  -r, --report <DIR>     Write the report JSON into DIR");
                println!("  -h, --help             Show this help message");
                return ExitCode::SUCCESS;
            }
            _ => {}
        }
        i += 1;
    }

    let state = StoreState::new();
    if let Err(err) = state.populate_from_file(&data_path).await {
        eprintln!("{}", Notice::load_failed().message);
        eprintln!("  cause: {}", err);
        return ExitCode::FAILURE;
    }

    state.with_store_mut(|store| {
        if !search.is_empty() || !category.is_empty() {
            store.filter(&search, &category);
        }
        if let Some(column) = sort {
            store.sort(column, true);
        }
    });

    state.with_store(|store| {
        let stats = store.statistics();

        println!("Dataset: {}", data_path);
        println!("Categories: {}", store.categories().join(", "));
        println!();
        println!(
            "{:>6}  {:<30} {:<16} {:>7} {:>10} {:>12}",
            "ID", "NAME", "CATEGORY", "STOCK", "PRICE", "VALUE"
        );
        for p in store.view() {
            let flag = if p.is_low_stock() { " LOW" } else { "" };
            println!(
                "{:>6}  {:<30} {:<16} {:>7} {:>10.2} {:>12.2}{}",
                p.id,
                p.name,
                p.category,
                p.stock,
                p.price,
                p.total_value(),
                flag
            );
        }
        println!();
        println!("Products:  {}", stats.total_products);
        println!("Stock:     {}", stats.total_stock);
        println!("Low stock: {}", stats.low_stock_count);
        println!("Value:     {:.2}", stats.total_value);
    });

    if let Some(dir) = report_dir {
        let report = state.with_store(|store| InventoryReport::build(store.view()));
        let path = std::path::Path::new(&dir).join(report.file_name());

        let json = match report.to_pretty_json() {
            Ok(json) => json,
            Err(err) => {
                eprintln!("Failed to serialize report: {}", err);
                return ExitCode::FAILURE;
            }
        };
        if let Err(err) = tokio::fs::write(&path, json).await {
            eprintln!("Failed to write report {}: {}", path.display(), err);
            return ExitCode::FAILURE;
        }
        println!();
        println!("Report written: {}", path.display());
    }

    ExitCode::SUCCESS
}

fn parse_sort_column(raw: &str) -> Option<SortColumn> {
    match raw {
        "id" => Some(SortColumn::Id),
        "name" => Some(SortColumn::Name),
        "category" => Some(SortColumn::Category),
        "stock" => Some(SortColumn::Stock),
        "price" => Some(SortColumn::Price),
        _ => None,
    }
}
