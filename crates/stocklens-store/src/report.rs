//! # Inventory Report
//!
//! Assembles the data for a downloadable report from the current view.
//!
//! Four sections mirror the workbook an export collaborator would produce:
//! product rows, a summary, the low-stock subset, and a per-category
//! rollup. This module only builds the data; cell widths, sheet styling and
//! the actual download are the export collaborator's problem.

use chrono::{DateTime, Utc};
use serde::Serialize;

use stocklens_core::{Product, Statistics, LOW_STOCK_THRESHOLD};

// =============================================================================
// Report Sections
// =============================================================================

/// Stock status flag on a report row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StockStatus {
    Normal,
    Low,
}

/// One product row in the main report section.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub stock: i64,
    pub price: f64,
    pub total_value: f64,
    pub stock_status: StockStatus,
}

/// Headline numbers plus the distinct category count.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    #[serde(flatten)]
    pub statistics: Statistics,
    pub distinct_categories: usize,
}

/// One row in the low-stock section.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockRow {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub current_stock: i64,
    pub minimum_stock: i64,
    pub deficit: i64,
    pub price: f64,
}

/// Aggregates for one category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRollup {
    pub category: String,
    pub product_count: usize,
    pub total_stock: i64,
    pub total_value: f64,
    pub average_price: f64,
    pub low_stock_count: usize,
}

/// The complete report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryReport {
    pub generated_at: DateTime<Utc>,
    pub products: Vec<ReportRow>,
    pub summary: ReportSummary,
    pub low_stock: Vec<LowStockRow>,
    pub by_category: Vec<CategoryRollup>,
}

impl InventoryReport {
    /// Builds a report over a set of products, normally the store's current
    /// view so an active filter narrows the report the same way it narrows
    /// the table.
    pub fn build(products: &[Product]) -> Self {
        InventoryReport {
            generated_at: Utc::now(),
            products: products.iter().map(report_row).collect(),
            summary: summary(products),
            low_stock: low_stock_rows(products),
            by_category: category_rollups(products),
        }
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Timestamped export file name, e.g.
    /// `Inventory_Report_2026-08-25_14-30-05.json`.
    pub fn file_name(&self) -> String {
        format!(
            "Inventory_Report_{}.json",
            self.generated_at.format("%Y-%m-%d_%H-%M-%S")
        )
    }
}

fn report_row(product: &Product) -> ReportRow {
    ReportRow {
        id: product.id,
        name: product.name.clone(),
        category: product.category.clone(),
        stock: product.stock,
        price: product.price,
        total_value: product.total_value(),
        stock_status: if product.is_low_stock() {
            StockStatus::Low
        } else {
            StockStatus::Normal
        },
    }
}

fn summary(products: &[Product]) -> ReportSummary {
    let mut categories: Vec<&str> = products.iter().map(|p| p.category.as_str()).collect();
    categories.sort_unstable();
    categories.dedup();

    ReportSummary {
        statistics: Statistics::compute(products),
        distinct_categories: categories.len(),
    }
}

fn low_stock_rows(products: &[Product]) -> Vec<LowStockRow> {
    products
        .iter()
        .filter(|p| p.is_low_stock())
        .map(|p| LowStockRow {
            id: p.id,
            name: p.name.clone(),
            category: p.category.clone(),
            current_stock: p.stock,
            minimum_stock: LOW_STOCK_THRESHOLD,
            deficit: LOW_STOCK_THRESHOLD - p.stock,
            price: p.price,
        })
        .collect()
}

fn category_rollups(products: &[Product]) -> Vec<CategoryRollup> {
    let mut categories: Vec<&str> = products.iter().map(|p| p.category.as_str()).collect();
    categories.sort_unstable();
    categories.dedup();

    categories
        .into_iter()
        .map(|category| {
            let members: Vec<&Product> =
                products.iter().filter(|p| p.category == category).collect();
            let product_count = members.len();
            let total_stock = members.iter().map(|p| p.stock).sum();
            let total_value = members.iter().map(|p| p.total_value()).sum();
            let price_sum: f64 = members.iter().map(|p| p.price).sum();
            let low_stock_count = members.iter().filter(|p| p.is_low_stock()).count();

            CategoryRollup {
                category: category.to_string(),
                product_count,
                total_stock,
                total_value,
                // product_count ≥ 1: the category came from a member.
                average_price: price_sum / product_count as f64,
                low_stock_count,
            }
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, name: &str, category: &str, stock: i64, price: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            category: category.to_string(),
            stock,
            price,
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "Widget", "Tools", 3, 9.99),
            product(2, "Gadget", "Tools", 10, 19.99),
            product(3, "Apple", "Food", 50, 0.50),
        ]
    }

    #[test]
    fn test_rows_carry_value_and_status() {
        let report = InventoryReport::build(&sample());
        assert_eq!(report.products.len(), 3);

        let widget = &report.products[0];
        assert_eq!(widget.stock_status, StockStatus::Low);
        assert!((widget.total_value - 29.97).abs() < 1e-9);

        let gadget = &report.products[1];
        assert_eq!(gadget.stock_status, StockStatus::Normal);
    }

    #[test]
    fn test_summary_agrees_with_statistics() {
        let products = sample();
        let report = InventoryReport::build(&products);
        let stats = Statistics::compute(&products);

        assert_eq!(report.summary.statistics, stats);
        assert_eq!(report.summary.distinct_categories, 2);
    }

    #[test]
    fn test_low_stock_section() {
        let report = InventoryReport::build(&sample());
        assert_eq!(report.low_stock.len(), 1);

        let row = &report.low_stock[0];
        assert_eq!(row.id, 1);
        assert_eq!(row.minimum_stock, LOW_STOCK_THRESHOLD);
        assert_eq!(row.deficit, 2);
    }

    #[test]
    fn test_category_rollups() {
        let report = InventoryReport::build(&sample());
        assert_eq!(report.by_category.len(), 2);

        // Lexicographic order: Food before Tools.
        let food = &report.by_category[0];
        assert_eq!(food.category, "Food");
        assert_eq!(food.product_count, 1);
        assert_eq!(food.total_stock, 50);
        assert_eq!(food.low_stock_count, 0);

        let tools = &report.by_category[1];
        assert_eq!(tools.category, "Tools");
        assert_eq!(tools.product_count, 2);
        assert_eq!(tools.total_stock, 13);
        assert!((tools.average_price - 14.99).abs() < 1e-9);
        assert_eq!(tools.low_stock_count, 1);
    }

    #[test]
    fn test_empty_view_produces_empty_sections() {
        let report = InventoryReport::build(&[]);
        assert!(report.products.is_empty());
        assert!(report.low_stock.is_empty());
        assert!(report.by_category.is_empty());
        assert_eq!(report.summary.statistics.total_products, 0);
    }

    #[test]
    fn test_file_name_shape() {
        let report = InventoryReport::build(&sample());
        let name = report.file_name();
        assert!(name.starts_with("Inventory_Report_"));
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn test_report_serializes() {
        let report = InventoryReport::build(&sample());
        let json = report.to_pretty_json().unwrap();
        assert!(json.contains("\"stockStatus\": \"LOW\""));
        assert!(json.contains("\"distinctCategories\": 2"));
    }
}
