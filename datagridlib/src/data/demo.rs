//! Built-in demo dataset.
//!
//! Stands in for a remote data source when no dataset file is supplied.
//! Values are derived from the row index so repeated runs are identical.

use super::row::Row;

const COMPANIES: [&str; 6] = [
    "Acme Inc",
    "Globex",
    "Initech",
    "Umbrella Corp",
    "Stark Industries",
    "Wayne Enterprises",
];

const STATUSES: [&str; 4] = ["Pending", "Processing", "Completed", "Rejected"];

const SOURCES: [&str; 4] = ["Email", "Web", "App", "Phone"];

/// Number of rows in the stock demo dataset
pub const DEMO_ROW_COUNT: usize = 50;

fn avatar_url(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=random&color=fff&size=32",
        name.replace(' ', "%20")
    )
}

/// Generate `count` demo rows with ids `row-1 ..= row-{count}`.
///
/// Amounts are distinct for up to 10 000 rows.
pub fn demo_rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| {
            let name = COMPANIES[(i * 7 + 3) % COMPANIES.len()];
            let status = STATUSES[(i * 3 + 1) % STATUSES.len()];
            let source = SOURCES[(i * 5 + 2) % SOURCES.len()];
            let cents = (i * 7919 + 1013) % 10_000;

            Row::new(format!("row-{}", i + 1))
                .with("avatar", avatar_url(name))
                .with("name", name)
                .with("description", format!("Order #{} - {}", 1000 + i, status))
                .with("amount", cents as f64 / 100.0)
                .with("tooltip", format!("Last updated: order {}", 1000 + i))
                .with("source", source)
        })
        .collect()
}
