//! Text formatting for the animal table and the statistics report.

use shared::{AnimalRecord, ZooStatistics};

pub const TABLE_TITLE: &str = "--- LIST ---";

/// Weight without trailing zeros, at most three decimals (`220`, `0.6`, `1635.6`)
pub fn format_weight(weight: f64) -> String {
    let formatted = format!("{:.3}", weight);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// `| id | description | weight | metric |`
pub fn format_row(animal: &AnimalRecord) -> String {
    format!(
        "| {:<3} | {:<35} | {:>8} | {:>10.2} |",
        animal.id,
        animal.describe(),
        format_weight(animal.weight),
        animal.metric()
    )
}

/// Title line followed by one row per animal
pub fn format_table(animals: &[AnimalRecord]) -> Vec<String> {
    std::iter::once(TABLE_TITLE.to_string())
        .chain(animals.iter().map(format_row))
        .collect()
}

pub fn format_statistics(stats: &ZooStatistics) -> Vec<String> {
    vec![
        format!("Count: {}", stats.count),
        format!("Total weight: {}", format_weight(stats.total_weight)),
        format!("Total metric: {:.2}", stats.total_metric),
        format!("Average metric: {:.2}", stats.average_metric),
    ]
}
