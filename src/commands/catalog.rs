//! Catalog listing command implementation

use std::path::PathBuf;

use serde::Serialize;

use crate::{
    core::{catalog_path, load_pool, Catalog},
    Result, StatBlock,
};

/// One curated opponent with its effective selection chance.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogRow {
    pub name: String,
    pub title: String,
    pub rarity: String,
    pub weight: f64,
    /// Share of predefined draws this entry receives.
    pub chance: f64,
    pub stats: StatBlock,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    pub path: PathBuf,
    pub entries: Vec<CatalogRow>,
    pub issues: Vec<String>,
}

pub fn catalog_report(path: PathBuf, catalog: &Catalog) -> CatalogReport {
    let weights = catalog.sampling_weights();
    let total: f64 = weights.iter().sum();

    let entries = catalog
        .characters
        .iter()
        .zip(weights)
        .map(|(entry, weight)| CatalogRow {
            name: entry.name.clone(),
            title: entry.title.clone(),
            rarity: entry.rarity_name().to_string(),
            weight,
            chance: if total > 0.0 { weight / total } else { 0.0 },
            stats: entry.stats,
        })
        .collect();

    CatalogReport {
        path,
        entries,
        issues: catalog.validate().iter().map(ToString::to_string).collect(),
    }
}

/// Handle the catalog command
pub fn handle_catalog(catalog: Option<PathBuf>, as_json: bool) -> Result<()> {
    let path = catalog_path(catalog);
    let pool = load_pool(&path);
    let report = catalog_report(path, &pool);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?); // tarpaulin::skip
        return Ok(());
    }

    if report.entries.is_empty() {
        println!(
            "No curated opponents in {}; predefined draws fall through to generated opponents.",
            report.path.display()
        );
        return Ok(());
    }

    for row in &report.entries {
        println!(
            "{:<20} {:<24} {:<10} {:>5.2} {:>6.1}%",
            row.name,
            row.title,
            row.rarity,
            row.weight,
            row.chance * 100.0
        );
    }
    println!(
        "\n{} curated opponents from {}",
        report.entries.len(),
        report.path.display()
    );
    if !report.issues.is_empty() {
        println!("{} issues:", report.issues.len());
        for issue in &report.issues {
            println!("  - {}", issue);
        }
    }

    Ok(())
}
