//! Command execution

use crate::cli::{Cli, Commands, MaterialsAction, OutputFormat};
use crate::config::{Config, CURRENCIES};
use crate::domain::alias::resolve_alias;
use crate::domain::{compute_appraisal, Catalog};
use crate::error::Result;
use crate::export::{render_history_report, write_history_csv};
use crate::output::output_snapshot;
use crate::store::{HistoryStore, MaterialStore};
use crate::types::{AppraisalContext, HistoryEntry, Line, PricingUnit};
use std::path::PathBuf;

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load();
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Appraise {
            file,
            save,
            description,
        } => cmd_appraise(&config, format, &file, save, description),
        Commands::History { limit } => cmd_history(&config, format, limit),
        Commands::Export { output } => cmd_export(&config, &output),
        Commands::Report { output } => cmd_report(&config, output),
        Commands::Materials { action } => cmd_materials(&config, format, action),
        Commands::Alias { text } => cmd_alias(&text),
        Commands::Config {
            show,
            set_currency,
            set_output,
        } => cmd_config(config, show, set_currency, set_output),
    }
}

fn open_catalog(config: &Config) -> (Catalog, MaterialStore) {
    let store = MaterialStore::open(config.data_dir());
    (Catalog::with_custom(store.to_vec()), store)
}

fn cmd_appraise(
    config: &Config,
    format: OutputFormat,
    file: &PathBuf,
    save: bool,
    description: Option<String>,
) -> Result<()> {
    let content = std::fs::read_to_string(file)?;
    let mut context: AppraisalContext = serde_json::from_str(&content)?;

    // The working set never runs empty
    if context.lines.is_empty() {
        context.lines.push(Line::default());
    }
    // Unknown currency codes fall back to the configured preference
    if !CURRENCIES.contains(&context.currency.as_str()) {
        context.currency = config.currency.clone();
    }

    let (catalog, _materials) = open_catalog(config);
    let snapshot = compute_appraisal(&context, &catalog);
    output_snapshot(format, &snapshot, &context.currency)?;

    if save {
        let description = description.unwrap_or_else(|| {
            let piece = context.piece_type.trim();
            if piece.is_empty() {
                "appraisal".to_string()
            } else {
                piece.to_string()
            }
        });
        let entry = HistoryEntry::from_snapshot(&context, &snapshot, description);
        let mut history = HistoryStore::open(config.data_dir());
        history.add(entry);
        println!("\nSaved to history ({} entries).", history.count());
    }

    Ok(())
}

fn cmd_history(config: &Config, format: OutputFormat, limit: usize) -> Result<()> {
    let history = HistoryStore::open(config.data_dir());
    let entries = &history.entries()[..history.count().min(limit)];

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No saved appraisals.");
        return Ok(());
    }

    println!(
        "{:<17} {:<4} {:<24} {:>10} {:>10} {:<}",
        "Date", "Cur", "Description", "Total", "Quoted", "Diagnosis"
    );
    for entry in entries {
        let date = entry.saved_at.format("%Y-%m-%d %H:%M").to_string();
        println!(
            "{:<17} {:<4} {:<24} {:>10.2} {:>10.2} {:<}",
            date,
            entry.currency,
            entry.description.chars().take(24).collect::<String>(),
            entry.total_cost,
            entry.quoted_price,
            entry.diagnosis
        );
    }
    println!("\n{} of {} entries shown.", entries.len(), history.count());
    Ok(())
}

fn cmd_export(config: &Config, output: &PathBuf) -> Result<()> {
    let history = HistoryStore::open(config.data_dir());
    write_history_csv(history.entries(), output)?;
    println!(
        "Exported {} entries to {}",
        history.count(),
        output.display()
    );
    Ok(())
}

fn cmd_report(config: &Config, output: Option<PathBuf>) -> Result<()> {
    let history = HistoryStore::open(config.data_dir());
    let report = render_history_report(history.entries());
    match output {
        Some(path) => {
            std::fs::write(&path, &report)?;
            println!("Report written to {}", path.display());
        }
        None => print!("{}", report),
    }
    Ok(())
}

fn cmd_materials(config: &Config, format: OutputFormat, action: MaterialsAction) -> Result<()> {
    match action {
        MaterialsAction::List => {
            let (catalog, _store) = open_catalog(config);
            if format == OutputFormat::Json {
                let all: Vec<_> = catalog.all();
                println!("{}", serde_json::to_string_pretty(&all)?);
                return Ok(());
            }
            println!(
                "{:<40} {:<28} {:<9} {:>8}",
                "Key", "Label", "Pricing", "Density"
            );
            for material in catalog.all() {
                let pricing = match material.pricing_unit {
                    PricingUnit::PerGram => "per gram",
                    PricingUnit::PerCarat => "per carat",
                };
                println!(
                    "{:<40} {:<28} {:<9} {:>8.2}",
                    material.key, material.label, pricing, material.density
                );
            }
            Ok(())
        }
        MaterialsAction::Add {
            label,
            unit,
            density,
        } => {
            let (mut catalog, mut store) = open_catalog(config);
            let material = catalog.add_custom(&label, unit, density)?;
            store.add(material.clone());
            println!("Added material '{}' with key {}", material.label, material.key);
            Ok(())
        }
    }
}

fn cmd_alias(text: &str) -> Result<()> {
    match resolve_alias(text) {
        Some(key) => {
            let catalog = Catalog::new();
            let material = catalog.resolve(key);
            println!("{} -> {} ({})", text, key, material.label);
        }
        None => println!("{} -> no match", text),
    }
    Ok(())
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_currency: Option<String>,
    set_output: Option<OutputFormat>,
) -> Result<()> {
    let mut changed = false;

    if let Some(code) = set_currency {
        config.set_currency(&code)?;
        changed = true;
    }
    if let Some(output_format) = set_output {
        config.output_format = output_format;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated.");
    }

    if show || !changed {
        println!("{}", config);
    }
    Ok(())
}
