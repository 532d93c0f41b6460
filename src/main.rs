mod cli;

use donghua::{archive::ResolvedArchive, config, library, renamer};
use donghua_common::Series;
use donghua_title::Resolver;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "donghua=trace,donghua_title=trace,donghua_common=debug".to_string()
        } else {
            "donghua=info,donghua_title=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Rename { dir, dry_run } => rename(&dir, cli.config.as_deref(), dry_run),
        Commands::Resolve { title, series } => {
            resolve_one(&title, series.as_deref(), cli.config.as_deref())
        }
        Commands::Series => list_series(cli.config.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("donghua {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn load_series(config: &config::Config) -> Result<Vec<Series>> {
    let mut series = library::scan_series(&config.library.series_dir)?;
    for name in &config.library.extra_series {
        if !series.iter().any(|s| &s.name == name) {
            series.push(Series::new(name.clone()));
        }
    }
    Ok(series)
}

fn rename(dir: &Path, config_path: Option<&Path>, dry_run: bool) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    if !dir.exists() {
        anyhow::bail!("Directory does not exist: {:?}", dir);
    }

    let series = load_series(&config)?;
    if series.is_empty() {
        anyhow::bail!(
            "No tracked series found in {:?} and none configured",
            config.library.series_dir
        );
    }

    let resolver = Resolver::with_config(config.resolver.clone());
    let mut archive = ResolvedArchive::load(&config.archive.file)?;

    let summary = renamer::rename_directory(dir, &series, &resolver, &mut archive, dry_run)?;

    if dry_run {
        println!("\n[DRY RUN] Would rename {} file(s)", summary.renamed);
    } else {
        println!("\nRenamed {} file(s)", summary.renamed);
    }
    println!(
        "Skipped: {} duplicate(s), {} unmatched; {} failed",
        summary.duplicates, summary.unmatched, summary.failed
    );

    Ok(())
}

fn resolve_one(title: &str, series: Option<&str>, config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let resolver = Resolver::with_config(config.resolver.clone());

    let base = match series {
        Some(name) => name.to_string(),
        None => {
            let series = load_series(&config)?;
            match library::match_series(&series, title) {
                Some(matched) => matched.name.clone(),
                None => anyhow::bail!(
                    "No tracked series matched {:?}; pass one with --series",
                    title
                ),
            }
        }
    };

    let resolved = resolver.resolve(title, &base)?;
    println!("{resolved}");
    Ok(())
}

fn list_series(config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let series = load_series(&config)?;

    if series.is_empty() {
        println!("No tracked series.");
        return Ok(());
    }

    for entry in &series {
        match &entry.folder {
            Some(folder) => println!("{} ({})", entry.name, folder.display()),
            None => println!("{} (configured)", entry.name),
        }
    }
    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Series dir: {:?}", config.library.series_dir);
            println!("  Extra series: {}", config.library.extra_series.len());
            println!("  Archive: {:?}", config.archive.file);
            println!("  Noise tokens: {:?}", config.resolver.noise_tokens);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Series dir: {:?}", config.library.series_dir);
            println!("  Archive: {:?}", config.archive.file);
        }
    }

    Ok(())
}
