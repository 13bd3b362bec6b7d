// Hair Stylist CLI Tool
// Command-line interface for hairstyle recommendations

use std::fmt::Write as _;
use std::path::PathBuf;

use ai_hair_stylist::{
    split_keyword_list, ClientPreferences, HairstyleCatalog, RecommendationEngine,
    RecommendationSummary, StylistConfig,
};
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Stylist - recommend hairstyles from a client's preferences
#[derive(Parser, Debug)]
#[command(name = "stylist")]
#[command(about = "Rank hairstyles against client preferences", long_about = None)]
#[command(version)]
struct Args {
    #[arg(long)]
    face_shape: Option<String>,

    #[arg(long)]
    hair_length: Option<String>,

    #[arg(long)]
    hair_texture: Option<String>,

    #[arg(long)]
    gender: Option<String>,

    #[arg(long)]
    occasion: Option<String>,

    /// low, medium or high
    #[arg(long)]
    maintenance: Option<String>,

    /// Desired features such as volume or protective
    #[arg(long, num_args = 0.., value_name = "KEYWORD")]
    keywords: Vec<String>,

    /// Tags to avoid such as heat-styling
    #[arg(long, num_args = 0.., value_name = "TAG")]
    avoid: Vec<String>,

    /// Maximum number of results (0 or less shows all)
    #[arg(short, long, allow_negative_numbers = true)]
    limit: Option<i64>,

    /// Output as JSON
    #[arg(long = "json")]
    as_json: bool,

    /// Catalog JSON file to use instead of the bundled catalog
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// TOML settings file (weights, minimum_score, limit)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print a single catalog entry and exit
    #[arg(long, value_name = "NAME")]
    show: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match &args.config {
        Some(path) => StylistConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => StylistConfig::default(),
    };

    let catalog = match &args.catalog {
        Some(path) => HairstyleCatalog::from_file(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => HairstyleCatalog::bundled().context("loading bundled catalog")?,
    };
    tracing::info!(entries = catalog.len(), "catalog ready");

    if let Some(name) = &args.show {
        let style = catalog.find(name)?;
        println!("{}", serde_json::to_string_pretty(&style.to_record())?);
        return Ok(());
    }

    let preferences = build_preferences(&args);
    let limit = args.limit.unwrap_or(config.limit);

    let engine = RecommendationEngine::from_config(&catalog, &config);
    let summaries: Vec<RecommendationSummary> = engine
        .recommend(&preferences, limit)
        .iter()
        .map(|rec| rec.summary())
        .collect();

    if args.as_json {
        println!("{}", render_json(&summaries)?);
    } else {
        print!("{}", render_text(&summaries));
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn build_preferences(args: &Args) -> ClientPreferences {
    let mut prefs = ClientPreferences::new()
        .with_keywords(split_keyword_list(&args.keywords))
        .with_avoid(split_keyword_list(&args.avoid));

    if let Some(v) = &args.face_shape {
        prefs = prefs.with_face_shape(v);
    }
    if let Some(v) = &args.hair_length {
        prefs = prefs.with_hair_length(v);
    }
    if let Some(v) = &args.hair_texture {
        prefs = prefs.with_hair_texture(v);
    }
    if let Some(v) = &args.gender {
        prefs = prefs.with_gender(v);
    }
    if let Some(v) = &args.occasion {
        prefs = prefs.with_occasion(v);
    }
    if let Some(v) = &args.maintenance {
        prefs = prefs.with_maintenance(v);
    }
    prefs
}

/// Plain text listing with bulleted reasons
fn render_text(summaries: &[RecommendationSummary]) -> String {
    let mut out = String::new();
    if summaries.is_empty() {
        out.push_str("No matching hairstyles found.\n");
        return out;
    }

    for rec in summaries {
        let _ = writeln!(out, "- {} (score {:.2})", rec.name, rec.score);
        for reason in &rec.reasons {
            let _ = writeln!(out, "    • {}", reason);
        }
        let _ = writeln!(out, "    {}", rec.description);
    }
    out
}

/// Pretty JSON array of `{name, description, score, reasons}`
fn render_json(summaries: &[RecommendationSummary]) -> Result<String> {
    Ok(serde_json::to_string_pretty(summaries)?)
}
