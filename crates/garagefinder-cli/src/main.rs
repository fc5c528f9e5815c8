mod news;
mod search;

use clap::{Parser, Subcommand};
use garagefinder_core::{CategoryFilter, ListingKind, SortKey, DEFAULT_AREA};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "garagefinder-cli")]
#[command(about = "GarageFinder UAE command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List areas and the regions each one searches
    Regions {
        /// Only show this area (e.g. Dubai)
        #[arg(long)]
        area: Option<String>,
    },
    /// Search every region of an area, then filter and sort the merged list
    Search {
        /// Area to search (e.g. Dubai); "all" searches every region
        #[arg(long, default_value = DEFAULT_AREA)]
        area: String,
        /// Directory view: garages or parts
        #[arg(long, default_value = "garages")]
        kind: ListingKind,
        /// Free-text term, e.g. a car make
        #[arg(long)]
        q: Option<String>,
        /// Service or part category used as a search hint (e.g. Brakes)
        #[arg(long)]
        category: Option<String>,
        /// Keep only places reported open now
        #[arg(long)]
        open_now: bool,
        /// Minimum rating; unrated places are dropped
        #[arg(long, value_parser = parse_rating)]
        min_rating: Option<f64>,
        /// Price level ceiling (1-4)
        #[arg(long)]
        max_price: Option<u8>,
        /// Category filter: all, service, or parts
        #[arg(long = "type", default_value = "all")]
        place_type: CategoryFilter,
        /// Sort key: rating or reviews
        #[arg(long)]
        sort: Option<SortKey>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the latest UAE motoring headlines
    News {
        /// Search Google News for this query instead of the configured feeds
        #[arg(long)]
        query: Option<String>,
        /// Print JSON instead of a list
        #[arg(long)]
        json: bool,
    },
}

fn parse_rating(raw: &str) -> Result<f64, String> {
    let rating: f64 = raw.trim().parse().map_err(|e| format!("{e}"))?;
    if rating.is_finite() {
        Ok(rating)
    } else {
        Err("must be a finite number".to_string())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("garagefinder-cli: run with --help to list commands");
        return Ok(());
    };

    let config = garagefinder_core::load_app_config()?;

    match command {
        Commands::Regions { area } => search::run_regions(&config, area.as_deref())?,
        Commands::Search {
            area,
            kind,
            q,
            category,
            open_now,
            min_rating,
            max_price,
            place_type,
            sort,
            json,
        } => {
            let criteria = garagefinder_core::FilterCriteria {
                open_now,
                min_rating: min_rating.unwrap_or(0.0),
                max_price,
                category: place_type,
                sort,
            };
            let request = search::SearchRequest {
                area: &area,
                kind,
                term: q.as_deref().unwrap_or_default(),
                category: category.as_deref(),
            };
            search::run_search(&config, &request, &criteria, json).await?;
        }
        Commands::News { query, json } => news::run_news(&config, query.as_deref(), json).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;
