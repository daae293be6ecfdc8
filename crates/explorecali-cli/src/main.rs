//! Explore California CLI - Tour rating management
//!
//! Thin client over the /tours/{id}/ratings API.

mod api;
mod config;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Confirm;
use tracing_subscriber::EnvFilter;

use api::{ExploreCaliClient, PageOptions, Rating};
use config::Config;

#[derive(Parser)]
#[command(name = "explorecali")]
#[command(about = "Explore California CLI - Tour rating management", long_about = None)]
#[command(version)]
struct Cli {
    /// Log HTTP requests
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the API is reachable
    Health,

    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Rating operations
    Rating {
        #[command(subcommand)]
        action: RatingAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the API base URL
    SetUrl {
        /// Base URL, e.g. http://localhost:8000
        url: String,
    },
    /// Set the tour used when --tour is omitted
    SetTour {
        /// Tour ID
        id: i32,
    },
}

#[derive(Subcommand)]
enum RatingAction {
    /// Rate a tour
    Add {
        /// Customer ID
        #[arg(short, long)]
        customer: i32,
        /// Score (0-5)
        #[arg(short, long)]
        score: i32,
        /// Optional comment
        #[arg(long)]
        comment: Option<String>,
        /// Tour ID (overrides default)
        #[arg(short, long)]
        tour: Option<i32>,
    },
    /// List a page of ratings
    List {
        /// Zero-based page index
        #[arg(long)]
        page: Option<u32>,
        /// Page size
        #[arg(long)]
        size: Option<u32>,
        /// Sort, e.g. "score,desc"
        #[arg(long)]
        sort: Option<String>,
        /// Tour ID (overrides default)
        #[arg(short, long)]
        tour: Option<i32>,
    },
    /// Show the average score
    Average {
        /// Tour ID (overrides default)
        #[arg(short, long)]
        tour: Option<i32>,
    },
    /// Update a rating (PUT keeps omitted fields, --patch clears them)
    Update {
        /// Customer ID
        #[arg(short, long)]
        customer: i32,
        /// New score (0-5)
        #[arg(short, long)]
        score: Option<i32>,
        /// New comment
        #[arg(long)]
        comment: Option<String>,
        /// Send PATCH instead of PUT
        #[arg(long)]
        patch: bool,
        /// Tour ID (overrides default)
        #[arg(short, long)]
        tour: Option<i32>,
    },
    /// Delete a rating
    Delete {
        /// Customer ID
        #[arg(short, long)]
        customer: i32,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
        /// Tour ID (overrides default)
        #[arg(short, long)]
        tour: Option<i32>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Health => cmd_health().await,
        Commands::Config { action } => cmd_config(action),
        Commands::Rating { action } => cmd_rating(action).await,
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_health() -> Result<()> {
    let config = Config::load()?;
    let base_url = config.effective_base_url();
    let client = ExploreCaliClient::new(&base_url);

    print!("Checking {}... ", base_url);
    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
            Ok(())
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not reach the Explore California API at {}", base_url);
        }
    }
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        ConfigAction::Show => {
            println!("{}", "Configuration:".bold());
            println!("  Config file: {:?}", Config::config_path()?);
            println!("  Base URL: {}", config.base_url.cyan());
            if config.effective_base_url() != config.base_url {
                println!(
                    "  {} {}",
                    format!("(overridden by {}):", config::URL_ENV).yellow(),
                    config.effective_base_url()
                );
            }
            match config.default_tour {
                Some(id) => println!("  Default tour: {}", id.to_string().cyan()),
                None => println!("  Default tour: {}", "(not set)".dimmed()),
            }
        }

        ConfigAction::SetUrl { url } => {
            config.base_url = url.trim_end_matches('/').to_string();
            config.save()?;
            println!("{} Base URL set to {}", "✓".green(), config.base_url);
        }

        ConfigAction::SetTour { id } => {
            config.default_tour = Some(id);
            config.save()?;
            println!("{} Default tour set to {}", "✓".green(), id);
        }
    }

    Ok(())
}

fn print_rating(rating: &Rating) {
    let score = match rating.score {
        Some(s) if s >= 4 => s.to_string().green(),
        Some(s) if s >= 2 => s.to_string().yellow(),
        Some(s) => s.to_string().red(),
        None => "-".dimmed(),
    };

    println!(
        "  {} [{}] {}",
        format!("customer {}", rating.customer_id).cyan(),
        score,
        rating.comment.as_deref().unwrap_or("").dimmed()
    );
}

async fn cmd_rating(action: RatingAction) -> Result<()> {
    let config = Config::load()?;
    let client = ExploreCaliClient::new(&config.effective_base_url());

    match action {
        RatingAction::Add {
            customer,
            score,
            comment,
            tour,
        } => {
            let tour_id = config.resolve_tour(tour)?;
            let rating = Rating {
                score: Some(score),
                comment,
                customer_id: customer,
            };

            client.create_rating(tour_id, &rating).await?;
            println!(
                "{} Rating added for customer {} on tour {}",
                "✓".green(),
                customer,
                tour_id
            );
        }

        RatingAction::List {
            page,
            size,
            sort,
            tour,
        } => {
            let tour_id = config.resolve_tour(tour)?;
            let options = PageOptions { page, size, sort };
            let ratings = client.list_ratings(tour_id, &options).await?;

            if ratings.is_empty() {
                println!("No ratings found for tour {}.", tour_id);
                return Ok(());
            }

            println!("{}", format!("Ratings for tour {}:", tour_id).bold());
            for rating in &ratings {
                print_rating(rating);
            }
        }

        RatingAction::Average { tour } => {
            let tour_id = config.resolve_tour(tour)?;
            match client.average(tour_id).await? {
                Some(avg) => println!(
                    "Average score for tour {}: {}",
                    tour_id,
                    format!("{:.2}", avg).green().bold()
                ),
                None => println!("Tour {} has no ratings yet.", tour_id),
            }
        }

        RatingAction::Update {
            customer,
            score,
            comment,
            patch,
            tour,
        } => {
            let tour_id = config.resolve_tour(tour)?;
            let rating = Rating {
                score,
                comment,
                customer_id: customer,
            };

            let updated = client.update_rating(tour_id, &rating, patch).await?;
            println!("{} Rating updated:", "✓".green());
            print_rating(&updated);
        }

        RatingAction::Delete {
            customer,
            yes,
            tour,
        } => {
            let tour_id = config.resolve_tour(tour)?;

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!(
                        "Delete the rating of customer {} on tour {}?",
                        customer, tour_id
                    ))
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            client.delete_rating(tour_id, customer).await?;
            println!(
                "{} Rating of customer {} on tour {} deleted",
                "✓".green(),
                customer,
                tour_id
            );
        }
    }

    Ok(())
}
