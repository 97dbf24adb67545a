use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use data_loader::{Catalog, User, UserId};
use recommender::{PhoneRecommendation, RecommendError, RecommendationService};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Phone recommendation engine
#[derive(Parser)]
#[command(name = "phone-recs")]
#[command(about = "Recommends phones from purchase history and income", long_about = None)]
struct Cli {
    /// Path to the directory containing users.json and phones.json
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// User ID to get recommendations for
    #[arg(long)]
    user_id: UserId,

    /// Number of recommendations to return
    #[arg(long, default_value = "5")]
    top_n: usize,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Load the two collections (this is the only I/O in the program)
    println!("Loading catalog from {}...", cli.data_dir.display());
    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_files(&cli.data_dir)
            .context("Failed to load user and phone collections")?,
    );
    println!("{} Loaded catalog in {:?}", "✓".green(), start.elapsed());

    let service = RecommendationService::new(catalog.clone());

    match service.recommend(cli.user_id, cli.top_n) {
        Ok(recommendations) => {
            // recommend succeeded, so the user exists
            if let Some(user) = catalog.get_user(cli.user_id) {
                print_recommendations(user, &recommendations);
            }
        }
        Err(RecommendError::UserNotFound(user_id)) => {
            println!("{}", format!("User with ID {} not found.", user_id).red());
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

/// Helper function to format and print recommendations
fn print_recommendations(user: &User, recommendations: &[PhoneRecommendation]) {
    println!(
        "{}",
        format!(
            "Recommendations for user {} (income: {}, age: {}):",
            user.id, user.income, user.age
        )
        .bold()
        .blue()
    );

    if recommendations.is_empty() {
        println!("No phones in the price band that the user does not already own.");
        return;
    }

    for (rank, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} {} - Price: {:.2} (similarity: {:.3})",
            (rank + 1).to_string().green(),
            rec.brand,
            rec.model,
            rec.price,
            rec.score
        );
    }
}
