use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use modista::{
    classify, find_similar, trending, FilterSet, HashEmbedder, Interaction, Measurements,
    Product, Recommender, SimilarityEngine, UserProfile,
};

/// Fashion recommendation and sizing engine
#[derive(Parser, Debug)]
#[command(name = "modista")]
#[command(about = "Rank fashion products and classify garment sizes", long_about = None)]
struct Args {
    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank products against a user profile
    Rank {
        /// Path to the user profile JSON
        #[arg(short, long)]
        profile: PathBuf,

        /// Path to the candidate products JSON array
        #[arg(short = 'c', long)]
        products: PathBuf,

        /// Path to a filter set JSON (optional)
        #[arg(short, long)]
        filters: Option<PathBuf>,

        /// Number of recommendations to return
        #[arg(short, long)]
        top_n: Option<usize>,

        /// Enable the hash-based embedding provider for hybrid scoring
        #[arg(long)]
        semantic: bool,
    },
    /// Find products similar to a target product
    Similar {
        /// Path to the target product JSON
        #[arg(short = 't', long)]
        target: PathBuf,

        /// Path to the candidate pool JSON array
        #[arg(short = 'c', long)]
        products: PathBuf,

        /// Number of similar products to return
        #[arg(short = 'n', long)]
        top_n: Option<usize>,

        /// Enable the hash-based embedding provider
        #[arg(long)]
        semantic: bool,
    },
    /// Rank trending products from interaction history
    Trending {
        /// Path to the products JSON array
        #[arg(short = 'c', long)]
        products: PathBuf,

        /// Path to the interactions JSON array
        #[arg(short, long)]
        interactions: PathBuf,

        /// Number of trending products to return
        #[arg(short, long)]
        top_n: Option<usize>,
    },
    /// Classify body measurements into a garment size
    Size {
        /// Path to the measurements JSON
        #[arg(short, long)]
        measurements: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Rank {
            profile,
            products,
            filters,
            top_n,
            semantic,
        } => {
            let profile: UserProfile = read_json(&profile)?;
            let candidates: Vec<Product> = read_json(&products)?;
            let filters: FilterSet = match filters {
                Some(path) => read_json(&path)?,
                None => FilterSet::default(),
            };
            info!(candidates = candidates.len(), "ranking recommendations");

            let recommender = if semantic {
                Recommender::with_provider(Arc::new(HashEmbedder::new()))
            } else {
                Recommender::new()
            };
            let ranked = recommender.rank(&profile, &candidates, &filters, top_n);
            print_json(&ranked)?;
        }
        Command::Similar {
            target,
            products,
            top_n,
            semantic,
        } => {
            let target: Product = read_json(&target)?;
            let pool: Vec<Product> = read_json(&products)?;
            info!(target = %target.id, pool = pool.len(), "finding similar products");

            let engine = if semantic {
                SimilarityEngine::with_provider(Arc::new(HashEmbedder::new()))
            } else {
                SimilarityEngine::new()
            };
            let similar = find_similar(&engine, &target, &pool, top_n);
            print_json(&similar)?;
        }
        Command::Trending {
            products,
            interactions,
            top_n,
        } => {
            let products: Vec<Product> = read_json(&products)?;
            let interactions: Vec<Interaction> = read_json(&interactions)?;
            let ranked = trending(&products, &interactions, top_n);
            print_json(&ranked)?;
        }
        Command::Size { measurements } => {
            let measurements: Measurements = read_json(&measurements)?;
            let result = classify(&measurements)?;
            print_json(&result)?;
        }
    }

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> anyhow::Result<T> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
