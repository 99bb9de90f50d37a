//! CLI argument parsing for mealplanner

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mp")]
#[command(author, version, about = "Meal-planning state engine and tool surface", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up a food in the catalog
    Lookup {
        /// Food name (normalized key or display name)
        #[arg(required = true)]
        food: String,

        /// Catalog file to use instead of the configured one
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Derive daily nutrition targets for a calorie budget and diet type
    Goals {
        /// Daily calorie target
        #[arg(required = true)]
        daily_calories: u32,

        /// Diet type (balanced, vegetarian, vegan, high-protein, low-carb, keto, custom)
        #[arg(short, long, default_value = "balanced")]
        diet_type: String,

        /// Protein share of calories (custom diets only, e.g. 0.30)
        #[arg(long)]
        protein_pct: Option<f64>,

        /// Carb share of calories (custom diets only)
        #[arg(long)]
        carbs_pct: Option<f64>,

        /// Fat share of calories (custom diets only)
        #[arg(long)]
        fat_pct: Option<f64>,
    },

    /// Summarize a checkpointed session state file
    Summary {
        /// Path to a JSON state checkpoint
        #[arg(required = true)]
        state_file: PathBuf,

        /// Catalog file to use instead of the configured one
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}
