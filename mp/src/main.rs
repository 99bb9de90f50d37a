use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use foodcatalog::FoodCatalog;
use mealplanner::cli::Cli;
use mealplanner::config::Config;
use mealplanner::domain::{DietType, MacroSplit, MealSlot, NutritionGoals};
use mealplanner::state::MealPlannerState;

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn open_catalog(config: &Config, override_path: Option<&std::path::PathBuf>) -> FoodCatalog {
    let path = override_path.unwrap_or(&config.catalog_path);
    FoodCatalog::load(path)
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("mealplanner starting");

    match cli.command {
        mealplanner::cli::Command::Lookup { food, catalog } => {
            let catalog = open_catalog(&config, catalog.as_ref());
            match catalog.lookup(&food) {
                Some(entry) => {
                    println!("{} ({})", entry.name.cyan(), entry.id);
                    println!(
                        "  Per {}: {} kcal, {}g protein, {}g carbs, {}g fat",
                        entry.unit, entry.calories, entry.protein, entry.carbs, entry.fat
                    );
                    if let Some(max) = entry.max_quantity {
                        println!("  Usual maximum: {} {}", max, entry.unit);
                    }
                    if !entry.tags.is_empty() {
                        println!("  Tags: {}", entry.tags.join(", ").dimmed());
                    }
                }
                None => {
                    println!("{} '{}' not found in catalog", "✗".red(), food);
                }
            }
        }
        mealplanner::cli::Command::Goals {
            daily_calories,
            diet_type,
            protein_pct,
            carbs_pct,
            fat_pct,
        } => {
            let custom = match (protein_pct, carbs_pct, fat_pct) {
                (Some(protein), Some(carbs), Some(fat)) => Some(MacroSplit { protein, carbs, fat }),
                (None, None, None) => None,
                _ => eyre::bail!("Custom macros require all of --protein-pct, --carbs-pct, --fat-pct"),
            };
            let diet = DietType::from_name(&diet_type);
            let goals = NutritionGoals::derive(daily_calories, diet, custom)
                .context("Failed to derive goals")?;

            println!(
                "{} kcal/day, {} diet",
                goals.daily_calories.to_string().cyan(),
                goals.diet_type
            );
            match (goals.protein_target_g, goals.carb_target_g, goals.fat_target_g) {
                (Some(protein), Some(carbs), Some(fat)) => {
                    println!("  Protein: {:.0}g", protein);
                    println!("  Carbs:   {:.0}g", carbs);
                    println!("  Fat:     {:.0}g", fat);
                }
                _ => println!("  No gram targets (zero calorie budget)"),
            }
        }
        mealplanner::cli::Command::Summary { state_file, catalog } => {
            let content = std::fs::read_to_string(&state_file)
                .wrap_err_with(|| format!("Failed to read {}", state_file.display()))?;
            let state: MealPlannerState =
                serde_json::from_str(&content).context("Failed to parse state file")?;
            let catalog = open_catalog(&config, catalog.as_ref());

            println!("Session: {}", state.id.cyan());
            println!("Phase: {}", state.phase.to_string().yellow());
            for slot in MealSlot::ALL {
                let items = state.slot(slot);
                if items.is_empty() {
                    continue;
                }
                let names: Vec<String> = items.iter().map(|i| i.to_string()).collect();
                println!("  {}: {}", slot, names.join(", "));
            }
            println!("Daily total: {}", state.nutrition_summary(&catalog));
            if let Some(goals) = state.goals() {
                println!("Goals: {} kcal/day, {} diet", goals.daily_calories, goals.diet_type);
            }
        }
    }

    Ok(())
}
