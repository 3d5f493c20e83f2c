use chrono::{Datelike, Duration, Local, NaiveDate};
use clap::{Args, Subcommand, ValueEnum};

use recipe_vault_core::{DailyPlan, Day, MealSlot};

use crate::vault::Vault;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct PlanCommand {
    #[command(subcommand)]
    pub command: PlanSubcommand,
}

#[derive(Subcommand)]
pub enum PlanSubcommand {
    /// Show the weekly plan
    Show {
        /// Only show this day
        #[arg(long, short)]
        day: Option<Day>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Put a recipe into a meal slot
    Add {
        /// Recipe ID
        recipe_id: String,

        /// Day name, defaults to today
        #[arg(long, short)]
        day: Option<String>,

        /// Meal slot (breakfast, lunch, snack, dinner, dessert)
        #[arg(long, short)]
        slot: MealSlot,
    },

    /// Empty a meal slot
    Remove {
        /// Day name, defaults to today
        #[arg(long, short)]
        day: Option<String>,

        /// Meal slot (breakfast, lunch, snack, dinner, dessert)
        #[arg(long, short)]
        slot: MealSlot,
    },

    /// Empty every slot of the week
    Clear,
}

impl PlanCommand {
    pub fn run(&self, vault: &mut Vault) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            PlanSubcommand::Show { day, format } => {
                match format {
                    OutputFormat::Json => {
                        let output = match day {
                            Some(day) => serde_json::to_string_pretty(vault.meal_plan.day(*day))?,
                            None => serde_json::to_string_pretty(vault.meal_plan.plan())?,
                        };
                        println!("{}", output);
                    }
                    OutputFormat::Text => {
                        let monday = week_start(Local::now().date_naive());
                        println!("Meal Plan - Week of {}", monday.format("%B %-d, %Y"));
                        println!("{}", "=".repeat(44));

                        for (offset, (d, plan)) in vault.meal_plan.plan().days().enumerate() {
                            if day.is_some_and(|wanted| wanted != d) {
                                continue;
                            }
                            let date = monday + Duration::days(offset as i64);
                            print_day(d, date, plan);
                        }
                    }
                }
                Ok(())
            }

            PlanSubcommand::Add {
                recipe_id,
                day,
                slot,
            } => {
                let recipe = vault
                    .recipes
                    .get(recipe_id)
                    .ok_or_else(|| format!("Recipe not found: {}", recipe_id))?
                    .clone();
                let day = day_or_today(day.as_deref())?;

                vault.meal_plan.assign(day, *slot, &recipe);
                println!("Planned {} for {} {}", recipe.title, day, slot);
                Ok(())
            }

            PlanSubcommand::Remove { day, slot } => {
                let day = day_or_today(day.as_deref())?;

                vault.meal_plan.unassign(day, *slot);
                println!("Cleared {} {}", day, slot);
                Ok(())
            }

            PlanSubcommand::Clear => {
                vault.meal_plan.clear_week();
                println!("Cleared the week.");
                Ok(())
            }
        }
    }
}

/// Parses a day name, ignoring case and surrounding whitespace.
fn day_or_today(day: Option<&str>) -> Result<Day, String> {
    match day {
        Some(day) => day.parse(),
        None => Ok(Day::today()),
    }
}

/// Monday of the week containing `date`.
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn print_day(day: Day, date: NaiveDate, plan: &DailyPlan) {
    println!("\n{} ({})", day, date.format("%b %-d"));
    for (slot, recipe) in plan.slots() {
        match recipe {
            Some(recipe) => println!("  {:<10} {}", slot, recipe.title),
            None => println!("  {:<10} -", slot),
        }
    }
}
