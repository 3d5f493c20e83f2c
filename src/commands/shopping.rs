//! Shopping list CLI commands.
//!
//! Every subcommand loads the stored list first; the store does not do it
//! on construction.

use clap::{Args, Subcommand, ValueEnum};

use crate::vault::Vault;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Args)]
pub struct ShoppingCommand {
    #[command(subcommand)]
    pub command: ShoppingSubcommand,
}

#[derive(Subcommand)]
pub enum ShoppingSubcommand {
    /// List shopping items and progress
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Rebuild the list from the meal plan (discards manual items)
    Generate,

    /// Add an item to the top of the list
    Add {
        /// Item name
        name: String,
    },

    /// Check or uncheck an item
    Toggle {
        /// Item ID
        id: String,
    },

    /// Remove an item
    Remove {
        /// Item ID
        id: String,
    },

    /// Uncheck all checked items
    ClearChecked,
}

impl ShoppingCommand {
    pub fn run(&self, vault: &mut Vault) -> Result<(), Box<dyn std::error::Error>> {
        vault.shopping.load_items();

        match &self.command {
            ShoppingSubcommand::List { format } => {
                match format {
                    OutputFormat::Json => {
                        let output = serde_json::json!({
                            "items": vault.shopping.items(),
                            "progress": vault.shopping.progress(),
                        });
                        println!("{}", serde_json::to_string_pretty(&output)?);
                    }
                    OutputFormat::Table => print_list(vault),
                }
                Ok(())
            }

            ShoppingSubcommand::Generate => {
                vault.shopping.generate_from_meal_plan(vault.meal_plan.plan());
                println!(
                    "Generated {} item(s) from the meal plan.",
                    vault.shopping.len()
                );
                Ok(())
            }

            ShoppingSubcommand::Add { name } => {
                match vault.shopping.add_item(name) {
                    Some(item) => println!("Added {} ({})", item.name, item.id),
                    None => println!("Item name is empty, nothing added."),
                }
                Ok(())
            }

            ShoppingSubcommand::Toggle { id } => {
                if !vault.shopping.toggle_item(id) {
                    return Err(format!("Shopping item not found: {}", id).into());
                }
                println!("Progress: {}%", vault.shopping.progress());
                Ok(())
            }

            ShoppingSubcommand::Remove { id } => {
                if !vault.shopping.remove_item(id) {
                    return Err(format!("Shopping item not found: {}", id).into());
                }
                println!("Removed {}", id);
                Ok(())
            }

            ShoppingSubcommand::ClearChecked => {
                vault.shopping.clear_checked();
                println!("Unchecked all items.");
                Ok(())
            }
        }
    }
}

fn print_list(vault: &Vault) {
    println!("Shopping List");
    println!("{}", "=".repeat(44));

    if vault.shopping.is_empty() {
        println!("No items.");
        return;
    }

    for item in vault.shopping.items() {
        println!("{:<30} {}", item.to_string(), item.id);
    }
    println!("{}", "-".repeat(44));
    println!(
        "{} of {} checked ({}%)",
        vault.shopping.checked_count(),
        vault.shopping.len(),
        vault.shopping.progress()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_vault_core::{Day, MealSlot, MemoryStorage};
    use std::sync::Arc;

    fn run(vault: &mut Vault, command: ShoppingSubcommand) {
        ShoppingCommand { command }.run(vault).unwrap();
    }

    #[test]
    fn test_generate_from_plan() {
        let mut vault = Vault::with_storage(Arc::new(MemoryStorage::new()), false);
        let recipe = vault.recipes.recipes()[0].clone();
        vault.meal_plan.assign(Day::Monday, MealSlot::Breakfast, &recipe);

        run(&mut vault, ShoppingSubcommand::Generate);

        let names: Vec<&str> = vault.shopping.items().iter().map(|i| i.name.as_str()).collect();
        let expected: Vec<&str> = recipe.ingredients.iter().map(String::as_str).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_commands_see_previously_saved_items() {
        let storage = Arc::new(MemoryStorage::new());
        {
            let mut vault = Vault::with_storage(storage.clone(), false);
            run(
                &mut vault,
                ShoppingSubcommand::Add {
                    name: "milk".to_string(),
                },
            );
        }

        let mut vault = Vault::with_storage(storage, false);
        let id = {
            // Not loaded until a command runs
            assert!(vault.shopping.is_empty());
            run(
                &mut vault,
                ShoppingSubcommand::Add {
                    name: "eggs".to_string(),
                },
            );
            vault.shopping.items()[1].id.clone()
        };
        assert_eq!(vault.shopping.items()[1].name, "milk");

        run(&mut vault, ShoppingSubcommand::Toggle { id });
        assert_eq!(vault.shopping.progress(), 50);
    }

    #[test]
    fn test_toggle_unknown_item_is_error() {
        let mut vault = Vault::with_storage(Arc::new(MemoryStorage::new()), false);
        let result = ShoppingCommand {
            command: ShoppingSubcommand::Toggle {
                id: "missing".to_string(),
            },
        }
        .run(&mut vault);

        assert!(result.is_err());
    }
}
