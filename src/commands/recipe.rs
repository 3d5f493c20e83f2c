use clap::{Args, Subcommand, ValueEnum};

use recipe_vault_core::{Category, CategoryFilter, Difficulty, RecipeDraft, RecipeFilter};

use crate::vault::Vault;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct RecipeCommand {
    #[command(subcommand)]
    pub command: RecipeSubcommand,
}

/// Recipe fields shared by `add` and `update`.
#[derive(Args, Default)]
pub struct RecipeFields {
    /// Short description
    #[arg(long)]
    description: Option<String>,

    /// Image URL
    #[arg(long)]
    image: Option<String>,

    /// Prep time in minutes
    #[arg(long)]
    prep_time: Option<u32>,

    /// Cook time in minutes
    #[arg(long)]
    cook_time: Option<u32>,

    /// Number of servings
    #[arg(long)]
    servings: Option<u32>,

    /// Difficulty (easy, medium, hard)
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Ingredient (can be repeated; replaces the whole list)
    #[arg(long = "ingredient", value_name = "INGREDIENT")]
    ingredients: Vec<String>,

    /// Instruction step (can be repeated; replaces the whole list)
    #[arg(long = "step", value_name = "STEP")]
    steps: Vec<String>,
}

impl RecipeFields {
    /// Overlays the given fields onto a draft.
    fn apply(&self, mut draft: RecipeDraft) -> RecipeDraft {
        if let Some(description) = &self.description {
            draft.description = description.clone();
        }
        if let Some(image) = &self.image {
            draft.image = image.clone();
        }
        if let Some(prep_time) = self.prep_time {
            draft.prep_time = prep_time;
        }
        if let Some(cook_time) = self.cook_time {
            draft.cook_time = cook_time;
        }
        if let Some(servings) = self.servings {
            draft.servings = servings;
        }
        if let Some(difficulty) = self.difficulty {
            draft.difficulty = difficulty;
        }
        if !self.ingredients.is_empty() {
            draft.ingredients = self.ingredients.clone();
        }
        if !self.steps.is_empty() {
            draft.instructions = self.steps.clone();
        }
        draft
    }
}

#[derive(Subcommand)]
pub enum RecipeSubcommand {
    /// Add a new recipe
    Add {
        /// Recipe title
        title: String,

        /// Category (breakfast, lunch, dinner, dessert, snack)
        #[arg(long)]
        category: Category,

        #[command(flatten)]
        fields: RecipeFields,
    },

    /// List recipes, optionally filtered
    List {
        /// Case-insensitive title search
        #[arg(long, short, default_value = "")]
        search: String,

        /// Category, or "all"
        #[arg(long, default_value = "all")]
        category: CategoryFilter,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show a recipe's details
    Show {
        /// Recipe ID
        id: String,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Update an existing recipe
    Update {
        /// Recipe ID
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New category
        #[arg(long)]
        category: Option<Category>,

        #[command(flatten)]
        fields: RecipeFields,
    },

    /// Delete a recipe
    Delete {
        /// Recipe ID
        id: String,
    },
}

impl RecipeCommand {
    pub fn run(&self, vault: &mut Vault) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            RecipeSubcommand::Add {
                title,
                category,
                fields,
            } => {
                if title.trim().is_empty() {
                    return Err("Recipe title cannot be empty".into());
                }

                let draft = fields.apply(RecipeDraft::new(title.trim(), *category));
                let created = vault.recipes.add_recipe(draft);
                println!("Created recipe:");
                println!("{}", created);
                Ok(())
            }

            RecipeSubcommand::List {
                search,
                category,
                format,
            } => {
                let filter = RecipeFilter::new(search.as_str(), *category);
                let found = filter.apply(vault.recipes.recipes());

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&found)?);
                    }
                    OutputFormat::Text => {
                        if found.is_empty() {
                            println!("No recipes found.");
                        } else {
                            println!("{:<38} {:<10} {:>6}  TITLE", "ID", "CATEGORY", "TIME");
                            for recipe in &found {
                                println!(
                                    "{:<38} {:<10} {:>3} min  {}",
                                    recipe.id,
                                    recipe.category,
                                    recipe.total_time(),
                                    recipe.title
                                );
                            }
                        }
                    }
                }
                Ok(())
            }

            RecipeSubcommand::Show { id, format } => {
                let recipe = vault
                    .recipes
                    .get(id)
                    .ok_or_else(|| format!("Recipe not found: {}", id))?;

                match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(recipe)?),
                    OutputFormat::Text => print!("{}", recipe),
                }
                Ok(())
            }

            RecipeSubcommand::Update {
                id,
                title,
                category,
                fields,
            } => {
                let existing = vault
                    .recipes
                    .get(id)
                    .ok_or_else(|| format!("Recipe not found: {}", id))?;

                let mut draft = fields.apply(existing.to_draft());
                if let Some(title) = title {
                    if title.trim().is_empty() {
                        return Err("Recipe title cannot be empty".into());
                    }
                    draft.title = title.trim().to_string();
                }
                if let Some(category) = category {
                    draft.category = *category;
                }

                vault.recipes.update_recipe(id, draft);
                if let Some(updated) = vault.recipes.get(id) {
                    println!("Updated recipe:");
                    println!("{}", updated);
                }
                Ok(())
            }

            RecipeSubcommand::Delete { id } => {
                if vault.recipes.delete_recipe(id) {
                    println!("Deleted recipe {}", id);
                } else {
                    println!("No recipe with id {}", id);
                }
                Ok(())
            }
        }
    }
}
