//! Text and category filtering over a recipe list.
//!
//! Nothing here is stored. Call [`RecipeFilter::apply`] whenever the
//! recipes, the query or the category change.

use std::fmt;
use std::str::FromStr;

use crate::models::{Category, Recipe};

/// Category constraint, where `All` means no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>().map(CategoryFilter::Only)
    }
}

/// Search query plus category selector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilter {
    pub query: String,
    pub category: CategoryFilter,
}

impl RecipeFilter {
    pub fn new(query: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    /// True when the title contains the query, ignoring case, and the
    /// category passes.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let query = self.query.to_lowercase();
        recipe.title.to_lowercase().contains(&query) && self.category.matches(recipe.category)
    }

    /// The matching recipes, in source order.
    pub fn apply<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        recipes.iter().filter(|r| self.matches(r)).collect()
    }
}

pub fn filter_recipes<'a>(
    recipes: &'a [Recipe],
    query: &str,
    category: CategoryFilter,
) -> Vec<&'a Recipe> {
    RecipeFilter::new(query, category).apply(recipes)
}
