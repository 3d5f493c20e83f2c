use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::difficulty::Difficulty;

/// A recipe as kept by the recipe store and persisted under `recipes`.
///
/// Field names serialize in camelCase (`prepTime`, `cookTime`) so stored
/// collections stay readable by earlier versions of the app.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Image reference; not checked to point at anything.
    pub image: String,
    pub category: Category,
    pub prep_time: u32, // minutes
    pub cook_time: u32, // minutes
    pub servings: u32,
    pub difficulty: Difficulty,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

/// Every recipe field except the id, which the store assigns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: Category,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl RecipeDraft {
    pub fn new(title: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            image: String::new(),
            category,
            prep_time: 0,
            cook_time: 0,
            servings: 1,
            difficulty: Difficulty::Easy,
            ingredients: Vec::new(),
            instructions: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_prep_time(mut self, minutes: u32) -> Self {
        self.prep_time = minutes;
        self
    }

    pub fn with_cook_time(mut self, minutes: u32) -> Self {
        self.cook_time = minutes;
        self
    }

    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = servings;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_instructions<I, S>(mut self, instructions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions = instructions.into_iter().map(Into::into).collect();
        self
    }
}

impl Recipe {
    pub fn from_draft(id: impl Into<String>, draft: RecipeDraft) -> Self {
        Self {
            id: id.into(),
            title: draft.title,
            description: draft.description,
            image: draft.image,
            category: draft.category,
            prep_time: draft.prep_time,
            cook_time: draft.cook_time,
            servings: draft.servings,
            difficulty: draft.difficulty,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
        }
    }

    /// Copies every field except the id into a draft.
    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            category: self.category,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            difficulty: self.difficulty,
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
        }
    }

    /// Replaces every field except the id.
    pub fn replace_with(&mut self, draft: RecipeDraft) {
        let id = std::mem::take(&mut self.id);
        *self = Recipe::from_draft(id, draft);
    }

    /// Prep plus cook time in minutes, saturating at `u32::MAX`.
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.len()))?;
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Category: {} ({})", self.category, self.difficulty)?;
        writeln!(
            f,
            "Time: {} min (prep: {} min, cook: {} min)",
            self.total_time(),
            self.prep_time,
            self.cook_time
        )?;
        writeln!(f, "Servings: {}", self.servings)?;

        if !self.description.is_empty() {
            writeln!(f, "\n{}", self.description)?;
        }

        if !self.ingredients.is_empty() {
            writeln!(f, "\nIngredients:")?;
            for ingredient in &self.ingredients {
                writeln!(f, "  - {}", ingredient)?;
            }
        }

        if !self.instructions.is_empty() {
            writeln!(f, "\nInstructions:")?;
            for (i, step) in self.instructions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, step)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pancakes() -> RecipeDraft {
        RecipeDraft::new("Pancakes", Category::Breakfast)
            .with_description("Fluffy stack")
            .with_prep_time(10)
            .with_cook_time(15)
            .with_servings(4)
            .with_ingredients(["flour", "egg", "milk"])
            .with_instructions(["Whisk", "Fry"])
    }

    #[test]
    fn test_draft_defaults() {
        let draft = RecipeDraft::new("Toast", Category::Snack);
        assert_eq!(draft.title, "Toast");
        assert_eq!(draft.servings, 1);
        assert_eq!(draft.difficulty, Difficulty::Easy);
        assert!(draft.ingredients.is_empty());
    }

    #[test]
    fn test_from_draft_and_back() {
        let recipe = Recipe::from_draft("r1", pancakes());
        assert_eq!(recipe.id, "r1");
        assert_eq!(recipe.to_draft(), pancakes());
    }

    #[test]
    fn test_replace_with_keeps_id() {
        let mut recipe = Recipe::from_draft("r1", pancakes());
        recipe.replace_with(RecipeDraft::new("Waffles", Category::Dessert));

        assert_eq!(recipe.id, "r1");
        assert_eq!(recipe.title, "Waffles");
        assert_eq!(recipe.category, Category::Dessert);
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn test_total_time() {
        let recipe = Recipe::from_draft("r1", pancakes());
        assert_eq!(recipe.total_time(), 25);
    }

    #[test]
    fn test_total_time_saturates() {
        let json = r#"{
            "id": "big",
            "title": "Slow Roast",
            "description": "",
            "image": "",
            "category": "Dinner",
            "prepTime": 4294967295,
            "cookTime": 1,
            "servings": 1,
            "difficulty": "Hard",
            "ingredients": [],
            "instructions": []
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();

        assert_eq!(recipe.total_time(), u32::MAX);
        assert!(recipe.to_string().contains("Slow Roast"));
    }

    #[test]
    fn test_json_uses_camel_case() {
        let recipe = Recipe::from_draft("r1", pancakes());
        let json = serde_json::to_value(&recipe).unwrap();

        assert_eq!(json["prepTime"], 10);
        assert_eq!(json["cookTime"], 15);
        assert_eq!(json["category"], "Breakfast");
        assert_eq!(json["difficulty"], "Easy");
    }

    #[test]
    fn test_recipe_display() {
        let recipe = Recipe::from_draft("r1", pancakes());
        let output = format!("{}", recipe);

        assert!(output.contains("Pancakes"));
        assert!(output.contains("Servings: 4"));
        assert!(output.contains("  - egg"));
        assert!(output.contains("  2. Fry"));
    }
}
