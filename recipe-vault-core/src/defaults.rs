//! Recipes bundled with the app, merged into the recipe store on startup.

use crate::models::{Category, Difficulty, Recipe, RecipeDraft};

/// The bundled recipes, in display order. Ids are fixed so that user edits
/// to a bundled recipe win over the bundled copy on the next start.
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe::from_draft(
            "1",
            RecipeDraft::new("Buttermilk Pancakes", Category::Breakfast)
                .with_description("Light, fluffy pancakes for a slow weekend morning.")
                .with_image("https://images.unsplash.com/photo-1528207776546-365bb710ee93")
                .with_prep_time(10)
                .with_cook_time(15)
                .with_servings(4)
                .with_ingredients(["flour", "buttermilk", "egg", "butter", "sugar", "baking powder"])
                .with_instructions([
                    "Whisk the dry ingredients together.",
                    "Beat in the buttermilk, egg and melted butter.",
                    "Cook ladlefuls on a hot griddle until bubbles form, then flip.",
                ]),
        ),
        Recipe::from_draft(
            "2",
            RecipeDraft::new("Tomato Basil Soup", Category::Lunch)
                .with_description("A quick soup from pantry tomatoes.")
                .with_image("https://images.unsplash.com/photo-1547592166-23ac45744acd")
                .with_prep_time(10)
                .with_cook_time(25)
                .with_servings(4)
                .with_ingredients(["canned tomatoes", "onion", "garlic", "basil", "butter"])
                .with_instructions([
                    "Soften the onion and garlic in butter.",
                    "Add the tomatoes and simmer for 20 minutes.",
                    "Blend with the basil and season.",
                ]),
        ),
        Recipe::from_draft(
            "3",
            RecipeDraft::new("Lemon Garlic Salmon", Category::Dinner)
                .with_description("Oven-baked salmon with a bright lemon glaze.")
                .with_image("https://images.unsplash.com/photo-1467003909585-2f8a72700288")
                .with_prep_time(10)
                .with_cook_time(20)
                .with_servings(2)
                .with_difficulty(Difficulty::Medium)
                .with_ingredients(["salmon", "lemon", "garlic", "olive oil", "dill"])
                .with_instructions([
                    "Heat the oven to 200C.",
                    "Brush the salmon with lemon, garlic and oil.",
                    "Bake for 15 to 20 minutes and finish with dill.",
                ]),
        ),
        Recipe::from_draft(
            "4",
            RecipeDraft::new("Chocolate Brownies", Category::Dessert)
                .with_description("Fudgy brownies with a crackly top.")
                .with_image("https://images.unsplash.com/photo-1606313564200-e75d5e30476c")
                .with_prep_time(15)
                .with_cook_time(25)
                .with_servings(12)
                .with_ingredients(["dark chocolate", "butter", "sugar", "egg", "flour"])
                .with_instructions([
                    "Melt the chocolate with the butter.",
                    "Whisk in sugar and eggs, then fold in flour.",
                    "Bake for 25 minutes and cool before cutting.",
                ]),
        ),
        Recipe::from_draft(
            "5",
            RecipeDraft::new("Hummus Veggie Cups", Category::Snack)
                .with_description("Crunchy vegetables standing in hummus.")
                .with_image("https://images.unsplash.com/photo-1577805947697-89e18249d767")
                .with_prep_time(10)
                .with_servings(4)
                .with_ingredients(["hummus", "carrot", "cucumber", "bell pepper"])
                .with_instructions([
                    "Cut the vegetables into sticks.",
                    "Spoon hummus into cups and stand the sticks in it.",
                ]),
        ),
    ]
}
